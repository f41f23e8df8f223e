//! Contractualist engine - rejection behind the veil of ignorance.

use crate::context::MoralContext;
use crate::verdict::ContractualistVerdict;

/// Judge an action by whether reasonable parties would reject the rule
/// permitting it.
///
/// A trust breach, or any erosion of societal trust, marks the rule as
/// one a reasonable party behind the veil of ignorance would reject.
pub fn evaluate(_action: &str, context: &MoralContext) -> ContractualistVerdict {
    if context.trust_impact.breach || context.cooperative_outcome.societal_trust_change < 0 {
        ContractualistVerdict::Impermissible
    } else {
        ContractualistVerdict::Permissible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CooperativeOutcome, TrustImpact};

    #[test]
    fn test_breach_is_impermissible() {
        let ctx = MoralContext {
            trust_impact: TrustImpact {
                breach: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), ContractualistVerdict::Impermissible);
    }

    #[test]
    fn test_trust_erosion_is_impermissible() {
        let ctx = MoralContext {
            cooperative_outcome: CooperativeOutcome {
                societal_trust_change: -1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), ContractualistVerdict::Impermissible);
    }

    #[test]
    fn test_clean_action_is_permissible() {
        assert_eq!(
            evaluate("act", &MoralContext::default()),
            ContractualistVerdict::Permissible
        );
    }
}
