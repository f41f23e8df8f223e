//! Ethics-of-care engine - what the action does to relationships.

use crate::context::MoralContext;
use crate::verdict::CareVerdict;
use crate::vocab::RelationshipImpact;

/// Judge an action by the kinds of relational impact it has.
///
/// Only `impact_type` matters here; which relationships are affected is
/// irrelevant to the verdict. Nurturing outweighs harm when both appear.
pub fn evaluate(_action: &str, context: &MoralContext) -> CareVerdict {
    let impacts = &context.trust_impact.impact_type;

    if impacts.contains(&RelationshipImpact::Nurtures)
        || impacts.contains(&RelationshipImpact::Strengthens)
    {
        CareVerdict::Caring
    } else if impacts.contains(&RelationshipImpact::Exploits)
        || impacts.contains(&RelationshipImpact::Weakens)
    {
        CareVerdict::Uncaring
    } else {
        CareVerdict::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TrustImpact;
    use crate::vocab::RelationshipType;

    fn context_with_impacts(impact_type: Vec<RelationshipImpact>) -> MoralContext {
        MoralContext {
            trust_impact: TrustImpact {
                impact_type,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_nurturing_is_caring() {
        let ctx = context_with_impacts(vec![RelationshipImpact::Nurtures]);
        assert_eq!(evaluate("act", &ctx), CareVerdict::Caring);

        let ctx = context_with_impacts(vec![RelationshipImpact::Strengthens]);
        assert_eq!(evaluate("act", &ctx), CareVerdict::Caring);
    }

    #[test]
    fn test_exploiting_is_uncaring() {
        let ctx = context_with_impacts(vec![
            RelationshipImpact::Exploits,
            RelationshipImpact::Weakens,
        ]);
        assert_eq!(evaluate("act", &ctx), CareVerdict::Uncaring);
    }

    #[test]
    fn test_nurturing_outweighs_harm() {
        let ctx = context_with_impacts(vec![
            RelationshipImpact::BreachesTrust,
            RelationshipImpact::Strengthens,
            RelationshipImpact::Weakens,
        ]);
        assert_eq!(evaluate("act", &ctx), CareVerdict::Caring);
    }

    #[test]
    fn test_no_relational_impact_is_neutral() {
        assert_eq!(
            evaluate("act", &MoralContext::default()),
            CareVerdict::Neutral
        );

        // Trust bookkeeping alone does not decide the care reading
        let ctx = context_with_impacts(vec![RelationshipImpact::BuildsTrust]);
        assert_eq!(evaluate("act", &ctx), CareVerdict::Neutral);
    }

    #[test]
    fn test_relationships_affected_is_ignored() {
        let ctx = MoralContext {
            trust_impact: TrustImpact {
                relationships_affected: vec![RelationshipType::SpouseSpouse],
                impact_type: vec![],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), CareVerdict::Neutral);
    }
}
