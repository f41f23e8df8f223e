//! Nietzschean engine - master and slave morality under the will to
//! power.
//!
//! Derives a handful of booleans from the context and applies them in a
//! fixed priority order; the first matching clause wins. The default is
//! skeptical: what is neither noble nor plainly harmless reads as slave
//! vice.

use tracing::debug;

use crate::context::MoralContext;
use crate::verdict::NietzscheanVerdict;

/// Judge an action by whether it is active, life-affirming, and done
/// from strength.
pub fn evaluate(action: &str, context: &MoralContext) -> NietzscheanVerdict {
    let consequences = &context.consequences;
    let power = consequences.power_expression;
    let breach = context.trust_impact.breach;
    let stable = context.cooperative_outcome.stable;
    let trust_change = context.cooperative_outcome.societal_trust_change;
    let virtue_count = context.agent.virtues.len();
    let vice_count = context.agent.vices.len();

    let is_active = power > 2 && !breach;
    let is_reactive = breach || power < 0;
    let is_life_affirming = consequences.net_flourishing > 0 || power > 5;
    let is_life_denying = consequences.net_flourishing < -5 || trust_change < -3;
    let from_strength = power > 3 && virtue_count > vice_count;
    let from_fear = power < 0 || !stable;

    debug!(
        action,
        is_active, is_reactive, is_life_affirming, is_life_denying, from_strength, from_fear,
        "nietzschean reading"
    );

    if is_active && is_life_affirming && from_strength {
        NietzscheanVerdict::MasterGood
    } else if is_reactive && is_life_denying && from_fear {
        NietzscheanVerdict::SlaveBad
    } else if !breach && consequences.net_flourishing >= 0 {
        NietzscheanVerdict::SlaveGood
    } else {
        NietzscheanVerdict::SlaveBad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Agent, Consequences, CooperativeOutcome, TrustImpact};
    use crate::vocab::{Vice, Virtue};

    #[test]
    fn test_noble_action_is_master_good() {
        let ctx = MoralContext {
            consequences: Consequences {
                net_flourishing: 10,
                power_expression: 6,
                ..Default::default()
            },
            agent: Agent {
                virtues: vec![Virtue::Courage, Virtue::Justice],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), NietzscheanVerdict::MasterGood);
    }

    #[test]
    fn test_reactive_life_denying_fear_is_slave_bad() {
        let ctx = MoralContext {
            consequences: Consequences {
                net_flourishing: -10,
                power_expression: -3,
                ..Default::default()
            },
            cooperative_outcome: CooperativeOutcome {
                stable: false,
                societal_trust_change: -5,
            },
            trust_impact: TrustImpact {
                breach: true,
                ..Default::default()
            },
            agent: Agent {
                vices: vec![Vice::Cruelty],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), NietzscheanVerdict::SlaveBad);
    }

    #[test]
    fn test_harmless_action_is_slave_good() {
        // No breach and non-negative flourishing, but nothing noble either
        assert_eq!(
            evaluate("act", &MoralContext::default()),
            NietzscheanVerdict::SlaveGood
        );
    }

    #[test]
    fn test_skeptical_fallback_is_slave_bad() {
        // A breach that is neither reactive-denying nor harmless falls
        // through to the fallback
        let ctx = MoralContext {
            consequences: Consequences {
                net_flourishing: 5,
                power_expression: 1,
                ..Default::default()
            },
            trust_impact: TrustImpact {
                breach: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), NietzscheanVerdict::SlaveBad);
    }

    #[test]
    fn test_breach_blocks_master_good() {
        // Power and virtue alone do not redeem a trust breach
        let ctx = MoralContext {
            consequences: Consequences {
                net_flourishing: 10,
                power_expression: 8,
                ..Default::default()
            },
            trust_impact: TrustImpact {
                breach: true,
                ..Default::default()
            },
            agent: Agent {
                virtues: vec![Virtue::Courage],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_ne!(evaluate("act", &ctx), NietzscheanVerdict::MasterGood);
    }
}
