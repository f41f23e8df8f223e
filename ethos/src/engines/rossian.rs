//! Rossian engine - weighing prima facie duties in context.
//!
//! Each duty carries a base stringency weight, scaled and nudged by the
//! context before the upheld and violated sides are summed. When the two
//! sides land within an uncertainty threshold of each other the verdict
//! is CONFLICTING: duty-weighing is contextual and often genuinely
//! indeterminate.

use std::collections::BTreeSet;

use tracing::debug;

use crate::context::MoralContext;
use crate::verdict::RossianVerdict;
use crate::vocab::{AgentType, DutyType, TimeHorizon};

/// Base stringency weight of a duty.
///
/// The match is deliberately exhaustive: adding a [`DutyType`] without a
/// weight is a compile error, never a silent zero.
fn base_weight(duty: DutyType) -> i64 {
    match duty {
        DutyType::NonMaleficence => 12,
        DutyType::Justice => 10,
        DutyType::Fidelity => 9,
        DutyType::Reparation => 8,
        DutyType::Gratitude => 7,
        DutyType::Beneficence => 6,
        DutyType::SelfImprovement => 5,
    }
}

/// A duty's weight after contextual modifiers.
///
/// The horizon factor is applied first (truncated to integer), then the
/// additive bonuses: close relations tighten FIDELITY and GRATITUDE,
/// heavy harm tightens NON_MALEFICENCE, and a large trust loss tightens
/// JUSTICE.
fn contextual_weight(duty: DutyType, context: &MoralContext) -> i64 {
    let horizon_factor = match context.consequences.time_horizon {
        TimeHorizon::Short => 0.8,
        TimeHorizon::Medium => 1.0,
        TimeHorizon::Long => 1.2,
    };
    let mut weight = (base_weight(duty) as f64 * horizon_factor) as i64;

    let close_relation = matches!(
        context.agent.agent_type,
        AgentType::Friend | AgentType::FamilyMember
    );

    match duty {
        DutyType::Fidelity if close_relation => weight += 3,
        DutyType::Gratitude if close_relation => weight += 2,
        DutyType::NonMaleficence if context.consequences.net_utility < -10 => weight += 4,
        DutyType::Justice if context.cooperative_outcome.societal_trust_change < -5 => weight += 3,
        _ => {}
    }

    weight
}

/// Weigh the upheld duties against the violated ones.
pub fn evaluate(action: &str, context: &MoralContext) -> RossianVerdict {
    let assessment = &context.duty_assessment;

    let weight_upheld: i64 = assessment
        .duties_upheld
        .iter()
        .map(|&duty| contextual_weight(duty, context))
        .sum();
    let weight_violated: i64 = assessment
        .duties_violated
        .iter()
        .map(|&duty| contextual_weight(duty, context))
        .sum();

    let distinct_relationships: BTreeSet<_> = context
        .trust_impact
        .relationships_affected
        .iter()
        .collect();

    // The more duties and relationships in play, the wider the band of
    // genuine indeterminacy.
    let threshold = 2
        + (assessment.duties_upheld.len()
            + assessment.duties_violated.len()
            + distinct_relationships.len()) as i64;

    debug!(
        action,
        weight_upheld, weight_violated, threshold, "rossian duty weighing"
    );

    if (weight_upheld - weight_violated).abs() < threshold {
        RossianVerdict::Conflicting
    } else if weight_upheld > weight_violated {
        RossianVerdict::Permissible
    } else {
        RossianVerdict::Impermissible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Agent, Consequences, CooperativeOutcome, DutyAssessment, TrustImpact};
    use crate::vocab::RelationshipType;

    fn context_with_duties(upheld: Vec<DutyType>, violated: Vec<DutyType>) -> MoralContext {
        MoralContext {
            duty_assessment: DutyAssessment {
                duties_upheld: upheld,
                duties_violated: violated,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_threshold_boundary_is_decisive() {
        // upheld 6 vs violated 12: diff 6, threshold 2 + 2 + 0 = 4.
        // 6 >= 4, so the verdict is decisive, not conflicting.
        let ctx = context_with_duties(
            vec![DutyType::Beneficence],
            vec![DutyType::NonMaleficence],
        );
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Impermissible);
    }

    #[test]
    fn test_upheld_majority_is_permissible() {
        // upheld 12 + 10 = 22 vs violated 5: diff 17, threshold 2 + 3 = 5
        let ctx = context_with_duties(
            vec![DutyType::NonMaleficence, DutyType::Justice],
            vec![DutyType::SelfImprovement],
        );
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Permissible);
    }

    #[test]
    fn test_close_call_is_conflicting() {
        // upheld 9 vs violated 10: diff 1, threshold 2 + 2 + 0 = 4
        let ctx = context_with_duties(vec![DutyType::Fidelity], vec![DutyType::Justice]);
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Conflicting);
    }

    #[test]
    fn test_friendship_raises_fidelity_stringency() {
        // For a stranger: upheld FIDELITY 9 vs violated FIDELITY 9 +
        // SELF_IMPROVEMENT 5 = 14; diff 5, threshold 2 + 3 = 5 -> decisive
        // Impermissible.
        let mut ctx = context_with_duties(
            vec![DutyType::Fidelity],
            vec![DutyType::Fidelity, DutyType::SelfImprovement],
        );
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Impermissible);

        // A friend upholding FIDELITY against violated BENEFICENCE:
        // 12 vs 6, diff 6, threshold 4 -> Permissible
        ctx = context_with_duties(vec![DutyType::Fidelity], vec![DutyType::Beneficence]);
        ctx.agent = Agent {
            agent_type: AgentType::Friend,
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Permissible);
    }

    #[test]
    fn test_heavy_harm_raises_non_maleficence() {
        // Base: upheld JUSTICE 10 vs violated NON_MALEFICENCE 12, diff 2
        // -> conflicting. With net_utility < -10 the violated side gains
        // +4: diff 6, threshold 4 -> Impermissible.
        let mut ctx = context_with_duties(vec![DutyType::Justice], vec![DutyType::NonMaleficence]);
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Conflicting);

        ctx.consequences = Consequences {
            net_utility: -11,
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Impermissible);
    }

    #[test]
    fn test_trust_collapse_raises_justice() {
        // upheld JUSTICE 10 + 3 = 13 vs violated FIDELITY 9: diff 4,
        // threshold 4 -> Permissible (without the bonus: diff 1 ->
        // conflicting)
        let mut ctx = context_with_duties(vec![DutyType::Justice], vec![DutyType::Fidelity]);
        ctx.cooperative_outcome = CooperativeOutcome {
            societal_trust_change: -6,
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Permissible);
    }

    #[test]
    fn test_long_horizon_scales_weights() {
        // LONG: NON_MALEFICENCE 12 * 1.2 = 14 (14.4 truncated) vs
        // BENEFICENCE 6 * 1.2 = 7 (7.2 truncated): diff 7, threshold 4
        let ctx = MoralContext {
            consequences: Consequences {
                time_horizon: TimeHorizon::Long,
                ..Default::default()
            },
            duty_assessment: DutyAssessment {
                duties_upheld: vec![DutyType::NonMaleficence],
                duties_violated: vec![DutyType::Beneficence],
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Permissible);
    }

    #[test]
    fn test_duplicate_duty_counts_on_both_sides() {
        // The protective-lie shape: FIDELITY upheld toward the friend and
        // violated toward the state, both occurrences weighed. Friend
        // agent, two distinct relationships affected.
        // upheld: BENEFICENCE 6 + FIDELITY 12 = 18
        // violated: FIDELITY 12 + NON_MALEFICENCE 12 = 24
        // diff 6, threshold 2 + 4 + 2 = 8 -> Conflicting
        let ctx = MoralContext {
            agent: Agent {
                agent_type: AgentType::Friend,
                ..Default::default()
            },
            trust_impact: TrustImpact {
                breach: true,
                relationships_affected: vec![
                    RelationshipType::CitizenState,
                    RelationshipType::FriendFriend,
                    RelationshipType::CitizenState,
                ],
                ..Default::default()
            },
            duty_assessment: DutyAssessment {
                duties_upheld: vec![DutyType::Beneficence, DutyType::Fidelity],
                duties_violated: vec![DutyType::Fidelity, DutyType::NonMaleficence],
            },
            ..Default::default()
        };
        assert_eq!(evaluate("act", &ctx), RossianVerdict::Conflicting);
    }

    #[test]
    fn test_no_duties_is_conflicting() {
        // Nothing on either side: diff 0 < threshold 2
        assert_eq!(
            evaluate("act", &MoralContext::default()),
            RossianVerdict::Conflicting
        );
    }
}
