//! Aristotelian engine - character states from action and desire.
//!
//! Crosses "right action" (flourishing sign, stability of the practice)
//! with "right desire" (virtues vs. vices expressed) to land on one of
//! the four character states.

use crate::context::MoralContext;
use crate::verdict::AristotelianVerdict;
use crate::vocab::TimeHorizon;

/// Classify an action into one of Aristotle's four character states.
pub fn evaluate(_action: &str, context: &MoralContext) -> AristotelianVerdict {
    let consequences = &context.consequences;
    let stable = context.cooperative_outcome.stable;
    let has_virtues = !context.agent.virtues.is_empty();
    let has_vices = !context.agent.vices.is_empty();

    // Short-term gain masking a long-run loss is weakness of will,
    // whatever the character behind it.
    if consequences.net_flourishing > 0
        && consequences.time_horizon == TimeHorizon::Short
        && consequences.effective_utility() < 0
    {
        return AristotelianVerdict::Incontinent;
    }

    if consequences.net_flourishing < 0 {
        if !stable || has_vices {
            AristotelianVerdict::Vicious
        } else {
            AristotelianVerdict::Incontinent
        }
    } else if consequences.net_flourishing > 0 {
        if stable {
            if has_virtues && !has_vices {
                AristotelianVerdict::Virtuous
            } else {
                AristotelianVerdict::Continent
            }
        } else if has_virtues {
            AristotelianVerdict::Continent
        } else {
            AristotelianVerdict::Incontinent
        }
    } else if stable {
        AristotelianVerdict::Continent
    } else {
        AristotelianVerdict::Incontinent
    }
}
