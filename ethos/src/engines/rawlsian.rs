//! Rawlsian engine - fairness as measured by societal trust.

use crate::context::MoralContext;
use crate::verdict::RawlsianVerdict;

/// Judge an action by whether it erodes the trust fair institutions
/// rest on.
pub fn evaluate(_action: &str, context: &MoralContext) -> RawlsianVerdict {
    if context.cooperative_outcome.societal_trust_change < 0 {
        RawlsianVerdict::Unjust
    } else {
        RawlsianVerdict::Just
    }
}
