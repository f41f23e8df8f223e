//! Kantian engine - the categorical imperative test.

use crate::context::MoralContext;
use crate::verdict::KantianVerdict;

/// Judge an action by whether its maxim can be universalized.
///
/// Any universalization failure condemns the act: a maxim that defeats
/// itself when everyone adopts it, or one a rational agent could not
/// will, is impermissible whatever its outcomes.
pub fn evaluate(_action: &str, context: &MoralContext) -> KantianVerdict {
    let universalized = &context.universalized_result;
    if universalized.self_collapse || universalized.contradiction_in_will {
        KantianVerdict::Impermissible
    } else {
        KantianVerdict::Permissible
    }
}
