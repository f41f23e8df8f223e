//! The moral engines - one evaluation function per ethical framework.
//!
//! Every engine is a pure function `(action, &MoralContext) -> verdict`
//! with no shared state; engines are independent of each other and of
//! invocation order. The action label is an opaque identifier used only
//! for reporting, never parsed.

pub mod aristotelian;
pub mod care;
pub mod contractualist;
pub mod kantian;
pub mod nietzschean;
pub mod rawlsian;
pub mod rossian;
pub mod utilitarian;
