//! Comparative normative ethics engine.
//!
//! Evaluates a single described action against eight competing ethical
//! frameworks and reduces each framework's verdict to a shared
//! three-valued scale (GOOD / BAD / NEUTRAL). Judgments are
//! deterministic functions of a pre-populated [`MoralContext`] - the
//! structured record of the action's effects - not of any independent
//! factual inference.
//!
//! # Key Components
//!
//! - [`MoralContext`]: immutable factual record about one action
//! - [`Verdict`]: the contract every framework verdict type fulfills
//! - [`engines`]: one pure evaluation function per framework
//! - [`run_engines`]: fan-out over all eight engines into an [`EngineReport`]
//!
//! # Example
//!
//! ```
//! use ethos::{run_engines, Framework, MoralContext, MoralValue, UniversalizedResult};
//!
//! let context = MoralContext {
//!     action_description: "Kept a promise at personal cost.".to_string(),
//!     universalized_result: UniversalizedResult {
//!         self_collapse: false,
//!         contradiction_in_will: false,
//!     },
//!     ..Default::default()
//! };
//!
//! let report = run_engines("kept_promise", &context);
//! assert_eq!(report.results.len(), 8);
//! assert_eq!(
//!     report.get(Framework::Kantian).unwrap().core,
//!     MoralValue::Good
//! );
//! ```

pub mod context;
pub mod engines;
pub mod runner;
pub mod verdict;
pub mod vocab;

// Re-export main types
pub use context::{
    Agent, Consequences, ContextError, CooperativeOutcome, DutyAssessment, MoralContext,
    TrustImpact, UniversalizedResult,
};
pub use runner::{run_engines, CoreTally, EngineReport, EngineResult, Framework};
pub use verdict::{
    AristotelianVerdict, CareVerdict, ContractualistVerdict, FrameworkVerdict, KantianVerdict,
    MoralValue, NietzscheanVerdict, RawlsianVerdict, RossianVerdict, UtilitarianVerdict, Verdict,
};
pub use vocab::{
    AgentType, DutyType, ImpactSubject, RelationshipImpact, RelationshipType, TimeHorizon, Vice,
    VocabError, Vocabulary, Virtue,
};
