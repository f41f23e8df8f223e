//! The moral context - the structured factual record about one action.
//!
//! A context is an immutable value object assembled once per evaluated
//! action. Every engine conditions on some slice of it; none of them
//! mutate it. The aggregate converts losslessly to and from a generic
//! structured representation ([`serde_json::Value`]) so a collaborator
//! can persist contexts without the core knowing about files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::vocab::{
    AgentType, DutyType, ImpactSubject, RelationshipImpact, RelationshipType, TimeHorizon, Vice,
    Virtue,
};

/// Error raised when a structured representation does not describe a
/// well-formed context.
///
/// Construction is atomic: a failed conversion leaves no partially built
/// context behind.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// The representation was malformed (wrong shape, wrong type, or an
    /// unrecognized enumerated name)
    #[error("malformed context representation: {0}")]
    Representation(#[from] serde_json::Error),
}

/// Outcome of universalizing the action's maxim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniversalizedResult {
    /// Universal adoption of the maxim defeats the maxim itself
    #[serde(default)]
    pub self_collapse: bool,
    /// A rational agent could not will the universalized maxim
    #[serde(default)]
    pub contradiction_in_will: bool,
}

/// Aggregate and per-stakeholder consequences of the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Consequences {
    /// Net change in flourishing across everyone affected
    #[serde(default)]
    pub net_flourishing: i64,
    /// Net hedonic utility before temporal discounting
    #[serde(default)]
    pub net_utility: i64,
    /// Signed measure of agency and assertion the action expresses
    #[serde(default)]
    pub power_expression: i64,
    /// How far out the modeled consequences extend
    #[serde(default)]
    pub time_horizon: TimeHorizon,
    /// Signed impact magnitude per stakeholder
    #[serde(default)]
    pub individual_impact: BTreeMap<ImpactSubject, i64>,
}

impl Consequences {
    /// Net utility discounted by time horizon.
    ///
    /// Distant consequences are uncertain, so they weigh less: MEDIUM
    /// keeps 80% and LONG keeps 60% of the raw utility, truncated toward
    /// zero. SHORT passes it through unchanged.
    pub fn effective_utility(&self) -> i64 {
        let factor = match self.time_horizon {
            TimeHorizon::Short => 1.0,
            TimeHorizon::Medium => 0.8,
            TimeHorizon::Long => 0.6,
        };
        (self.net_utility as f64 * factor) as i64
    }
}

/// Whether the action's rule survives as a stable cooperative practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CooperativeOutcome {
    /// The practice remains stable if generally adopted
    #[serde(default = "default_true")]
    pub stable: bool,
    /// Signed change to trust across society at large
    #[serde(default)]
    pub societal_trust_change: i64,
}

impl Default for CooperativeOutcome {
    fn default() -> Self {
        Self {
            stable: true,
            societal_trust_change: 0,
        }
    }
}

/// How the action lands on the relationships it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustImpact {
    /// The action breaches a trust someone placed in the agent
    #[serde(default)]
    pub breach: bool,
    /// Relationships the action touches
    #[serde(default)]
    pub relationships_affected: Vec<RelationshipType>,
    /// The kinds of impact, in no particular correspondence with
    /// `relationships_affected`
    #[serde(default)]
    pub impact_type: Vec<RelationshipImpact>,
}

/// The acting agent's role and character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Agent {
    #[serde(default)]
    pub agent_type: AgentType,
    /// Virtues the action expresses
    #[serde(default)]
    pub virtues: Vec<Virtue>,
    /// Vices the action expresses
    #[serde(default)]
    pub vices: Vec<Vice>,
}

/// Prima facie duties the action upholds and violates.
///
/// The same duty may appear on both sides: scenario data does this (a lie
/// that keeps faith with a friend while breaking faith with the state),
/// and both occurrences count toward their respective weighted sums.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DutyAssessment {
    #[serde(default)]
    pub duties_upheld: Vec<DutyType>,
    #[serde(default)]
    pub duties_violated: Vec<DutyType>,
}

/// The complete factual record about one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoralContext {
    /// Free-text description of the action, for reports only
    #[serde(default = "default_action_description")]
    pub action_description: String,
    #[serde(default)]
    pub universalized_result: UniversalizedResult,
    #[serde(default)]
    pub consequences: Consequences,
    #[serde(default)]
    pub cooperative_outcome: CooperativeOutcome,
    #[serde(default)]
    pub trust_impact: TrustImpact,
    #[serde(default)]
    pub agent: Agent,
    #[serde(default)]
    pub duty_assessment: DutyAssessment,
}

impl Default for MoralContext {
    fn default() -> Self {
        Self {
            action_description: default_action_description(),
            universalized_result: UniversalizedResult::default(),
            consequences: Consequences::default(),
            cooperative_outcome: CooperativeOutcome::default(),
            trust_impact: TrustImpact::default(),
            agent: Agent::default(),
            duty_assessment: DutyAssessment::default(),
        }
    }
}

impl MoralContext {
    /// Convert to the generic structured representation.
    ///
    /// Enumerated values appear as their exact name strings, so the
    /// representation survives textual persistence.
    pub fn to_structured(&self) -> Result<serde_json::Value, ContextError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a context from its structured representation.
    ///
    /// Fails on unknown fields, mistyped values, and unrecognized
    /// enumerated names. Round-tripping through [`Self::to_structured`]
    /// reproduces an equal context.
    pub fn from_structured(value: serde_json::Value) -> Result<Self, ContextError> {
        Ok(serde_json::from_value(value)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_action_description() -> String {
    "An action was performed.".to_string()
}
