//! The engine runner - fans one context out to every framework and
//! collects the verdicts on the shared three-valued scale.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::context::MoralContext;
use crate::engines;
use crate::verdict::{FrameworkVerdict, MoralValue, Verdict};

/// The ethical frameworks, in fixed display order.
///
/// The order is part of the reporting contract; evaluation itself is
/// order-independent since every engine is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Kantian,
    Utilitarian,
    Aristotelian,
    Contractualist,
    Rossian,
    Nietzschean,
    EthicsOfCare,
    Rawlsian,
}

impl Framework {
    /// All frameworks, in display order. Built once, read-only.
    pub fn all() -> &'static [Framework] {
        &[
            Self::Kantian,
            Self::Utilitarian,
            Self::Aristotelian,
            Self::Contractualist,
            Self::Rossian,
            Self::Nietzschean,
            Self::EthicsOfCare,
            Self::Rawlsian,
        ]
    }

    /// Human-readable framework name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kantian => "Kantian",
            Self::Utilitarian => "Utilitarian",
            Self::Aristotelian => "Aristotelian",
            Self::Contractualist => "Contractualist",
            Self::Rossian => "Rossian",
            Self::Nietzschean => "Nietzschean",
            Self::EthicsOfCare => "Ethics of Care",
            Self::Rawlsian => "Rawlsian",
        }
    }

    /// Run this framework's engine against a context.
    pub fn evaluate(&self, action: &str, context: &MoralContext) -> FrameworkVerdict {
        match self {
            Self::Kantian => FrameworkVerdict::Kantian(engines::kantian::evaluate(action, context)),
            Self::Utilitarian => {
                FrameworkVerdict::Utilitarian(engines::utilitarian::evaluate(action, context))
            }
            Self::Aristotelian => {
                FrameworkVerdict::Aristotelian(engines::aristotelian::evaluate(action, context))
            }
            Self::Contractualist => {
                FrameworkVerdict::Contractualist(engines::contractualist::evaluate(action, context))
            }
            Self::Rossian => FrameworkVerdict::Rossian(engines::rossian::evaluate(action, context)),
            Self::Nietzschean => {
                FrameworkVerdict::Nietzschean(engines::nietzschean::evaluate(action, context))
            }
            Self::EthicsOfCare => FrameworkVerdict::Care(engines::care::evaluate(action, context)),
            Self::Rawlsian => {
                FrameworkVerdict::Rawlsian(engines::rawlsian::evaluate(action, context))
            }
        }
    }
}

/// One framework's contribution to a report.
#[derive(Debug, Clone, Serialize)]
pub struct EngineResult {
    /// Which framework produced the verdict
    pub framework: Framework,
    /// The framework-specific verdict
    pub verdict: FrameworkVerdict,
    /// Pretty-printed verdict, e.g. "Master Good"
    pub display: String,
    /// Fixed rationale text for the verdict
    pub moral_quality: &'static str,
    /// The verdict reduced to the universal scale
    pub core: MoralValue,
}

/// Count of core values across a report's results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoreTally {
    pub good: usize,
    pub bad: usize,
    pub neutral: usize,
}

/// The aggregated verdicts of every framework for one action.
#[derive(Debug, Clone, Serialize)]
pub struct EngineReport {
    /// Report identifier
    pub id: String,
    /// The action label the caller supplied
    pub action: String,
    /// When the evaluation ran
    pub evaluated_at: DateTime<Utc>,
    /// Per-framework results, in [`Framework::all`] order
    pub results: Vec<EngineResult>,
}

impl EngineReport {
    /// Look up one framework's result.
    pub fn get(&self, framework: Framework) -> Option<&EngineResult> {
        self.results.iter().find(|r| r.framework == framework)
    }

    /// Tally the core values across frameworks.
    pub fn core_tally(&self) -> CoreTally {
        let mut tally = CoreTally::default();
        for result in &self.results {
            match result.core {
                MoralValue::Good => tally.good += 1,
                MoralValue::Bad => tally.bad += 1,
                MoralValue::Neutral => tally.neutral += 1,
            }
        }
        tally
    }
}

/// Evaluate an action's context under every framework.
///
/// The action label is opaque and used only for reporting; the context
/// carries all the facts. Engines never fail on a well-formed context,
/// and the runner does not isolate them: a panic in one engine aborts
/// the whole report rather than producing a partial one.
pub fn run_engines(action: &str, context: &MoralContext) -> EngineReport {
    let results: Vec<EngineResult> = Framework::all()
        .iter()
        .map(|&framework| {
            let verdict = framework.evaluate(action, context);
            debug!(
                action,
                framework = framework.name(),
                verdict = %verdict,
                core = %verdict.to_core(),
                "engine verdict"
            );
            EngineResult {
                framework,
                verdict,
                display: verdict.to_string(),
                moral_quality: verdict.moral_quality(),
                core: verdict.to_core(),
            }
        })
        .collect();

    EngineReport {
        id: uuid::Uuid::new_v4().to_string(),
        action: action.to_string(),
        evaluated_at: Utc::now(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{
        Consequences, CooperativeOutcome, MoralContext, TrustImpact, UniversalizedResult,
    };

    fn trolley_switch() -> MoralContext {
        MoralContext {
            action_description: "Diverted a runaway trolley onto a side track, one death \
                                 instead of five."
                .to_string(),
            universalized_result: UniversalizedResult {
                self_collapse: false,
                contradiction_in_will: false,
            },
            consequences: Consequences {
                net_flourishing: 4,
                ..Default::default()
            },
            cooperative_outcome: CooperativeOutcome {
                stable: true,
                societal_trust_change: 0,
            },
            trust_impact: TrustImpact {
                breach: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn mass_surveillance() -> MoralContext {
        MoralContext {
            action_description: "Collected data on all citizens without warrants.".to_string(),
            universalized_result: UniversalizedResult {
                self_collapse: true,
                contradiction_in_will: true,
            },
            cooperative_outcome: CooperativeOutcome {
                stable: false,
                societal_trust_change: -20,
            },
            trust_impact: TrustImpact {
                breach: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_results_preserve_framework_order() {
        let report = run_engines("noop", &MoralContext::default());
        let order: Vec<Framework> = report.results.iter().map(|r| r.framework).collect();
        assert_eq!(order, Framework::all());
        assert_eq!(report.results.len(), 8);
    }

    #[test]
    fn test_trolley_switch_scenario() {
        let report = run_engines("trolley_switch", &trolley_switch());

        for framework in [
            Framework::Kantian,
            Framework::Utilitarian,
            Framework::Contractualist,
            Framework::Rawlsian,
        ] {
            let result = report.get(framework).unwrap();
            assert_eq!(
                result.core,
                MoralValue::Good,
                "{} should read the switch as good",
                framework.name()
            );
        }
        assert_eq!(report.get(Framework::Rawlsian).unwrap().display, "Just");
    }

    #[test]
    fn test_mass_surveillance_scenario() {
        let report = run_engines("mass_surveillance", &mass_surveillance());

        assert_eq!(report.get(Framework::Kantian).unwrap().core, MoralValue::Bad);
        assert_eq!(
            report.get(Framework::Contractualist).unwrap().core,
            MoralValue::Bad
        );
        assert_eq!(
            report.get(Framework::Rawlsian).unwrap().core,
            MoralValue::Bad
        );
    }

    #[test]
    fn test_run_engines_is_idempotent() {
        let context = trolley_switch();
        let first = run_engines("trolley_switch", &context);
        let second = run_engines("trolley_switch", &context);

        for (a, b) in first.results.iter().zip(second.results.iter()) {
            assert_eq!(a.framework, b.framework);
            assert_eq!(a.verdict, b.verdict);
            assert_eq!(a.core, b.core);
            assert_eq!(a.display, b.display);
        }
    }

    #[test]
    fn test_core_tally() {
        let report = run_engines("trolley_switch", &trolley_switch());
        let tally = report.core_tally();
        assert_eq!(tally.good + tally.bad + tally.neutral, 8);
        assert!(tally.good >= 4);
    }

    #[test]
    fn test_framework_names() {
        assert_eq!(Framework::EthicsOfCare.name(), "Ethics of Care");
        assert_eq!(Framework::Kantian.name(), "Kantian");
    }
}
