//! Verdict types - one small closed enumeration per framework, plus the
//! universal three-valued scale they all reduce to.
//!
//! Each framework speaks its own language (virtuous, unjust, master
//! good...); [`Verdict::to_core`] is the fixed, hand-specified mapping
//! down to [`MoralValue`] that makes the verdicts comparable, and
//! [`Verdict::moral_quality`] is the fixed rationale text shown in
//! reports.

use std::fmt;

use serde::Serialize;

/// The universal three-valued outcome scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoralValue {
    Good,
    Bad,
    Neutral,
}

impl MoralValue {
    pub fn is_positive(&self) -> bool {
        *self == Self::Good
    }

    pub fn is_negative(&self) -> bool {
        *self == Self::Bad
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::Neutral
    }

    /// The scale is terminal: it reduces to itself.
    pub fn to_core(&self) -> Self {
        *self
    }
}

impl fmt::Display for MoralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Good => "Good",
            Self::Bad => "Bad",
            Self::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Contract every framework verdict type fulfills.
pub trait Verdict: fmt::Display {
    /// Reduce to the universal scale. Fixed mapping, never computed.
    fn to_core(&self) -> MoralValue;

    /// Fixed rationale text for this value.
    fn moral_quality(&self) -> &'static str;
}

/// Deontological verdict under the categorical imperative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KantianVerdict {
    Permissible,
    Impermissible,
}

impl Verdict for KantianVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Permissible => MoralValue::Good,
            Self::Impermissible => MoralValue::Bad,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Permissible => {
                "Passes the categorical imperative test (universalizable without contradiction)"
            }
            Self::Impermissible => {
                "Fails the categorical imperative test (cannot be universalized without contradiction)"
            }
        }
    }
}

impl fmt::Display for KantianVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Permissible => "Permissible",
            Self::Impermissible => "Impermissible",
        };
        write!(f, "{}", name)
    }
}

/// Consequentialist verdict on discounted net utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UtilitarianVerdict {
    Permissible,
    Impermissible,
    Neutral,
}

impl Verdict for UtilitarianVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Permissible => MoralValue::Good,
            Self::Impermissible => MoralValue::Bad,
            Self::Neutral => MoralValue::Neutral,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Permissible => "Produces net positive utility/consequences",
            Self::Impermissible => "Produces net negative utility/consequences",
            Self::Neutral => "Neutral impact on overall utility",
        }
    }
}

impl fmt::Display for UtilitarianVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Permissible => "Permissible",
            Self::Impermissible => "Impermissible",
            Self::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Aristotle's four character states from the Nicomachean Ethics.
///
/// The cross of right/wrong action with right/wrong desire: excellence,
/// corruption, self-control, and weakness of will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AristotelianVerdict {
    Virtuous,
    Vicious,
    Continent,
    Incontinent,
}

impl Verdict for AristotelianVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Virtuous => MoralValue::Good,
            Self::Vicious => MoralValue::Bad,
            Self::Continent | Self::Incontinent => MoralValue::Neutral,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Virtuous => "Excellence of character (right action + right desire)",
            Self::Vicious => "Corruption of character (wrong action + wrong desire)",
            Self::Continent => "Self-control (right action + wrong desire)",
            Self::Incontinent => "Weakness of will (wrong action + right desire)",
        }
    }
}

impl fmt::Display for AristotelianVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Virtuous => "Virtuous",
            Self::Vicious => "Vicious",
            Self::Continent => "Continent",
            Self::Incontinent => "Incontinent",
        };
        write!(f, "{}", name)
    }
}

/// Scanlon-style contractualist verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractualistVerdict {
    Permissible,
    Impermissible,
}

impl Verdict for ContractualistVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Permissible => MoralValue::Good,
            Self::Impermissible => MoralValue::Bad,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Permissible => "Reasonable persons could not reject this principle",
            Self::Impermissible => "Reasonable persons would reject this principle",
        }
    }
}

impl fmt::Display for ContractualistVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Permissible => "Permissible",
            Self::Impermissible => "Impermissible",
        };
        write!(f, "{}", name)
    }
}

/// Rossian verdict after weighing prima facie duties.
///
/// CONFLICTING is a real outcome, not a failure: duty-weighing is
/// contextual and often genuinely indeterminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RossianVerdict {
    Permissible,
    Impermissible,
    Conflicting,
}

impl Verdict for RossianVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Permissible => MoralValue::Good,
            Self::Impermissible => MoralValue::Bad,
            Self::Conflicting => MoralValue::Neutral,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Permissible => "Permissible",
            Self::Impermissible => "Impermissible",
            Self::Conflicting => "Conflicting",
        }
    }
}

impl fmt::Display for RossianVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Permissible => "Permissible",
            Self::Impermissible => "Impermissible",
            Self::Conflicting => "Conflicting",
        };
        write!(f, "{}", name)
    }
}

/// Nietzschean verdict: master vs. slave morality crossed with the will
/// to power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NietzscheanVerdict {
    MasterGood,
    MasterBad,
    SlaveGood,
    SlaveBad,
}

impl Verdict for NietzscheanVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            // Good from either perspective maps up
            Self::MasterGood | Self::SlaveGood => MoralValue::Good,
            Self::MasterBad | Self::SlaveBad => MoralValue::Bad,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::MasterGood => "Life-affirming master virtue (noble, powerful)",
            Self::MasterBad => "Life-denying master vice (contemptible, weak)",
            Self::SlaveGood => "Slave virtue (meek, humble, pious)",
            Self::SlaveBad => "Slave vice (proud, powerful, 'evil')",
        }
    }
}

impl fmt::Display for NietzscheanVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Underscores become spaces: "Master Good", not "Master_Good"
        let name = match self {
            Self::MasterGood => "Master Good",
            Self::MasterBad => "Master Bad",
            Self::SlaveGood => "Slave Good",
            Self::SlaveBad => "Slave Bad",
        };
        write!(f, "{}", name)
    }
}

/// Ethics-of-care verdict on relational nurturing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareVerdict {
    Caring,
    Uncaring,
    Neutral,
}

impl Verdict for CareVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Caring => MoralValue::Good,
            Self::Uncaring => MoralValue::Bad,
            Self::Neutral => MoralValue::Neutral,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Caring => "Nurtures and maintains caring relationships",
            Self::Uncaring => "Harms or exploits relationships",
            Self::Neutral => "Neutral impact on relationships",
        }
    }
}

impl fmt::Display for CareVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Caring => "Caring",
            Self::Uncaring => "Uncaring",
            Self::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Rawlsian verdict on justice from behind the veil of ignorance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RawlsianVerdict {
    Just,
    Unjust,
    Neutral,
}

impl Verdict for RawlsianVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Just => MoralValue::Good,
            Self::Unjust => MoralValue::Bad,
            Self::Neutral => MoralValue::Neutral,
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Just => "Promotes fair social arrangements (just)",
            Self::Unjust => "Creates or maintains unfair inequality (unjust)",
            Self::Neutral => "Neutral impact on social justice",
        }
    }
}

impl fmt::Display for RawlsianVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Just => "Just",
            Self::Unjust => "Unjust",
            Self::Neutral => "Neutral",
        };
        write!(f, "{}", name)
    }
}

/// Tagged union over the eight framework verdict types.
///
/// Lets the runner carry heterogeneous verdicts in one report while each
/// engine keeps its precise return type. Serializes untagged (the bare
/// value name) since report entries already name their framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrameworkVerdict {
    Kantian(KantianVerdict),
    Utilitarian(UtilitarianVerdict),
    Aristotelian(AristotelianVerdict),
    Contractualist(ContractualistVerdict),
    Rossian(RossianVerdict),
    Nietzschean(NietzscheanVerdict),
    Care(CareVerdict),
    Rawlsian(RawlsianVerdict),
}

impl Verdict for FrameworkVerdict {
    fn to_core(&self) -> MoralValue {
        match self {
            Self::Kantian(v) => v.to_core(),
            Self::Utilitarian(v) => v.to_core(),
            Self::Aristotelian(v) => v.to_core(),
            Self::Contractualist(v) => v.to_core(),
            Self::Rossian(v) => v.to_core(),
            Self::Nietzschean(v) => v.to_core(),
            Self::Care(v) => v.to_core(),
            Self::Rawlsian(v) => v.to_core(),
        }
    }

    fn moral_quality(&self) -> &'static str {
        match self {
            Self::Kantian(v) => v.moral_quality(),
            Self::Utilitarian(v) => v.moral_quality(),
            Self::Aristotelian(v) => v.moral_quality(),
            Self::Contractualist(v) => v.moral_quality(),
            Self::Rossian(v) => v.moral_quality(),
            Self::Nietzschean(v) => v.moral_quality(),
            Self::Care(v) => v.moral_quality(),
            Self::Rawlsian(v) => v.moral_quality(),
        }
    }
}

impl fmt::Display for FrameworkVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kantian(v) => v.fmt(f),
            Self::Utilitarian(v) => v.fmt(f),
            Self::Aristotelian(v) => v.fmt(f),
            Self::Contractualist(v) => v.fmt(f),
            Self::Rossian(v) => v.fmt(f),
            Self::Nietzschean(v) => v.fmt(f),
            Self::Care(v) => v.fmt(f),
            Self::Rawlsian(v) => v.fmt(f),
        }
    }
}
