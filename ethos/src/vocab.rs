//! The enumerated vocabulary shared by every moral context.
//!
//! Each set is closed: the engines condition on these values, so an
//! unrecognized name is an error, never a silent default. Values serialize
//! as their exact SCREAMING_SNAKE_CASE names for the structured
//! representation, and [`Vocabulary::from_name`] performs the reverse
//! lookup with an exact, case-sensitive match.

use serde::{Deserialize, Serialize};

/// Error raised when a name does not belong to a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabError {
    /// The name matched no member of the vocabulary
    #[error("unknown {vocabulary} name: {name:?}")]
    UnknownName {
        /// Vocabulary the lookup ran against
        vocabulary: &'static str,
        /// The offending name
        name: String,
    },
}

/// A closed set of named symbolic constants.
pub trait Vocabulary: Sized + Copy + PartialEq + 'static {
    /// Vocabulary name used in error messages.
    const NAME: &'static str;

    /// All members, in declaration order.
    fn all() -> &'static [Self];

    /// The member's exact name.
    fn as_str(&self) -> &'static str;

    /// Look a member up by its exact name.
    fn from_name(name: &str) -> Result<Self, VocabError> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.as_str() == name)
            .ok_or_else(|| VocabError::UnknownName {
                vocabulary: Self::NAME,
                name: name.to_string(),
            })
    }
}

/// Role the acting agent occupies relative to those affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentType {
    Stranger,
    Friend,
    FamilyMember,
    StateOfficial,
    Master,
    Slave,
    Virtuous,
    Vicious,
}

impl Vocabulary for AgentType {
    const NAME: &'static str = "AgentType";

    fn all() -> &'static [Self] {
        &[
            Self::Stranger,
            Self::Friend,
            Self::FamilyMember,
            Self::StateOfficial,
            Self::Master,
            Self::Slave,
            Self::Virtuous,
            Self::Vicious,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Stranger => "STRANGER",
            Self::Friend => "FRIEND",
            Self::FamilyMember => "FAMILY_MEMBER",
            Self::StateOfficial => "STATE_OFFICIAL",
            Self::Master => "MASTER",
            Self::Slave => "SLAVE",
            Self::Virtuous => "VIRTUOUS",
            Self::Vicious => "VICIOUS",
        }
    }
}

impl Default for AgentType {
    fn default() -> Self {
        Self::Stranger
    }
}

/// Character excellences an agent may express in the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Virtue {
    Honesty,
    Courage,
    Loyalty,
    Compassion,
    Justice,
    Temperance,
    Wisdom,
}

impl Vocabulary for Virtue {
    const NAME: &'static str = "Virtue";

    fn all() -> &'static [Self] {
        &[
            Self::Honesty,
            Self::Courage,
            Self::Loyalty,
            Self::Compassion,
            Self::Justice,
            Self::Temperance,
            Self::Wisdom,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Honesty => "HONESTY",
            Self::Courage => "COURAGE",
            Self::Loyalty => "LOYALTY",
            Self::Compassion => "COMPASSION",
            Self::Justice => "JUSTICE",
            Self::Temperance => "TEMPERANCE",
            Self::Wisdom => "WISDOM",
        }
    }
}

/// Character defects, the mirror of [`Virtue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vice {
    Dishonesty,
    Cowardice,
    Betrayal,
    Cruelty,
    Unfairness,
    Indulgence,
    Foolishness,
}

impl Vocabulary for Vice {
    const NAME: &'static str = "Vice";

    fn all() -> &'static [Self] {
        &[
            Self::Dishonesty,
            Self::Cowardice,
            Self::Betrayal,
            Self::Cruelty,
            Self::Unfairness,
            Self::Indulgence,
            Self::Foolishness,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Dishonesty => "DISHONESTY",
            Self::Cowardice => "COWARDICE",
            Self::Betrayal => "BETRAYAL",
            Self::Cruelty => "CRUELTY",
            Self::Unfairness => "UNFAIRNESS",
            Self::Indulgence => "INDULGENCE",
            Self::Foolishness => "FOOLISHNESS",
        }
    }
}

/// Ross's prima facie duties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyType {
    /// Keeping promises and honoring commitments
    Fidelity,
    /// Making amends for previous wrongs
    Reparation,
    /// Returning benefits received
    Gratitude,
    /// Distributing goods fairly
    Justice,
    /// Improving the condition of others
    Beneficence,
    /// Improving one's own condition
    SelfImprovement,
    /// Not injuring others
    NonMaleficence,
}

impl Vocabulary for DutyType {
    const NAME: &'static str = "DutyType";

    fn all() -> &'static [Self] {
        &[
            Self::Fidelity,
            Self::Reparation,
            Self::Gratitude,
            Self::Justice,
            Self::Beneficence,
            Self::SelfImprovement,
            Self::NonMaleficence,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Fidelity => "FIDELITY",
            Self::Reparation => "REPARATION",
            Self::Gratitude => "GRATITUDE",
            Self::Justice => "JUSTICE",
            Self::Beneficence => "BENEFICENCE",
            Self::SelfImprovement => "SELF_IMPROVEMENT",
            Self::NonMaleficence => "NON_MALEFICENCE",
        }
    }
}

/// Categories of relationship an action can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    ParentChild,
    SpouseSpouse,
    SiblingSibling,
    FamilyMember,
    FriendFriend,
    RomanticPartner,
    CaregiverReceiver,
    TeacherStudent,
    NeighborNeighbor,
    CommunityMember,
    ColleagueColleague,
    CitizenState,
    ProfessionalClient,
    StrangerStranger,
    HumanHuman,
    EmployerEmployee,
    BusinessCustomer,
}

impl Vocabulary for RelationshipType {
    const NAME: &'static str = "RelationshipType";

    fn all() -> &'static [Self] {
        &[
            Self::ParentChild,
            Self::SpouseSpouse,
            Self::SiblingSibling,
            Self::FamilyMember,
            Self::FriendFriend,
            Self::RomanticPartner,
            Self::CaregiverReceiver,
            Self::TeacherStudent,
            Self::NeighborNeighbor,
            Self::CommunityMember,
            Self::ColleagueColleague,
            Self::CitizenState,
            Self::ProfessionalClient,
            Self::StrangerStranger,
            Self::HumanHuman,
            Self::EmployerEmployee,
            Self::BusinessCustomer,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::ParentChild => "PARENT_CHILD",
            Self::SpouseSpouse => "SPOUSE_SPOUSE",
            Self::SiblingSibling => "SIBLING_SIBLING",
            Self::FamilyMember => "FAMILY_MEMBER",
            Self::FriendFriend => "FRIEND_FRIEND",
            Self::RomanticPartner => "ROMANTIC_PARTNER",
            Self::CaregiverReceiver => "CAREGIVER_RECEIVER",
            Self::TeacherStudent => "TEACHER_STUDENT",
            Self::NeighborNeighbor => "NEIGHBOR_NEIGHBOR",
            Self::CommunityMember => "COMMUNITY_MEMBER",
            Self::ColleagueColleague => "COLLEAGUE_COLLEAGUE",
            Self::CitizenState => "CITIZEN_STATE",
            Self::ProfessionalClient => "PROFESSIONAL_CLIENT",
            Self::StrangerStranger => "STRANGER_STRANGER",
            Self::HumanHuman => "HUMAN_HUMAN",
            Self::EmployerEmployee => "EMPLOYER_EMPLOYEE",
            Self::BusinessCustomer => "BUSINESS_CUSTOMER",
        }
    }
}

/// How an action bears on the relationships it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipImpact {
    Nurtures,
    Exploits,
    Strengthens,
    Weakens,
    BreachesTrust,
    BuildsTrust,
}

impl Vocabulary for RelationshipImpact {
    const NAME: &'static str = "RelationshipImpact";

    fn all() -> &'static [Self] {
        &[
            Self::Nurtures,
            Self::Exploits,
            Self::Strengthens,
            Self::Weakens,
            Self::BreachesTrust,
            Self::BuildsTrust,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Nurtures => "NURTURES",
            Self::Exploits => "EXPLOITS",
            Self::Strengthens => "STRENGTHENS",
            Self::Weakens => "WEAKENS",
            Self::BreachesTrust => "BREACHES_TRUST",
            Self::BuildsTrust => "BUILDS_TRUST",
        }
    }
}

/// Roster of roles and groups an action can affect.
///
/// Deliberately concrete: scenario data names its stakeholders directly
/// (the betrayed spouse, the person on the side track) rather than
/// abstracting them into categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactSubject {
    Agent,
    /// The acted-upon self, distinct from the acting agent
    #[serde(rename = "SELF")]
    SelfSubject,
    Friend,
    FamilyMember,
    Spouse,
    Child,
    Parent,
    Stranger,
    Official,
    Dissident,
    Criminal,
    Eater,
    Farmer,
    Donor,
    Recipient,
    Caregiver,
    Teacher,
    Student,
    Employer,
    Employee,
    Society,
    Community,
    Government,
    Citizens,
    Humanity,
    Environment,
    BetrayedSpouse,
    SavedPeople,
    PersonOnSideTrack,
    DecisionMaker,
    PushedPerson,
}

impl Vocabulary for ImpactSubject {
    const NAME: &'static str = "ImpactSubject";

    fn all() -> &'static [Self] {
        &[
            Self::Agent,
            Self::SelfSubject,
            Self::Friend,
            Self::FamilyMember,
            Self::Spouse,
            Self::Child,
            Self::Parent,
            Self::Stranger,
            Self::Official,
            Self::Dissident,
            Self::Criminal,
            Self::Eater,
            Self::Farmer,
            Self::Donor,
            Self::Recipient,
            Self::Caregiver,
            Self::Teacher,
            Self::Student,
            Self::Employer,
            Self::Employee,
            Self::Society,
            Self::Community,
            Self::Government,
            Self::Citizens,
            Self::Humanity,
            Self::Environment,
            Self::BetrayedSpouse,
            Self::SavedPeople,
            Self::PersonOnSideTrack,
            Self::DecisionMaker,
            Self::PushedPerson,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "AGENT",
            Self::SelfSubject => "SELF",
            Self::Friend => "FRIEND",
            Self::FamilyMember => "FAMILY_MEMBER",
            Self::Spouse => "SPOUSE",
            Self::Child => "CHILD",
            Self::Parent => "PARENT",
            Self::Stranger => "STRANGER",
            Self::Official => "OFFICIAL",
            Self::Dissident => "DISSIDENT",
            Self::Criminal => "CRIMINAL",
            Self::Eater => "EATER",
            Self::Farmer => "FARMER",
            Self::Donor => "DONOR",
            Self::Recipient => "RECIPIENT",
            Self::Caregiver => "CAREGIVER",
            Self::Teacher => "TEACHER",
            Self::Student => "STUDENT",
            Self::Employer => "EMPLOYER",
            Self::Employee => "EMPLOYEE",
            Self::Society => "SOCIETY",
            Self::Community => "COMMUNITY",
            Self::Government => "GOVERNMENT",
            Self::Citizens => "CITIZENS",
            Self::Humanity => "HUMANITY",
            Self::Environment => "ENVIRONMENT",
            Self::BetrayedSpouse => "BETRAYED_SPOUSE",
            Self::SavedPeople => "SAVED_PEOPLE",
            Self::PersonOnSideTrack => "PERSON_ON_SIDE_TRACK",
            Self::DecisionMaker => "DECISION_MAKER",
            Self::PushedPerson => "PUSHED_PERSON",
        }
    }
}

/// How far out the modeled consequences extend.
///
/// Governs the discount applied by
/// [`Consequences::effective_utility`](crate::context::Consequences::effective_utility).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

impl Vocabulary for TimeHorizon {
    const NAME: &'static str = "TimeHorizon";

    fn all() -> &'static [Self] {
        &[Self::Short, Self::Medium, Self::Long]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "SHORT",
            Self::Medium => "MEDIUM",
            Self::Long => "LONG",
        }
    }
}

impl Default for TimeHorizon {
    fn default() -> Self {
        Self::Medium
    }
}
