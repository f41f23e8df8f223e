//! The canonical case library.
//!
//! Classic test cases for comparative ethics: adultery, pork (modern and
//! historical), a protective lie, charity, mass surveillance, and the
//! two trolley problems. Each is a fully populated context; the numbers
//! encode the stock intuitions about each case rather than any
//! calibrated measurement.

use std::collections::BTreeMap;

use ethos::{
    Agent, AgentType, Consequences, CooperativeOutcome, DutyAssessment, DutyType, ImpactSubject,
    MoralContext, RelationshipImpact, RelationshipType, TimeHorizon, TrustImpact,
    UniversalizedResult, Vice, Virtue,
};

/// The adultery case, kept separate from [`library`] because the demo
/// round-trips it through the context store.
pub fn adultery() -> MoralContext {
    MoralContext {
        action_description: "Engaged in sexual relations with someone else's spouse.".to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: true,
            contradiction_in_will: true,
        },
        consequences: Consequences {
            net_flourishing: -15,
            net_utility: -20,
            power_expression: -5,
            time_horizon: TimeHorizon::Long,
            individual_impact: BTreeMap::from([
                (ImpactSubject::BetrayedSpouse, -50),
                (ImpactSubject::Community, -30),
                (ImpactSubject::Child, -40),
                // short-term pleasure but long-term harm
                (ImpactSubject::Agent, 10),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: false,
            societal_trust_change: -3,
        },
        trust_impact: TrustImpact {
            breach: true,
            relationships_affected: vec![
                RelationshipType::SpouseSpouse,
                RelationshipType::FamilyMember,
                RelationshipType::CitizenState,
            ],
            impact_type: vec![
                RelationshipImpact::BreachesTrust,
                RelationshipImpact::Weakens,
            ],
        },
        agent: Agent {
            agent_type: AgentType::Stranger,
            virtues: vec![],
            vices: vec![Vice::Dishonesty, Vice::Betrayal, Vice::Indulgence],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![],
            duties_violated: vec![DutyType::Fidelity, DutyType::NonMaleficence],
        },
    }
}

/// The remaining cases, in presentation order.
pub fn library() -> Vec<(&'static str, MoralContext)> {
    vec![
        ("pork_modern", pork_modern()),
        ("pork_premodern", pork_premodern()),
        ("tell_a_lie", tell_a_lie()),
        ("charitable_donation", charitable_donation()),
        ("mass_surveillance", mass_surveillance()),
        ("trolley_switch", trolley_switch()),
        ("trolley_fat_man", trolley_fat_man()),
        ("suicide", suicide()),
    ]
}

fn pork_modern() -> MoralContext {
    MoralContext {
        action_description: "Ate properly cooked pork from a regulated source.".to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: false,
            contradiction_in_will: false,
        },
        consequences: Consequences {
            net_flourishing: 8,
            net_utility: 10,
            // exercising personal choice
            power_expression: 2,
            time_horizon: TimeHorizon::Medium,
            individual_impact: BTreeMap::from([
                (ImpactSubject::Eater, 15),
                (ImpactSubject::Farmer, 5),
                (ImpactSubject::Society, 0),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: true,
            societal_trust_change: 0,
        },
        agent: Agent {
            agent_type: AgentType::Stranger,
            virtues: vec![Virtue::Temperance],
            vices: vec![],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![DutyType::SelfImprovement],
            duties_violated: vec![],
        },
        ..Default::default()
    }
}

fn pork_premodern() -> MoralContext {
    MoralContext {
        action_description: "Ate undercooked pork from an unregulated source in a context with \
                             known parasites."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: false,
            contradiction_in_will: false,
        },
        consequences: Consequences {
            net_flourishing: -12,
            net_utility: -15,
            power_expression: -3,
            time_horizon: TimeHorizon::Medium,
            individual_impact: BTreeMap::from([
                (ImpactSubject::Eater, -20),
                (ImpactSubject::FamilyMember, -10),
                (ImpactSubject::Community, -5),
            ]),
        },
        // the social contract itself isn't threatened
        cooperative_outcome: CooperativeOutcome {
            stable: true,
            societal_trust_change: 0,
        },
        agent: Agent {
            agent_type: AgentType::Stranger,
            virtues: vec![],
            vices: vec![Vice::Foolishness],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![],
            duties_violated: vec![DutyType::SelfImprovement],
        },
        ..Default::default()
    }
}

fn tell_a_lie() -> MoralContext {
    MoralContext {
        action_description: "Lied to an inquiring official about a friend's whereabouts to \
                             protect them from potential harm."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: true,
            contradiction_in_will: true,
        },
        consequences: Consequences {
            net_flourishing: 10,
            net_utility: 15,
            // deception isn't typically power-affirming
            power_expression: -2,
            individual_impact: BTreeMap::from([
                (ImpactSubject::Friend, 100),
                (ImpactSubject::Society, -15),
                (ImpactSubject::Official, -5),
                (ImpactSubject::Agent, 5),
            ]),
            ..Default::default()
        },
        cooperative_outcome: CooperativeOutcome {
            stable: true,
            societal_trust_change: -1,
        },
        trust_impact: TrustImpact {
            breach: true,
            relationships_affected: vec![
                RelationshipType::CitizenState,
                RelationshipType::FriendFriend,
                RelationshipType::CitizenState,
            ],
            impact_type: vec![
                // to society and the official
                RelationshipImpact::BreachesTrust,
                // to the friend
                RelationshipImpact::Strengthens,
                RelationshipImpact::Nurtures,
            ],
        },
        agent: Agent {
            agent_type: AgentType::Friend,
            virtues: vec![Virtue::Loyalty, Virtue::Compassion, Virtue::Courage],
            vices: vec![Vice::Dishonesty],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![DutyType::Beneficence, DutyType::Fidelity],
            duties_violated: vec![DutyType::Fidelity, DutyType::NonMaleficence],
        },
    }
}

fn charitable_donation() -> MoralContext {
    MoralContext {
        action_description: "Donated a significant portion of income to effective charities \
                             helping the global poor."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: false,
            contradiction_in_will: false,
        },
        consequences: Consequences {
            net_flourishing: 25,
            net_utility: 30,
            power_expression: 3,
            time_horizon: TimeHorizon::Long,
            individual_impact: BTreeMap::from([
                (ImpactSubject::Recipient, 80),
                (ImpactSubject::Donor, -10),
                (ImpactSubject::Society, 5),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: true,
            societal_trust_change: 2,
        },
        trust_impact: TrustImpact {
            breach: false,
            relationships_affected: vec![
                RelationshipType::HumanHuman,
                RelationshipType::CaregiverReceiver,
            ],
            impact_type: vec![
                RelationshipImpact::BuildsTrust,
                RelationshipImpact::Nurtures,
                RelationshipImpact::Strengthens,
            ],
        },
        agent: Agent {
            // helping distant others
            agent_type: AgentType::Stranger,
            virtues: vec![Virtue::Compassion, Virtue::Justice, Virtue::Temperance],
            vices: vec![],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![
                DutyType::Beneficence,
                DutyType::Justice,
                DutyType::Gratitude,
            ],
            duties_violated: vec![],
        },
    }
}

fn mass_surveillance() -> MoralContext {
    MoralContext {
        action_description: "Implemented mass surveillance program collecting data on all \
                             citizens without individualized warrants, justified by national \
                             security claims."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: true,
            contradiction_in_will: true,
        },
        consequences: Consequences {
            // chilling effect on free expression
            net_flourishing: -15,
            // some security benefit against massive privacy costs
            net_utility: -5,
            power_expression: 8,
            time_horizon: TimeHorizon::Long,
            individual_impact: BTreeMap::from([
                (ImpactSubject::Citizens, -30),
                (ImpactSubject::Government, 10),
                (ImpactSubject::Dissident, -50),
                (ImpactSubject::Criminal, -5),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: false,
            societal_trust_change: -20,
        },
        trust_impact: TrustImpact {
            breach: true,
            relationships_affected: vec![
                RelationshipType::CitizenState,
                RelationshipType::CommunityMember,
                RelationshipType::HumanHuman,
            ],
            impact_type: vec![
                RelationshipImpact::BreachesTrust,
                RelationshipImpact::Exploits,
                RelationshipImpact::Weakens,
            ],
        },
        agent: Agent {
            agent_type: AgentType::StateOfficial,
            // claimed intention to protect
            virtues: vec![Virtue::Justice],
            vices: vec![Vice::Dishonesty, Vice::Unfairness, Vice::Cruelty],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![DutyType::Beneficence, DutyType::Justice],
            duties_violated: vec![
                DutyType::Fidelity,
                DutyType::NonMaleficence,
                DutyType::Justice,
            ],
        },
    }
}

fn trolley_switch() -> MoralContext {
    MoralContext {
        action_description: "Pulled a lever to divert a runaway trolley onto a side track, \
                             resulting in one death but saving five people."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: false,
            contradiction_in_will: false,
        },
        consequences: Consequences {
            // 5 lives saved - 1 life lost
            net_flourishing: 4,
            net_utility: 4,
            power_expression: 3,
            time_horizon: TimeHorizon::Long,
            individual_impact: BTreeMap::from([
                (ImpactSubject::SavedPeople, 5),
                (ImpactSubject::PersonOnSideTrack, -1),
                (ImpactSubject::Agent, -2),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: true,
            societal_trust_change: 0,
        },
        agent: Agent {
            agent_type: AgentType::Stranger,
            virtues: vec![Virtue::Courage, Virtue::Justice],
            vices: vec![],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![DutyType::Beneficence, DutyType::Justice],
            duties_violated: vec![DutyType::NonMaleficence],
        },
        ..Default::default()
    }
}

fn trolley_fat_man() -> MoralContext {
    MoralContext {
        action_description: "Pushed a large person off a bridge to stop a runaway trolley, \
                             resulting in their death but saving five people."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: true,
            contradiction_in_will: true,
        },
        consequences: Consequences {
            // same arithmetic as the switch variant
            net_flourishing: 4,
            net_utility: 4,
            // using someone as mere means
            power_expression: -2,
            time_horizon: TimeHorizon::Long,
            individual_impact: BTreeMap::from([
                (ImpactSubject::SavedPeople, 5),
                (ImpactSubject::PushedPerson, -1),
                (ImpactSubject::Agent, -5),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: false,
            societal_trust_change: -3,
        },
        trust_impact: TrustImpact {
            breach: true,
            relationships_affected: vec![RelationshipType::CommunityMember],
            impact_type: vec![
                RelationshipImpact::BreachesTrust,
                RelationshipImpact::Weakens,
            ],
        },
        agent: Agent {
            agent_type: AgentType::Stranger,
            virtues: vec![Virtue::Justice],
            vices: vec![Vice::Cruelty],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![DutyType::Beneficence],
            duties_violated: vec![DutyType::NonMaleficence, DutyType::Justice],
        },
    }
}

fn suicide() -> MoralContext {
    MoralContext {
        action_description: "A person intentionally ends their own life to escape unbearable \
                             suffering."
            .to_string(),
        universalized_result: UniversalizedResult {
            self_collapse: true,
            contradiction_in_will: true,
        },
        consequences: Consequences {
            net_flourishing: -20,
            net_utility: -15,
            power_expression: -8,
            time_horizon: TimeHorizon::Long,
            individual_impact: BTreeMap::from([
                (ImpactSubject::Agent, -100),
                (ImpactSubject::FamilyMember, -40),
                (ImpactSubject::Friend, -30),
                (ImpactSubject::Community, -10),
                (ImpactSubject::Society, -5),
            ]),
        },
        cooperative_outcome: CooperativeOutcome {
            stable: false,
            societal_trust_change: -2,
        },
        trust_impact: TrustImpact {
            breach: true,
            relationships_affected: vec![
                RelationshipType::FamilyMember,
                RelationshipType::FriendFriend,
                RelationshipType::CommunityMember,
                RelationshipType::HumanHuman,
            ],
            impact_type: vec![
                RelationshipImpact::BreachesTrust,
                RelationshipImpact::Weakens,
                RelationshipImpact::Exploits,
            ],
        },
        agent: Agent {
            agent_type: AgentType::Stranger,
            // some see courage in facing death; others flight from life
            virtues: vec![Virtue::Courage],
            vices: vec![Vice::Cowardice, Vice::Foolishness],
        },
        duty_assessment: DutyAssessment {
            duties_upheld: vec![],
            duties_violated: vec![
                DutyType::NonMaleficence,
                DutyType::Beneficence,
                DutyType::Fidelity,
                DutyType::Gratitude,
                DutyType::SelfImprovement,
            ],
        },
    }
}
