use std::fmt;

use serde::{Deserialize, Serialize};

use super::zones::Zone;
use crate::survey::Dimension;

/// Stable identifier of an advice entry, e.g. `exhaustion.high_risk` or `overall.healthy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviceKey(pub String);

impl fmt::Display for AdviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Advice shown next to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub key: AdviceKey,
    pub headline: &'static str,
    pub text: &'static str,
}

pub fn advice_for(dimension: Dimension, zone: Zone) -> Advice {
    let (headline, text) = dimension_entry(dimension, zone);
    Advice {
        key: AdviceKey(format!("{}.{}", dimension.key(), zone.key())),
        headline,
        text,
    }
}

/// Advice attached to the total score.
pub fn overall_advice(zone: Zone) -> Advice {
    let (headline, text) = match zone {
        Zone::Healthy => (
            "Your overall burnout risk is low",
            "Your answers show no signs of burnout. Keep protecting the routines, boundaries, and relationships that help you recharge.",
        ),
        Zone::AtRisk => (
            "You show early signs of burnout",
            "Several answers point to rising strain. Look at the dimensions marked At Risk, talk to your manager about workload, and plan recovery time before it becomes urgent.",
        ),
        Zone::HighRisk => (
            "You are at high risk of burnout",
            "Your answers indicate serious strain. Please reach out to your occupational health service, your GP, or a counsellor, and discuss immediate workload relief with your manager.",
        ),
    };

    Advice {
        key: AdviceKey(format!("overall.{}", zone.key())),
        headline,
        text,
    }
}

fn dimension_entry(dimension: Dimension, zone: Zone) -> (&'static str, &'static str) {
    match (dimension, zone) {
        (Dimension::Exhaustion, Zone::Healthy) => (
            "Your energy levels look good",
            "You recover well after work. Keep your breaks, sleep rhythm, and exercise habits in place.",
        ),
        (Dimension::Exhaustion, Zone::AtRisk) => (
            "Your energy is under pressure",
            "You regularly feel drained. Schedule real breaks during the day, protect your evenings, and check whether your workload is sustainable.",
        ),
        (Dimension::Exhaustion, Zone::HighRisk) => (
            "You are severely exhausted",
            "Persistent physical and mental exhaustion is a core burnout signal. Prioritise rest, reduce your workload where possible, and seek professional support.",
        ),
        (Dimension::MentalDistance, Zone::Healthy) => (
            "You feel connected to your work",
            "You remain engaged and motivated. Keep investing in the parts of your job that give you meaning.",
        ),
        (Dimension::MentalDistance, Zone::AtRisk) => (
            "Your engagement is slipping",
            "You are starting to distance yourself from your work. Reflect on what used to motivate you and discuss meaningful tasks with your manager.",
        ),
        (Dimension::MentalDistance, Zone::HighRisk) => (
            "You feel strongly detached from your work",
            "Cynicism and aversion towards work are serious warning signs. Talk to someone you trust about how you feel and consider professional guidance.",
        ),
        (Dimension::Cognitive, Zone::Healthy) => (
            "Your focus is intact",
            "You concentrate and think clearly at work. Keep limiting interruptions and multitasking.",
        ),
        (Dimension::Cognitive, Zone::AtRisk) => (
            "Your concentration is suffering",
            "Trouble focusing and small mistakes are creeping in. Block focus time, reduce context switching, and write things down to relieve your memory.",
        ),
        (Dimension::Cognitive, Zone::HighRisk) => (
            "Your cognitive load is too high",
            "Frequent lapses in memory and attention suggest overload. Cut back on parallel work and discuss support options with your manager or a professional.",
        ),
        (Dimension::Emotional, Zone::Healthy) => (
            "Your emotions feel under control",
            "You handle emotional situations at work well. Keep making room for the things that help you unwind.",
        ),
        (Dimension::Emotional, Zone::AtRisk) => (
            "Your emotional reactions are intensifying",
            "You react more strongly than you would like. Notice your triggers, take a pause before responding, and make time for recovery.",
        ),
        (Dimension::Emotional, Zone::HighRisk) => (
            "Your emotional balance is under serious strain",
            "Feeling unable to control your emotions at work is a strong signal. Please seek support from a counsellor or your occupational health service.",
        ),
    }
}
