use crate::{PersonalityType, Preference};
use serde::Serialize;

/// A short study tip attached to one preference letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BonusTip {
    pub preference: Preference,
    pub text: &'static str,
}

static BONUS_TIPS: [BonusTip; 6] = [
    BonusTip {
        preference: Preference::Sensing,
        text: "Make heavy use of visual material: diagrams, charts and color.",
    },
    BonusTip {
        preference: Preference::Intuition,
        text: "Collect ideas in an inbox and sort them in a single pass.",
    },
    BonusTip {
        preference: Preference::Thinking,
        text: "Take notes as claim, counterexample, conclusion for clarity.",
    },
    BonusTip {
        preference: Preference::Feeling,
        text: "Keep a self-praise log to protect motivation and resilience.",
    },
    BonusTip {
        preference: Preference::Judging,
        text: "Pin the schedule down with time-boxing. Done beats perfect!",
    },
    BonusTip {
        preference: Preference::Perceiving,
        text: "Short sprints plus a reward loop keep studying fun!",
    },
];

pub fn bonus_tips() -> &'static [BonusTip] {
    &BONUS_TIPS
}

/// Tips for the perception, judgment and lifestyle letters of `code`.
///
/// The energy axis (E/I) has no tips, so every type gets exactly three.
pub fn tips_for(code: PersonalityType) -> Vec<&'static BonusTip> {
    code.preferences()
        .iter()
        .filter_map(|pref| BONUS_TIPS.iter().find(|tip| tip.preference == *pref))
        .collect()
}
