//! Static study-strategy catalog, one record per personality type.
//!
//! Records are laid out in [`PersonalityType::ALL`] order and looked up by
//! discriminant, so a type can never resolve to a second, shadowing record.
//! [`validate_catalog`] checks that layout.

use crate::{Error, PersonalityType, Result};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub code: PersonalityType,
    pub name: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub methods: &'static [&'static str],
    pub tools: &'static [&'static str],
}

static CATALOG: [TypeProfile; 16] = [
    TypeProfile {
        code: PersonalityType::Istj,
        name: "The Upright Manager",
        strengths: &[
            "Systematic and good at planning",
            "Keeps rules and deadlines",
            "Strong on details",
        ],
        weaknesses: &[
            "Slow to adapt to change and improvised tasks",
            "Perfectionism can waste time",
            "Collaboration can feel dry",
        ],
        methods: &[
            "Hold a weekly 'strategy meeting' to draft the study roadmap as a checklist",
            "Use a fixed summary, worked example, wrong-answer review routine per subject",
            "Time-box subject slots (for example 40 minutes of focus, 10 minutes of rest)",
        ],
        tools: &["Notion databases", "TickTick/Google Tasks", "Anki flashcards"],
    },
    TypeProfile {
        code: PersonalityType::Isfj,
        name: "The Guardian",
        strengths: &[
            "Diligent with a strong sense of responsibility",
            "Consistent over the long run",
            "Motivated by helping others",
        ],
        weaknesses: &[
            "Struggles to ask for help",
            "Gives away own study time to others",
            "Afraid of making mistakes",
        ],
        methods: &[
            "Peer tutoring: explain to each other to lock in memory",
            "Split the error log into 'why' and 'next time' columns",
            "Spend the last 10 minutes of the day on a self-praise log",
        ],
        tools: &["GoodNotes/OneNote", "Forest (focus)", "Study With Me videos"],
    },
    TypeProfile {
        code: PersonalityType::Infj,
        name: "The Advocate",
        strengths: &[
            "Purpose-driven, looks for meaning",
            "Deep focus and integrated understanding",
            "Strong at writing and organizing",
        ],
        weaknesses: &[
            "Over-idealizing delays the start",
            "Mood swings affect productivity",
            "Perfectionism",
        ],
        methods: &[
            "Write the 'why' of studying as a one-sentence mission at the top of every session",
            "Feynman technique: write it down as if explaining to a ten-year-old",
            "Pomodoro 50/10 for deep work, then a five-minute walk",
        ],
        tools: &[
            "Obsidian (knowledge graph)",
            "Notability",
            "Calm/Breathwrk (emotional regulation)",
        ],
    },
    TypeProfile {
        code: PersonalityType::Intj,
        name: "The Strategist",
        strengths: &[
            "Long-term planning",
            "Grasps patterns and principles",
            "Learns independently",
        ],
        weaknesses: &[
            "Low preference for collaboration",
            "Indifferent to subjects outside their interest",
            "Gets lost in theory",
        ],
        methods: &[
            "Plan backwards from the exam: goal, milestone, daily sprint",
            "Build a 'core list' of the 20% of concepts that cover 80% of problems",
            "Twice a week, run a metacognition check and drill weak subjects with exam sets",
        ],
        tools: &["Notion with Gantt", "Anki spaced repetition", "Past papers"],
    },
    TypeProfile {
        code: PersonalityType::Istp,
        name: "The Virtuoso",
        strengths: &[
            "Problem solving",
            "Prefers learning by experiment and by hand",
            "Stays calm",
        ],
        weaknesses: &[
            "Routines get boring",
            "Postpones long-term plans",
            "Last-minute rush before deadlines",
        ],
        methods: &[
            "Learn through quest-style checkpoints (small missions with rewards)",
            "Solve problems first and fill in concepts top-down",
            "Short 30/5 sprints to keep boredom away",
        ],
        tools: &["Khan Academy/YouTube experiments", "Quizlet", "Timer widget"],
    },
    TypeProfile {
        code: PersonalityType::Isfp,
        name: "The Curious Artist",
        strengths: &[
            "Uses senses and intuition",
            "Flexible and considerate",
            "Creative results when absorbed",
        ],
        weaknesses: &[
            "Hard to sustain a plan",
            "Sensitive to criticism",
            "Weak deadline management",
        ],
        methods: &[
            "Color-coded notes and stickers to strengthen visual memory",
            "Design the environment (playlist, scent, lighting) for immersion",
            "A gentle difficulty ladder: easy, medium, hard",
        ],
        tools: &[
            "GoodNotes stickers",
            "Lo-fi/piano background music",
            "Habitica (gamification)",
        ],
    },
    TypeProfile {
        code: PersonalityType::Infp,
        name: "The Passionate Mediator",
        strengths: &[
            "Boundless drive when connected to values",
            "Writing and storytelling",
            "Empathy",
        ],
        weaknesses: &[
            "Derails without interest",
            "Weak on practical deadlines",
            "Excessive self-criticism",
        ],
        methods: &[
            "Reinterpret each subject as 'my story' with characters and metaphors",
            "Two-minute rule to start, plus a first ten minutes of 'tidy up only' for momentum",
            "Give a small presentation once a week to satisfy the urge to express",
        ],
        tools: &["Obsidian templates", "Roam-like outliner", "Toggl (time log)"],
    },
    TypeProfile {
        code: PersonalityType::Intp,
        name: "The Logician",
        strengths: &[
            "Excellent analysis and reasoning",
            "Original ideas",
            "Connects concepts",
        ],
        weaknesses: &[
            "Weak at finishing",
            "Dislikes monotonous repetition",
            "Lacks practical sense",
        ],
        methods: &[
            "Fix a linked-note format: concept, definition, example, counterexample",
            "Start problem sets in timed mode to get the engine running",
            "Write a 'bug report' after studying that records confusing points",
        ],
        tools: &["Notion math/LaTeX", "Desmos/GeoGebra", "Code Runner (Python)"],
    },
    TypeProfile {
        code: PersonalityType::Estp,
        name: "The Entrepreneur",
        strengths: &[
            "Hands-on and acts immediately",
            "Handles crises",
            "Energizes the team",
        ],
        weaknesses: &[
            "Long routines feel dull",
            "Neglects detailed organization",
            "Impulsive choices",
        ],
        methods: &[
            "Lead the study group to take on responsibility",
            "Use mock exams and speedruns to tap the competitive streak",
            "Carry key summary cards for portability",
        ],
        tools: &["Kahoot quizzes", "Anki mobile", "Focus To-Do (pomodoro)"],
    },
    TypeProfile {
        code: PersonalityType::Esfp,
        name: "The Free Spirit",
        strengths: &[
            "Sociable mood-maker",
            "Sensory learning",
            "Improvised ideas",
        ],
        weaknesses: &[
            "Scattered focus",
            "Hard to stick to a plan",
            "Procrastinates on assignments",
        ],
        methods: &[
            "Short sprints (25/5) with a small reward after each session",
            "Check in with friends using photo or emoji proof",
            "Study by explaining out loud (active recall)",
        ],
        tools: &["Studygram/check-in groups", "Quizlet scan", "Standing desk timer"],
    },
    TypeProfile {
        code: PersonalityType::Enfp,
        name: "The Spirited Campaigner",
        strengths: &[
            "Overflowing with ideas",
            "Quick understanding",
            "Motivated by people",
        ],
        weaknesses: &[
            "Easily distracted by new things",
            "Hard to keep consistent",
            "Deadline rush",
        ],
        methods: &[
            "Top-three rule: only today's top three priorities are mandatory",
            "Collect ideas in an inbox and sort them all at once at night",
            "Five-minute daily stand-up with an accountability partner",
        ],
        tools: &[
            "Notion capture widget",
            "Google Calendar",
            "Focusmate (accountability partner)",
        ],
    },
    TypeProfile {
        code: PersonalityType::Entp,
        name: "The Debater",
        strengths: &[
            "Argumentative thinking and improvised debate",
            "Switches patterns easily",
            "Redefines problems",
        ],
        weaknesses: &[
            "Prefers starting over finishing",
            "Lacks regular practice",
            "Vulnerable to boredom",
        ],
        methods: &[
            "Timed three-step loop: argument, counterexample, wrap-up",
            "Lead a study debate twice a week (learn by explaining)",
            "Write variations of past exam questions",
        ],
        tools: &[
            "Debate timer",
            "Jamboard/whiteboard",
            "Chat assistant for rebuttal practice",
        ],
    },
    TypeProfile {
        code: PersonalityType::Estj,
        name: "The Executive",
        strengths: &[
            "Organizing and managing",
            "Goal and results oriented",
            "Responsible",
        ],
        weaknesses: &[
            "Lacks flexibility",
            "Neglects emotional care",
            "Over-controls",
        ],
        methods: &[
            "Visualize progress on a KPI dashboard (mock scores, coverage)",
            "Document an SOP for each major subject and always follow the same steps",
            "Weekly 'risk review' to manage weak spots early",
        ],
        tools: &[
            "Google Sheets dashboard",
            "TickTick recurring tasks",
            "Scanner Pro (collect wrong answers)",
        ],
    },
    TypeProfile {
        code: PersonalityType::Esfj,
        name: "The Consul",
        strengths: &[
            "Cooperative, builds relationships",
            "Diligent and organized",
            "Motivated by contributing to the team",
        ],
        weaknesses: &[
            "Sacrifices own schedule to others' expectations",
            "Avoids conflict",
            "Hesitates to try new methods",
        ],
        methods: &[
            "Study buddy: share schedules and trade praise stickers",
            "Weekly wellbeing check covering meals, sleep and exercise",
            "Share a weekly report with parents or teachers",
        ],
        tools: &["Shared calendar", "Habit tracker", "Canva reports"],
    },
    TypeProfile {
        code: PersonalityType::Enfj,
        name: "The Protagonist",
        strengths: &[
            "Coaching and leadership",
            "Empathetic communication",
            "Team-based growth",
        ],
        weaknesses: &[
            "Puts own work last",
            "Sensitive to criticism",
            "Takes on too much responsibility",
        ],
        methods: &[
            "Lead team projects and attach personal learning goals to them",
            "Keep a praise/feedback log at a 3:1 positive-to-improvement ratio",
            "Do presentation-style assignments often (limit to three slides)",
        ],
        tools: &["Slides/Canva", "Trello boards", "Focusmate co-working"],
    },
    TypeProfile {
        code: PersonalityType::Entj,
        name: "The Commander",
        strengths: &[
            "Decisive and driven",
            "Designs systems",
            "Strongly competitive",
        ],
        weaknesses: &[
            "Poor pacing",
            "Overlooks collaborators' feelings",
            "Risk of overload",
        ],
        methods: &[
            "Set quarterly OKRs and check key results weekly",
            "Limit work in progress on a daily sprint board (three tasks at most)",
            "Automate the mock exam and review cycle",
        ],
        tools: &[
            "Jira/Trello",
            "Notion OKR",
            "Auto-graded past papers (where available)",
        ],
    },
];

/// The full catalog in canonical order.
pub fn catalog() -> &'static [TypeProfile] {
    &CATALOG
}

pub fn profile(code: PersonalityType) -> &'static TypeProfile {
    &CATALOG[code.index()]
}

/// Check that every type has exactly one complete record at its own index.
pub fn validate_catalog() -> Result<()> {
    validate_records(&CATALOG)
}

fn validate_records(records: &[TypeProfile]) -> Result<()> {
    if records.len() != PersonalityType::ALL.len() {
        return Err(Error::InvalidCatalog(format!(
            "expected {} records, found {}",
            PersonalityType::ALL.len(),
            records.len()
        )));
    }

    let mut seen = HashSet::new();
    for (i, record) in records.iter().enumerate() {
        if !seen.insert(record.code) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate record for {}",
                record.code
            )));
        }
        if record.code.index() != i {
            return Err(Error::InvalidCatalog(format!(
                "{} stored at position {} instead of {}",
                record.code,
                i,
                record.code.index()
            )));
        }

        let sections = [
            ("name", record.name.is_empty()),
            ("strengths", record.strengths.is_empty()),
            ("weaknesses", record.weaknesses.is_empty()),
            ("methods", record.methods.is_empty()),
            ("tools", record.tools.is_empty()),
        ];
        if let Some((section, _)) = sections.iter().find(|(_, empty)| *empty) {
            return Err(Error::InvalidCatalog(format!(
                "{} has an empty {} section",
                record.code, section
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn test_profile_lookup_returns_matching_code() {
        for t in PersonalityType::ALL {
            assert_eq!(profile(t).code, t);
        }
        assert_eq!(profile(PersonalityType::Intj).name, "The Strategist");
    }

    #[test]
    fn test_every_profile_has_three_strengths_and_weaknesses() {
        for record in catalog() {
            assert_eq!(record.strengths.len(), 3, "{}", record.code);
            assert_eq!(record.weaknesses.len(), 3, "{}", record.code);
            assert_eq!(record.methods.len(), 3, "{}", record.code);
        }
    }

    #[test]
    fn test_duplicate_record_is_rejected() {
        let mut records = CATALOG.to_vec();
        records[1] = records[0];
        let err = validate_records(&records).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCatalog("duplicate record for ISTJ".to_string())
        );
    }

    #[test]
    fn test_misplaced_record_is_rejected() {
        let mut records = CATALOG.to_vec();
        records.swap(0, 1);
        let err = validate_records(&records).unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(msg) if msg.contains("ISFJ stored at position 0")));
    }

    #[test]
    fn test_empty_section_is_rejected() {
        let mut records = CATALOG.to_vec();
        records[3].tools = &[];
        let err = validate_records(&records).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCatalog("INTJ has an empty tools section".to_string())
        );
    }

    #[test]
    fn test_truncated_catalog_is_rejected() {
        let err = validate_records(&CATALOG[..15]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCatalog("expected 16 records, found 15".to_string())
        );
    }
}
