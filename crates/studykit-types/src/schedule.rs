use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Inputs for one schedule generation.
///
/// `anchor` is always caller-supplied; nothing in the engine reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleParameters {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub total_budget_minutes: u32,
    pub anchor: NaiveDateTime,
}

impl ScheduleParameters {
    pub fn new(
        focus_minutes: u32,
        break_minutes: u32,
        total_budget_minutes: u32,
        anchor: NaiveDateTime,
    ) -> Self {
        Self {
            focus_minutes,
            break_minutes,
            total_budget_minutes,
            anchor,
        }
    }

    /// Length of one focus + break unit in minutes.
    pub fn cycle_minutes(&self) -> u64 {
        u64::from(self.focus_minutes) + u64::from(self.break_minutes)
    }
}

/// One focus interval of a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// 1-based position in the schedule
    pub index: usize,
    pub focus_start: NaiveDateTime,
    pub focus_end: NaiveDateTime,
    pub break_label: String,
}

impl ScheduleEntry {
    pub fn focus_duration(&self) -> chrono::Duration {
        self.focus_end - self.focus_start
    }
}
