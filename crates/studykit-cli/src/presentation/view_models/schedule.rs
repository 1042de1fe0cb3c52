use serde::Serialize;
use std::fmt;
use studykit_types::ScheduleEntry;

const CLOCK_FORMAT: &str = "%H:%M";

#[derive(Debug, Serialize)]
pub struct SessionRow {
    pub session: usize,
    pub focus_start: String,
    pub focus_end: String,
    #[serde(rename = "break")]
    pub break_label: String,
}

impl From<&ScheduleEntry> for SessionRow {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            session: entry.index,
            focus_start: entry.focus_start.format(CLOCK_FORMAT).to_string(),
            focus_end: entry.focus_end.format(CLOCK_FORMAT).to_string(),
            break_label: entry.break_label.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleViewModel {
    pub focus_minutes: u32,
    pub break_minutes: u32,
    pub total_minutes: u32,
    pub start: String,
    pub sessions: Vec<SessionRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<String>,
}

impl fmt::Display for ScheduleViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::presentation::views::schedule::ScheduleView::new(self))
    }
}
