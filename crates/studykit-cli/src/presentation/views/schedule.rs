use std::fmt;

use crate::presentation::view_models::ScheduleViewModel;

pub struct ScheduleView<'a> {
    data: &'a ScheduleViewModel,
}

impl<'a> ScheduleView<'a> {
    pub fn new(data: &'a ScheduleViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ScheduleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(
            f,
            "{} min focus / {} min break, {} min budget from {}",
            data.focus_minutes, data.break_minutes, data.total_minutes, data.start
        )?;

        if !data.sessions.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:<9} {:<13} {}", "SESSION", "FOCUS", "BREAK")?;
            for row in &data.sessions {
                writeln!(
                    f,
                    "{:<9} {:<13} {}",
                    row.session,
                    format!("{}-{}", row.focus_start, row.focus_end),
                    row.break_label
                )?;
            }
        }

        if let Some(path) = &data.exported_to {
            writeln!(f)?;
            writeln!(f, "Saved to {}", path)?;
        }
        Ok(())
    }
}
