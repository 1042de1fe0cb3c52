use crate::{Error, Result};
use chrono::Duration;
use studykit_types::{ScheduleEntry, ScheduleParameters};

/// Lay out back-to-back focus intervals from `params.anchor`.
///
/// Produces `floor(total / (focus + break))` entries; a budget shorter than
/// one cycle yields an empty schedule rather than an error.
pub fn generate(params: &ScheduleParameters) -> Result<Vec<ScheduleEntry>> {
    let cycle = params.cycle_minutes();
    if cycle == 0 {
        return Err(Error::InvalidParameters(
            "focus and break minutes are both zero".to_string(),
        ));
    }

    let cycle_count = u64::from(params.total_budget_minutes) / cycle;
    let focus = Duration::minutes(i64::from(params.focus_minutes));
    let break_label = format!("{} minutes", params.break_minutes);

    (0..cycle_count)
        .map(|i| {
            // i * cycle never exceeds the u32 budget, so the cast is lossless
            let offset = Duration::minutes((i * cycle) as i64);
            let focus_start = params
                .anchor
                .checked_add_signed(offset)
                .and_then(|start| start.checked_add_signed(focus).map(|end| (start, end)));

            let (focus_start, focus_end) = focus_start.ok_or_else(|| {
                Error::InvalidParameters("schedule runs past the supported date range".to_string())
            })?;

            Ok(ScheduleEntry {
                index: i as usize + 1,
                focus_start,
                focus_end,
                break_label: break_label.clone(),
            })
        })
        .collect()
}
