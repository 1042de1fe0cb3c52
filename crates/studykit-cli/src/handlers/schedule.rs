use super::{HandlerContext, create_csv};
use crate::args::ScheduleArgs;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ScheduleViewModel, SessionRow, StatusBadge,
};
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use studykit_engine::export::write_schedule;
use studykit_types::ScheduleParameters;

const START_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn handle(ctx: &HandlerContext, args: ScheduleArgs) -> Result<()> {
    let defaults = &ctx.config.schedule;
    let bounds = &ctx.config.bounds;

    let focus = args.focus.unwrap_or(defaults.focus_minutes);
    let break_minutes = args.break_minutes.unwrap_or(defaults.break_minutes);
    let hours = args.hours.unwrap_or(defaults.total_hours);

    bounds.focus.check("--focus", focus)?;
    bounds.break_minutes.check("--break", break_minutes)?;
    bounds.hours.check("--hours", hours)?;

    let total_minutes = hours
        .checked_mul(60)
        .context("--hours is too large")?;
    let anchor = match args.start.as_deref() {
        Some(raw) => parse_start(raw, Local::now().naive_local())?,
        None => current_minute()?,
    };

    let params = ScheduleParameters::new(focus, break_minutes, total_minutes, anchor);
    let entries = studykit_engine::generate(&params)?;
    tracing::debug!(sessions = entries.len(), %anchor, "generated schedule");

    let exported_to = match &args.output {
        Some(path) => {
            let writer = create_csv(path, args.bom)?;
            write_schedule(writer, &entries)?;
            tracing::info!(path = %path.display(), "wrote schedule");
            Some(path.display().to_string())
        }
        None => None,
    };

    let content = ScheduleViewModel {
        focus_minutes: focus,
        break_minutes,
        total_minutes,
        start: anchor.format(START_DISPLAY_FORMAT).to_string(),
        sessions: entries.iter().map(SessionRow::from).collect(),
        exported_to,
    };

    let mut result = CommandResultViewModel::new(content);
    if entries.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("No session fits in the time budget"))
            .with_suggestion(
                Guidance::new("Raise the total time or shorten the sessions")
                    .with_command(format!("studykit schedule --hours {}", hours + 1)),
            );
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} session(s) planned",
            entries.len()
        )));
        if args.output.is_none() {
            result = result.with_suggestion(
                Guidance::new("Save the plan for a spreadsheet")
                    .with_command("studykit schedule --output plan.csv --bom"),
            );
        }
    }
    ctx.render(result)
}

/// Accepts `HH:MM` (on the date of `now`) or `YYYY-MM-DDTHH:MM`.
fn parse_start(raw: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M") {
        return Ok(now.date().and_time(time));
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Ok(datetime);
    }
    bail!("Invalid --start '{}': expected HH:MM or YYYY-MM-DDTHH:MM", raw)
}

fn current_minute() -> Result<NaiveDateTime> {
    Local::now()
        .naive_local()
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .context("Failed to read the local clock")
}
