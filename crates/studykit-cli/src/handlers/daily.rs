use super::HandlerContext;
use crate::presentation::view_models::{
    ChecklistItem, ChecklistViewModel, CommandResultViewModel, FortuneViewModel, StatusBadge,
};
use anyhow::{Context, Result, bail};
use rand::seq::SliceRandom;
use studykit_types::daily::{CHECKLIST, FORTUNES};

pub fn handle_fortune(ctx: &HandlerContext) -> Result<()> {
    let fortune = FORTUNES
        .choose(&mut rand::thread_rng())
        .context("No fortunes available")?;

    ctx.render(CommandResultViewModel::new(FortuneViewModel {
        fortune: fortune.to_string(),
    }))
}

pub fn handle_checklist(ctx: &HandlerContext, done: &[u8]) -> Result<()> {
    for &number in done {
        if number == 0 || usize::from(number) > CHECKLIST.len() {
            bail!(
                "Checklist item {} does not exist (choose 1-{})",
                number,
                CHECKLIST.len()
            );
        }
    }

    let items: Vec<ChecklistItem> = CHECKLIST
        .iter()
        .enumerate()
        .map(|(i, label)| ChecklistItem {
            number: i + 1,
            label: label.to_string(),
            done: done.iter().any(|&n| usize::from(n) == i + 1),
        })
        .collect();
    let content = ChecklistViewModel {
        completed: items.iter().filter(|item| item.done).count(),
        total: items.len(),
        items,
    };

    let badge = if content.all_done() {
        StatusBadge::success("All done! Great work today.")
    } else {
        StatusBadge::info(format!("{}/{} done", content.completed, content.total))
    };
    ctx.render(CommandResultViewModel::new(content).with_badge(badge))
}
