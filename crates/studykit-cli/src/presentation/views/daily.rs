use std::fmt;

use crate::presentation::view_models::ChecklistViewModel;

pub struct ChecklistView<'a> {
    data: &'a ChecklistViewModel,
}

impl<'a> ChecklistView<'a> {
    pub fn new(data: &'a ChecklistViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ChecklistView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.data.items {
            let mark = if item.done { "x" } else { " " };
            writeln!(f, "  [{}] {}. {}", mark, item.number, item.label)?;
        }
        writeln!(f)?;
        writeln!(f, "{}/{} done", self.data.completed, self.data.total)
    }
}
