use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct FortuneViewModel {
    pub fortune: String,
}

#[derive(Debug, Serialize)]
pub struct ChecklistItem {
    pub number: usize,
    pub label: String,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct ChecklistViewModel {
    pub items: Vec<ChecklistItem>,
    pub completed: usize,
    pub total: usize,
}

impl ChecklistViewModel {
    pub fn all_done(&self) -> bool {
        self.completed == self.total
    }
}

impl fmt::Display for FortuneViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "🔮 {}", self.fortune)
    }
}

impl fmt::Display for ChecklistViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", crate::presentation::views::daily::ChecklistView::new(self))
    }
}
