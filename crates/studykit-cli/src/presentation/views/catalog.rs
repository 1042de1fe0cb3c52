use std::fmt;

use crate::presentation::view_models::{ProfileViewModel, TypeListViewModel};

// --------------------------------------------------------
// Type List View
// --------------------------------------------------------

pub struct TypeListView<'a> {
    data: &'a TypeListViewModel,
}

impl<'a> TypeListView<'a> {
    pub fn new(data: &'a TypeListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TypeListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.types {
            writeln!(f, "  {}  {}", entry.code, entry.name)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Profile View
// --------------------------------------------------------

pub struct ProfileView<'a> {
    data: &'a ProfileViewModel,
}

impl<'a> ProfileView<'a> {
    pub fn new(data: &'a ProfileViewModel) -> Self {
        Self { data }
    }

    fn section(f: &mut fmt::Formatter, title: &str, marker: &str, items: &[String]) -> fmt::Result {
        writeln!(f, "{}", title)?;
        for item in items {
            writeln!(f, "  {} {}", marker, item)?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for ProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{} · {}", data.code, data.name)?;
        writeln!(f)?;

        Self::section(f, "Strengths", "✓", &data.strengths)?;
        Self::section(f, "Watch out for", "!", &data.weaknesses)?;
        Self::section(f, "Study methods", "•", &data.methods)?;

        writeln!(f, "Tools")?;
        writeln!(f, "  {}", data.tools.join(", "))?;

        if !data.tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "Bonus tips")?;
            for tip in &data.tips {
                writeln!(f, "  [{}] {}", tip.letter, tip.text)?;
            }
        }
        Ok(())
    }
}
