use serde::Serialize;
use std::fmt;
use studykit_types::Granularity;

#[derive(Debug, Serialize)]
pub struct RowListViewModel {
    pub key_column: String,
    pub rows: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListViewModel {
    pub granularity: Granularity,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DistributionEntry {
    pub rank: usize,
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct DistributionViewModel {
    pub key: String,
    pub granularity: Granularity,
    pub normalized: bool,
    /// Row total before any normalization.
    pub total: f64,
    pub entries: Vec<DistributionEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<String>,
    /// Terminal columns available for the bar chart.
    #[serde(skip)]
    pub width: usize,
}

impl DistributionViewModel {
    pub fn is_zero(&self) -> bool {
        self.total == 0.0
    }
}

#[derive(Debug, Serialize)]
pub struct ExportResultViewModel {
    pub key: String,
    pub path: String,
    pub categories: usize,
    pub normalized: bool,
}

impl fmt::Display for RowListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} ({} rows)", self.key_column, self.rows.len())?;
        for row in &self.rows {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}

impl fmt::Display for CategoryListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} categories ({})",
            self.categories.len(),
            self.granularity
        )?;
        for category in &self.categories {
            writeln!(f, "  {}", category)?;
        }
        Ok(())
    }
}

impl fmt::Display for DistributionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            crate::presentation::views::distribution::DistributionView::new(self)
        )
    }
}

impl fmt::Display for ExportResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} categories for {} to {}{}",
            self.categories,
            self.key,
            self.path,
            if self.normalized { " (shares)" } else { "" }
        )
    }
}
