use std::fmt;

use crate::presentation::view_models::DistributionViewModel;

const BAR: char = '█';
const MIN_BAR_WIDTH: usize = 10;

pub struct DistributionView<'a> {
    data: &'a DistributionViewModel,
}

impl<'a> DistributionView<'a> {
    pub fn new(data: &'a DistributionViewModel) -> Self {
        Self { data }
    }

    fn format_value(&self, value: f64) -> String {
        if self.data.normalized {
            format!("{:.1}%", value * 100.0)
        } else {
            format!("{:.4}", value)
        }
    }

    fn label_width(&self) -> usize {
        self.data
            .entries
            .iter()
            .map(|e| e.category.chars().count())
            .max()
            .unwrap_or(0)
            .max("CATEGORY".len())
    }
}

impl<'a> fmt::Display for DistributionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let scale = if data.normalized { "share of total" } else { "absolute" };
        writeln!(f, "{} ({}, {})", data.key, data.granularity, scale)?;
        writeln!(f)?;

        let label_width = self.label_width();
        let values: Vec<String> = data.entries.iter().map(|e| self.format_value(e.value)).collect();
        let value_width = values.iter().map(String::len).max().unwrap_or(0);

        // label + space + bar + space + value
        let bar_width = data
            .width
            .saturating_sub(label_width + value_width + 2)
            .max(MIN_BAR_WIDTH);
        let max = data
            .entries
            .iter()
            .map(|e| e.value)
            .fold(0.0_f64, f64::max);

        for (entry, value) in data.entries.iter().zip(&values) {
            let len = if max > 0.0 && entry.value > 0.0 {
                ((entry.value / max) * bar_width as f64).round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat_n(BAR, len).collect();
            writeln!(
                f,
                "{:<lw$} {:<bw$} {:>vw$}",
                entry.category,
                bar,
                value,
                lw = label_width,
                bw = bar_width,
                vw = value_width
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{:>4}  {:<lw$}  VALUE", "RANK", "CATEGORY", lw = label_width)?;
        for (entry, value) in data.entries.iter().zip(&values) {
            writeln!(
                f,
                "{:>4}  {:<lw$}  {}",
                entry.rank,
                entry.category,
                value,
                lw = label_width
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Row total: {:.4}", data.total)?;

        if let Some(path) = &data.exported_to {
            writeln!(f, "Saved to {}", path)?;
        }
        Ok(())
    }
}
