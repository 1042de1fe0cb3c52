use crate::{Error, Result};
use std::io::Read;
use studykit_types::DEFAULT_SEPARATOR;

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Text(Vec<String>),
    Numeric(Vec<f64>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(values) => values.len(),
            ColumnData::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }
}

/// Typed columns plus the name of the column that identifies rows.
///
/// The key column is looked up lazily; a table without it can be built and
/// inspected, but aggregation fails with [`Error::MissingKeyColumn`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    key_column: String,
    separator: char,
    columns: Vec<Column>,
    row_count: usize,
}

impl CategoryTable {
    pub fn new(key_column: impl Into<String>, columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(|c| c.data.len()).unwrap_or(0);
        if let Some(column) = columns.iter().find(|c| c.data.len() != row_count) {
            return Err(Error::InvalidData(format!(
                "column '{}' has {} values, expected {}",
                column.name,
                column.data.len(),
                row_count
            )));
        }

        Ok(Self {
            key_column: key_column.into(),
            separator: DEFAULT_SEPARATOR,
            columns,
            row_count,
        })
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn key_column(&self) -> &str {
        &self.key_column
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Row keys in file order. Numeric key columns are rendered with `Display`.
    pub fn row_keys(&self) -> Result<Vec<String>> {
        let column = self
            .columns
            .iter()
            .find(|c| c.name == self.key_column)
            .ok_or_else(|| Error::MissingKeyColumn(self.key_column.clone()))?;

        Ok(match &column.data {
            ColumnData::Text(values) => values.clone(),
            ColumnData::Numeric(values) => values.iter().map(f64::to_string).collect(),
        })
    }

    /// Numeric columns other than the key column, in file order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .filter(|c| c.name != self.key_column)
            .filter_map(|c| match &c.data {
                ColumnData::Numeric(values) => Some((c.name.as_str(), values.as_slice())),
                ColumnData::Text(_) => None,
            })
    }
}

/// Parse CSV with a header row into typed columns.
///
/// A column is numeric when it has at least one non-empty cell and every
/// non-empty cell parses as `f64`; empty cells in numeric columns read as 0.
/// Numeric cells must be finite and non-negative, otherwise the table is
/// rejected with [`Error::InvalidData`]. The key column always stays text.
pub fn read_table<R: Read>(reader: R, key_column: &str) -> Result<CategoryTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record?;
        for (i, column) in cells.iter_mut().enumerate() {
            column.push(record.get(i).unwrap_or("").to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| {
            if name == key_column {
                return Ok(Column::text(name, values));
            }
            match parse_numeric(&values) {
                Some(numbers) => {
                    check_values(&name, &numbers)?;
                    Ok(Column::numeric(name, numbers))
                }
                None => Ok(Column::text(name, values)),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    CategoryTable::new(key_column, columns)
}

fn check_values(column: &str, values: &[f64]) -> Result<()> {
    match values
        .iter()
        .position(|v| !v.is_finite() || *v < 0.0)
    {
        Some(row) => Err(Error::InvalidData(format!(
            "column '{}' row {}: {} is not a finite non-negative number",
            column,
            row + 1,
            values[row]
        ))),
        None => Ok(()),
    }
}

fn parse_numeric(values: &[String]) -> Option<Vec<f64>> {
    if values.iter().all(|v| v.is_empty()) {
        return None;
    }
    values
        .iter()
        .map(|v| {
            if v.is_empty() {
                Some(0.0)
            } else {
                v.parse::<f64>().ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Country,INTJ-A,INTJ-T,ENFP-A,Region
Korea,0.05,0.03,0.02,Asia
Chile,0.01, 0.02 ,,South America
";

    #[test]
    fn test_read_table_types_columns() {
        let table = read_table(SAMPLE.as_bytes(), "Country").unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row_keys().unwrap(), vec!["Korea", "Chile"]);

        let numeric: Vec<&str> = table.numeric_columns().map(|(name, _)| name).collect();
        assert_eq!(numeric, vec!["INTJ-A", "INTJ-T", "ENFP-A"]);

        let (_, enfp) = table.numeric_columns().nth(2).unwrap();
        assert_eq!(enfp, &[0.02, 0.0]);
    }

    #[test]
    fn test_key_column_stays_text_even_when_numeric() {
        let csv = "Year,INTJ-A\n2020,1\n2021,2\n";
        let table = read_table(csv.as_bytes(), "Year").unwrap();

        assert_eq!(table.row_keys().unwrap(), vec!["2020", "2021"]);
        assert_eq!(table.numeric_columns().count(), 1);
    }

    #[test]
    fn test_missing_key_column_surfaces_on_lookup() {
        let table = read_table(SAMPLE.as_bytes(), "Nation").unwrap();
        assert!(matches!(table.row_keys(), Err(Error::MissingKeyColumn(name)) if name == "Nation"));
    }

    #[test]
    fn test_all_empty_column_is_text() {
        let csv = "Country,Notes,INTJ\nA,,1\nB,,2\n";
        let table = read_table(csv.as_bytes(), "Country").unwrap();
        let numeric: Vec<&str> = table.numeric_columns().map(|(name, _)| name).collect();
        assert_eq!(numeric, vec!["INTJ"]);
    }

    fn rejected_cell(cell: &str) -> String {
        let csv = format!("Country,INTJ-A,INTJ-T,ENFP-A\nX,0.1,0.3,0.2\nY,{},0.3,0.2\n", cell);
        match read_table(csv.as_bytes(), "Country") {
            Err(Error::InvalidData(msg)) => msg,
            other => panic!("expected InvalidData for {:?}, got {:?}", cell, other),
        }
    }

    #[test]
    fn test_nan_cell_is_rejected() {
        assert_eq!(
            rejected_cell("NaN"),
            "column 'INTJ-A' row 2: NaN is not a finite non-negative number"
        );
    }

    #[test]
    fn test_infinite_cell_is_rejected() {
        assert!(rejected_cell("inf").contains("column 'INTJ-A' row 2: inf"));
        assert!(rejected_cell("-infinity").contains("row 2"));
    }

    #[test]
    fn test_negative_cell_is_rejected() {
        assert_eq!(
            rejected_cell("-1"),
            "column 'INTJ-A' row 2: -1 is not a finite non-negative number"
        );
    }

    #[test]
    fn test_values_cancelling_to_zero_are_rejected() {
        let csv = "Country,INTJ-A,ENFP-A\nX,0.5,-0.5\n";
        let err = read_table(csv.as_bytes(), "Country").unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("'ENFP-A' row 1: -0.5")));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let csv = "Country,INTJ-A\nX,-0\n";
        let table = read_table(csv.as_bytes(), "Country").unwrap();
        assert_eq!(table.numeric_columns().count(), 1);
    }

    #[test]
    fn test_ragged_rows_are_a_csv_error() {
        let csv = "Country,INTJ\nA,1,2\n";
        assert!(matches!(read_table(csv.as_bytes(), "Country"), Err(Error::Csv(_))));
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = CategoryTable::new(
            "Country",
            vec![
                Column::text("Country", vec!["A".into(), "B".into()]),
                Column::numeric("INTJ", vec![1.0]),
            ],
        );
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }
}
