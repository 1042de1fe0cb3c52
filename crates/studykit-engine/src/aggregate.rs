use crate::table::CategoryTable;
use crate::{Error, Result};
use serde::Serialize;
use studykit_types::{CategoryVector, ColumnName, Granularity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub key: String,
    pub vector: CategoryVector,
}

/// One vector per table row, in file order. Duplicate keys are kept so that
/// selection can report them instead of silently picking one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedTable {
    pub key_column: String,
    pub rows: Vec<AggregatedRow>,
}

impl AggregatedTable {
    /// Category names of the first row (every row shares them).
    pub fn categories(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.vector.categories().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// The vector of the single row whose key equals `key`.
    pub fn select(&self, key: &str) -> Result<&CategoryVector> {
        let mut matching = self.rows.iter().filter(|row| row.key == key);
        match (matching.next(), matching.count()) {
            (Some(row), 0) => Ok(&row.vector),
            (first, rest) => Err(Error::RowNotFound {
                key: key.to_string(),
                matches: usize::from(first.is_some()) + rest,
            }),
        }
    }
}

/// Sum every row's values by base category (the column name before the
/// table's separator).
pub fn aggregate(table: &CategoryTable) -> Result<AggregatedTable> {
    let separator = table.separator();
    build_rows(table, |name| ColumnName::parse(name, separator).base)
}

/// Rows keyed by raw column name, without grouping variants.
pub fn raw_rows(table: &CategoryTable) -> Result<AggregatedTable> {
    build_rows(table, str::to_string)
}

/// Select one row at the requested granularity.
pub fn select_vector(
    table: &CategoryTable,
    row_key: &str,
    granularity: Granularity,
) -> Result<CategoryVector> {
    let rows = match granularity {
        Granularity::Aggregated => aggregate(table)?,
        Granularity::Raw => raw_rows(table)?,
    };
    rows.select(row_key).cloned()
}

fn build_rows(
    table: &CategoryTable,
    category_of: impl Fn(&str) -> String,
) -> Result<AggregatedTable> {
    let keys = table.row_keys()?;

    let groups: Vec<(String, &[f64])> = table
        .numeric_columns()
        .map(|(name, values)| (category_of(name), values))
        .collect();
    if groups.is_empty() {
        return Err(Error::NoNumericColumns);
    }

    let rows = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let mut vector = CategoryVector::new();
            for (category, values) in &groups {
                vector.accumulate(category, values[i]);
            }
            AggregatedRow { key, vector }
        })
        .collect();

    Ok(AggregatedTable {
        key_column: table.key_column().to_string(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{TOLERANCE, approx_eq};
    use crate::table::{Column, read_table};

    fn single_row_table() -> CategoryTable {
        CategoryTable::new(
            "Country",
            vec![
                Column::text("Country", vec!["X".into()]),
                Column::numeric("INTJ-A", vec![5.0]),
                Column::numeric("INTJ-T", vec![3.0]),
                Column::numeric("ENFP-A", vec![2.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_aggregate_groups_variants_by_base() {
        let table = aggregate(&single_row_table()).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].key, "X");
        let expected: CategoryVector = [("INTJ", 8.0), ("ENFP", 2.0)].into_iter().collect();
        assert_eq!(table.rows[0].vector, expected);
        assert_eq!(table.categories(), vec!["ENFP", "INTJ"]);
    }

    #[test]
    fn test_aggregate_preserves_row_totals() {
        let csv = "\
Country,ISTJ-A,ISTJ-T,ENFP-A,ENFP-T,INTP
A,0.1,0.2,0.3,0.15,0.25
B,1.5,2.5,0,0,7
";
        let table = read_table(csv.as_bytes(), "Country").unwrap();
        let aggregated = aggregate(&table).unwrap();
        let raw = raw_rows(&table).unwrap();

        for (agg, raw) in aggregated.rows.iter().zip(&raw.rows) {
            assert!(approx_eq(agg.vector.sum(), raw.vector.sum(), TOLERANCE));
        }
        assert_eq!(aggregated.rows[1].vector.get("INTP"), Some(7.0));
        assert_eq!(raw.rows[0].vector.len(), 5);
    }

    #[test]
    fn test_custom_separator_changes_grouping() {
        let table = CategoryTable::new(
            "Country",
            vec![
                Column::text("Country", vec!["X".into()]),
                Column::numeric("INTJ_A", vec![1.0]),
                Column::numeric("INTJ_T", vec![2.0]),
            ],
        )
        .unwrap()
        .with_separator('_');

        let vector = select_vector(&table, "X", Granularity::Aggregated).unwrap();
        assert_eq!(vector.get("INTJ"), Some(3.0));
    }

    #[test]
    fn test_select_vector_raw_keeps_variants() {
        let vector = select_vector(&single_row_table(), "X", Granularity::Raw).unwrap();
        assert_eq!(vector.len(), 3);
        assert_eq!(vector.get("INTJ-T"), Some(3.0));
    }

    #[test]
    fn test_select_vector_unknown_key() {
        let err = select_vector(&single_row_table(), "Y", Granularity::Aggregated).unwrap_err();
        assert!(matches!(err, Error::RowNotFound { matches: 0, .. }));
    }

    #[test]
    fn test_select_vector_duplicate_key_is_ambiguous() {
        let csv = "Country,INTJ-A\nX,1\nX,2\n";
        let table = read_table(csv.as_bytes(), "Country").unwrap();

        for granularity in [Granularity::Aggregated, Granularity::Raw] {
            let err = select_vector(&table, "X", granularity).unwrap_err();
            assert!(matches!(err, Error::RowNotFound { ref key, matches: 2 } if key == "X"));
        }
    }

    #[test]
    fn test_missing_key_column() {
        let table = CategoryTable::new("Country", vec![Column::numeric("INTJ-A", vec![1.0])])
            .unwrap();
        assert!(matches!(aggregate(&table), Err(Error::MissingKeyColumn(_))));
    }

    #[test]
    fn test_no_numeric_columns() {
        let csv = "Country,Region\nA,Asia\n";
        let table = read_table(csv.as_bytes(), "Country").unwrap();
        assert!(matches!(aggregate(&table), Err(Error::NoNumericColumns)));
        assert!(matches!(raw_rows(&table), Err(Error::NoNumericColumns)));
    }
}
