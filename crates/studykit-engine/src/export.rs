use crate::{Error, Result};
use std::io::{Read, Write};
use studykit_types::{CategoryVector, ScheduleEntry};

/// Prefix that lets spreadsheet tools detect UTF-8 in exported CSV.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const SCHEDULE_HEADERS: [&str; 4] = ["session", "focus_start", "focus_end", "break"];
pub const VECTOR_HEADERS: [&str; 2] = ["category", "value"];
pub const RANKING_HEADERS: [&str; 3] = ["rank", "category", "value"];

const CLOCK_FORMAT: &str = "%H:%M";

pub fn write_schedule<W: Write>(writer: W, entries: &[ScheduleEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SCHEDULE_HEADERS)?;

    for entry in entries {
        wtr.write_record([
            entry.index.to_string(),
            entry.focus_start.format(CLOCK_FORMAT).to_string(),
            entry.focus_end.format(CLOCK_FORMAT).to_string(),
            entry.break_label.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `category,value` rows in category order.
///
/// Values use the shortest representation that parses back to the same `f64`.
pub fn write_vector<W: Write>(writer: W, vector: &CategoryVector) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(VECTOR_HEADERS)?;

    for (category, value) in vector {
        let value = value.to_string();
        wtr.write_record([category.as_str(), value.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_ranking<W: Write>(writer: W, ranking: &[(String, f64)]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(RANKING_HEADERS)?;

    for (i, (category, value)) in ranking.iter().enumerate() {
        wtr.write_record([(i + 1).to_string(), category.clone(), value.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Read back the output of [`write_vector`]. A leading UTF-8 BOM is accepted.
pub fn read_vector<R: Read>(mut reader: R) -> Result<CategoryVector> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    let body = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let mut rdr = csv::Reader::from_reader(body);
    let headers = rdr.headers()?;
    if headers.iter().ne(VECTOR_HEADERS) {
        return Err(Error::InvalidData(format!(
            "expected header 'category,value', found '{}'",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut vector = CategoryVector::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let category = record.get(0).unwrap_or("");
        let raw_value = record.get(1).unwrap_or("");
        let value = raw_value.parse::<f64>().map_err(|_| {
            Error::InvalidData(format!(
                "row {}: '{}' is not a number",
                line + 1,
                raw_value
            ))
        })?;
        if vector.insert(category, value).is_some() {
            return Err(Error::InvalidData(format!(
                "row {}: duplicate category '{}'",
                line + 1,
                category
            )));
        }
    }

    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ranking_numbers_rows() {
        let mut out = Vec::new();
        let ranking = vec![("B".to_string(), 3.0), ("C".to_string(), 2.5)];
        write_ranking(&mut out, &ranking).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "rank,category,value\n1,B,3\n2,C,2.5\n"
        );
    }

    #[test]
    fn test_read_vector_accepts_bom() {
        let mut input = UTF8_BOM.to_vec();
        input.extend_from_slice(b"category,value\nINTJ,0.8\n");
        let vector = read_vector(input.as_slice()).unwrap();
        assert_eq!(vector.get("INTJ"), Some(0.8));
    }

    #[test]
    fn test_read_vector_rejects_wrong_header() {
        let err = read_vector("type,share\nINTJ,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("type,share")));
    }

    #[test]
    fn test_read_vector_rejects_non_numeric_value() {
        let err = read_vector("category,value\nINTJ,lots\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("'lots'")));
    }

    #[test]
    fn test_read_vector_rejects_duplicates() {
        let err = read_vector("category,value\nA,1\nA,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("duplicate category 'A'")));
    }
}
