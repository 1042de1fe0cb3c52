//! Sample distribution tables written into a test environment.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Four countries with `-A`/`-T` variants of four types. `Atlantis` is all zeros.
pub const COUNTRIES_CSV: &str = "\
Country,ESTJ-A,ESTJ-T,ENFP-A,ENFP-T,INTJ-A,INTJ-T,ISFJ-A,ISFJ-T
South Korea,0.04,0.06,0.05,0.09,0.03,0.04,0.05,0.08
Brazil,0.06,0.05,0.10,0.11,0.02,0.02,0.05,0.05
Iceland,0.05,0.05,0.07,0.09,0.04,0.05,0.04,0.05
Atlantis,0,0,0,0,0,0,0,0
";

/// Same shape as [`COUNTRIES_CSV`] but keyed by `Nation` and using `_` variants.
pub const UNDERSCORE_CSV: &str = "\
Nation,INTP_A,INTP_T,ESFP_A
Norway,0.2,0.3,0.5
";

/// A table with duplicate row keys.
pub const DUPLICATE_KEYS_CSV: &str = "\
Country,INFJ-A,INFJ-T
Peru,0.1,0.2
Peru,0.3,0.4
";

/// Write `content` to `dir/name` and return the full path.
pub fn write_table(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
