pub mod catalog;
pub mod daily;
pub mod distribution;
pub mod error;
pub mod personality;
pub mod schedule;
pub mod tips;

pub use catalog::{TypeProfile, catalog, profile, validate_catalog};
pub use distribution::{CategoryVector, ColumnName, DEFAULT_SEPARATOR, Granularity};
pub use error::{Error, Result};
pub use personality::{PersonalityType, Preference};
pub use schedule::{ScheduleEntry, ScheduleParameters};
pub use tips::{BonusTip, bonus_tips, tips_for};
