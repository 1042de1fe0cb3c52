pub mod catalog;
pub mod common;
pub mod config;
pub mod daily;
pub mod distribution;
pub mod schedule;

pub use catalog::{ProfileViewModel, TipEntry, TypeEntry, TypeListViewModel};
pub use common::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigPathViewModel, ConfigViewModel, WelcomeViewModel};
pub use daily::{ChecklistItem, ChecklistViewModel, FortuneViewModel};
pub use distribution::{
    CategoryListViewModel, DistributionEntry, DistributionViewModel, ExportResultViewModel,
    RowListViewModel,
};
pub use schedule::{ScheduleViewModel, SessionRow};
