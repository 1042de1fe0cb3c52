pub mod catalog;
pub mod daily;
pub mod distribution;
pub mod schedule;
