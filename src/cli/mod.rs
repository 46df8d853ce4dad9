pub mod stats;

pub use stats::{GameStats, SeatReport, StatisticsAccumulator, SummaryReport};
