//! Conversion of tracked seconds into the unit shown in the report.
//!
//! Values are always rounded down, so a cell never overstates the time
//! worked:
//!
//! - 5400 s → 90 minutes → 1 hour → 0 days
//! - 59 s → 0 minutes

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Whole units contained in `seconds`.
    pub fn convert(&self, seconds: u64) -> u64 {
        seconds / self.seconds_per_unit()
    }

    pub fn seconds_per_unit(&self) -> u64 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 60 * 60,
            TimeUnit::Days => 24 * 60 * 60,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}
