use serde::Serialize;

/// Floor-based breakdown of a time value in seconds
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeComponents {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}
