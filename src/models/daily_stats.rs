use serde::Serialize;

/// Headline numbers for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DailyStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// Percentage of present people, rounded; 0 for an empty roster.
    pub rate: u32,
}
