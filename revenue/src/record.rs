/// Calendar features of a single day, numbered the way the sales data is.
///
/// Day of week runs from 1 (Sunday) to 7 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFeatures {
    pub day_of_year: u16,
    pub day_of_month: u8,
    pub day_of_week: u8,
    pub month: u8,
    pub is_holiday: bool,
}

/// One row of the sales dataset: a day and the revenue booked on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesRecord {
    pub day: DayFeatures,
    pub revenue: f64,
}

impl SalesRecord {
    pub fn new(day: DayFeatures, revenue: f64) -> Self {
        Self { day, revenue }
    }
}
