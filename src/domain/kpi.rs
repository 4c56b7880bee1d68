use chrono::NaiveDate;

/// One day's synthetic stock/demand sample used for the dashboard chart.
/// Generated freshly per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub stock: u32,
    pub demand: u32,
}

/// Aggregate dashboard figures plus the chart series. Fully derived from the
/// product set at the time of the request.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSnapshot {
    pub total_stock: u32,
    pub total_demand: u32,
    pub fill_rate: f64,
    pub trend: Vec<TrendPoint>,
}

/// Chart window selector exposed by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    SevenDays,
    FourteenDays,
    ThirtyDays,
}

impl DateRange {
    pub fn days(self) -> usize {
        match self {
            DateRange::SevenDays => 7,
            DateRange::FourteenDays => 14,
            DateRange::ThirtyDays => 30,
        }
    }

    /// Maps a raw day count onto the closed set of supported windows.
    /// Anything unrecognized falls back to the one-week window.
    pub fn from_days(days: u32) -> Self {
        match days {
            14 => DateRange::FourteenDays,
            30 => DateRange::ThirtyDays,
            _ => DateRange::SevenDays,
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        DateRange::SevenDays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_day_counts() {
        assert_eq!(DateRange::SevenDays.days(), 7);
        assert_eq!(DateRange::FourteenDays.days(), 14);
        assert_eq!(DateRange::ThirtyDays.days(), 30);
    }

    #[test]
    fn unrecognized_day_count_falls_back_to_seven() {
        assert_eq!(DateRange::from_days(14), DateRange::FourteenDays);
        assert_eq!(DateRange::from_days(30), DateRange::ThirtyDays);
        assert_eq!(DateRange::from_days(0), DateRange::SevenDays);
        assert_eq!(DateRange::from_days(90), DateRange::SevenDays);
    }
}
