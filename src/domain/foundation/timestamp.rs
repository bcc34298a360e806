//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Creates a new timestamp one calendar month later.
    ///
    /// Clamps to the last valid day of the target month (Jan 31 -> Feb 28).
    pub fn plus_one_month(&self) -> Self {
        Self(
            self.0
                .checked_add_months(Months::new(1))
                .unwrap_or(self.0),
        )
    }

    /// Creates a new timestamp one calendar year later.
    pub fn plus_one_year(&self) -> Self {
        Self(
            self.0
                .checked_add_months(Months::new(12))
                .unwrap_or(self.0),
        )
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Renders the timestamp as RFC 3339.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn plus_one_month_advances_calendar_month() {
        let jan = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        let feb = jan.plus_one_month();
        assert_eq!(
            feb.as_datetime(),
            &Utc.with_ymd_and_hms(2026, 2, 15, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn plus_one_month_clamps_end_of_month() {
        let jan31 = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap());
        let feb = jan31.plus_one_month();
        assert_eq!(
            feb.as_datetime(),
            &Utc.with_ymd_and_hms(2026, 2, 28, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn plus_one_year_advances_calendar_year() {
        let now = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap());
        let next = now.plus_one_year();
        assert_eq!(
            next.as_datetime(),
            &Utc.with_ymd_and_hms(2027, 6, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn timestamps_order_correctly() {
        let earlier = Timestamp::now();
        let later = earlier.plus_one_month();
        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
    }
}
