//! Date rendering for request parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Wire format for `start_date` / `end_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A value that can be sent as a Plaid date.
///
/// The calendar date is taken in the value's own time zone; time of day is dropped.
pub trait ApiDate {
    /// The calendar date of `self`.
    fn calendar_date(&self) -> NaiveDate;

    /// `YYYY-MM-DD`.
    fn to_api_date(&self) -> String {
        self.calendar_date().format(DATE_FORMAT).to_string()
    }
}

impl ApiDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl ApiDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ApiDate for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: ApiDate + ?Sized> ApiDate for &T {
    fn calendar_date(&self) -> NaiveDate {
        (**self).calendar_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn naive_date_formats_with_zero_padding() {
        let d = NaiveDate::from_ymd_opt(2019, 1, 5).unwrap();
        assert_eq!(d.to_api_date(), "2019-01-05");
    }

    #[test]
    fn time_of_day_is_dropped() {
        let dt = NaiveDate::from_ymd_opt(2020, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(dt.to_api_date(), "2020-02-29");
        assert_eq!(dt.and_utc().to_api_date(), "2020-02-29");
    }

    #[test]
    fn zoned_values_use_their_own_calendar_date() {
        // 2021-03-01T01:30 at +05:00 is still 2021-02-28 in UTC.
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let local = tz.with_ymd_and_hms(2021, 3, 1, 1, 30, 0).unwrap();
        assert_eq!(local.to_api_date(), "2021-03-01");
        assert_eq!(local.with_timezone(&Utc).to_api_date(), "2021-02-28");
    }

    #[test]
    fn references_delegate() {
        let d = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
        assert_eq!((&d).to_api_date(), "2018-12-31");
    }
}
