//! Small eager utilities: business-day arithmetic over `chrono` timestamps
//! and a chainable filter/map/reduce wrapper over owned sequences.

pub mod calendar;
pub mod stream;

pub use calendar::{business_day_from_start, BusinessCalendar, CalendarError};
pub use stream::{Stream, StreamError};

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::{business_day_from_start, Stream};

    #[test]
    fn utilities_compose() -> anyhow::Result<()> {
        let start = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        let mut offsets = Stream::new(&[1u32, 2, 3, 4, 5, 6]);
        offsets.filter(|days| days % 5 == 0);

        let days = offsets.find_first(|_| true)?;
        let due = business_day_from_start(start, days)?;
        assert_eq!(due, Utc.with_ymd_and_hms(2006, 1, 9, 15, 4, 5).unwrap());
        Ok(())
    }
}
