//! Business-day arithmetic over `chrono` timestamps.
//!
//! The clock always moves in whole 24-hour steps, so the time-of-day of the
//! start timestamp is carried through unchanged. Weekdays are judged in the
//! timestamp's own time zone.

mod error;

use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Weekday};

pub use error::{CalendarError, Result};

/// The set of weekdays treated as non-business days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Weekmask([bool; 7]);

impl Weekmask {
    pub const SATURDAY_SUNDAY: Weekmask =
        Weekmask([false, false, false, false, false, true, true]);

    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut mask = [false; 7];
        for day in days {
            mask[day.num_days_from_monday() as usize] = true;
        }
        Weekmask(mask)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|&masked| masked)
    }
}

impl Default for Weekmask {
    fn default() -> Self {
        Weekmask::SATURDAY_SUNDAY
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusinessCalendar {
    weekend: Weekmask,
}

impl BusinessCalendar {
    /// A calendar with a Saturday/Sunday weekend and no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weekend<I>(days: I) -> Result<Self>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let weekend = Weekmask::from_days(days);
        if weekend.is_full() {
            return Err(CalendarError::NoBusinessDays);
        }
        Ok(BusinessCalendar { weekend })
    }

    pub fn weekend(&self) -> Weekmask {
        self.weekend
    }

    pub fn is_business_day<Tz>(&self, timestamp: &DateTime<Tz>) -> bool
    where
        Tz: TimeZone,
    {
        !self.weekend.contains(timestamp.weekday())
    }

    /// Moves `start` forward one day at a time until `days` business days
    /// have been passed, and returns the timestamp of the last one.
    ///
    /// Weekend steps move the clock but do not count. An offset of zero
    /// returns `start` as is, even when `start` falls on a weekend.
    pub fn advance<Tz>(&self, start: DateTime<Tz>, days: u32) -> Result<DateTime<Tz>>
    where
        Tz: TimeZone,
    {
        let mut current = start;
        let mut remaining = days;
        let mut steps: u64 = 0;

        while remaining > 0 {
            current = current
                .checked_add_signed(TimeDelta::days(1))
                .ok_or(CalendarError::OutOfRange { steps })?;
            steps += 1;

            if self.is_business_day(&current) {
                remaining -= 1;
            }
        }

        tracing::trace!(days, steps, "advanced by business days");
        Ok(current)
    }
}

/// Returns the timestamp `days` business days after `start`, skipping
/// Saturdays and Sundays.
pub fn business_day_from_start<Tz>(start: DateTime<Tz>, days: u32) -> Result<DateTime<Tz>>
where
    Tz: TimeZone,
{
    BusinessCalendar::default().advance(start, days)
}

pub fn is_business_day<Tz>(timestamp: &DateTime<Tz>) -> bool
where
    Tz: TimeZone,
{
    BusinessCalendar::default().is_business_day(timestamp)
}
