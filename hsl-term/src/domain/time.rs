//! Departure time handling for Digitransit stop-times.
//!
//! Digitransit expresses a departure as a *service day* (Unix seconds of
//! the midnight that starts the service day) plus an offset in seconds.
//! Offsets may exceed one day for trips that run past midnight, so the
//! absolute instant is always `service_day + offset` and the local clock
//! time is derived from that instant, never from the offset alone.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

use super::DomainError;

/// A departure time as a service day plus an offset.
///
/// # Examples
///
/// ```
/// use hsl_term::domain::ServiceTime;
///
/// let time = ServiceTime::new(1_700_000_000, 3_700).unwrap();
/// assert_eq!(time.instant().timestamp(), 1_700_003_700);
/// assert_eq!(time.clock(&chrono_tz::Europe::Helsinki), "01:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceTime {
    service_day: i64,
    offset: u32,
    instant: DateTime<Utc>,
}

impl ServiceTime {
    /// Create a service time. The offset must be non-negative and the sum
    /// must be a representable instant.
    pub fn new(service_day: i64, offset: i64) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidServiceTime {
            service_day,
            offset,
        };

        let offset_secs = u32::try_from(offset).map_err(|_| invalid())?;
        let instant = service_day
            .checked_add(offset)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(invalid)?;

        Ok(Self {
            service_day,
            offset: offset_secs,
            instant,
        })
    }

    /// Unix seconds of the service day's midnight.
    pub fn service_day(&self) -> i64 {
        self.service_day
    }

    /// Seconds since the start of the service day.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The absolute departure instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The departure instant in the given zone.
    pub fn local<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.instant.with_timezone(tz)
    }

    /// Local wall-clock time as zero-padded 24-hour `HH:MM`.
    pub fn clock<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.local(tz).format("%H:%M").to_string()
    }

    /// Countdown from `now` to this departure.
    pub fn eta(&self, now: DateTime<Utc>) -> Eta {
        Eta::until(self.instant, now)
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ServiceTime({} + {}s = {})",
            self.service_day,
            self.offset,
            self.instant.to_rfc3339()
        )
    }
}

const NANOS_PER_MINUTE: i64 = 60_000_000_000;

/// Whole minutes until a departure. Negative once the departure has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Eta(i64);

impl Eta {
    /// Full minutes between `now` and `instant`, floored.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use hsl_term::domain::Eta;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 7, 1, 10, 58, 0).unwrap();
    /// let departs = Utc.with_ymd_and_hms(2024, 7, 1, 11, 2, 0).unwrap();
    /// assert_eq!(Eta::until(departs, now).minutes(), 4);
    /// ```
    pub fn until(instant: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let delta = instant.signed_duration_since(now);
        // Floor at full precision; a fraction of a second past departure is
        // already the previous minute.
        let minutes = match delta.num_nanoseconds() {
            Some(nanos) => nanos.div_euclid(NANOS_PER_MINUTE),
            None => delta.num_seconds().div_euclid(60),
        };
        Self(minutes)
    }

    pub fn minutes(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~ {} min", self.0)
    }
}
