//! Board configuration.

use std::time::Duration;

use chrono_tz::Tz;

/// Default refresh period in loop mode.
const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Configuration for building and refreshing departure boards.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Zone departure times are displayed in.
    pub timezone: Tz,

    /// Time between cycle starts in loop mode.
    pub refresh_period: Duration,
}

impl BoardConfig {
    pub fn new(timezone: Tz, refresh_period: Duration) -> Self {
        Self {
            timezone,
            refresh_period,
        }
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_refresh_period(mut self, period: Duration) -> Self {
        self.refresh_period = period;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::Helsinki,
            refresh_period: DEFAULT_REFRESH_PERIOD,
        }
    }
}
