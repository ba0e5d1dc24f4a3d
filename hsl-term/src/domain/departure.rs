//! Departures and per-stop timetables.

use super::{ServiceTime, Stop};

/// Which departure offset a [`Departure`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSource {
    /// Timetabled departure.
    Scheduled,
    /// Live estimate from vehicle tracking.
    Realtime,
}

/// A single upcoming departure from a stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Route short name, e.g. "55" or "M1".
    pub route: String,
    /// Destination text shown on the vehicle.
    pub headsign: String,
    pub time: ServiceTime,
    pub source: TimeSource,
}

impl Departure {
    pub fn new(
        route: impl Into<String>,
        headsign: impl Into<String>,
        time: ServiceTime,
        source: TimeSource,
    ) -> Self {
        Self {
            route: route.into(),
            headsign: headsign.into(),
            time,
            source,
        }
    }

    pub fn is_realtime(&self) -> bool {
        self.source == TimeSource::Realtime
    }
}

/// A stop together with its upcoming departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    pub stop: Stop,
    pub departures: Vec<Departure>,
}

impl Timetable {
    pub fn new(stop: Stop, departures: Vec<Departure>) -> Self {
        Self { stop, departures }
    }

    /// Sort departures by absolute instant.
    ///
    /// The sort is stable: departures at the same instant keep the order
    /// the API returned them in.
    pub fn sort_by_departure(&mut self) {
        self.departures.sort_by_key(|d| d.time.instant());
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}
