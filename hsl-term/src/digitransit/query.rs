//! GraphQL documents sent to the routing API.

/// Stops whose name or number matches `$name`.
pub const STOP_SEARCH: &str = r#"query StopSearch($name: String!) {
  stops(name: $name) {
    gtfsId
    name
    code
    lat
    lon
  }
}"#;

/// A stop's metadata and its next `$departures` stop-times.
pub const TIMETABLE: &str = r#"query Timetable($id: String!, $departures: Int!) {
  stop(id: $id) {
    gtfsId
    name
    code
    stoptimesWithoutPatterns(numberOfDepartures: $departures) {
      scheduledArrival
      realtimeArrival
      arrivalDelay
      scheduledDeparture
      realtimeDeparture
      departureDelay
      realtime
      realtimeState
      serviceDay
      headsign
      trip {
        route {
          shortName
        }
      }
    }
  }
}"#;
