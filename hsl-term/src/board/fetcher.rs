//! Timetable fetching for resolved stops.

use tracing::debug;

use crate::domain::{StopId, Timetable};

use super::error::BoardError;
use super::source::TransitApi;

/// Fetch the timetable of every stop, one request at a time.
///
/// Timetables are returned in the same order as `stops`. The first failure
/// aborts the whole fetch so a cycle never renders a partial set of boards.
pub async fn fetch_timetables<A: TransitApi>(
    api: &A,
    stops: &[StopId],
) -> Result<Vec<Timetable>, BoardError> {
    let mut timetables = Vec::with_capacity(stops.len());
    for stop in stops {
        let timetable = api.timetable(stop).await?;
        debug!(
            stop = %stop,
            departures = timetable.departures.len(),
            "fetched timetable"
        );
        timetables.push(timetable);
    }
    Ok(timetables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MockTransitApi;
    use crate::domain::Stop;

    fn id(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn empty_timetable(stop: &str, name: &str) -> Timetable {
        Timetable::new(Stop::new(id(stop), name, None), Vec::new())
    }

    #[tokio::test]
    async fn fetches_in_stop_order() {
        let api = MockTransitApi::new()
            .with_timetable(empty_timetable("HSL:1", "First"))
            .with_timetable(empty_timetable("HSL:2", "Second"));

        let timetables = fetch_timetables(&api, &[id("HSL:2"), id("HSL:1")])
            .await
            .unwrap();

        let names: Vec<&str> = timetables.iter().map(|t| t.stop.name.as_str()).collect();
        assert_eq!(names, ["Second", "First"]);
        assert_eq!(api.timetable_calls(), [id("HSL:2"), id("HSL:1")]);
    }

    #[tokio::test]
    async fn no_stops_makes_no_requests() {
        let api = MockTransitApi::new();

        let timetables = fetch_timetables(&api, &[]).await.unwrap();

        assert!(timetables.is_empty());
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test]
    async fn first_failure_stops_fetching() {
        let api = MockTransitApi::new()
            .with_timetable(empty_timetable("HSL:1", "First"))
            .with_timetable(empty_timetable("HSL:3", "Third"))
            .with_timetable_failure(id("HSL:2"), BoardError::MalformedResponse("no stop".into()));

        let result = fetch_timetables(&api, &[id("HSL:1"), id("HSL:2"), id("HSL:3")]).await;

        assert_eq!(result, Err(BoardError::MalformedResponse("no stop".into())));
        assert_eq!(api.timetable_calls(), [id("HSL:1"), id("HSL:2")]);
    }

    #[tokio::test]
    async fn unknown_stop_is_lookup_error() {
        let api = MockTransitApi::new();

        let result = fetch_timetables(&api, &[id("HSL:404")]).await;

        assert!(matches!(result, Err(BoardError::Lookup(_))));
    }
}
