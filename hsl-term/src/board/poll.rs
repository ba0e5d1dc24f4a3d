//! Loop mode: refresh the boards on a fixed period until interrupted.

use std::future::Future;

use chrono::Utc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::render::{BoardRenderer, Screen};

use super::config::BoardConfig;
use super::pipeline::run_cycle;
use super::source::TransitApi;

/// Run cycles every `config.refresh_period` until `shutdown` resolves.
///
/// Cycles start on a fixed schedule (t = 0, p, 2p, ...). Each completed
/// cycle clears the screen and shows either the boards or the error that
/// ended the cycle. No error stops the loop; only `shutdown` does. When
/// `shutdown` resolves mid-cycle the in-flight cycle is dropped and nothing
/// is shown for it.
///
/// Returns the number of completed cycles.
pub async fn run_loop<A, S, F>(
    api: &A,
    config: &BoardConfig,
    term: &str,
    renderer: &BoardRenderer,
    screen: &mut S,
    shutdown: F,
) -> usize
where
    A: TransitApi,
    S: Screen,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut interval = tokio::time::interval(config.refresh_period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut completed = 0;
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = interval.tick() => {}
        }

        let started = Instant::now();
        let result = tokio::select! {
            biased;
            _ = &mut shutdown => {
                debug!(cycle = completed + 1, "interrupted mid-cycle");
                break;
            }
            result = run_cycle(api, config, term, Utc::now()) => result,
        };

        let frame = match result {
            Ok(outcome) => match renderer.render(&outcome) {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "failed to render boards");
                    format!("Error: {e}")
                }
            },
            Err(e) => {
                warn!(error = %e, "refresh failed, retrying next cycle");
                renderer.render_error(&e)
            }
        };

        if let Err(e) = screen.clear().and_then(|()| screen.show(&frame)) {
            warn!(error = %e, "failed to write to screen");
        }

        completed += 1;
        debug!(
            cycle = completed,
            elapsed = ?started.elapsed(),
            "cycle complete"
        );
    }

    completed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::time::Duration;

    use crate::board::{BoardError, MockTransitApi};
    use crate::domain::{Stop, StopId, Timetable};

    /// Screen that records frames and the time they were shown.
    #[derive(Default)]
    struct RecordingScreen {
        frames: Vec<String>,
        shown_at: Vec<Instant>,
        clears: usize,
    }

    impl Screen for RecordingScreen {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn show(&mut self, frame: &str) -> io::Result<()> {
            self.frames.push(frame.to_string());
            self.shown_at.push(Instant::now());
            Ok(())
        }
    }

    fn id(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn kamppi_api() -> MockTransitApi {
        MockTransitApi::new()
            .with_search("Kamppi", vec![id("HSL:1174505")])
            .with_timetable(Timetable::new(
                Stop::new(id("HSL:1174505"), "Kamppi", Some("H1236".into())),
                Vec::new(),
            ))
    }

    #[tokio::test(start_paused = true)]
    async fn three_cycles_in_ninety_five_seconds() {
        let api = kamppi_api().with_latency(Duration::from_secs(10));
        let mut screen = RecordingScreen::default();
        let start = Instant::now();

        let completed = run_loop(
            &api,
            &BoardConfig::default(),
            "Kamppi",
            &BoardRenderer::default(),
            &mut screen,
            tokio::time::sleep(Duration::from_secs(95)),
        )
        .await;

        assert_eq!(completed, 3);
        assert_eq!(screen.frames.len(), 3);
        assert_eq!(screen.clears, 3);
        let shown: Vec<u64> = screen
            .shown_at
            .iter()
            .map(|t| t.duration_since(start).as_secs())
            .collect();
        assert_eq!(shown, [10, 40, 70]);
        // The fourth cycle started at t=90 and was interrupted mid-fetch.
        assert_eq!(api.search_calls(), 4);
        assert!(screen.frames.iter().all(|f| f.contains("Kamppi (H1236)")));
    }

    #[tokio::test(start_paused = true)]
    async fn errors_do_not_stop_the_loop() {
        let api = kamppi_api().with_search_failure(BoardError::Transport("timed out".into()));
        let mut screen = RecordingScreen::default();

        let completed = run_loop(
            &api,
            &BoardConfig::default(),
            "Kamppi",
            &BoardRenderer::default(),
            &mut screen,
            tokio::time::sleep(Duration::from_secs(45)),
        )
        .await;

        assert_eq!(completed, 2);
        assert_eq!(screen.frames[0], "Error: transport error: timed out");
        assert!(screen.frames[1].contains("Kamppi (H1236)"));
    }

    #[tokio::test(start_paused = true)]
    async fn short_term_is_shown_every_cycle() {
        let api = kamppi_api();
        let mut screen = RecordingScreen::default();

        let completed = run_loop(
            &api,
            &BoardConfig::default(),
            "ab",
            &BoardRenderer::default(),
            &mut screen,
            tokio::time::sleep(Duration::from_secs(95)),
        )
        .await;

        assert_eq!(completed, 4);
        assert_eq!(screen.clears, 4);
        assert!(
            screen
                .frames
                .iter()
                .all(|f| f == "Error: search term too short: \"ab\" (need more than 3 characters)")
        );
        assert_eq!(api.total_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_results_are_shown_each_cycle() {
        let api = MockTransitApi::new();
        let mut screen = RecordingScreen::default();

        let completed = run_loop(
            &api,
            &BoardConfig::default().with_refresh_period(Duration::from_secs(10)),
            "Xyzzy",
            &BoardRenderer::default(),
            &mut screen,
            tokio::time::sleep(Duration::from_secs(25)),
        )
        .await;

        assert_eq!(completed, 3);
        assert!(screen.frames.iter().all(|f| f == "Zero results found"));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_shutdown_runs_nothing() {
        let api = kamppi_api();
        let mut screen = RecordingScreen::default();

        let completed = run_loop(
            &api,
            &BoardConfig::default(),
            "Kamppi",
            &BoardRenderer::default(),
            &mut screen,
            std::future::ready(()),
        )
        .await;

        assert_eq!(completed, 0);
        assert_eq!(api.total_calls(), 0);
    }
}
