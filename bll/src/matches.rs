//! Reconstructs the game matches out of a whole feed of events -- see [track_matches()]

use common::types::Result;
use model::game_match::GameMatch;
use dal_api::Quake3ServerEvents;
use std::sync::Arc;
use log::warn;
use crate::Config;
use crate::tracker::MatchTracker;


/// Consumes all events from `log_dao`, returning the [GameMatch]es found, in the log order.\
/// Problems in the feed (IO errors, malformed log lines) and in the event model (events out of a match, unknown players)
/// either stop the processing or are skipped -- as dictated by `config`.
pub fn track_matches(config: Arc<Config>, log_dao: Box<dyn Quake3ServerEvents>) -> Result<Vec<GameMatch>> {

    let stream = log_dao.events_stream()
        .map_err(|err| format!("track_matches(): failed at fetching the events `Stream`: {err}"))?;

    let skip_or_stop = |stop: bool, msg: String| -> Result<()> {
        if stop {
            return Err(Box::from(msg))
        }
        if config.log_issues {
            warn!("Skipping: {msg}");
        }
        Ok(())
    };

    let mut tracker = MatchTracker::new();
    for (event_id, event_result) in futures::executor::block_on_stream(stream).enumerate() {
        let event = match event_result {
            Ok(event) => event,
            Err(event_feed_err) => {
                skip_or_stop(config.stop_on_feed_errors, format!("Event #{}: Feed error: {event_feed_err}", event_id+1))?;
                continue
            },
        };
        if let Err(violation) = tracker.apply(&event) {
            skip_or_stop(config.stop_on_event_model_violations, format!("Event #{}: violated the event model: {violation}", event_id+1))?;
        }
    }
    Ok(tracker.finish())
}
