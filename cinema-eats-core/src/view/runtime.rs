//! Tokio driver for a [`ViewController`].

use cinema_eats_model::SceneId;
use tokio::{
    sync::mpsc,
    time::{Instant, sleep_until},
};
use tracing::{debug, info};

use super::{
    cards::{RenderFrame, SuggestionPanel},
    controller::ViewController,
    intent::{Effect, Intent},
};
use crate::favorites::ToggleOutcome;

/// The presentation layer the view loop draws into.
pub trait RenderTarget: Send {
    fn render(&mut self, frame: &RenderFrame);

    fn suggestions(&mut self, _panel: &SuggestionPanel) {}

    fn favorite_changed(&mut self, _outcome: &ToggleOutcome) {}

    fn focus(&mut self, _scene: &SceneId) {}
}

/// Feed intents from `intents` into `controller` until the channel closes.
///
/// The initial frame is rendered before the first intent is read. A
/// scheduled search replaces any pending one, so only the last keystroke of
/// a burst reaches the controller once the debounce delay has passed.
/// Returns the controller and target for inspection.
pub async fn run_view_loop<R>(
    mut controller: ViewController,
    mut intents: mpsc::Receiver<Intent>,
    mut target: R,
) -> (ViewController, R)
where
    R: RenderTarget,
{
    target.render(&controller.frame());
    let mut pending: Option<(u64, Instant)> = None;

    loop {
        let intent = match pending {
            Some((ticket, deadline)) => tokio::select! {
                _ = sleep_until(deadline) => {
                    pending = None;
                    Intent::SearchDebounced(ticket)
                }
                received = intents.recv() => match received {
                    Some(intent) => intent,
                    None => break,
                },
            },
            None => match intents.recv().await {
                Some(intent) => intent,
                None => break,
            },
        };

        for effect in controller.update(intent) {
            match effect {
                Effect::Render(frame) => target.render(&frame),
                Effect::ScheduleSearch { ticket, delay } => {
                    pending = Some((ticket, Instant::now() + delay));
                }
                Effect::Suggestions(panel) => target.suggestions(&panel),
                Effect::FavoriteChanged(outcome) => {
                    target.favorite_changed(&outcome)
                }
                Effect::FocusScene(id) => target.focus(&id),
            }
        }
    }

    if let Some((ticket, _)) = pending {
        debug!("Discarding pending search ticket {} on shutdown", ticket);
    }
    info!("View loop finished");
    (controller, target)
}
