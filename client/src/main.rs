//! Headless startup harness: restore a stored session if one exists, run a
//! refresh cycle, and log where that leaves the application. A rendering
//! layer would drive [`client::app::App`] the same way.

use std::time::Duration;

use client::app::App;
use tracing_subscriber::EnvFilter;

/// How long to wait for in-flight fetches before giving up on them.
const EVENT_DRAIN_TIMEOUT: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("client=info,warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut app = App::new();

    if !app.restore_session() {
        tracing::info!("No stored session; a sign-in screen would come next");
        return;
    }

    // The restored session kicked off a refresh cycle: five independent
    // fetches, each reporting back as one event.
    for _ in 0..5 {
        match tokio::time::timeout(EVENT_DRAIN_TIMEOUT, app.next_event()).await {
            Ok(Some(event)) => app.handle_event(event),
            Ok(None) => break,
            Err(_) => {
                tracing::warn!("Timed out waiting for refresh results");
                break;
            }
        }
    }

    let state = app.state.read();
    tracing::info!(
        screen = ?state.nav.current(),
        friends = state.friends.len(),
        joined_groups = state.joined_groups.len(),
        to_acknowledge = state.inbox.to_acknowledge.len(),
        notifications = state.notifications.len(),
        "Startup refresh complete"
    );
    for (level, message) in &state.notifications {
        tracing::warn!(level = %level, "{message}");
    }
}
