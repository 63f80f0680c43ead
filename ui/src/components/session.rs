use dioxus::prelude::*;

use designhub_client::BackendClient;
use designhub_common::session::{expire_banner, SessionState};

/// Page, modal and banner state shared by the app shell and its modals.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The one backend handle, provided by the app shell.
pub fn use_backend() -> BackendClient {
    use_context::<BackendClient>()
}

#[cfg(target_family = "wasm")]
async fn banner_sleep(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// No browser timer off wasm; the banner clears on the next poll.
#[cfg(not(target_family = "wasm"))]
async fn banner_sleep(_ms: u32) {}

/// Show the success banner and schedule its dismissal.
pub fn announce_order_placed(mut session: Signal<SessionState>) {
    let ticket = session.write().order_placed();
    spawn(async move {
        expire_banner(ticket, banner_sleep, move |t| session.write().dismiss_banner(t)).await;
    });
}
