use dioxus::prelude::*;

/// Waits `ms` milliseconds on the host's timer. Stands in for network latency
/// on login and form submission.
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    let js = format!("await new Promise((resolve) => setTimeout(resolve, {ms})); return true;");
    if let Err(e) = document::eval(&js).join::<bool>().await {
        tracing::warn!(ms, error = %e, "timer unavailable, continuing without delay");
    }
}
