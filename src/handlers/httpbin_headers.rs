use crate::state::AppState;
use axum::extract::State;

/// GET /httpbin/headers handler - Proxy to the upstream headers echo
///
/// Issues an outbound GET to the configured upstream URL and returns the
/// upstream body verbatim behind a label. Every failure kind (connect, DNS,
/// non-2xx status, body read) collapses into a single labeled error message,
/// still delivered with status 200.
pub async fn httpbin_headers_handler(State(state): State<AppState>) -> String {
    tracing::debug!("Proxying GET {}", state.config.httpbin_headers_url);

    match state.httpbin_client.fetch_headers().await {
        Ok(body) => {
            tracing::info!("Upstream headers fetch succeeded");
            format!("Response from httpbin.org/headers: {}", body)
        }
        Err(e) => {
            tracing::error!("Upstream headers fetch failed: {}", e);
            format!("Error fetching data from httpbin.org/headers: {}", e)
        }
    }
}
