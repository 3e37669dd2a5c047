use axum::response::Html;

/// Serves the dashboard page. All data flows through `/api/v1/seasons`; the
/// page itself is static.
pub(super) async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../assets/dashboard.html"))
}
