//! Welcome page

use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use serde_json::json;
use std::sync::Arc;

/// Render the welcome view. Takes no data and touches no state.
pub async fn welcome(State(state): State<Arc<AppState>>) -> crate::Result<Html<String>> {
    Ok(Html(state.templates.render("welcome", &json!({}))?))
}

#[cfg(test)]
mod tests {
    use crate::{build_router, AppState};
    use axum_test::TestServer;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_welcome_renders_for_any_method() {
        let state = Arc::new(AppState::new().unwrap());
        let server = TestServer::new(build_router(state.clone())).unwrap();

        let res = server.get("/").await;
        res.assert_status_ok();
        assert!(res.text().contains("exciting party"));

        let res = server.post("/").await;
        res.assert_status_ok();

        assert!(state.responses.is_empty());
    }
}
