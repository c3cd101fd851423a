//! Response listing page

use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use serde_json::json;
use std::sync::Arc;

/// Render the list view with a snapshot of every stored response.
pub async fn list(State(state): State<Arc<AppState>>) -> crate::Result<Html<String>> {
    let responses = state.responses.list_all();
    Ok(Html(state.templates.render("list", &json!({ "responses": responses }))?))
}

#[cfg(test)]
mod tests {
    use crate::models::RsvpRecord;
    use crate::{build_router, AppState};
    use axum_test::TestServer;
    use std::sync::Arc;

    fn record(name: &str, will_attend: bool) -> RsvpRecord {
        RsvpRecord {
            name: name.into(),
            email: format!("{name}@example.com"),
            phone: "555-0100".into(),
            will_attend,
        }
    }

    #[tokio::test]
    async fn test_empty_list_still_renders() {
        let state = Arc::new(AppState::new().unwrap());
        let server = TestServer::new(build_router(state.clone())).unwrap();

        let res = server.get("/list").await;
        res.assert_status_ok();
        assert!(res.text().contains("people attending"));
        assert!(state.responses.is_empty());
    }

    #[tokio::test]
    async fn test_list_shows_responses_in_submission_order() {
        let state = Arc::new(AppState::new().unwrap());
        state.responses.append(record("Ann", true));
        state.responses.append(record("Bob", false));

        let server = TestServer::new(build_router(state)).unwrap();
        let body = server.get("/list").await.text();

        let ann = body.find("Ann").expect("Ann missing from list");
        let bob = body.find("Bob").expect("Bob missing from list");
        assert!(ann < bob);
    }
}
