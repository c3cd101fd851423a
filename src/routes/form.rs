//! RSVP form handlers
//!
//! GET renders the empty form; POST runs the validation rule and either
//! re-renders the form with messages or stores the response and renders
//! the thanks/sorry confirmation.

use crate::models::{FormViewModel, RsvpRecord};
use crate::{AppError, AppState};
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Raw form submission. Every field is optional until checked, so an
/// absent key can be answered with a client error instead of faulting
/// the handler.
#[derive(Debug, Deserialize)]
pub struct RsvpForm {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    willattend: Option<String>,
}

/// Render the empty form.
pub async fn show_form(State(state): State<Arc<AppState>>) -> crate::Result<Html<String>> {
    Ok(Html(state.templates.render("form", &FormViewModel::empty())?))
}

/// Validate a submission, storing it when complete.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RsvpForm>,
) -> crate::Result<Html<String>> {
    let record = RsvpRecord {
        name: form.name.ok_or(AppError::MissingField("name"))?,
        email: form.email.ok_or(AppError::MissingField("email"))?,
        phone: form.phone.ok_or(AppError::MissingField("phone"))?,
        // Anything other than the literal "true", including an absent
        // field, means not attending.
        will_attend: form.willattend.as_deref() == Some("true"),
    };

    let errors = record.validate();
    if !errors.is_empty() {
        let view = FormViewModel { rsvp: record, errors };
        return Ok(Html(state.templates.render("form", &view)?));
    }

    tracing::info!(name = %record.name, will_attend = record.will_attend, "accepted rsvp");

    let view = if record.will_attend { "thanks" } else { "sorry" };
    let name = record.name.clone();
    state.responses.append(record);
    Ok(Html(state.templates.render(view, &json!({ "name": name }))?))
}
