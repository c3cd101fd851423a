//! RSVP data model and validation

use serde::Serialize;

/// One attendee's response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RsvpRecord {
    /// Attendee name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Whether the attendee plans to attend
    pub will_attend: bool,
}

impl RsvpRecord {
    /// Check the required fields, returning one message per empty field.
    ///
    /// Every field is checked, and messages come back in a fixed order
    /// (name, email, phone) so the re-rendered form lists them consistently.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("Please enter your name".to_string());
        }
        if self.email.is_empty() {
            errors.push("Please enter your email address".to_string());
        }
        if self.phone.is_empty() {
            errors.push("Please enter your phone number".to_string());
        }
        errors
    }
}

/// Data handed to the form view: the in-progress record plus any
/// validation messages from the last submission. Built per request and
/// discarded after rendering.
#[derive(Debug, Serialize)]
pub struct FormViewModel {
    /// The submitted (possibly invalid) record
    pub rsvp: RsvpRecord,
    /// Validation messages, in display order
    pub errors: Vec<String>,
}

impl FormViewModel {
    /// An empty form with no errors, for the initial GET.
    pub fn empty() -> Self {
        Self {
            rsvp: RsvpRecord::default(),
            errors: Vec::new(),
        }
    }
}
