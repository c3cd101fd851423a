//! View templates
//!
//! Every page shares one layout fragment; each view defines its content as
//! an inline partial and pulls the layout around it. Sources are embedded
//! strings, so the binary has no runtime file dependency.

use handlebars::Handlebars;
use serde::Serialize;

/// The five named views and their sources.
const VIEWS: [(&str, &str); 5] = [
    ("welcome", WELCOME_TEMPLATE),
    ("form", FORM_TEMPLATE),
    ("thanks", THANKS_TEMPLATE),
    ("sorry", SORRY_TEMPLATE),
    ("list", LIST_TEMPLATE),
];

/// Compiled template registry, populated once at startup.
pub struct TemplateStore {
    registry: Handlebars<'static>,
}

impl TemplateStore {
    /// Compile the shared layout and all five views.
    ///
    /// Any compile error aborts startup; serving with a partially
    /// populated registry is not allowed.
    pub fn load() -> crate::Result<Self> {
        let mut hb = Handlebars::new();
        hb.register_template_string("layout", LAYOUT_TEMPLATE)?;
        for (name, source) in VIEWS {
            hb.register_template_string(name, source)?;
            tracing::debug!(view = name, "compiled template");
        }
        Ok(Self { registry: hb })
    }

    /// Render the named view with the given data.
    pub fn render<T: Serialize>(&self, view: &str, data: &T) -> crate::Result<String> {
        Ok(self.registry.render(view, data)?)
    }
}

const LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Party RSVP</title>
</head>
<body>
{{> page}}
</body>
</html>
"#;

const WELCOME_TEMPLATE: &str = r#"{{#*inline "page"}}
<h1>We're going to have an exciting party!</h1>
<p>And you are invited.</p>
<p><a href="/form">RSVP now</a></p>
{{/inline}}
{{> layout}}"#;

const FORM_TEMPLATE: &str = r#"{{#*inline "page"}}
<h1>RSVP</h1>
{{#if errors}}
<ul class="errors">
  {{#each errors}}
  <li>{{this}}</li>
  {{/each}}
</ul>
{{/if}}
<form method="post" action="/form">
  <p><label>Your name: <input name="name" value="{{rsvp.name}}"></label></p>
  <p><label>Your email: <input name="email" value="{{rsvp.email}}"></label></p>
  <p><label>Your phone: <input name="phone" value="{{rsvp.phone}}"></label></p>
  <p><label>Will you attend?
    <select name="willattend">
      <option value="true">Yes, I'll be there</option>
      <option value="false">No, I can't come</option>
    </select>
  </label></p>
  <button type="submit">Submit RSVP</button>
</form>
{{/inline}}
{{> layout}}"#;

const THANKS_TEMPLATE: &str = r#"{{#*inline "page"}}
<h1>Thank you, {{name}}!</h1>
<p>It's great that you're coming. The drinks are already in the fridge!</p>
<p><a href="/list">See who else is coming.</a></p>
{{/inline}}
{{> layout}}"#;

const SORRY_TEMPLATE: &str = r#"{{#*inline "page"}}
<h1>It won't be the same without you, {{name}}!</h1>
<p>Sorry to hear you can't make it, but thanks for letting us know.</p>
<p><a href="/list">See who is coming</a>, in case you change your mind.</p>
{{/inline}}
{{> layout}}"#;

const LIST_TEMPLATE: &str = r#"{{#*inline "page"}}
<h1>Here is the list of people attending the party</h1>
<table>
  <thead>
    <tr><th>Name</th><th>Email</th><th>Phone</th><th>Attending?</th></tr>
  </thead>
  <tbody>
    {{#each responses}}
    <tr>
      <td>{{name}}</td>
      <td>{{email}}</td>
      <td>{{phone}}</td>
      <td>{{#if will_attend}}Yes{{else}}No{{/if}}</td>
    </tr>
    {{/each}}
  </tbody>
</table>
{{/inline}}
{{> layout}}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormViewModel, RsvpRecord};
    use serde_json::json;

    #[test]
    fn test_all_views_compile_and_render_inside_layout() {
        let store = TemplateStore::load().unwrap();
        for (name, _) in VIEWS {
            let html = store.render(name, &json!({})).unwrap();
            assert!(html.contains("<!DOCTYPE html>"), "{name} missing layout");
        }
    }

    #[test]
    fn test_form_view_shows_errors_and_submitted_values() {
        let store = TemplateStore::load().unwrap();
        let view = FormViewModel {
            rsvp: RsvpRecord {
                email: "b@x.com".into(),
                ..RsvpRecord::default()
            },
            errors: vec!["Please enter your name".into()],
        };

        let html = store.render("form", &view).unwrap();
        assert!(html.contains("Please enter your name"));
        assert!(html.contains(r#"value="b@x.com""#));
    }

    #[test]
    fn test_thanks_and_sorry_greet_by_name() {
        let store = TemplateStore::load().unwrap();
        let data = json!({ "name": "Ann" });

        assert!(store.render("thanks", &data).unwrap().contains("Thank you, Ann!"));
        assert!(store
            .render("sorry", &data)
            .unwrap()
            .contains("It won't be the same without you, Ann!"));
    }

    #[test]
    fn test_list_view_renders_one_row_per_response() {
        let store = TemplateStore::load().unwrap();
        let responses = vec![
            RsvpRecord {
                name: "Ann".into(),
                email: "a@x.com".into(),
                phone: "555".into(),
                will_attend: true,
            },
            RsvpRecord {
                name: "Bob".into(),
                email: "b@x.com".into(),
                phone: "556".into(),
                will_attend: false,
            },
        ];

        let html = store
            .render("list", &json!({ "responses": responses }))
            .unwrap();
        assert!(html.contains("<td>Ann</td>"));
        assert!(html.contains("<td>Yes</td>"));
        assert!(html.contains("<td>Bob</td>"));
        assert!(html.contains("<td>No</td>"));
    }
}
