//! Report rendering
//!
//! Binds a [`ReportRecord`] and the display date into the HTML template
//! artifact. The template sees exactly [`TEMPLATE_VALUE_COUNT`] names:
//! `yesterday` plus one per counter (see [`template_value_names`]). Rendering
//! runs with strict undefined semantics, so a template that names anything
//! else fails instead of producing a partial document.

use crate::domain::{RenderError, ReportRecord, Result, COUNTER_COUNT, COUNTER_NAMES};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Template value holding the `DD/MM/YYYY` display date
pub const DISPLAY_DATE_VALUE: &str = "yesterday";

/// Number of named values bound into the template
pub const TEMPLATE_VALUE_COUNT: usize = COUNTER_COUNT + 1;

/// All names the template may reference
pub fn template_value_names() -> impl Iterator<Item = &'static str> {
    std::iter::once(DISPLAY_DATE_VALUE).chain(COUNTER_NAMES)
}

/// The structured value handed to the template
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub display_date: &'a str,
    pub record: &'a ReportRecord,
}

impl Serialize for ReportContext<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TEMPLATE_VALUE_COUNT))?;
        map.serialize_entry(DISPLAY_DATE_VALUE, self.display_date)?;
        for (name, value) in self.record.counters() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Renders reports from a template artifact on disk
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    template_path: PathBuf,
}

impl ReportRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Reads the template artifact and renders `record` into it
    ///
    /// # Errors
    ///
    /// Returns a render error if the artifact cannot be read or parsed, or if
    /// execution fails.
    pub fn render(&self, record: &ReportRecord, display_date: &str) -> Result<Vec<u8>> {
        let source = fs::read_to_string(&self.template_path).map_err(|e| {
            RenderError::TemplateNotFound(format!("{}: {e}", self.template_path.display()))
        })?;

        render_template(&source, record, display_date)
    }
}

/// Renders `record` into an in-memory template source
pub fn render_template(source: &str, record: &ReportRecord, display_date: &str) -> Result<Vec<u8>> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    // Values are integers and a DD/MM/YYYY date; nothing needs escaping.
    env.set_auto_escape_callback(|_| AutoEscape::None);

    let template = env
        .template_from_str(source)
        .map_err(|e| RenderError::TemplateSyntax(e.to_string()))?;

    let html = template
        .render(ReportContext {
            display_date,
            record,
        })
        .map_err(|e| RenderError::Execution(e.to_string()))?;

    Ok(html.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportError;

    #[test]
    fn test_context_exposes_exactly_the_template_contract() {
        let record = ReportRecord::default();
        let value = serde_json::to_value(ReportContext {
            display_date: "14/03/2024",
            record: &record,
        })
        .unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), TEMPLATE_VALUE_COUNT);
        for name in template_value_names() {
            assert!(map.contains_key(name), "missing {name}");
        }
        assert_eq!(map[DISPLAY_DATE_VALUE], "14/03/2024");
    }

    #[test]
    fn test_render_binds_values() {
        let record = ReportRecord {
            vidyo: 5,
            pexip_sip: 3,
            ..ReportRecord::default()
        };
        let html = render_template(
            "<p>{{ yesterday }}</p><p>{{ Vidyo }}/{{ Pexip }}/{{ PexipSIP }}</p>",
            &record,
            "14/03/2024",
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(html).unwrap(),
            "<p>14/03/2024</p><p>5/0/3</p>"
        );
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = render_template("{{ Zoom }}", &ReportRecord::default(), "14/03/2024")
            .unwrap_err();
        assert!(matches!(err, ReportError::Render(RenderError::Execution(_))));
    }

    #[test]
    fn test_syntax_error_fails() {
        let err = render_template("{% if %}", &ReportRecord::default(), "14/03/2024")
            .unwrap_err();
        assert!(matches!(err, ReportError::Render(RenderError::TemplateSyntax(_))));
    }

    #[test]
    fn test_missing_artifact_fails() {
        let renderer = ReportRenderer::new("/nonexistent/email.html");
        let err = renderer
            .render(&ReportRecord::default(), "14/03/2024")
            .unwrap_err();
        assert!(matches!(err, ReportError::Render(RenderError::TemplateNotFound(_))));
    }
}
