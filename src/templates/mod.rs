//! Page templates.
//!
//! Templates are read from disk once at startup and never change afterwards, so a single
//! [`Templates`] value is shared by every request.

use std::path::Path;

use minijinja::{Environment, Value};
use serde::Serialize;

use crate::errors::AppError;

pub const HEADER: &str = "header.html";
pub const FRONTER: &str = "fronter.html";
pub const FRONT_SIMPLE: &str = "frontsimple.html";
pub const FOOTER: &str = "footer.html";

/// Every template a page can use.
pub const ALL: [&str; 4] = [HEADER, FRONTER, FRONT_SIMPLE, FOOTER];

/// Immutable set of parsed templates.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Read and parse all templates from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let mut sources = Vec::with_capacity(ALL.len());
        for name in ALL {
            let path = dir.join(name);
            let source =
                std::fs::read_to_string(&path).map_err(|e| AppError::TemplateFailed {
                    template: name.to_string(),
                    message: format!("{}: {}", path.display(), e),
                })?;
            sources.push((name, source));
        }

        Self::from_sources(sources)
    }

    /// Parse templates from in-memory sources.
    pub fn from_sources<I>(sources: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut env = Environment::new();
        for (name, source) in sources {
            env.add_template_owned(name, source)?;
            tracing::debug!(template = name, "Template loaded");
        }

        Ok(Self { env })
    }

    /// Render the named templates in order into one document, all against the same context.
    pub fn render_all<S: Serialize>(&self, names: &[&str], ctx: &S) -> Result<String, AppError> {
        let ctx = Value::from_serialize(ctx);
        let mut out = String::new();

        for name in names {
            let rendered = self.env.get_template(name)?.render(&ctx)?;
            out.push_str(&rendered);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render_description;

    #[derive(Serialize)]
    struct Ctx {
        name: String,
        description: crate::markdown::SanitizedHtml,
    }

    fn templates() -> Templates {
        Templates::from_sources([
            (HEADER, "<h1>{{ name }}</h1>".to_string()),
            (FRONTER, "<div>{{ description }}</div>".to_string()),
            (FOOTER, "<footer></footer>".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_render_all_concatenates_in_order() {
        let ctx = Ctx {
            name: "A".to_string(),
            description: render_description(""),
        };
        let html = templates()
            .render_all(&[HEADER, FRONTER, FOOTER], &ctx)
            .unwrap();
        assert_eq!(html, "<h1>A</h1><div></div><footer></footer>");
    }

    #[test]
    fn test_plain_strings_are_escaped_but_sanitized_html_is_not() {
        let ctx = Ctx {
            name: "<b>A</b>".to_string(),
            description: render_description("*hi*"),
        };
        let html = templates().render_all(&[HEADER, FRONTER], &ctx).unwrap();

        assert!(html.contains("&lt;b&gt;A"), "got {html}");
        assert!(!html.contains("<b>"), "got {html}");
        assert!(html.contains("<em>hi</em>"), "got {html}");
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let ctx = Ctx {
            name: String::new(),
            description: render_description(""),
        };
        let err = templates().render_all(&[FRONT_SIMPLE], &ctx).unwrap_err();
        assert!(matches!(err, AppError::TemplateFailed { .. }));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Templates::load(dir.path()).err().unwrap();
        assert!(matches!(err, AppError::TemplateFailed { .. }));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = Templates::from_sources([(HEADER, "{% if %}".to_string())]);
        assert!(result.is_err());
    }
}
