//! Pre-trusted HTML fragments.
//!
//! Template values are auto-escaped by default. A `TrustedHtml` is the only way
//! to hand the renderer markup that must be inserted verbatim, so every
//! unescaped insertion is an explicit opt-in at the construction site.

use minijinja::{HtmlEscape, Value};

/// Markup that is inserted into rendered pages without further escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Empty fragment; renders as nothing.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap markup that is already known to be safe.
    ///
    /// The caller vouches for the content: it will reach the page as-is.
    pub fn new_unchecked(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Wrap untrusted text in `<tag>…</tag>`, HTML-escaping the text.
    pub fn escaped_text(tag: &str, text: &str) -> Self {
        Self(format!("<{tag}>{}</{tag}>", HtmlEscape(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<TrustedHtml> for Value {
    fn from(html: TrustedHtml) -> Self {
        Value::from_safe_string(html.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::{context, Environment};

    fn render(value: Value) -> String {
        let mut env = Environment::new();
        env.add_template("page.html", "[{{ body }}]").unwrap();
        env.get_template("page.html")
            .unwrap()
            .render(context! { body => value })
            .unwrap()
    }

    #[test]
    fn test_trusted_html_is_not_reescaped() {
        let html = TrustedHtml::new_unchecked(r#"<div class="card-container">A & B</div>"#);
        assert_eq!(render(html.into()), r#"[<div class="card-container">A & B</div>]"#);
    }

    #[test]
    fn test_plain_string_is_escaped() {
        let out = render(Value::from("<b> & x"));
        assert_eq!(out, "[&lt;b&gt; &amp; x]");
    }

    #[test]
    fn test_escaped_text_wraps_and_escapes() {
        let html = TrustedHtml::escaped_text("p", "bad <input>");
        assert_eq!(html.as_str(), "<p>bad &lt;input&gt;</p>");
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert!(TrustedHtml::empty().is_empty());
        assert_eq!(render(TrustedHtml::empty().into()), "[]");
    }
}
