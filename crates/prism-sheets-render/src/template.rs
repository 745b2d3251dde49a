//! Jinja templates
//!
//! Bot templates are Jinja source stored on the wiki. Every value in a
//! [`Context`] is text. Undefined names render as empty text and are falsy
//! in `{% if %}`. Wiki template calls such as `{{PAGENAME}}` or `{{!}}` must
//! sit inside `{% raw %}…{% endraw %}`, otherwise Jinja reads them as
//! expressions.

use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};
use prism_sheets_core::Row;

use crate::error::RenderResult;

/// Values available to a template, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: IndexMap<String, String>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`Context::insert`]
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl From<&Row> for Context {
    fn from(row: &Row) -> Self {
        row.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Context::new();
        for (k, v) in iter {
            ctx.insert(k, v);
        }
        ctx
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Lenient);
    env
}

fn check_syntax(source: &str) -> RenderResult<()> {
    let env = environment();
    env.template_from_str(source)?;
    Ok(())
}

/// A syntax-checked template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Compile `source` once to reject syntax errors up front
    pub fn parse<S: Into<String>>(source: S) -> RenderResult<Self> {
        let source = source.into();
        check_syntax(&source)?;
        Ok(Self { source })
    }

    /// Render with the values in `ctx`
    pub fn render(&self, ctx: &Context) -> RenderResult<String> {
        Ok(environment().render_str(&self.source, &ctx.values)?)
    }

    /// Parse and render in one step
    pub fn render_str(source: &str, ctx: &Context) -> RenderResult<String> {
        Self::parse(source)?.render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_substitutes_known_and_blanks_unknown() {
        let ctx = Context::new().with("タイトル", "メンテナンス").with("日付", "1/2");
        let out = Template::render_str("== {{ タイトル }} ==\n{{日付}} {{ 未定義 }}!", &ctx).unwrap();
        assert_eq!(out, "== メンテナンス ==\n1/2 !");
    }

    #[test]
    fn test_control_flow_and_filters() {
        let ctx = Context::new().with("備考", "").with("名前", "shin");

        let out = Template::render_str("{% if 備考 %}備考: {{ 備考 }}{% endif %}end", &ctx).unwrap();
        assert_eq!(out, "end");

        let out = Template::render_str("{% if 未定義 %}x{% else %}-{% endif %}", &ctx).unwrap();
        assert_eq!(out, "-");

        let out = Template::render_str("{{ 名前|upper }} {{ 未定義|default('-') }}", &ctx).unwrap();
        assert_eq!(out, "SHIN -");
    }

    #[test]
    fn test_raw_blocks_keep_wiki_templates() {
        let ctx = Context::new().with("名前", "シン");
        let src = "{% raw %}{{PAGENAME}} {{!}} {{clear}}{% endraw %} {{ 名前 }}";
        let out = Template::render_str(src, &ctx).unwrap();
        assert_eq!(out, "{{PAGENAME}} {{!}} {{clear}} シン");
    }

    #[test]
    fn test_single_trailing_newline_is_dropped() {
        let out = Template::render_str("a\n", &Context::new()).unwrap();
        assert_eq!(out, "a");
    }

    #[test]
    fn test_syntax_errors_fail_at_parse() {
        assert!(matches!(Template::parse("abc {{ name"), Err(RenderError::Template(_))));
        assert!(matches!(Template::parse("{% if x %}open"), Err(RenderError::Template(_))));
    }

    #[test]
    fn test_context_from_row() {
        let row = Row::new().with("名前", "シン").with("レベル", 3i64);
        let ctx = Context::from(&row);
        assert_eq!(ctx.get("名前"), Some("シン"));
        assert_eq!(ctx.get("レベル"), Some("3"));
    }
}
