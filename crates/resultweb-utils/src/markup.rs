//! HTML fragments and text escaping
//!
//! `Markup` holds HTML that is safe to insert as-is. Plain text enters
//! through `Markup::text`, which escapes it; only `Markup::raw` trusts its
//! input. Joining fragments never inserts separators.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Escape a value for insertion into HTML text or attribute context.
///
/// The value is stringified first, so any `Display` type is accepted.
/// Escapes: &, <, >, ", '
pub fn escape_text<T: fmt::Display + ?Sized>(data: &T) -> String {
    let text = data.to_string();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A fragment of HTML
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Empty fragment
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Trusted HTML, inserted without escaping
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Plain text, escaped
    pub fn text<T: fmt::Display + ?Sized>(text: &T) -> Self {
        Self(escape_text(text))
    }

    /// Wrap `inner` in `<tag class="...">`
    pub fn element(tag: &str, class: Option<&str>, inner: Markup) -> Self {
        let mut html = String::with_capacity(inner.0.len() + tag.len() * 2 + 5);
        html.push('<');
        html.push_str(tag);
        if let Some(class) = class {
            html.push_str(" class=\"");
            html.push_str(&escape_text(class));
            html.push('"');
        }
        html.push('>');
        html.push_str(&inner.0);
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
        Self(html)
    }

    pub fn span(class: Option<&str>, inner: Markup) -> Self {
        Self::element("span", class, inner)
    }

    /// Join fragments back to back
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        parts.into_iter().fold(Self::new(), |acc, part| acc + part)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Add for Markup {
    type Output = Markup;

    fn add(mut self, rhs: Markup) -> Markup {
        self.0.push_str(&rhs.0);
        self
    }
}

impl AddAssign for Markup {
    fn add_assign(&mut self, rhs: Markup) {
        self.0.push_str(&rhs.0);
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}
