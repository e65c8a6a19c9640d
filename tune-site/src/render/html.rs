//! Escaped HTML fragments
//!
//! `Html` only ever holds markup. Untrusted text enters through [`Text`] or
//! [`Html::text`], both of which escape. Fixed markup written in this crate
//! (vector graphics, icons, component files) enters through
//! [`Html::trusted`].

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Escaped text node
    pub fn text(text: &str) -> Self {
        Self(escape(text))
    }

    /// Markup taken as-is; only for first-party fragments
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn push(&mut self, other: &Html) {
        self.0.push_str(&other.0);
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

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Html> for Html {
    fn from_iter<I: IntoIterator<Item = Html>>(iter: I) -> Self {
        let mut out = Html::new();
        for fragment in iter {
            out.push(&fragment);
        }
        out
    }
}

/// Escapes on display; safe in text and in double-quoted attribute values
#[derive(Debug, Clone, Copy)]
pub struct Text<'a>(pub &'a str);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (idx, ch) in self.0.char_indices() {
            let entity = match ch {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                _ => continue,
            };
            f.write_str(&self.0[last..idx])?;
            f.write_str(entity)?;
            last = idx + ch.len_utf8();
        }
        f.write_str(&self.0[last..])
    }
}

pub fn escape(text: &str) -> String {
    Text(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape("Beyoncé live"), "Beyoncé live");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_text_vs_trusted() {
        assert_eq!(Html::text("<b>").as_str(), "&lt;b&gt;");
        assert_eq!(Html::trusted("<b>").as_str(), "<b>");
    }

    #[test]
    fn test_collect_concatenates() {
        let joined: Html = ["a", "b", "c"].iter().map(|s| Html::text(s)).collect();
        assert_eq!(joined.as_str(), "abc");
    }
}
