//! The page specification model.
//!
//! A [`PageSpec`] is the single input record for one generated page. Text is
//! split into two categories: [`EscapedText`] is always emitted inside a
//! quoted string literal, while [`RawMarkup`] is trusted, author-controlled
//! markup that is copied into the output verbatim.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

/// Text that is emitted inside a generated string literal.
///
/// Deserializes from any scalar, so unquoted values such as `v: 2012` or
/// `v: 1.5` are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EscapedText(String);

impl EscapedText {
    /// Wrap a plain string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The unescaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters (not bytes) in the text.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Render as a double-quoted literal. Quotes, backslashes and control
    /// characters are escaped so the literal decodes back to the exact text.
    #[must_use]
    pub fn to_literal(&self) -> String {
        serde_json::Value::from(self.0.as_str()).to_string()
    }

    /// Keep at most `max_chars` characters.
    #[must_use]
    pub fn truncated(&self, max_chars: usize) -> Self {
        match self.0.char_indices().nth(max_chars) {
            Some((end, _)) => Self(self.0[..end].to_string()),
            None => self.clone(),
        }
    }
}

impl From<&str> for EscapedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for EscapedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for EscapedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trusted markup embedded into the output without any escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawMarkup(String);

impl RawMarkup {
    /// Wrap a markup fragment.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup, exactly as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for EscapedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarText).map(Self)
    }
}

impl<'de> Deserialize<'de> for RawMarkup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarText).map(Self)
    }
}

/// Accepts strings, numbers and booleans as text.
struct ScalarText;

impl de::Visitor<'_> for ScalarText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    // `2.0` stays `2.0` rather than Display's `2`.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(serde_json::Number::from_f64(v)
            .map(|n| n.to_string())
            .unwrap_or_else(|| v.to_string()))
    }
}

impl From<&str> for RawMarkup {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

impl From<String> for RawMarkup {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

/// A row in the key-facts table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    #[serde(rename = "l", alias = "label")]
    pub label: EscapedText,

    #[serde(rename = "v", alias = "value")]
    pub value: EscapedText,
}

/// An entry in the in-page navigation list. `id` should name an anchor in
/// the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: EscapedText,
    pub label: EscapedText,
}

/// A stat badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(rename = "l", alias = "label")]
    pub label: EscapedText,

    #[serde(rename = "v", alias = "value")]
    pub value: EscapedText,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(rename = "q", alias = "question")]
    pub question: EscapedText,

    #[serde(rename = "a", alias = "answer")]
    pub answer: EscapedText,
}

/// A cross-link rendered in the link grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub href: EscapedText,
    pub label: EscapedText,
    pub desc: EscapedText,
}

/// One of the two call-to-action targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaLink {
    pub href: EscapedText,
    pub label: EscapedText,
}

/// The call-to-action block at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub title: EscapedText,
    pub desc: EscapedText,

    /// Primary target.
    pub pri: CtaLink,

    /// Secondary target.
    pub sec: CtaLink,
}

/// Structured description of one generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Page title.
    pub title: EscapedText,

    /// Title accent, appended to the title as `"{title}: {accent}"`.
    pub accent: EscapedText,

    /// Hero subtitle.
    pub subtitle: EscapedText,

    /// Meta description.
    #[serde(rename = "desc", alias = "description")]
    pub description: EscapedText,

    /// Keywords, kept in order.
    #[serde(rename = "kw", alias = "keywords")]
    pub keywords: Vec<String>,

    /// Key-facts table rows.
    pub facts: Vec<Fact>,

    /// Section navigation entries.
    pub sections: Vec<Section>,

    /// Stat badges.
    pub stats: Vec<Stat>,

    /// Summary callout markup.
    pub tldr: RawMarkup,

    /// Main content markup.
    pub body: RawMarkup,

    /// Questions for the accordion and the FAQ schema.
    #[serde(alias = "faqs")]
    pub faq: Vec<FaqEntry>,

    /// Cross-links.
    #[serde(alias = "links")]
    pub related: Vec<RelatedLink>,

    /// Call to action.
    pub cta: Cta,

    /// Breadcrumb and hero label. Falls back to `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<EscapedText>,
}

impl PageSpec {
    /// The full headline, `"{title}: {accent}"`.
    #[must_use]
    pub fn full_title(&self) -> EscapedText {
        EscapedText(format!("{}: {}", self.title, self.accent))
    }

    /// The label used for the last breadcrumb element.
    #[must_use]
    pub fn breadcrumb_label(&self) -> &EscapedText {
        self.breadcrumb.as_ref().unwrap_or(&self.title)
    }
}
