//! Non-fatal consistency checks for page specifications.
//!
//! Generation never depends on these; they back `pagesmith check` and the
//! `--strict` flag of `pagesmith generate`.

use std::fmt;

use crate::spec::PageSpec;

/// Number of FAQ entries that end up in the FAQ schema.
pub const FAQ_SCHEMA_LIMIT: usize = 5;

/// Maximum description length for social-preview metadata.
pub const SOCIAL_DESCRIPTION_LIMIT: usize = 155;

/// Anchor the page template always emits for the FAQ section.
const TEMPLATE_ANCHORS: &[&str] = &["faq"];

/// A consistency problem found in a [`PageSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// Slug is not lowercase and hyphen-delimited.
    SlugFormat(String),

    /// A section navigation entry points at an anchor missing from the body.
    MissingAnchor(String),

    /// Fewer FAQ entries than the FAQ schema holds.
    ShortFaq(usize),

    /// Description will be cut for social metadata.
    LongDescription(usize),

    /// A field that should carry content is empty.
    EmptyField(&'static str),
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlugFormat(slug) => {
                write!(f, "slug '{slug}' should be lowercase and hyphen-delimited")
            }
            Self::MissingAnchor(id) => {
                write!(f, "section '{id}' has no matching anchor in body")
            }
            Self::ShortFaq(count) => write!(
                f,
                "faq has {count} entries; the FAQ schema expects {FAQ_SCHEMA_LIMIT}"
            ),
            Self::LongDescription(len) => write!(
                f,
                "desc is {len} characters; social metadata keeps the first {SOCIAL_DESCRIPTION_LIMIT}"
            ),
            Self::EmptyField(field) => write!(f, "{field} is empty"),
        }
    }
}

/// Check a page specification and return every warning found.
pub fn lint(slug: &str, spec: &PageSpec) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if !is_recommended_slug(slug) {
        warnings.push(LintWarning::SlugFormat(slug.to_string()));
    }

    if spec.title.is_empty() {
        warnings.push(LintWarning::EmptyField("title"));
    }
    if spec.description.is_empty() {
        warnings.push(LintWarning::EmptyField("desc"));
    }
    if spec.faq.is_empty() {
        warnings.push(LintWarning::EmptyField("faq"));
    } else if spec.faq.len() < FAQ_SCHEMA_LIMIT {
        warnings.push(LintWarning::ShortFaq(spec.faq.len()));
    }
    if spec.related.is_empty() {
        warnings.push(LintWarning::EmptyField("related"));
    }

    let desc_len = spec.description.char_len();
    if desc_len > SOCIAL_DESCRIPTION_LIMIT {
        warnings.push(LintWarning::LongDescription(desc_len));
    }

    for section in &spec.sections {
        let id = section.id.as_str();
        if !TEMPLATE_ANCHORS.contains(&id) && !has_anchor(spec.body.as_str(), id) {
            warnings.push(LintWarning::MissingAnchor(id.to_string()));
        }
    }

    warnings
}

/// Lowercase ASCII letters and digits separated by single hyphens.
pub fn is_recommended_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}

/// Whether `markup` declares an element with the given `id`, in any of the
/// attribute forms authors use: `id="x"`, `id='x'` or `id={"x"}`.
fn has_anchor(markup: &str, id: &str) -> bool {
    [
        format!("id=\"{id}\""),
        format!("id='{id}'"),
        format!("id={{\"{id}\"}}"),
    ]
    .iter()
    .any(|needle| markup.contains(needle.as_str()))
}
