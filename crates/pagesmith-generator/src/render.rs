//! Page module rendering.
//!
//! Converts a [`PageSpec`] into the full source text of a page module using
//! the `"page"` template.

use chrono::NaiveDate;
use pagesmith_core::{Config, EscapedText, PageSpec, lint::SOCIAL_DESCRIPTION_LIMIT};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    schema::{self, ArticleSchema, SchemaError, SpeakableSchema},
    template::{TemplateContext, TemplateError, TemplateRegistry},
};

/// Seconds of animation delay added per stat badge.
pub const STAT_DELAY_STEP: f64 = 0.06;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Structured-data encoding error.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type for rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Page module renderer. Output depends only on the [`PageSpec`], the configuration
/// and the page date.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    templates: TemplateRegistry,
    config: Config,
    date: NaiveDate,
}

impl PageRenderer {
    /// Create a renderer stamping pages with `date`.
    #[must_use]
    pub fn new(config: Config, date: NaiveDate) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
            date,
        }
    }

    /// Create a renderer with custom templates.
    #[must_use]
    pub fn with_templates(config: Config, date: NaiveDate, templates: TemplateRegistry) -> Self {
        Self {
            templates,
            config,
            date,
        }
    }

    /// The configuration pages are rendered against.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the page module for `slug`.
    pub fn render(&self, slug: &str, spec: &PageSpec) -> Result<String> {
        debug!(slug, "rendering page");
        let ctx = self.build_context(slug, spec)?;
        Ok(self.templates.render("page", &ctx)?)
    }

    /// Build the template context for a page.
    fn build_context(&self, slug: &str, spec: &PageSpec) -> Result<TemplateContext> {
        let url = self.config.url_for(slug);
        let full_title = spec.full_title();
        let document_title = EscapedText::new(format!("{} | {}", full_title, self.config.site.name));
        let social_description = spec.description.truncated(SOCIAL_DESCRIPTION_LIMIT);
        let breadcrumb = spec.breadcrumb_label();

        let article = ArticleSchema::for_page(spec, &url, self.date);
        let trail = schema::breadcrumb_trail(&self.config, breadcrumb.as_str());
        let speakable = SpeakableSchema { url: url.clone() };

        let ctx = TemplateContext::new()
            // Metadata
            .with_var("document_title_literal", document_title.to_literal())
            .with_var("full_title_literal", full_title.to_literal())
            .with_var("description_literal", spec.description.to_literal())
            .with_var("social_description_literal", social_description.to_literal())
            .with_var("canonical_url_literal", EscapedText::new(url).to_literal())
            .with_var("keywords", schema::to_literal(&spec.keywords)?)
            // Structured data
            .with_var("article_schema", schema::to_literal(&article)?)
            .with_var("breadcrumb_schema", schema::to_literal(&trail)?)
            .with_var("speakable_schema", schema::to_literal(&speakable)?)
            .with_var("faq_schema", literal_lines(schema::faq_schema(&spec.faq), 4)?)
            .with_var("faq_items", faq_items(spec, 2)?)
            // Hero
            .with_var("title_attr", attr(&spec.title))
            .with_var("accent_attr", attr(&spec.accent))
            .with_var("subtitle_attr", attr(&spec.subtitle))
            .with_var("breadcrumb_attr", attr(breadcrumb))
            .with_var("date_iso", self.date.format("%Y-%m-%d").to_string())
            .with_var("date_display", self.date.format("%B %-d, %Y").to_string())
            // Raw markup
            .with_var("tldr", spec.tldr.as_str())
            .with_var("body", spec.body.as_str())
            // Lists
            .with_var("facts", facts(spec, 10)?)
            .with_var("sections", sections(spec, 10)?)
            .with_var("stats", stat_pills(spec, 10))
            .with_var("related", related(spec, 14)?)
            .with_var("cta", cta(spec, 8))
            .with_var("site_name", self.config.site.name.as_str());

        Ok(ctx)
    }
}

/// Animation delay for the stat badge at `index`, to two decimals.
#[must_use]
pub fn stat_delay(index: usize) -> String {
    format!("{:.2}", index as f64 * STAT_DELAY_STEP)
}

/// A JSX expression container holding a string literal, e.g. `{"text"}`.
fn attr(text: &EscapedText) -> String {
    format!("{{{}}}", text.to_literal())
}

/// One object literal per line, each followed by a comma.
fn literal_lines<T: Serialize>(items: impl IntoIterator<Item = T>, indent: usize) -> Result<String> {
    let pad = " ".repeat(indent);
    let lines = items
        .into_iter()
        .map(|item| Ok(format!("{pad}{},", schema::to_literal(&item)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

#[derive(Serialize)]
struct LabelValue<'a> {
    label: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct NavItem<'a> {
    id: &'a str,
    label: &'a str,
}

#[derive(Serialize)]
struct AccordionItem<'a> {
    q: &'a str,
    a: &'a str,
}

#[derive(Serialize)]
struct LinkItem<'a> {
    href: &'a str,
    label: &'a str,
    desc: &'a str,
}

fn facts(spec: &PageSpec, indent: usize) -> Result<String> {
    literal_lines(
        spec.facts.iter().map(|f| LabelValue {
            label: f.label.as_str(),
            value: f.value.as_str(),
        }),
        indent,
    )
}

fn sections(spec: &PageSpec, indent: usize) -> Result<String> {
    literal_lines(
        spec.sections.iter().map(|s| NavItem {
            id: s.id.as_str(),
            label: s.label.as_str(),
        }),
        indent,
    )
}

fn faq_items(spec: &PageSpec, indent: usize) -> Result<String> {
    literal_lines(
        spec.faq.iter().map(|f| AccordionItem {
            q: f.question.as_str(),
            a: f.answer.as_str(),
        }),
        indent,
    )
}

fn related(spec: &PageSpec, indent: usize) -> Result<String> {
    literal_lines(
        spec.related.iter().map(|r| LinkItem {
            href: r.href.as_str(),
            label: r.label.as_str(),
            desc: r.desc.as_str(),
        }),
        indent,
    )
}

fn stat_pills(spec: &PageSpec, indent: usize) -> String {
    let pad = " ".repeat(indent);
    spec.stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            format!(
                "{pad}<StatPill label={} value={} delay={{{}}} />",
                attr(&stat.label),
                attr(&stat.value),
                stat_delay(i)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cta(spec: &PageSpec, indent: usize) -> String {
    let cta = &spec.cta;
    format!(
        "{}<LearnCTA title={} description={} primaryHref={} primaryLabel={} secondaryHref={} secondaryLabel={} />",
        " ".repeat(indent),
        attr(&cta.title),
        attr(&cta.desc),
        attr(&cta.pri.href),
        attr(&cta.pri.label),
        attr(&cta.sec.href),
        attr(&cta.sec.label),
    )
}
