//! Structured-data records for search engines.
//!
//! The generated page hands these records to the site's schema helpers
//! (`buildArticleSchema`, `buildBreadcrumbSchema`, `buildSpeakableSchema`,
//! `buildFAQSchema`). This module only defines their shape and serializes
//! them as object literals; the helpers own the final JSON-LD encoding.

use chrono::NaiveDate;
use pagesmith_core::{Config, FaqEntry, PageSpec, lint::FAQ_SCHEMA_LIMIT};
use serde::Serialize;
use thiserror::Error;

/// Schema serialization errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON encoding error.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: String,
    pub date_modified: String,
}

impl ArticleSchema {
    /// Build the article record for a page published and modified on `date`.
    pub fn for_page(spec: &PageSpec, url: &str, date: NaiveDate) -> Self {
        let date = date.format("%Y-%m-%d").to_string();
        Self {
            headline: spec.full_title().as_str().to_string(),
            description: spec.description.as_str().to_string(),
            url: url.to_string(),
            date_published: date.clone(),
            date_modified: date,
        }
    }
}

/// One element of a breadcrumb trail. The current page has no URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `Home → Section → page`.
pub fn breadcrumb_trail(config: &Config, label: &str) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            name: "Home".to_string(),
            url: Some(config.home_url().to_string()),
        },
        BreadcrumbItem {
            name: config.section.name.clone(),
            url: Some(config.section_url()),
        },
        BreadcrumbItem {
            name: label.to_string(),
            url: None,
        },
    ]
}

/// Speakable record. Selector hints are supplied by the helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakableSchema {
    pub url: String,
}

/// One question in the FAQ record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqSchemaEntry {
    pub question: String,
    pub answer: String,
}

/// The FAQ record: the first [`FAQ_SCHEMA_LIMIT`] entries only.
pub fn faq_schema(faq: &[FaqEntry]) -> Vec<FaqSchemaEntry> {
    faq.iter()
        .take(FAQ_SCHEMA_LIMIT)
        .map(|entry| FaqSchemaEntry {
            question: entry.question.as_str().to_string(),
            answer: entry.answer.as_str().to_string(),
        })
        .collect()
}

/// Serialize a record as a single-line object literal.
pub fn to_literal<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
