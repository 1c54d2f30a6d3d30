//! Page and keyword report.
//!
//! A Markdown table listing every page's URL path, title, target keywords
//! and meta description, for tracking keyword coverage across a section.

use pagesmith_core::{BatchEntry, Config};

/// Render the keyword report for `entries`, sorted by slug.
pub fn keyword_report(config: &Config, entries: &[BatchEntry]) -> String {
    let mut sorted: Vec<&BatchEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.slug.cmp(&b.slug));

    let section = config.section.path.trim_matches('/');
    let mut out = String::new();

    out.push_str(&format!("# {} {} Pages\n\n", config.site.name, config.section.name));
    out.push_str(&format!("{} pages.\n\n", sorted.len()));
    out.push_str("| URL Path | Page Title | Target Keywords | Meta Description |\n");
    out.push_str("|----------|------------|-----------------|------------------|\n");

    for entry in sorted {
        let spec = &entry.spec;
        out.push_str(&format!(
            "| /{}/{} | {} | {} | {} |\n",
            section,
            entry.slug,
            cell(spec.full_title().as_str()),
            cell(&spec.keywords.join(", ")),
            cell(spec.description.as_str()),
        ));
    }

    out
}

/// Escape a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
