//! New command - create a skeleton batch file for a page

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use pagesmith_core::{
    Batch, BatchEntry, Cta, CtaLink, EscapedText, FaqEntry, Fact, PageSpec, RawMarkup,
    RelatedLink, Section, Stat, lint::FAQ_SCHEMA_LIMIT,
};
use pagesmith_generator::{WriteOutcome, write_if_absent};

/// Run the new command.
///
/// Writes a batch file with one placeholder entry for `slug`. An existing
/// file is never overwritten.
pub fn run(slug: &str, file: &Path) -> Result<()> {
    tracing::info!(slug, ?file, "Creating new batch file");

    let batch = Batch {
        pages: vec![skeleton_entry(slug)],
    };
    let yaml = batch.to_yaml().wrap_err("Failed to serialize batch")?;

    match write_if_absent(file, &yaml).wrap_err("Failed to write file")? {
        WriteOutcome::Written => {
            tracing::info!(?file, "Created new batch file");
            println!("Created: {}", file.display());
            Ok(())
        }
        WriteOutcome::Skipped => bail!("{} already exists", file.display()),
    }
}

fn skeleton_entry(slug: &str) -> BatchEntry {
    let title = title_from_slug(slug);
    let text = |s: &str| EscapedText::new(s);

    let spec = PageSpec {
        title: EscapedText::new(title.clone()),
        accent: text("Complete Guide"),
        subtitle: text("One sentence on what the reader will learn."),
        description: EscapedText::new(format!(
            "Everything you need to know about {title}, explained step by step."
        )),
        keywords: vec![title.to_lowercase()],
        facts: vec![Fact {
            label: text("Key Fact"),
            value: text("Value"),
        }],
        sections: vec![
            Section {
                id: text("overview"),
                label: text("Overview"),
            },
            Section {
                id: text("faq"),
                label: text("FAQ"),
            },
        ],
        stats: vec![Stat {
            label: text("Stat"),
            value: text("Value"),
        }],
        tldr: RawMarkup::new(format!(
            r#"<strong className="text-text-primary">{title}</strong> in one or two sentences."#
        )),
        body: RawMarkup::new(format!(
            r#"          <RevealSection id="overview">
            <h2 className="text-2xl font-bold text-text-primary">Overview</h2>
            <p className="mt-4 text-text-secondary leading-relaxed">What {title} is and why it matters.</p>
          </RevealSection>"#
        )),
        faq: (1..=FAQ_SCHEMA_LIMIT)
            .map(|i| FaqEntry {
                question: EscapedText::new(format!("Question {i}?")),
                answer: EscapedText::new(format!("Answer {i}.")),
            })
            .collect(),
        related: vec![RelatedLink {
            href: text("/learn"),
            label: text("Learn"),
            desc: text("More guides"),
        }],
        cta: Cta {
            title: text("Keep Learning"),
            desc: text("Where the reader should go next."),
            pri: CtaLink {
                href: text("/learn"),
                label: text("All Guides →"),
            },
            sec: CtaLink {
                href: text("/"),
                label: text("Home"),
            },
        },
        breadcrumb: None,
    };

    BatchEntry {
        slug: slug.to_string(),
        spec,
    }
}

/// `how-to-buy-xrp` → `How To Buy Xrp`.
fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
