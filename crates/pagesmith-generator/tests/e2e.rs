//! End-to-end tests for page generation.
//!
//! These tests load batches the way the CLI does and check the files that
//! land on disk.

use std::{fs, path::Path};

use chrono::NaiveDate;
use pagesmith_core::{Batch, Config, EscapedText, config::OutputConfig};
use pagesmith_generator::{Generator, keyword_report};
use tempfile::TempDir;

const BATCH: &str = r#"
pages:
  - slug: how-to-store-xrp
    title: How to Store XRP Safely
    accent: Complete Security Guide
    subtitle: Protect your XRP with the right wallet.
    desc: Learn how to store XRP safely with hardware and software wallets.
    kw: [store XRP, XRP wallet, XRP security]
    facts:
      - { l: Best Option, v: Hardware Wallet }
      - { l: Reserve, v: 10 XRP }
    sections:
      - { id: wallet-types, label: Wallet Types }
      - { id: faq, label: FAQ }
    stats:
      - { l: Best, v: Hardware }
      - { l: Reserve, v: 10 XRP }
      - { l: Backup, v: Seed Phrase }
    tldr: 'Use a <strong className="text-text-primary">hardware wallet</strong>.'
    body: |
      <RevealSection id="wallet-types">
        <h2>Wallet Types</h2>
      </RevealSection>
    faq:
      - { q: What's the safest way?, a: A hardware wallet. }
      - { q: Do I need a reserve?, a: "Yes, 10 XRP." }
    related:
      - { href: /learn/xrp-wallets, label: XRP Wallets, desc: Compare wallets }
    cta:
      title: Secure Your XRP
      desc: Pick a wallet today.
      pri: { href: /learn/xrp-wallets, label: "Wallet Guide →" }
      sec: { href: /learn/what-is-xrp, label: What is XRP? }
  - slug: xrp-reserve
    title: XRP Reserve
    accent: Why 10 XRP Stays Locked
    subtitle: The account reserve explained.
    desc: Why every XRP account holds a reserve.
    kw: [XRP reserve]
    facts: []
    sections: []
    stats: []
    tldr: The reserve prevents ledger spam.
    body: ''
    faq: []
    related: []
    cta:
      title: Learn More
      desc: Keep reading.
      pri: { href: /learn/a, label: A }
      sec: { href: /learn/b, label: B }
"#;

fn write_batch(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("pages.yaml");
    fs::write(&path, BATCH).unwrap();
    path
}

fn generator(output: &Path) -> Generator {
    let config = Config {
        output: OutputConfig {
            dir: output.to_path_buf(),
            entry_file: "page.tsx".to_string(),
        },
        ..Config::default()
    };
    Generator::new(config, NaiveDate::from_ymd_opt(2026, 2, 15).unwrap())
}

#[test]
fn test_batch_file_generates_pages() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let batch = Batch::load(&write_batch(input.path())).unwrap();

    let stats = generator(output.path()).generate_batch(&batch.pages).unwrap();

    assert_eq!(stats.written, 2);
    assert_eq!(stats.skipped, 0);

    let page = output.path().join("how-to-store-xrp").join("page.tsx");
    let source = fs::read_to_string(page).unwrap();
    assert!(source.contains(r#"title={"How to Store XRP Safely"}"#));
    assert!(source.contains(r#"titleAccent={"Complete Security Guide"}"#));
    assert!(source.contains(r#"{"q":"What's the safest way?","a":"A hardware wallet."},"#));
    assert!(source.contains(r#"<StatPill label={"Backup"} value={"Seed Phrase"} delay={0.12} />"#));
    assert!(source.contains(r#"primaryLabel={"Wallet Guide →"}"#));
    assert!(source.contains(batch.pages[0].spec.body.as_str()));

    assert!(output.path().join("xrp-reserve").join("page.tsx").exists());
}

#[test]
fn test_existing_slug_is_never_overwritten() {
    let output = TempDir::new().unwrap();
    let generator = generator(output.path());
    let batch: Batch = serde_yaml::from_str(BATCH).unwrap();
    let entry = &batch.pages[0];

    let first = generator.generate(&entry.slug, &entry.spec).unwrap();
    assert!(first.written);
    let original = fs::read_to_string(&first.path).unwrap();

    let mut changed = entry.spec.clone();
    changed.title = EscapedText::new("Something Else Entirely");
    let second = generator.generate(&entry.slug, &changed).unwrap();

    assert!(!second.written);
    assert_eq!(second.path, first.path);
    assert_eq!(fs::read_to_string(&second.path).unwrap(), original);
}

#[test]
fn test_quoted_description_decodes_exactly() {
    let output = TempDir::new().unwrap();
    let batch: Batch = serde_yaml::from_str(BATCH).unwrap();
    let mut spec = batch.pages[1].spec.clone();
    spec.description = EscapedText::new(r#"A "quoted" phrase"#);

    let generated = generator(output.path()).generate("quoted", &spec).unwrap();
    let source = fs::read_to_string(generated.path).unwrap();

    let line = source
        .lines()
        .find(|l| l.trim_start().starts_with("description: "))
        .unwrap();
    let literal = line
        .trim()
        .trim_start_matches("description: ")
        .trim_end_matches(',');
    let decoded: String = serde_json::from_str(literal).unwrap();
    assert_eq!(decoded, r#"A "quoted" phrase"#);
}

#[test]
fn test_second_batch_run_skips_everything() {
    let output = TempDir::new().unwrap();
    let generator = generator(output.path());
    let batch: Batch = serde_yaml::from_str(BATCH).unwrap();

    generator.generate_batch(&batch.pages).unwrap();
    let stats = generator.generate_batch(&batch.pages).unwrap();

    assert_eq!(stats.written, 0);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.skipped_slugs, vec!["how-to-store-xrp", "xrp-reserve"]);
}

#[test]
fn test_keyword_report_for_batch() {
    let batch: Batch = serde_yaml::from_str(BATCH).unwrap();
    let report = keyword_report(&Config::default(), &batch.pages);

    assert!(report.contains("2 pages."));
    assert!(report.contains(
        "| /learn/how-to-store-xrp | How to Store XRP Safely: Complete Security Guide | store XRP, XRP wallet, XRP security |"
    ));
}

#[test]
fn test_unquoted_numbers_render_as_text() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let yaml = BATCH
        .replace("{ l: Best, v: Hardware }", "{ l: Launched, v: 2012 }")
        .replace("{ l: Backup, v: Seed Phrase }", "{ l: Fee, v: 1.5 }")
        .replace("{ l: Reserve, v: 10 XRP }\n    sections", "{ l: Validators, v: 150 }\n    sections");
    let path = input.path().join("numbers.yaml");
    fs::write(&path, yaml).unwrap();

    let batch = Batch::load(&path).unwrap();
    let stats = generator(output.path()).generate_batch(&batch.pages).unwrap();
    assert_eq!(stats.written, 2);

    let page = output.path().join("how-to-store-xrp").join("page.tsx");
    let source = fs::read_to_string(page).unwrap();
    assert!(source.contains(r#"<StatPill label={"Launched"} value={"2012"} delay={0.00} />"#));
    assert!(source.contains(r#"<StatPill label={"Fee"} value={"1.5"} delay={0.12} />"#));
    assert!(source.contains(r#"{"label":"Validators","value":"150"},"#));
}
