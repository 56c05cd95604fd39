//! Whole-tree audits through the library API.

use doclinks::check::{Audit, AuditTarget, Category, Issue, Severity};
use doclinks::config::Settings;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup_tree(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

fn audit(root: &Path) -> Vec<Issue> {
    let target = AuditTarget::resolve(root).unwrap();
    Audit::new(Settings::default()).run(&target).unwrap().issues
}

fn normalized(file: &str) -> String {
    file.replace('\\', "/")
}

#[test]
fn documentation_tree() {
    let temp = setup_tree(&[
        (
            "README.md",
            "# Project\n\n\
             - [Install](docs/install.md#requirements)\n\
             - [Usage](docs/usage.md)\n\
             - [API](docs/api.md)\n\
             \n\
             ![banner](assets/banner.png)\n",
        ),
        (
            "docs/install.md",
            "# Install\n\n## Requirements\n\nBack to [top](../README.md#project).\n",
        ),
        (
            "docs/usage.md",
            "# Usage\n\n```bash\n[not a link](nowhere.md)\n```\n\nSee [setup](install.md#setup).\n",
        ),
    ]);

    let issues = audit(temp.path());

    assert_eq!(issues.len(), 3);

    assert_eq!(issues[0].file, "README.md");
    assert_eq!(issues[0].line, 5);
    assert_eq!(issues[0].category, Category::BrokenLink);
    assert_eq!(issues[0].message, "Link target not found: docs/api.md");

    assert_eq!(issues[1].file, "README.md");
    assert_eq!(issues[1].category, Category::MissingImage);
    assert_eq!(issues[1].severity, Severity::Critical);

    assert_eq!(normalized(&issues[2].file), "docs/usage.md");
    assert_eq!(issues[2].line, 7);
    assert_eq!(issues[2].severity, Severity::Warning);
    assert_eq!(issues[2].message, "Anchor #setup not found in install.md");
    assert_eq!(
        issues[2].suggestion.as_deref(),
        Some("Available anchors: install, requirements")
    );
}

#[test]
fn explicit_anchor_ids_are_linkable() {
    let temp = setup_tree(&[
        ("a.md", "[x](b.md#custom-id)\n[y](b.md#heading)\n"),
        ("b.md", "## Heading {#custom-id}\n"),
    ]);

    let issues = audit(temp.path());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Anchor #heading not found in b.md");
}

#[test]
fn inline_code_is_not_checked() {
    let temp = setup_tree(&[("a.md", "Use `[x](missing.md)` syntax.\n")]);

    assert!(audit(temp.path()).is_empty());
}

#[test]
fn reference_links_are_not_resolved() {
    let temp = setup_tree(&[("a.md", "See [the guide][guide] and [notes][].\n")]);

    assert!(audit(temp.path()).is_empty());
}

#[test]
fn missing_image_stays_critical() {
    let temp = setup_tree(&[("a.md", "![alt](missing.png)\n")]);

    let issues = audit(temp.path());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Critical);
    assert_eq!(issues[0].category, Category::MissingImage);
}

#[test]
fn anchors_into_non_markdown_files_are_checked() {
    let temp = setup_tree(&[("a.md", "[cfg](config.toml#section)\n"), ("config.toml", "")]);

    let issues = audit(temp.path());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category, Category::MissingAnchor);
    assert!(issues[0].suggestion.is_none());
}

#[test]
fn settings_control_suggestion_counts() {
    let temp = setup_tree(&[
        ("a.md", "[x](guide.md#zzz)\n[y](nope.md)\n"),
        ("guide.md", "# One\n# Two\n# Three\n"),
    ]);

    let settings = Settings {
        max_suggestions: 1,
        anchor_samples: 2,
        ..Settings::default()
    };
    let target = AuditTarget::resolve(temp.path()).unwrap();
    let report = Audit::new(settings).run(&target).unwrap();

    assert_eq!(
        report.issues[0].suggestion.as_deref(),
        Some("Available anchors: one, three")
    );
    assert_eq!(report.issues[1].suggestion.as_deref(), Some("Did you mean: a.md"));
}

#[test]
fn repeated_runs_are_identical() {
    let temp = setup_tree(&[
        ("b.md", "[x](gone.md)\n"),
        ("a/z.md", "[y](#nope)\n"),
        ("a/y.md", "![i](i.png)\n"),
    ]);

    let first = audit(temp.path());
    let second = audit(temp.path());

    assert_eq!(first, second);
    let files: Vec<_> = first.iter().map(|i| normalized(&i.file)).collect();
    assert_eq!(files, vec!["a/y.md", "a/z.md", "b.md"]);
}
