use crate::cli::EditionArg;
use anyhow::Context;
use elsewhere_catalog::{coverage, load_catalog, CoverageRow, EditionFilter};
use std::path::{Path, PathBuf};

pub fn run(reference: &Path, catalog: Option<PathBuf>, edition: Option<EditionArg>) -> anyhow::Result<()> {
    let settings = super::settings(catalog, None)?;
    let records = load_catalog(&settings.catalog)
        .with_context(|| format!("failed to load catalog {}", settings.catalog.display()))?;
    let reference_records = load_catalog(reference)
        .with_context(|| format!("failed to load reference {}", reference.display()))?;

    let filter = edition.map(|e| match e {
        EditionArg::Legacy => EditionFilter::Legacy,
        EditionArg::Current => EditionFilter::Current,
    });
    let rows = coverage(&records, &reference_records, filter);
    println!("{}", build_report(&rows, edition));
    Ok(())
}

fn build_report(rows: &[CoverageRow], edition: Option<EditionArg>) -> String {
    let mut lines = vec!["Coverage Report".to_string()];
    match edition {
        Some(EditionArg::Legacy) => lines.push("(legacy entries only)".to_string()),
        Some(EditionArg::Current) => lines.push("(current entries only)".to_string()),
        None => {}
    }
    lines.push("=".repeat(50));

    let width = rows.iter().map(|r| r.category.len()).max().unwrap_or(0);
    for row in rows {
        lines.push(format!(
            "  {:<width$}  {:>4} / {:<4}  ({:5.1}%)",
            row.category,
            row.covered,
            row.total,
            row.percent(),
            width = width
        ));
    }

    for row in rows.iter().filter(|r| !r.missing.is_empty()) {
        lines.push(String::new());
        lines.push(format!("--- Missing {} ({}) ---", row.category, row.missing.len()));
        lines.extend(row.missing.iter().map(|name| format!("  {}", name)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let rows = vec![
            CoverageRow {
                category: "Spell".to_string(),
                covered: 1,
                total: 2,
                missing: vec!["Magic Missile".to_string()],
            },
            CoverageRow {
                category: "Class".to_string(),
                covered: 1,
                total: 1,
                missing: vec![],
            },
        ];
        let report = build_report(&rows, Some(EditionArg::Legacy));
        assert!(report.contains("(legacy entries only)"));
        assert!(report.contains("  Spell     1 / 2     ( 50.0%)"));
        assert!(report.contains("--- Missing Spell (1) ---"));
        assert!(report.contains("  Magic Missile"));
        assert!(!report.contains("Missing Class"));
    }
}
