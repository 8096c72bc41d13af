use anyhow::Context;
use elsewhere_catalog::load_merged;
use elsewhere_core::{Catalog, ScoredCandidate};
use std::path::PathBuf;

pub struct SearchArgs {
    pub query: String,
    pub catalog: Option<PathBuf>,
    pub overrides: Option<PathBuf>,
    /// `None` falls back to the saved preference
    pub show_legacy: Option<bool>,
    pub json: bool,
    pub scores: bool,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let settings = super::settings(args.catalog, args.overrides)?.with_show_legacy(args.show_legacy);

    let records = load_merged(&settings.catalog, &settings.overrides)
        .with_context(|| format!("failed to load catalog {}", settings.catalog.display()))?;
    let catalog = Catalog::new(records);
    tracing::debug!(records = catalog.len(), show_legacy = settings.show_legacy, "catalog ready");

    let results = catalog.search_scored(&args.query, settings.show_legacy);
    println!("{}", render(&results, args.json, args.scores)?);
    Ok(())
}

fn render(results: &[ScoredCandidate<'_>], json: bool, scores: bool) -> anyhow::Result<String> {
    if json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .map(|c| -> serde_json::Result<serde_json::Value> {
                let mut row = serde_json::to_value(c.record.record())?;
                if scores {
                    row["score"] = serde_json::json!(c.score);
                }
                Ok(row)
            })
            .collect::<serde_json::Result<_>>()?;
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    if results.is_empty() {
        return Ok("No matches.".to_string());
    }

    let lines: Vec<String> = results
        .iter()
        .map(|c| {
            let record = c.record;
            let edition = if record.is_legacy() { " (legacy)" } else { "" };
            let score = if scores {
                format!("{:>4}  ", c.score)
            } else {
                String::new()
            };
            format!(
                "{}{} [{}]{}  {}",
                score,
                record.name(),
                record.category(),
                edition,
                record.url()
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
