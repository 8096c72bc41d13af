use anyhow::Context;
use elsewhere_catalog::{load_catalog, CatalogStats};
use std::path::PathBuf;

pub fn run(catalog: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let settings = super::settings(catalog, None)?;
    let records = load_catalog(&settings.catalog)
        .with_context(|| format!("failed to load catalog {}", settings.catalog.display()))?;

    let stats = CatalogStats::from_records(&records);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", build_report(&stats));
    }
    Ok(())
}

fn build_report(stats: &CatalogStats) -> String {
    let mut lines = vec![
        "Catalog Statistics".to_string(),
        "==================".to_string(),
        format!("  Total:   {}", stats.total),
        format!("  Current: {}", stats.current),
        format!("  Legacy:  {}", stats.legacy),
    ];

    if !stats.by_category.is_empty() {
        lines.push(String::new());
        lines.push("By category:".to_string());
        let width = stats.by_category.keys().map(|k| k.len()).max().unwrap_or(0);
        for (category, count) in &stats.by_category {
            lines.push(format!("  {:<width$}  {}", category, count, width = width));
        }
    }

    lines.join("\n")
}
