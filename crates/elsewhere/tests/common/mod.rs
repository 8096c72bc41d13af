#![allow(dead_code)]

use elsewhere_core::{index, IndexedRecord, Record};

pub fn record(name: &str, category: &str) -> Record {
    let slug = name.to_lowercase().replace(' ', "-");
    Record::new(
        name,
        category,
        format!("https://www.dndbeyond.com/{}/{}", category.to_lowercase(), slug),
    )
}

pub fn legacy_record(name: &str, category: &str) -> Record {
    let mut record = record(name, category).with_edition("legacy");
    record.url = format!("{}?edition=2014", record.url);
    record
}

pub fn sample_records() -> Vec<Record> {
    vec![
        record("Wizard", "Class"),
        record("Red Wizard", "Monster"),
        record("Fireball", "Spell"),
        record("Fire Bolt", "Spell"),
        record("Acid Splash", "Spell"),
    ]
}

pub fn sample_index() -> Vec<IndexedRecord> {
    index(sample_records())
}

pub fn names(results: &[&IndexedRecord]) -> Vec<String> {
    results.iter().map(|r| r.name().to_string()).collect()
}
