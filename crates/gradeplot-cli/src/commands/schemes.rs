//! Schemes command - list catalogued schemes, levels and spellings.

use colored::Colorize;
use gradeplot::{Catalog, SchemeId};

pub fn run(scheme: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::global();

    let selected: Vec<SchemeId> = match scheme {
        Some(name) => vec![name.parse::<SchemeId>()?],
        None => catalog.schemes().collect(),
    };

    for scheme in selected {
        print_scheme(catalog, scheme);
    }

    Ok(())
}

fn print_scheme(catalog: &Catalog, scheme: SchemeId) {
    let parent = scheme.catalog_scheme();
    if parent == scheme {
        println!("{}", scheme.to_string().cyan().bold());
    } else {
        println!(
            "{} {}",
            scheme.to_string().cyan().bold(),
            format!("(reduction of {}, selected with --force)", parent).dimmed()
        );
    }

    let entries = catalog.entries_for(scheme);
    for (level, color) in catalog
        .levels_of(scheme)
        .iter()
        .zip(catalog.colors_of(scheme))
    {
        let spellings: Vec<&str> = entries
            .iter()
            .filter(|e| e.canonical_label == *level)
            .map(|e| e.raw_value)
            .collect();
        println!(
            "  {} {:<20} {}",
            "■".truecolor(color.r(), color.g(), color.b()),
            level.white(),
            spellings.join(", ").dimmed()
        );
    }
    println!();
}
