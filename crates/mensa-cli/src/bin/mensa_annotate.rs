// mensa-annotate: Compute the annotation fields of menu items.
//
// Reads a JSON array of menu items from FILE (or stdin) and prints a JSON
// array with the computed fields of every item: translated category, the six
// rendered HTML fields, sorted annotation codes, gluten-free flag and dietary
// category.
//
// Usage:
//   mensa-annotate [--legend] [FILE]
//
// Options:
//   --legend     Also print the merged annotation legend of all items
//   -h, --help   Print help

use std::io::{self, Write};

use serde_json::json;

use mensa_annot::{ComputedFields, MenuItem, merge_legend};
use mensa_cli::CliError;
use mensa_core::TracingSink;

fn run(path: Option<&str>, legend: bool) -> Result<(), CliError> {
    let input = mensa_cli::read_input(path)?;
    let mut items: Vec<MenuItem> = serde_json::from_str(&input)?;
    items.sort_by(MenuItem::cmp_category);

    let computed: Vec<ComputedFields> = items.iter().map(|item| item.compute(&TracingSink)).collect();
    tracing::info!(items = computed.len(), "computed menu items");

    let value = if legend {
        let merged = merge_legend(computed.iter().map(|c| &c.annotations));
        json!({ "items": computed, "legend": merged })
    } else {
        serde_json::to_value(&computed)?
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut out, &value)?;
    let _ = writeln!(out);
    Ok(())
}

fn main() {
    mensa_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if mensa_cli::wants_help(&args) {
        println!("mensa-annotate: Compute the annotation fields of menu items.");
        println!();
        println!("Usage: mensa-annotate [--legend] [FILE]");
        println!();
        println!("Reads a JSON array of menu items from FILE, or from stdin if");
        println!("FILE is omitted or \"-\". Prints the computed fields as JSON.");
        println!();
        println!("Options:");
        println!("  --legend     Also print the merged annotation legend of all items");
        println!("  -h, --help   Print this help");
        return;
    }

    let legend = args.iter().any(|a| a == "--legend");
    let path = args.iter().find(|a| *a != "--legend").map(String::as_str);

    if let Err(e) = run(path, legend) {
        mensa_cli::fatal(&e.to_string());
    }
}
