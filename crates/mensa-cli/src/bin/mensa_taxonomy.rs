// mensa-taxonomy: List the annotation taxonomies.
//
// Prints every additive, allergen and ingredient code in rank order together
// with its description.
//
// Usage:
//   mensa-taxonomy [-l LANG] [KIND...]
//
// KIND is one of additive, allergen or ingredient; all three are listed if
// none is given.
//
// Options:
//   -l, --lang LANG   Description language: de or en (default: $MENSA_LANG or de)
//   -h, --help        Print help

use std::io::{self, Write};

use mensa_annot::AnnotationKind;

fn main() {
    mensa_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lang, args) =
        mensa_cli::parse_lang(&args).unwrap_or_else(|e| mensa_cli::fatal(&e.to_string()));

    if mensa_cli::wants_help(&args) {
        println!("mensa-taxonomy: List the annotation taxonomies.");
        println!();
        println!("Usage: mensa-taxonomy [-l LANG] [KIND...]");
        println!();
        println!("KIND is additive, allergen or ingredient (default: all).");
        println!();
        println!("Options:");
        println!("  -l, --lang LANG   Description language: de or en (default: $MENSA_LANG or de)");
        println!("  -h, --help        Print this help");
        return;
    }

    let kinds: Vec<AnnotationKind> = if args.is_empty() {
        AnnotationKind::ALL.to_vec()
    } else {
        args.iter()
            .map(|a| {
                a.parse::<AnnotationKind>()
                    .unwrap_or_else(|e| mensa_cli::fatal(&e.to_string()))
            })
            .collect()
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{kind}:");
        for entry in kind.taxonomy().entries() {
            let _ = writeln!(out, "  {:<4} {}", entry.code, entry.text(lang));
        }
    }
}
