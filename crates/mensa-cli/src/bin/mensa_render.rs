// mensa-render: Render annotated menu text as HTML.
//
// Renders each TEXT argument (or each stdin line) and prints the HTML on
// stdout. The codes found in the text are printed to stderr, sorted by rank.
// Unknown annotation codes are logged as warnings.
//
// Usage:
//   mensa-render [-l LANG] [TEXT...]
//
// Options:
//   -l, --lang LANG   Render language: de or en (default: $MENSA_LANG or de)
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use mensa_annot::{Annotation, AnnotationSets, Extractor};
use mensa_core::{ItemIdentity, Language, TracingSink};

fn join_codes<A: Annotation>(list: &[A]) -> String {
    list.iter().map(|a| a.code()).collect::<Vec<_>>().join(",")
}

fn render_line(line_no: usize, text: &str, lang: Language, out: &mut impl Write) {
    let item = ItemIdentity::new("cli", format!("line {line_no}"));
    let mut sets = AnnotationSets::new();
    let html = Extractor::new(&item, &TracingSink).render(text, lang, &mut sets);
    let _ = writeln!(out, "{html}");

    let sorted = sets.into_sorted();
    if sorted.is_empty() {
        return;
    }
    eprintln!(
        "  additives=[{}] allergens=[{}] ingredients=[{}]",
        join_codes(&sorted.additives),
        join_codes(&sorted.allergens),
        join_codes(&sorted.ingredients),
    );
}

fn main() {
    mensa_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lang, args) =
        mensa_cli::parse_lang(&args).unwrap_or_else(|e| mensa_cli::fatal(&e.to_string()));

    if mensa_cli::wants_help(&args) {
        println!("mensa-render: Render annotated menu text as HTML.");
        println!();
        println!("Usage: mensa-render [-l LANG] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, renders each one.");
        println!("Otherwise reads text from stdin (one item per line).");
        println!();
        println!("Options:");
        println!("  -l, --lang LANG   Render language: de or en (default: $MENSA_LANG or de)");
        println!("  -h, --help        Print this help");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.is_empty() {
        let stdin = io::stdin();
        for (i, line) in stdin.lock().lines().enumerate() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            render_line(i + 1, &line, lang, &mut out);
        }
    } else {
        for (i, text) in args.iter().enumerate() {
            render_line(i + 1, text, lang, &mut out);
        }
    }
}
