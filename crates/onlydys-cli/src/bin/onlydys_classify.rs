// onlydys-classify: Explain how a misspelling relates to a correction.
//
// Reads pairs from stdin, one per line as "typed<TAB>suggestion" (or two
// words separated by spaces), and prints the confusion type with its
// phonetic codes.
//
// Usage:
//   onlydys-classify [OPTIONS] [TYPED SUGGESTION]
//
// Options:
//   --json          Print one JSON object per pair
//   -v, --verbose   Debug logging on stderr
//   -h, --help      Print help

use std::io::{self, BufRead, Write};

use onlydys_fr::phonetic::encode;
use onlydys_fr::suggestion::classify;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if onlydys_cli::wants_help(&args) {
        println!("onlydys-classify: Classify the confusion between two French words.");
        println!();
        println!("Usage: onlydys-classify [OPTIONS] [TYPED SUGGESTION]");
        println!();
        println!("If two words are given, classifies that pair.");
        println!("Otherwise reads \"typed suggestion\" pairs from stdin (one per line).");
        println!();
        println!("Options:");
        println!("      --json          Print one JSON object per pair");
        println!("  -v, --verbose       Debug logging on stderr");
        println!("  -h, --help          Print this help");
        return;
    }
    onlydys_cli::init_tracing(onlydys_cli::wants_verbose(&args));

    let json = args.iter().any(|a| a == "--json");
    let words = onlydys_cli::positional(&args, &[]);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let classify_pair = |typed: &str, suggestion: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let label = classify(typed, suggestion);
        if json {
            let value = serde_json::json!({
                "typed": typed,
                "suggestion": suggestion,
                "label": label,
            });
            let _ = writeln!(out, "{value}");
        } else {
            let _ = writeln!(
                out,
                "{typed} ({}) -> {suggestion} ({}): {} {}",
                encode(typed),
                encode(suggestion),
                label.confusion_type,
                label.icon
            );
        }
    };

    match words.as_slice() {
        [] => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        eprintln!("error reading stdin: {e}");
                        break;
                    }
                };
                let mut parts = line.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(typed), Some(suggestion)) => classify_pair(typed, suggestion, &mut out),
                    (Some(_), None) => eprintln!("skipping line without a suggestion: {line}"),
                    _ => {}
                }
            }
        }
        [typed, suggestion] => classify_pair(typed.as_str(), suggestion.as_str(), &mut out),
        _ => onlydys_cli::fatal("expected exactly two words: TYPED SUGGESTION"),
    }
}
