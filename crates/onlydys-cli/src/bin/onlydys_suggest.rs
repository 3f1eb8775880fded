// onlydys-suggest: Rank spelling suggestions for words from stdin.
//
// Reads words from stdin (one per line) and prints ranked corrections
// for each, with the confusion type between the word and each suggestion.
// With --text, reads running text and checks every word in context.
//
// Usage:
//   onlydys-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH      Dictionary file (JSON or .tsv)
//   -n, --max-suggestions N   Maximum number of suggestions (default: 5)
//   -m, --model MODEL         Ranking model: weighted or distance
//   -p, --previous WORD       Word typed before (grammatical context)
//   --text                    Read running text instead of single words
//   --json                    Print JSON
//   -v, --verbose             Debug logging on stderr
//   -h, --help                Print help

use std::io::{self, BufRead, Read, Write};

use onlydys_fr::handle::OnlyDysHandle;
use onlydys_fr::suggestion::RankingModel;

const VALUE_OPTIONS: &[&str] = &[
    "-n",
    "--max-suggestions",
    "-m",
    "--model",
    "-p",
    "--previous",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = onlydys_cli::parse_dict_path(&args);

    if onlydys_cli::wants_help(&args) {
        println!("onlydys-suggest: Rank spelling suggestions for French words.");
        println!();
        println!("Usage: onlydys-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH      Dictionary file (JSON or .tsv)");
        println!("  -n, --max-suggestions N   Maximum number of suggestions (default: 5)");
        println!("  -m, --model MODEL         Ranking model: weighted (default) or distance");
        println!("  -p, --previous WORD       Word typed before (grammatical context)");
        println!("      --text                Read running text from stdin");
        println!("      --json                Print JSON");
        println!("  -v, --verbose             Debug logging on stderr");
        println!("  -h, --help                Print this help");
        return;
    }
    onlydys_cli::init_tracing(onlydys_cli::wants_verbose(&args));

    let mut handle = onlydys_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| onlydys_cli::fatal(&e));

    if let Some(value) = onlydys_cli::option_value(&args, "-n", "--max-suggestions") {
        let limit: usize = value
            .parse()
            .unwrap_or_else(|_| onlydys_cli::fatal("invalid number for --max-suggestions"));
        handle.set_max_suggestions(limit);
    }
    if let Some(value) = onlydys_cli::option_value(&args, "-m", "--model") {
        let model: RankingModel = value
            .parse()
            .unwrap_or_else(|e| onlydys_cli::fatal(&format!("{e}")));
        handle.set_ranking_model(model);
    }
    let previous = onlydys_cli::option_value(&args, "-p", "--previous");
    let json = args.iter().any(|a| a == "--json");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.iter().any(|a| a == "--text") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| onlydys_cli::fatal(&format!("failed to read stdin: {e}")));
        let results = handle.suggest_text(&input);
        if json {
            let text = serde_json::to_string_pretty(&results)
                .unwrap_or_else(|e| onlydys_cli::fatal(&e.to_string()));
            let _ = writeln!(out, "{text}");
        } else {
            for entry in &results {
                let words: Vec<&str> = entry.suggestions.iter().map(|s| s.word.as_str()).collect();
                let _ = writeln!(out, "{}: {}", entry.word, words.join(", "));
            }
        }
        return;
    }

    let suggest_word = |word: &str, handle: &OnlyDysHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let suggestions = handle.suggest(word, previous.as_deref());
        if json {
            let value = serde_json::json!({ "word": word, "suggestions": suggestions });
            let _ = writeln!(out, "{value}");
        } else if suggestions.is_empty() {
            let _ = writeln!(out, "{word}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{word}:");
            for s in &suggestions {
                let label = handle.classify(word, &s.word);
                let _ = writeln!(
                    out,
                    "  {:<20} {:.3}  {:<4} {}",
                    s.word,
                    s.score,
                    s.grammar_tag.as_str(),
                    label.confusion_type
                );
            }
        }
    };

    let words = onlydys_cli::positional(&args, VALUE_OPTIONS);
    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &handle, &mut out);
        }
    }
}
