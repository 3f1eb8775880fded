// onlydys-analyze: Phonemes, syllables and silent letters of words.
//
// Reads words from stdin (one per line) and prints the phonetic code,
// phoneme segmentation, syllables and silent final letters of each word,
// plus its lemma and grammar tag when a dictionary is available.
//
// Usage:
//   onlydys-analyze [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (JSON or .tsv)
//   --json                 Print one JSON object per word
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use onlydys_fr::handle::OnlyDysHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = onlydys_cli::parse_dict_path(&args);

    if onlydys_cli::wants_help(&args) {
        println!("onlydys-analyze: Segment French words for reading aids.");
        println!();
        println!("Usage: onlydys-analyze [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (JSON or .tsv)");
        println!("      --json             Print one JSON object per word");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -h, --help             Print this help");
        return;
    }
    onlydys_cli::init_tracing(onlydys_cli::wants_verbose(&args));

    let json = args.iter().any(|a| a == "--json");
    let words = onlydys_cli::positional(&args, &[]);

    let handle = onlydys_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| onlydys_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let analyze_word = |word: &str, handle: &OnlyDysHandle, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let analysis = handle.analyze_word(word);
        let code = handle.phonetic_code(word);
        let lemma = handle.lemmatize(word);
        let tag = handle.grammar_tag(word);
        if json {
            let value = serde_json::json!({
                "analysis": analysis,
                "code": code,
                "lemma": lemma,
                "grammarTag": tag,
            });
            let _ = writeln!(out, "{value}");
            return;
        }
        let _ = writeln!(out, "{word}:");
        let _ = writeln!(out, "  code:      {code}");
        let _ = writeln!(out, "  phonemes:  {}", analysis.phonemes.join(" | "));
        let _ = writeln!(out, "  syllables: {}", analysis.syllables.join("-"));
        let silent: String = word
            .chars()
            .enumerate()
            .filter(|(i, _)| analysis.silent_letters.contains(i))
            .map(|(_, c)| c)
            .collect();
        let _ = writeln!(out, "  silent:    {}", if silent.is_empty() { "-" } else { silent.as_str() });
        let _ = writeln!(out, "  lemma:     {lemma}");
        match tag {
            Some(tag) => {
                let _ = writeln!(out, "  category:  {} ({})", tag.as_str(), tag.label());
            }
            None => {
                let _ = writeln!(out, "  category:  (unknown)");
            }
        }
    };

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
            analyze_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            analyze_word(word, &handle, &mut out);
        }
    }
}
