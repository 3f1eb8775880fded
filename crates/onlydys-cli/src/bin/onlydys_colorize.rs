// onlydys-colorize: Colorize French text for reading.
//
// Reads text from stdin, one paragraph per line, and prints the colorized
// document. The default output paints the runs with ANSI 24-bit colors;
// --json prints the document model the word-processor plugin consumes.
// A JSON document model can be read instead of plain text with
// --input-json.
//
// Usage:
//   onlydys-colorize [-d DICT_PATH] -m MODE [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (JSON or .tsv), used by grammar mode
//   -m, --mode MODE        none, grammar, phonemes, alternphonemes, syllables,
//                          silent, alternlettres, alternmots, vowels,
//                          consonants, letters, alternlines
//   -t, --targets LETTERS  Letters highlighted by the letters mode
//   --arcs                 Mark syllables for arc drawing
//   --silent               Gray out silent letters in phoneme/syllable modes
//   --highlight            Color backgrounds instead of text
//   --style                Also apply the reading font
//   --input-json           Read a JSON document model from stdin
//   --json                 Print the JSON document model
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, Read, Write};

use onlydys_core::text::{DocumentModel, TextRun};
use onlydys_fr::colorize::{ColorMode, ColorizeOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = onlydys_cli::parse_dict_path(&args);

    if onlydys_cli::wants_help(&args) {
        println!("onlydys-colorize: Colorize French text for reading.");
        println!();
        println!("Usage: onlydys-colorize [-d DICT_PATH] -m MODE [OPTIONS]");
        println!();
        println!("Reads text from stdin, one paragraph per line.");
        println!();
        println!("Modes:");
        for mode in ColorMode::ALL {
            println!("  {mode}");
        }
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (JSON or .tsv), used by grammar mode");
        println!("  -m, --mode MODE        Colorization mode (default: syllables)");
        println!("  -t, --targets LETTERS  Letters highlighted by the letters mode");
        println!("      --arcs             Mark syllables for arc drawing");
        println!("      --silent           Gray out silent letters in phoneme/syllable modes");
        println!("      --highlight        Color backgrounds instead of text");
        println!("      --style            Also apply the reading font");
        println!("      --input-json       Read a JSON document model from stdin");
        println!("      --json             Print the JSON document model");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -h, --help             Print this help");
        return;
    }
    onlydys_cli::init_tracing(onlydys_cli::wants_verbose(&args));

    let has_flag = |flag: &str| args.iter().any(|a| a == flag);

    let mode: ColorMode = onlydys_cli::option_value(&args, "-m", "--mode")
        .unwrap_or_else(|| "syllables".to_string())
        .parse()
        .unwrap_or_else(|e| onlydys_cli::fatal(&format!("{e}")));

    let mut handle = onlydys_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| onlydys_cli::fatal(&e));
    handle.set_colorize_options(ColorizeOptions {
        show_arcs: has_flag("--arcs"),
        highlight_silent: has_flag("--silent"),
        use_highlighting: has_flag("--highlight"),
        target_letters: onlydys_cli::option_value(&args, "-t", "--targets"),
    });

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| onlydys_cli::fatal(&format!("failed to read stdin: {e}")));

    let document: DocumentModel = if has_flag("--input-json") {
        serde_json::from_str(&input)
            .unwrap_or_else(|e| onlydys_cli::fatal(&format!("invalid document model: {e}")))
    } else {
        DocumentModel::from_plain_text(input.trim_end_matches('\n'))
    };

    let mut colored = handle.colorize(&document, mode);
    if has_flag("--style") {
        colored = handle.apply_reading_style(&colored);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if has_flag("--json") {
        let text = serde_json::to_string_pretty(&colored)
            .unwrap_or_else(|e| onlydys_cli::fatal(&e.to_string()));
        let _ = writeln!(out, "{text}");
        return;
    }

    for paragraph in &colored.paragraphs {
        for run in &paragraph.text_runs {
            let _ = write!(out, "{}", ansi(run));
        }
        let _ = writeln!(out);
    }
}

/// Render a run with ANSI 24-bit escape codes.
fn ansi(run: &TextRun) -> String {
    let mut codes = Vec::new();
    if run.formatting.bold == Some(true) {
        codes.push("1".to_string());
    }
    if run.formatting.show_arc == Some(true) {
        codes.push("4".to_string());
    }
    if let Some((r, g, b)) = run.formatting.color.as_deref().and_then(parse_hex) {
        codes.push(format!("38;2;{r};{g};{b}"));
    }
    if let Some((r, g, b)) = run.formatting.background_color.as_deref().and_then(parse_hex) {
        codes.push(format!("48;2;{r};{g};{b}"));
    }
    if codes.is_empty() {
        run.text.clone()
    } else {
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), run.text)
    }
}

/// Parse `#RRGGBB`.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
