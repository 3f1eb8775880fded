// onlydys-simulate: Show text the way a dyslexic reader may perceive it.
//
// Reads text from stdin and prints it with the inner letters of long words
// scrambled. First and last letters, spacing and punctuation are kept.
//
// Usage:
//   onlydys-simulate [OPTIONS]
//
// Options:
//   -l, --min-length N   Shortest word to scramble (default: 5)
//   -c, --chance N       Percentage of words scrambled (default: 100)
//   -s, --seed N         Seed for reproducible output
//   -v, --verbose        Debug logging on stderr
//   -h, --help           Print help

use std::io::{self, Read, Write};

use onlydys_fr::simulation::{SimulationOptions, simulate_dyslexia};

fn parse_number<T: std::str::FromStr>(args: &[String], short: &str, long: &str) -> Option<T> {
    onlydys_cli::option_value(args, short, long).map(|value| {
        value
            .parse()
            .unwrap_or_else(|_| onlydys_cli::fatal(&format!("invalid number for {long}: {value}")))
    })
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if onlydys_cli::wants_help(&args) {
        println!("onlydys-simulate: Simulate dyslexic reading of French text.");
        println!();
        println!("Usage: onlydys-simulate [OPTIONS]");
        println!();
        println!("Reads text from stdin and scrambles the inside of long words.");
        println!();
        println!("Options:");
        println!("  -l, --min-length N   Shortest word to scramble (default: 5)");
        println!("  -c, --chance N       Percentage of words scrambled (default: 100)");
        println!("  -s, --seed N         Seed for reproducible output");
        println!("  -v, --verbose        Debug logging on stderr");
        println!("  -h, --help           Print this help");
        return;
    }
    onlydys_cli::init_tracing(onlydys_cli::wants_verbose(&args));

    let defaults = SimulationOptions::default();
    let options = SimulationOptions {
        min_word_length: parse_number(&args, "-l", "--min-length").unwrap_or(defaults.min_word_length),
        scramble_chance: parse_number(&args, "-c", "--chance").unwrap_or(defaults.scramble_chance),
        seed: parse_number(&args, "-s", "--seed"),
    };

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| onlydys_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = write!(out, "{}", simulate_dyslexia(&input, &options));
}
