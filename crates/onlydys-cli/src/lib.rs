// onlydys-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use onlydys_core::entry::DictionaryEntry;
use onlydys_fr::handle::{OnlyDysError, OnlyDysHandle};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Dictionary file name looked up in the default locations.
const DICT_FILE: &str = "dictionary_full.json";

/// Environment variable holding the log filter.
const LOG_ENV: &str = "ONLYDYS_LOG";

/// Install a stderr log subscriber.
///
/// The filter comes from `ONLYDYS_LOG` (e.g. `onlydys_fr=trace`) and
/// defaults to `warn`, or `debug` with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Search for the dictionary file and create an OnlyDysHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `ONLYDYS_DICT_PATH` environment variable
/// 3. `~/.onlydys/dictionary_full.json`
/// 4. `./data/dictionary_full.json`
/// 5. `./dictionary_full.json`
pub fn load_handle(dict_path: Option<&str>) -> Result<OnlyDysHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            debug!(path = %path.display(), "loading dictionary");
            return load_dictionary(path);
        }
    }

    Err(format!(
        "could not find a dictionary in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Load a dictionary file: a JSON array of records, or a tab-separated
/// list when the extension is `.tsv`.
pub fn load_dictionary(path: &Path) -> Result<OnlyDysHandle, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

    let is_tsv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
    let handle = if is_tsv {
        OnlyDysHandle::from_tsv(&contents)
    } else {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(&contents)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
        OnlyDysHandle::new(entries)
    };
    handle.map_err(|e: OnlyDysError| format!("failed to load {}: {e}", path.display()))
}

/// Build the list of dictionary files to try.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. ONLYDYS_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("ONLYDYS_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".onlydys").join(DICT_FILE));
    }

    // 4-5. Current directory (local development)
    paths.push(PathBuf::from("data").join(DICT_FILE));
    paths.push(PathBuf::from(DICT_FILE));

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match args.get(i + 1) {
                Some(value) => {
                    dict_path = Some(value.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Return the value following `-x` / `--long`, or `--long=VALUE`.
pub fn option_value(args: &[String], short: &str, long: &str) -> Option<String> {
    let prefix = format!("{long}=");
    args.iter().enumerate().find_map(|(i, arg)| {
        if let Some(value) = arg.strip_prefix(prefix.as_str()) {
            Some(value.to_string())
        } else if arg == short || arg == long {
            match args.get(i + 1) {
                Some(value) => Some(value.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            None
        }
    })
}

/// Positional arguments: everything that is not an option or the value of
/// one of `value_options`.
pub fn positional(args: &[String], value_options: &[&str]) -> Vec<String> {
    let mut result = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if value_options.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with('-') {
            result.push(arg.clone());
        }
    }
    result
}

/// Check for `-v` / `--verbose`.
pub fn wants_verbose(args: &[String]) -> bool {
    args.iter().any(|a| a == "--verbose" || a == "-v")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
