// nearkey-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use nearkey_trie::{Trie, TrieBuilder};

/// Default word-list file name searched in the working directory.
const WORDLIST_FILE: &str = "words.txt";

/// Frequency assigned to word-list lines that carry none.
const DEFAULT_FREQ: u32 = 128;

/// Locate and load a dictionary.
///
/// Search order:
/// 1. `wordlist_path` argument (if provided)
/// 2. `NEARKEY_WORDLIST` environment variable
/// 3. `words.txt` in the current working directory
///
/// A file that starts with the trie magic is loaded as a compiled
/// dictionary (see `nearkey-compile`); anything else is parsed as a text
/// word list.
pub fn load_trie(wordlist_path: Option<&str>) -> Result<Trie, String> {
    let search_paths = build_search_paths(wordlist_path);

    for path in &search_paths {
        if !path.is_file() {
            continue;
        }
        let data =
            std::fs::read(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        if let Ok(trie) = Trie::from_bytes(&data) {
            return Ok(trie);
        }
        let text = String::from_utf8(data)
            .map_err(|_| format!("{} is neither a compiled trie nor UTF-8 text", path.display()))?;
        return Ok(parse_wordlist(&text));
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary paths.
fn build_search_paths(wordlist_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = wordlist_path {
        paths.push(PathBuf::from(p));
    }

    // 2. NEARKEY_WORDLIST environment variable
    if let Ok(env_path) = std::env::var("NEARKEY_WORDLIST") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Parse a text word list: one word per line, an optional whitespace-
/// separated frequency after it. Blank lines and `#` comments are skipped.
pub fn parse_wordlist(text: &str) -> Trie {
    let mut builder = TrieBuilder::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            continue;
        };
        let freq = parts
            .next()
            .and_then(|f| f.parse().ok())
            .unwrap_or(DEFAULT_FREQ);
        builder.insert(word, freq);
    }
    builder.build()
}

/// Parse a `--wordlist=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(wordlist_path, remaining_args)`.
pub fn parse_wordlist_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut wordlist_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--wordlist=") {
            wordlist_path = Some(val.to_string());
        } else if arg == "--wordlist" || arg == "-w" {
            if i + 1 < args.len() {
                wordlist_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (wordlist_path, remaining)
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
