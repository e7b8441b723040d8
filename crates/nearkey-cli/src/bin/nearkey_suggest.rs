// nearkey-suggest: Generate correction suggestions for typed words.
//
// Reads words from stdin (one per line) or from the command line and prints
// ranked suggestions for each.
//
// Usage:
//   nearkey-suggest [-w WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -w, --wordlist PATH      Word list (text or compiled trie)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 5)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use nearkey_core::KeyboardLayout;
use nearkey_correct::Suggester;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = nearkey_cli::parse_wordlist_path(&args);

    if nearkey_cli::wants_help(&args) {
        println!("nearkey-suggest: Generate correction suggestions.");
        println!();
        println!("Usage: nearkey-suggest [-w WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH      Word list (text or compiled trie)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: usize = 5;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| nearkey_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                nearkey_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let trie = nearkey_cli::load_trie(wordlist_path.as_deref())
        .unwrap_or_else(|e| nearkey_cli::fatal(&e));
    let layout = KeyboardLayout::qwerty();
    let suggester = Suggester::new(&trie, &layout).with_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word = |word: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let suggestions = suggester.suggest(word);
        if suggestions.is_empty() {
            let _ = writeln!(out, "{word}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{word}:");
            for s in &suggestions {
                let _ = writeln!(out, "  {} ({})", s.word, s.score);
            }
        }
    };

    if words.is_empty() {
        // Read from stdin
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
            suggest_word(word, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &mut out);
        }
    }
}
