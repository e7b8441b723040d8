// nearkey-spell: Check words against the dictionary.
//
// Reads words from stdin (one per line) or from the command line and prints
// whether each is in the dictionary.
//
// Usage:
//   nearkey-spell [-w WORDLIST] [WORD...]

use std::io::{self, BufRead, Write};

use nearkey_trie::Trie;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = nearkey_cli::parse_wordlist_path(&args);

    if nearkey_cli::wants_help(&args) {
        println!("nearkey-spell: Check words against the dictionary.");
        println!();
        println!("Usage: nearkey-spell [-w WORDLIST] [WORD...]");
        println!();
        println!("If WORD arguments are given, checks each word.");
        println!("Otherwise reads words from stdin (one per line).");
        return;
    }

    let trie = nearkey_cli::load_trie(wordlist_path.as_deref())
        .unwrap_or_else(|e| nearkey_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let check_word = |word: &str, trie: &Trie, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let chars: Vec<char> = word.chars().collect();
        match trie.lookup(&chars) {
            Some(freq) => {
                let _ = writeln!(out, "{word}: ok ({freq})");
            }
            None => {
                let _ = writeln!(out, "{word}: not found");
            }
        }
    };

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

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
            check_word(word, &trie, &mut out);
        }
    } else {
        for word in &words {
            check_word(word, &trie, &mut out);
        }
    }
}
