// nearkey-compile: Compile a text word list into the binary trie format.
//
// Usage:
//   nearkey-compile -w WORDLIST OUTPUT

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist_path, args) = nearkey_cli::parse_wordlist_path(&args);

    if nearkey_cli::wants_help(&args) || wordlist_path.is_none() {
        println!("nearkey-compile: Compile a word list into the binary trie format.");
        println!();
        println!("Usage: nearkey-compile -w WORDLIST OUTPUT");
        return;
    }

    let Some(output) = args.iter().find(|a| !a.starts_with('-')) else {
        nearkey_cli::fatal("an OUTPUT path is required");
    };

    let trie = nearkey_cli::load_trie(wordlist_path.as_deref())
        .unwrap_or_else(|e| nearkey_cli::fatal(&e));

    let bytes = trie.to_bytes();
    std::fs::write(output, &bytes)
        .unwrap_or_else(|e| nearkey_cli::fatal(&format!("failed to write {output}: {e}")));

    println!(
        "wrote {} ({} nodes, {} bytes)",
        output,
        trie.node_count(),
        bytes.len()
    );
}
