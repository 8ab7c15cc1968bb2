use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use logos_core::config::{load_config, Config};
use logos_core::core::types::{Connection, RootStudy, VerseHit, WordStudy};
use logos_core::SemanticEngine;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Verse text is cut to this many characters in ranked listings.
const PREVIEW_CHARS: usize = 70;

#[derive(Parser)]
#[command(name = "logos", version, about = "Concept-based verse search over the KJV and Strong's")]
struct Cli {
    /// Config file (defaults to ./logos.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding kjv.json and strongs.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Always rebuild the index, never read or write the cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find semantically similar verses
    Similar {
        reference: String,
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Search by theological concept
    Concept {
        name: String,
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Search by meaning
    Meaning {
        #[arg(required = true)]
        query: Vec<String>,
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Explain the connection between two verses
    Explain { ref1: String, ref2: String },
    /// List all concepts
    Concepts,
    /// Show the Hebrew/Greek roots behind an English word
    Study { word: String },
    /// Corpus and index sizes
    Stats,
    /// Interactive semantic search
    Repl,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => apply_overrides(config, &cli),
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };

    let engine = match SemanticEngine::open(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };

    let default_n = config.default_results;
    match cli.command {
        Command::Similar { reference, count } => {
            print_similar(&engine, &reference, count.unwrap_or(default_n))
        }
        Command::Concept { name, count } => {
            print_concept(&engine, &name, count.unwrap_or(default_n))
        }
        Command::Meaning { query, count } => {
            print_meaning(&engine, &query.join(" "), count.unwrap_or(default_n))
        }
        Command::Explain { ref1, ref2 } => print_connection(engine.explain_connection(&ref1, &ref2)),
        Command::Concepts => print_concepts(&engine),
        Command::Study { word } => print_study(&engine, &word),
        Command::Stats => print_stats(&engine),
        Command::Repl => {
            if let Err(e) = repl(&engine, default_n) {
                eprintln!("[ERROR] {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if cli.no_cache {
        config.cache_file = None;
    }
    config
}

fn repl(engine: &SemanticEngine, n: usize) -> std::io::Result<()> {
    println!("\n{}", "=== LOGOS SEMANTIC SEARCH ===".bold().cyan());
    print_help();

    loop {
        print!("{} ", "SEMANTIC>".bold());
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            println!("\nShalom.");
            break;
        }
        let cmd = input.trim();
        if cmd.is_empty() {
            continue;
        }

        let (command, arg) = match cmd.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (cmd, ""),
        };

        match command.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("Shalom.");
                break;
            }
            "similar" => print_similar(engine, arg, n),
            "concept" => print_concept(engine, arg, n),
            "meaning" => print_meaning(engine, arg, n),
            "explain" => match split_references(engine, arg) {
                Some((ref1, ref2)) => print_connection(engine.explain_connection(ref1, ref2)),
                None => println!("Usage: explain <ref1> <ref2>  (or <ref1> | <ref2>)"),
            },
            "concepts" => print_concepts(engine),
            "study" => print_study(engine, arg),
            "stats" => print_stats(engine),
            "help" => print_help(),
            // Anything else is a meaning search
            _ => print_meaning(engine, cmd, n),
        }
    }
    Ok(())
}

/// Splits the argument of `explain` into two references. An explicit `|` or
/// `,` wins. Otherwise every whitespace split is tried, and the first one
/// where both sides name a verse exactly is used, so `John 3:16 Romans 5:8`
/// works. Falls back to the first whitespace split.
fn split_references<'a>(engine: &SemanticEngine, arg: &'a str) -> Option<(&'a str, &'a str)> {
    for separator in ['|', ','] {
        if let Some((left, right)) = arg.split_once(separator) {
            let (left, right) = (left.trim(), right.trim());
            return (!left.is_empty() && !right.is_empty()).then_some((left, right));
        }
    }

    let names_verse = |side: &str| {
        engine
            .resolve_reference(side)
            .is_some_and(|resolved| resolved.eq_ignore_ascii_case(side))
    };
    let mut first = None;
    for (i, c) in arg.char_indices().filter(|(_, c)| c.is_whitespace()) {
        let (left, right) = (arg[..i].trim(), arg[i + c.len_utf8()..].trim());
        if left.is_empty() || right.is_empty() {
            continue;
        }
        if names_verse(left) && names_verse(right) {
            return Some((left, right));
        }
        first.get_or_insert((left, right));
    }
    first
}

fn print_help() {
    println!("Commands:");
    println!("  similar <ref>          - Find semantically similar verses");
    println!("  concept <name>         - Search by theological concept");
    println!("  meaning <query>        - Search by meaning");
    println!("  explain <ref1> <ref2>  - Explain connection (or <ref1> | <ref2>)");
    println!("  study <word>           - Hebrew/Greek roots behind a word");
    println!("  concepts               - List all concepts");
    println!("  stats                  - Corpus and index sizes");
    println!("  quit                   - Exit");
    println!();
}

fn print_similar(engine: &SemanticEngine, reference: &str, n: usize) {
    let results = engine.similar_verses(reference, n);
    if results.is_empty() {
        println!("No similar verses found for '{}'.", reference);
        return;
    }
    let resolved = engine.resolve_reference(reference).unwrap_or(reference);
    println!("\nVerses similar to {}:\n", resolved.bold());
    for (other, score) in &results {
        println!("  {:.3} | {}", score, other.as_str().cyan());
        println!("         {}", preview(engine.verse_text(other).unwrap_or_default()));
    }
    println!();
}

fn print_concept(engine: &SemanticEngine, name: &str, n: usize) {
    let Some(concept) = engine.resolve_concept(name) else {
        println!("Concept not found: {}", name);
        let guidance = engine.concept_guidance(name);
        if !guidance.suggestions.is_empty() {
            println!("Did you mean: {}?", guidance.suggestions.join(", ").yellow());
        }
        println!("Available: {}", guidance.available.join(", "));
        return;
    };
    let hits = engine.search_concept(name, n);
    println!("\n=== VERSES ABOUT: {} ===\n", concept.to_uppercase().bold());
    for hit in &hits {
        println!("  {}", hit.reference.as_str().cyan());
        println!("    {}", preview(&hit.text));
    }
    println!();
}

fn print_meaning(engine: &SemanticEngine, query: &str, n: usize) {
    let concepts: Vec<String> = engine.query_concepts(query).into_iter().collect();
    if concepts.is_empty() {
        println!("No semantic concepts found for: {}", query);
        return;
    }
    println!("Searching concepts: {}", concepts.join(", ").yellow());
    let hits = engine.search_meaning(query, n);
    if hits.is_empty() {
        println!("No verses match those concepts.");
        return;
    }
    println!("\nVerses matching meaning '{}':\n", query);
    print_hits(&hits);
}

fn print_hits(hits: &[VerseHit]) {
    for hit in hits {
        println!("  {:.3} | {}", hit.score, hit.reference.as_str().cyan());
        println!("         {}", preview(&hit.text));
    }
    println!();
}

fn print_connection(connection: Option<Connection>) {
    match connection {
        Some(c) => {
            println!("\nConnection between {} and {}:", c.ref1.as_str().bold(), c.ref2.as_str().bold());
            println!("  Shared concepts: {}", c.shared_concepts.join(", ").yellow());
            println!("  Similarity: {:.3}", c.similarity);
        }
        None => println!("No semantic connection found"),
    }
}

fn print_concepts(engine: &SemanticEngine) {
    println!("\nTheological concepts:");
    for concept in engine.concept_names() {
        println!("  {}", concept);
    }
    println!();
}

fn print_study(engine: &SemanticEngine, word: &str) {
    let Some(WordStudy { word, roots, concepts }) = engine.word_study(word) else {
        println!("'{}' is not in the word study tables.", word);
        return;
    };
    println!("\n=== WORD STUDY: {} ===\n", word.to_uppercase().bold());
    for RootStudy { id, entry } in &roots {
        match entry {
            Some(entry) => {
                println!(
                    "  {} {} ({})",
                    id.to_string().cyan(),
                    entry.script_form,
                    entry.transliteration
                );
                if !entry.gloss.is_empty() {
                    println!("      Definition: {}", entry.gloss);
                }
                if !entry.usage_notes.is_empty() {
                    println!("      KJV usage: {}", entry.usage_notes);
                }
                if entry.frequency > 0 {
                    println!("      Occurrences: {}", entry.frequency);
                }
            }
            None => println!("  {} (no catalog entry)", id.to_string().cyan()),
        }
    }
    if !concepts.is_empty() {
        println!("\n  Concepts: {}", concepts.join(", ").yellow());
    }
    println!();
}

fn print_stats(engine: &SemanticEngine) {
    let stats = engine.stats();
    println!("Verses:                 {}", stats.verses);
    println!("Verse vectors:          {}", stats.indexed_verses);
    println!("Word->Strong's entries: {}", stats.word_mappings);
    println!("Concept categories:     {}", stats.concepts);
    println!("Strong's entries:       {}", stats.catalog_entries);
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", cut)
}
