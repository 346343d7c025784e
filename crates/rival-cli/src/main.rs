//! Interactive competitive-analysis REPL.
//!
//! Thin I/O wrapper around [`rival_agent::Agent`]: reads questions from
//! stdin, prints answers, and exposes the recent history on demand.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rival_agent::Agent;
use rival_core::config::RivalConfig;
use rival_corpus::CorpusStore;

/// Characters of each answer shown by the `history` command.
const HISTORY_ANSWER_PREVIEW: usize = 500;

#[derive(Parser, Debug)]
#[command(name = "rival", version, about = "Ask questions about a competitors dataset")]
struct Cli {
    /// Path to the competitors CSV.
    #[arg(long, default_value = "data/competitors.csv")]
    data: PathBuf,

    /// Optional TOML config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Passages returned per query.
    #[arg(long)]
    top_k: Option<usize>,

    /// Number of (query, answer) pairs kept in history.
    #[arg(long)]
    max_history: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RivalConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RivalConfig::default(),
    };
    if let Some(top_k) = cli.top_k {
        config.retrieval.top_k = top_k;
    }
    if let Some(max_history) = cli.max_history {
        config.history.max_entries = max_history;
    }

    let corpus = CorpusStore::load(&cli.data)
        .with_context(|| format!("loading corpus {}", cli.data.display()))?;
    let api_key = RivalConfig::api_key();
    let mut agent = Agent::build(&corpus, &config, api_key.as_deref());

    println!("Competitive Analysis Agent");
    println!("Type your question, or 'history' to view recent queries, or 'exit' to quit.\n");

    let stdin = io::stdin();
    loop {
        print!("You> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF.
            println!();
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        match query.to_lowercase().as_str() {
            "exit" | "quit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "history" => {
                print_history(&agent);
                continue;
            }
            _ => {}
        }

        let answer = agent.reason_and_act(query);
        println!("\nAgent> {answer}\n");
    }

    Ok(())
}

fn print_history(agent: &Agent) {
    let entries = agent.history();
    if entries.is_empty() {
        println!("(no history yet)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let mut preview: String = entry.answer.chars().take(HISTORY_ANSWER_PREVIEW).collect();
        if entry.answer.chars().count() > HISTORY_ANSWER_PREVIEW {
            preview.push_str("...");
        }
        println!("\n[{}] Q: {}\nA: {}", i + 1, entry.query, preview);
    }
}
