//! Reads one source file, tokenizes it and prints one JSON token per line.
//!
//! Usage: `toylex [expression|bit-machine|<grammar.json>] [source-path]`
//!
//! The grammar defaults to `expression` and the source to `test.txt`.
//! Logging goes to stderr, controlled by `TOYLEX_LOG` or `RUST_LOG`
//! (default `warn`).

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use toylex::{tokenize, Error, Grammar, ScannerConfig};

const DEFAULT_SOURCE: &str = "test.txt";

/// Build an `EnvFilter` from `TOYLEX_LOG`, falling back to `RUST_LOG`, then `warn`.
fn build_filter() -> EnvFilter {
    match std::env::var("TOYLEX_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(selector: &str) -> Result<ScannerConfig> {
    if selector.ends_with(".json") {
        return ScannerConfig::from_json_file(selector)
            .with_context(|| format!("loading grammar from {}", selector));
    }
    let grammar: Grammar = selector.parse()?;
    Ok(grammar.config().clone())
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let selector = args.next().unwrap_or_else(|| "expression".to_string());
    let path = args.next().unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    let config = load_config(&selector)?;
    let source = std::fs::read_to_string(&path).map_err(|e| Error::io(path.as_str(), &e))?;

    let tokens = tokenize(&source, &config).with_context(|| format!("scanning {}", path))?;
    for token in &tokens {
        println!("{}", serde_json::to_string(token)?);
    }

    Ok(())
}
