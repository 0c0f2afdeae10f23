//! SAMHSA claim check binary.
//!
//! Reads a JSON array of `{"id": ..., "claim": {...}}` entries from the file
//! named by the first argument (or stdin) and prints one JSON verdict per
//! line.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use samhsa_loader::{discover_code_lists, DirectorySource, LoaderConfig};
use samhsa_matcher::{explain_batch, init_global, ClaimEntry, MatcherConfig, VerdictLine};
use samhsa_types::ClaimCodedView;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout carries the verdicts
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = MatcherConfig::from_env()?;
    tracing::info!(
        "Loading SAMHSA code lists from: {}",
        config.codes_path.display()
    );

    let files = discover_code_lists(&config.codes_path, &LoaderConfig::default())?;
    let source = DirectorySource::from_files(&files)?;
    let tables = init_global(&source)?;

    let input: Box<dyn Read> = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Reading claims from: {}", path);
            Box::new(File::open(path)?)
        }
        None => Box::new(io::stdin().lock()),
    };
    let entries: Vec<ClaimEntry> = serde_json::from_reader(BufReader::new(input))?;

    let (ids, claims): (Vec<_>, Vec<ClaimCodedView>) = entries
        .into_iter()
        .map(|entry| (entry.id, entry.claim))
        .unzip();

    let findings = explain_batch(&claims, tables, config.generation);
    let sensitive = findings.iter().filter(|finding| finding.is_some()).count();

    let mut out = BufWriter::new(io::stdout().lock());
    for (id, finding) in ids.into_iter().zip(findings) {
        serde_json::to_writer(&mut out, &VerdictLine::new(id, finding))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    tracing::info!(
        "Checked {} claims under {} rules: {} sensitive",
        claims.len(),
        config.generation,
        sensitive
    );

    Ok(())
}
