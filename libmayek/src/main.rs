use libmayek::{MayekConfig, Transliterator};
use libmayek_core::utils::normalize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_config() -> MayekConfig {
    let path = Path::new("mayek.toml");
    if !path.exists() {
        return MayekConfig::default();
    }
    match MayekConfig::load_toml(path) {
        Ok(cfg) => {
            info!(path = %path.display(), "loaded config");
            cfg
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            MayekConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("libmayek=info")),
        )
        .init();

    let engine = Transliterator::new(load_config());

    println!("libmayek - Bengali to Meetei Mayek");
    println!("Type Bengali text and press Enter. Ctrl+D to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let input = normalize(&line?);
        if input.is_empty() {
            continue;
        }
        for word in input.split_whitespace() {
            let record = engine.transliterate_with(word, true, true);
            if record.is_empty() {
                writeln!(stdout, "  {word} → (nothing to transliterate)")?;
            } else {
                writeln!(stdout, "  {record}")?;
            }
        }
        writeln!(stdout)?;
    }
    Ok(())
}
