use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{GenerationConfig, generate_dungeon};
use tracing_subscriber::EnvFilter;
use xxhash_rust::xxh3::xxh3_64;

mod render;
mod seed;

use render::render_ascii;
use seed::{SeedChoice, generate_runtime_seed};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for generation. Omitting it picks a fresh runtime seed.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a TOML generation config. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the xxh3 fingerprint of the result instead of a render.
    #[arg(long)]
    fingerprint: bool,

    /// Print the stage list as JSON instead of a render.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let choice = match args.seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generate_runtime_seed()),
    };
    if let SeedChoice::Generated(seed) = choice {
        eprintln!("no seed given; generated runtime seed {seed} (not reproducible)");
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };

    let dungeon = generate_dungeon(choice.value(), &config)
        .with_context(|| format!("generation failed for seed {}", choice.value()))?;

    if args.fingerprint {
        println!("{:016x}", xxh3_64(&dungeon.canonical_bytes()));
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon.stages)?);
    } else {
        print!("{}", render_ascii(&dungeon));
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<GenerationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_config_reads_partial_toml_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "vertical_step = 40\n").expect("write config");

        let config = load_config(file.path()).expect("config parses");
        assert_eq!(config.vertical_step, 40);
        assert_eq!(config.room, GenerationConfig::default().room);
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "vertical_step = \"not a number\"").expect("write config");
        assert!(load_config(file.path()).is_err());
    }
}
