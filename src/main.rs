use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rsa_files::rsa::{generate_candidate, process, TransformConfig};
use rsa_files::util::{read_file, read_key_file, write_file};

/// RSA-style file transform and probable prime generation
#[derive(Parser, Debug)]
#[command(name = "rsa-files", version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encrypt or decrypt a file; the mode is inferred from the input length.
    Transform {
        /// Key file: decimal modulus on line one, decimal exponent on line two.
        key_file: PathBuf,
        /// Input file, plaintext or ciphertext.
        message_file: PathBuf,
        /// Where to write the result.
        output_file: PathBuf,
    },

    /// Generate a probable prime of up to BITS bits.
    Prime {
        bits: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().cmd {
        Cmd::Transform {
            key_file,
            message_file,
            output_file,
        } => transform(&key_file, &message_file, &output_file),
        Cmd::Prime { bits } => prime(bits),
    }
}

fn transform(key_file: &Path, message_file: &Path, output_file: &Path) -> Result<()> {
    let key = read_key_file(key_file)
        .with_context(|| format!("read key file {}", key_file.display()))?;
    let input = read_file(message_file)
        .with_context(|| format!("read message file {}", message_file.display()))?;
    tracing::info!(
        modulus_bits = key.params.bit_length(),
        input_len = input.len(),
        "loaded key and input"
    );

    let start = Instant::now();
    let (mode, output) =
        process(&key, &input, &TransformConfig::default()).context("transform failed")?;
    println!("{} in {:.6} seconds", mode, start.elapsed().as_secs_f64());

    write_file(output_file, &output)
        .with_context(|| format!("write output file {}", output_file.display()))?;
    Ok(())
}

fn prime(bits: u64) -> Result<()> {
    let start = Instant::now();
    let p = generate_candidate(bits, &mut rand::thread_rng()).context("prime generation failed")?;
    println!("{}", p);
    println!("Generation took {} seconds", start.elapsed().as_secs_f64());
    Ok(())
}
