//! Spritepass CLI
//!
//! Command-line interface for deriving passwords from images. Image
//! decoding is out of scope for the core, so this demo binary feeds
//! the pipeline from the synthetic pattern source.

use clap::Parser;
use spritepass::{
    config::{ComplexityPreset, FileConfig},
    password::PasswordPolicy,
    pipeline::Pipeline,
    source::{ImageSource, PatternSource},
    stream::SeedMode,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "spritepass", version, about = "Derive passwords from image entropy")]
struct Args {
    /// Password length in characters.
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Number of passwords to derive.
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Complexity preset: simple, alphanumeric, or full.
    #[arg(short = 'p', long, default_value = "full")]
    preset: String,

    /// Number of synthetic source images to feed the pipeline.
    #[arg(long, default_value_t = 1)]
    images: u32,

    /// Seed from system randomness instead of image entropy.
    #[arg(long)]
    random: bool,

    /// Optional TOML config file (overrides length/count/preset).
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Spritepass v{}", spritepass::VERSION);
    info!("This is a demonstration using synthetic pattern images");

    let (policy, count, algorithm) = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => (
                config.policy,
                config.derivation.count,
                config.derivation.hash.into(),
            ),
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let preset = match ComplexityPreset::from_name(&args.preset) {
                Some(p) => p,
                None => {
                    eprintln!("Unknown preset: {}", args.preset);
                    std::process::exit(1);
                }
            };
            (preset.policy(args.length), args.count, Default::default())
        }
    };

    let mode = if args.random {
        SeedMode::SystemRandom
    } else {
        SeedMode::Deterministic
    };

    let mut source = PatternSource::new(64, 64, args.images.max(1));
    let mut images = Vec::new();
    while let Ok(image) = source.next_image() {
        images.push(image);
    }

    info!("Deriving from {} image(s)...", images.len());

    let pipeline = Pipeline::new(algorithm, mode);
    match pipeline.derive_passwords(&images, &policy, count) {
        Ok(passwords) => {
            for (i, password) in passwords.iter().enumerate() {
                println!("{}: {}", i + 1, password);
            }
            report(&policy, mode, passwords.len());
        }
        Err(e) => {
            eprintln!("Derivation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn report(policy: &PasswordPolicy, mode: SeedMode, count: usize) {
    info!(
        "Done: {} password(s) of length {} ({} seeding)",
        count,
        policy.length,
        match mode {
            SeedMode::Deterministic => "deterministic",
            SeedMode::SystemRandom => "system-random",
        }
    );
}
