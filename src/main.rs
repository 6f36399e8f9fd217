use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use saffron_chartgen::{exporter, Generator, GeneratorConfig, DEFAULT_SOUND_FILE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Random chart generator for Saffron Rhythm Duel", long_about = None)]
struct Args {
    /// Number of beats per chart
    #[arg(short = 'n', long)]
    number: u32,

    /// Output directory for charts
    #[arg(short, long, default_value = "assets/charts")]
    output: PathBuf,

    /// Number of charts to generate
    #[arg(long, default_value = "1")]
    count: u32,

    /// Song file the chart points at
    #[arg(long, default_value = DEFAULT_SOUND_FILE)]
    sound_file: String,

    /// Seconds between beats
    #[arg(long, default_value = "0.3")]
    beat_duration: f32,

    /// Seconds of lead-in before playback
    #[arg(long, default_value = "1.5")]
    lead_time: f32,

    /// Seed the random generator for reproducible charts
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_default_env()
        .filter_level(level.parse()?)
        .init();

    let generator = Generator::new(GeneratorConfig {
        sound_file: args.sound_file,
        beat_duration_secs: args.beat_duration,
        lead_time_secs: args.lead_time,
    });

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Generating {} chart(s) with {} beats each",
        args.count,
        args.number
    );

    let mut written = Vec::new();
    for _ in 0..args.count {
        let chart = generator.generate(&mut rng, args.number);
        let path = exporter::write_chart(&chart, &args.output)?;
        log::info!("Saved chart '{}' to: {}", chart.chart_name, path.display());
        written.push(path);
    }

    println!(
        "generated {} chart(s) in {}",
        written.len(),
        args.output.display()
    );

    Ok(())
}
