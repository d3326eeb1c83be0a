use std::{io::Write, path::PathBuf, process::ExitCode};

use clap::Parser;
use distgen::{Error, GeneratorConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
struct Args {
    /// Number of values to print
    #[clap(long)]
    count: Option<usize>,

    /// Mean of the normal distribution
    #[clap(long, allow_hyphen_values = true)]
    mean: Option<f64>,

    /// Standard deviation, must be positive
    #[clap(long, allow_hyphen_values = true)]
    std_dev: Option<f64>,

    /// Seed for reproducible output
    #[clap(long)]
    seed: Option<u64>,

    /// JSON file with `mean`, `std_dev`, `seed` and `count`; flags win over it
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn resolve(&self) -> Result<GeneratorConfig, Error> {
        let file_config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading generator config");
                GeneratorConfig::from_file(path)?
            }
            None => GeneratorConfig::default(),
        };
        Ok(file_config.merge(GeneratorConfig {
            mean: self.mean,
            std_dev: self.std_dev,
            seed: self.seed,
            count: self.count,
        }))
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<(), Error> {
    let config = args.resolve()?;
    let generator = config.build_generator()?;
    writeln!(out, "Sample values from {}:", generator.distribution()).map_err(Error::Output)?;
    for value in generator.take(config.count()) {
        writeln!(out, "{value}").map_err(Error::Output)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
