use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use css_scenario::{
    config::{ScenarioConfig, ScenarioSetup},
    scenario::run,
};
use sim_result::ResultManager;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Coarse sun sensors on a spinning spacecraft", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scenario and write the sensor signal histories as csv
    Run {
        /// RON scenario configuration, defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Evaluate both sensors as one constellation
        #[arg(long)]
        constellation: bool,
        /// Mount the sensors on a yawed platform using azimuth and elevation
        #[arg(long)]
        platform: bool,
        /// Attenuate the sun with the configured shadow factor
        #[arg(long)]
        eclipse: bool,
        /// Apply the configured Kelly factor
        #[arg(long)]
        kelly: bool,
        /// Root folder for the results
        #[arg(short, long, default_value = "results")]
        output: PathBuf,
        /// Master seed for the sensor noise streams
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the default scenario configuration to a RON file
    WriteConfig { path: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            constellation,
            platform,
            eclipse,
            kelly,
            output,
            seed,
        } => {
            let mut config = match config {
                Some(path) => {
                    info!("loading scenario configuration from {}", path.display());
                    ScenarioConfig::from_file(&path)?
                }
                None => ScenarioConfig::default(),
            };
            // command line flags only ever switch options on
            let file_setup = config.setup;
            config.setup = ScenarioSetup {
                constellation: file_setup.constellation || constellation,
                platform: file_setup.platform || platform,
                eclipse: file_setup.eclipse || eclipse,
                kelly: file_setup.kelly || kelly,
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }

            let result_path = output.join(format!("scenarioCSS{}", config.setup.tag()));
            let mut results = ResultManager::new(result_path.clone());
            let history = run(&config, Some(&mut results))?;

            if let Some(last) = history.signals.last() {
                for (name, signal) in history.names.iter().zip(last.iter()) {
                    info!("{} final signal {:.6}", name, signal);
                }
            }
            info!("results written to {}", result_path.display());
        }
        Commands::WriteConfig { path } => {
            ScenarioConfig::default().to_file(&path)?;
            info!("default configuration written to {}", path.display());
        }
    }
    Ok(())
}
