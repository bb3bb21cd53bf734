use clap::Parser;
use linkbench::config::ReportConfig;
use linkbench::report::generate_report;
use linkbench::{error, logging, Result};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "linkbench")]
#[command(about = "Summarize Neo4j vs Doublets benchmark output into a table and charts", long_about = None)]
struct Cli {
    /// Benchmark log produced by `cargo bench`
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for results.md and the charts
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Also write results.json
    #[arg(long)]
    json: bool,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::load_from(path)?,
            None => ReportConfig::load()?,
        };

        if let Some(input) = &self.input {
            config = config.with_input_path(input.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }
        if self.quiet {
            config = config.with_debug(false);
        }
        if self.json {
            config = config.with_json(true);
        }
        if self.no_charts {
            config = config.with_charts(false);
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", error::user_friendly_message(&err));
            return ExitCode::from(error::exit_code(&err));
        }
    };
    logging::init(config.debug);

    match generate_report(&config) {
        Ok(artifacts) => {
            println!("{}", artifacts.table);
            for path in &artifacts.chart_paths {
                info!("Chart written to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error::user_friendly_message(&err));
            ExitCode::from(error::exit_code(&err))
        }
    }
}
