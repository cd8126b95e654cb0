use clap::Parser;
use std::path::PathBuf;
use twotrack::application::dto::OutputFormat;
use twotrack::config::Overrides;
use twotrack::pipeline::Step;

/// Run an integer through a pipeline of steps on a success and a failure track
#[derive(Parser, Debug)]
#[command(name = "twotrack")]
#[command(version)]
#[command(
    about = "Run an integer through a pipeline of steps on a success and a failure track",
    long_about = None
)]
pub struct Args {
    /// Pipeline input (defaults to 10). A non-integer starts on the failure track
    #[arg(short, long, allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Pipeline step, repeatable: add:N, sub:N, mul:N, div:N, positive, recover:N, label:TEXT
    #[arg(short, long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./twotrack.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report every step on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colours in verbose output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            steps: self.steps.clone(),
            format: self.format,
            verbose: self.verbose,
        }
    }
}
