mod cli;

use cli::Args;
use std::io::IsTerminal;
use std::process;
use twotrack::adapters::outbound::console::{NullStepReporter, StderrStepReporter};
use twotrack::application::dto::{PipelineReport, PipelineRequest};
use twotrack::application::factories::{FormatterFactory, PresenterFactory};
use twotrack::application::use_cases::EvaluatePipelineUseCase;
use twotrack::config::{discover_config, load_config_from_path, Settings};
use twotrack::shared::error::ExitCode;
use twotrack::shared::Result;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };

    let settings = Settings::resolve(args.overrides(), config.as_ref())?;
    let request = PipelineRequest::new(settings.input, settings.steps);

    let response = if settings.verbose {
        let use_color = !args.no_color && std::io::stderr().is_terminal();
        EvaluatePipelineUseCase::new(StderrStepReporter::new(use_color)).execute(&request)
    } else {
        EvaluatePipelineUseCase::new(NullStepReporter).execute(&request)
    };

    let report = PipelineReport::build(&request, &response);
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterFactory::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(report.exit_code())
}
