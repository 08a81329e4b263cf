use scnpm::adapters::outbound::console::StderrProgressReporter;
use scnpm::adapters::outbound::filesystem::{FileSystemReader, StdoutPresenter};
use scnpm::application::factories::FormatterFactory;
use scnpm::application::use_cases::ScanPackagesUseCase;
use scnpm::cli::Args;
use scnpm::config::{self, ConfigFile};
use scnpm::ports::outbound::OutputPresenter;
use scnpm::shared::error::ExitCode;
use scnpm::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with 2 on usage errors)
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let settings = args.into_settings(config.as_ref());

    // Create adapters (Dependency Injection)
    let use_case = ScanPackagesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(settings.request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format, settings.display);
    let formatted_output = formatter.format(&response.results)?;

    StdoutPresenter::new().present(&formatted_output)?;

    Ok(())
}

/// Loads the explicit `--config` file, or auto-discovers one in the
/// current directory.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        eprintln!("Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some((path, config)) => {
            eprintln!("Loaded config from: {}", path.display());
            Ok(Some(config))
        }
        None => Ok(None),
    }
}
