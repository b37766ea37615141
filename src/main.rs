mod cli;

use cli::{Args, Settings, EXAMPLES};
use godi::config::{discover_config, load_config_from_path, ConfigFile};
use godi::prelude::*;
use godi::shared::logging::init_logging;
use std::io::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    init_logging();

    // Parse command-line arguments (clap exits with status 2 on bad input)
    let args = Args::parse_args();

    if args.examples {
        print!("{}", EXAMPLES);
        process::exit(ExitCode::Success.as_i32());
    }

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Merge config file and flags
    let config = load_config(&args)?;
    let settings = args.into_settings(config)?;
    tracing::debug!(?settings, "resolved settings");

    // Validate the request before touching the toolchain
    let request = build_request(&settings)?;

    // Create adapters (Dependency Injection)
    let package_query = GoListClient::new(&settings.go_command)?.with_timeout(settings.timeout);
    let progress_reporter = if settings.shows_progress(std::io::stderr().is_terminal()) {
        StderrProgressReporter::new()
    } else {
        StderrProgressReporter::quiet()
    };

    // Create use case with injected dependencies
    let use_case = ListDependenciesUseCase::new(package_query, progress_reporter);

    // Execute use case
    let response = use_case.execute(request).await?;

    // The use case has already reported "no information"
    if response.is_empty() {
        return Ok(ExitCode::ApplicationError);
    }

    // Format and present output
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.packages)?;

    let presenter = PresenterFactory::create(PresenterType::from(settings.output));
    presenter.present(&formatted_output)?;

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or discovers one in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            discover_config(&cwd)
        }
    }
}

fn build_request(settings: &Settings) -> Result<ListRequest> {
    let mut builder = ListRequest::builder()
        .include_all(settings.include_all)
        .include_builtin(settings.include_builtin)
        .include_sub_packages(settings.include_sub_packages);

    if let Some(package) = &settings.package {
        builder = builder.package(package.as_str());
    }
    if let Some(max_chars) = settings.max_chars {
        builder = builder.max_chars(max_chars);
    }

    builder.build()
}
