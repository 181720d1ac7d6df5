//! pcli - Postman collection explorer
//!
//! A command-line tool for listing, locating and printing the requests
//! and examples of a Postman collection.

use clap::Parser;
use pcli::cli::args::{generate_completions, Cli, Commands};
use pcli::cli::logging::init_logging;
use pcli::commands::{dispatch, load_tree};
use pcli::config::{Config, ConfigBuilder};
use pcli::error::{AppError, LoadError, ResolveError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        generate_completions(*shell);
        return;
    }

    // The config file may turn on verbose logging too
    let config = build_config(&cli);
    let verbose = cli.verbose || config.as_ref().is_ok_and(|c| c.general.verbose);
    init_logging(verbose);

    // Run the appropriate command
    let result = config.and_then(|config| run(&cli, &config));

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    if !config.display.color {
        colored::control::set_override(false);
    }

    let tree = load_tree(config)?;
    dispatch(cli, &tree, config)
}

fn build_config(cli: &Cli) -> Result<Config, AppError> {
    let ignore = match &cli.command {
        Commands::Show(args) => args.ignore.clone(),
        _ => None,
    };

    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose.then_some(true))
        .with_collection(cli.collection.clone())
        .with_url(cli.collection_url.clone())
        .with_api_key(cli.api_key.clone())
        .with_ignore(ignore)
        .with_no_color(cli.no_color)
        .build();

    Ok(config)
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Resolve(ResolveError::NotFound { .. }) => {
            eprintln!();
            eprintln!("Hint: Run 'pcli list' to see the available names.");
        }
        AppError::Resolve(ResolveError::DeadEnd { .. }) => {
            eprintln!();
            eprintln!("Hint: Examples have no children; drop the trailing names.");
        }
        AppError::Load(LoadError::Http { .. } | LoadError::Status { .. }) => {
            eprintln!();
            eprintln!("Hint: Check the collection URL and API key.");
            eprintln!("      Set them with --collection-url and --api-key.");
        }
        _ => {}
    }
}
