// src/main.rs

use anyhow::Result;
use clap::Parser;
use srcwalk::cli::{Cli, Commands};
use srcwalk::errors::Error;
use srcwalk::{collect_dirs, collect_files, has_babel_config, has_project_config};

fn main() -> Result<()> {
    // Initialize logging to stderr, controlled by RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("starting srcwalk v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        match e {
            // A missing start directory is reported cleanly, without the
            // fatal-error treatment a broken traversal gets.
            Error::NotFound { .. } => {
                eprintln!("srcwalk: {}", e);
                std::process::exit(2);
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run(command: Commands) -> srcwalk::Result<()> {
    match command {
        Commands::Dirs(args) => {
            for path in collect_dirs(&args.dir, &args.skip_set())? {
                println!("{}", path.display());
            }
        }
        Commands::Files(args) => {
            for path in collect_files(&args.dir, &args.skip_set())? {
                println!("{}", path.display());
            }
        }
        Commands::HasBabelConfig(args) => {
            println!("{}", has_babel_config(&args.dir, &args.skip_set())?);
        }
        Commands::HasProjectConfig(args) => {
            println!("{}", has_project_config(&args.dir, &args.skip_set())?);
        }
    }
    Ok(())
}
