// src/cli.rs

use crate::filtering::SkipSet;
use clap::{Args, Parser, Subcommand};

/// Walks local directory trees under exclusion rules and classifies what
/// it finds.
///
/// Hidden directories (leading `.`) are always excluded from descent;
/// additional directory names can be excluded with `--skip`. Regular files
/// are never excluded by name, hidden or not.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every directory under DIR (pre-order), one absolute path per line.
    Dirs(WalkArgs),

    /// List every regular file under DIR, one absolute path per line.
    Files(WalkArgs),

    /// Print `true` if any Babel config file (.babelrc*, babel.config.*)
    /// exists under DIR, `false` otherwise.
    HasBabelConfig(WalkArgs),

    /// Print `true` if a tsconfig.json or jsconfig.json exists under DIR,
    /// `false` otherwise.
    HasProjectConfig(WalkArgs),
}

/// Arguments shared by every traversal subcommand.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Directory to walk.
    #[arg(default_value = ".")]
    pub dir: String,

    /// Directory base names to exclude from descent (repeatable).
    #[arg(short = 's', long = "skip", value_name = "NAME", num_args = 1..)]
    pub skip: Vec<String>,
}

impl WalkArgs {
    /// Builds the skip-set for the traversal.
    pub fn skip_set(&self) -> SkipSet {
        self.skip.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_flag_is_repeatable() {
        let cli = Cli::parse_from([
            "srcwalk", "files", "some/dir", "--skip", "node_modules", "--skip", "dist",
        ]);
        match cli.command {
            Commands::Files(args) => {
                assert_eq!(args.dir, "some/dir");
                let skip = args.skip_set();
                assert!(skip.contains("node_modules"));
                assert!(skip.contains("dist"));
                assert_eq!(skip.len(), 2);
            }
            _ => panic!("Expected Files subcommand"),
        }
    }

    #[test]
    fn test_dir_defaults_to_cwd() {
        let cli = Cli::parse_from(["srcwalk", "dirs"]);
        match cli.command {
            Commands::Dirs(args) => {
                assert_eq!(args.dir, ".");
                assert!(args.skip_set().is_empty());
            }
            _ => panic!("Expected Dirs subcommand"),
        }
    }
}
