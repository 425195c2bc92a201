use crate::config::{CliOverrides, Config, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "allcodes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Concatenate every source file of a project into a single document")]
#[command(
    long_about = "AllCodes walks a project tree, skips dependency, build and VCS directories, \
                  and writes the text of every source file it finds into one document, \
                  followed by a per-extension summary."
)]
#[command(after_help = "EXAMPLES:\n  \
    allcodes\n  \
    allcodes ./my-project --output my-project.txt\n  \
    allcodes . --dry-run\n  \
    allcodes . --config allcodes.toml --output-format json")]
pub struct Cli {
    /// Root directory to collect from
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output document path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Configuration file path
    #[arg(short, long, help = "Path to a TOML file overriding the extension and directory sets")]
    pub config: Option<PathBuf>,

    /// Output format for console messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (list what would be collected without writing)
    #[arg(long, help = "List the files that would be collected without writing the document")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_root(Some(self.root.clone()))
            .with_output_file(Some(self.output.clone()))
    }

    pub fn config_target(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
