pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, FilterConfig, OutputConfig};
pub use error::{AllCodesError, ReadFault, Result, UserFriendlyError};

// Core functionality re-exports
pub use collector::{
    sort_records, BundleWriter, CollectionEvent, CollectionProgress, CollectionSummary,
    FileCollector, FileRecord,
};
pub use scanner::{Candidates, FileFilter, SourceScanner};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use console::Term;
use std::path::{Path, PathBuf};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct CollectionReport {
    pub output_path: PathBuf,
    pub summary: CollectionSummary,
    pub failures: Vec<ReadFault>,
}

/// Main library interface: traversal, collection and emission in one pass.
pub struct AllCodes {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl AllCodes {
    /// Create a new AllCodes instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let show_progress =
            !quiet && output_mode == OutputMode::Human && Term::stderr().is_term();
        let progress_manager = ProgressManager::new(show_progress);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create AllCodes instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Walk the root, collect every candidate and write the output document.
    ///
    /// Unreadable files are reported and skipped. The only error returned is a
    /// failure to create or write the output document.
    pub fn run(&self) -> Result<CollectionReport> {
        let root = &self.config.output.root;
        let output_path = &self.config.output.output_file;

        self.check_preconditions();

        // Traversal & filter + collection
        self.output_formatter
            .start_operation(&format!("Collecting source files under {}", root.display()));

        let scanner = SourceScanner::new(&self.config.filters);
        self.output_formatter.debug(&format!(
            "Extensions: {}",
            scanner.filter().get_extensions().join(" ")
        ));
        self.output_formatter.debug(&format!(
            "Skipping directories: {}",
            scanner.filter().get_exclude_dirs().join(" ")
        ));

        let mut candidates = scanner.candidates(root);
        let collector = FileCollector::new(root);

        let spinner = self.progress_manager.create_collect_spinner();
        let progress = collector.collect(candidates.by_ref(), |event| match event {
            CollectionEvent::Collected(record) => {
                ui::progress::update_collect_progress(&spinner, &record.path);
            }
            CollectionEvent::Failed(fault) => {
                self.progress_manager
                    .suspend(&spinner, || self.output_formatter.read_failure(fault));
            }
        });
        ui::progress::finish_progress_with_summary(&spinner, &progress);
        self.output_formatter.info(&format!(
            "{} candidate(s) found, {} unreadable",
            progress.candidates_seen,
            progress.failures.len()
        ));

        for skipped in candidates.skipped() {
            self.output_formatter
                .debug(&format!("Skipped during traversal: {}", skipped));
        }

        // Emission
        let elapsed = progress.elapsed();
        let CollectionProgress {
            mut records,
            failures,
            ..
        } = progress;

        sort_records(&mut records);

        self.output_formatter
            .start_operation(&format!("Writing {}", output_path.display()));
        BundleWriter::new(output_path).write(&records)?;

        let summary = CollectionSummary::from_records(&records);
        self.output_formatter
            .print_collection_summary(&summary, output_path, failures.len(), elapsed);

        Ok(CollectionReport {
            output_path: output_path.clone(),
            summary,
            failures,
        })
    }

    /// Sorted relative paths that `run` would collect, without reading them.
    pub fn dry_run(&self) -> Vec<String> {
        let root = &self.config.output.root;
        let scanner = SourceScanner::new(&self.config.filters);

        let mut paths: Vec<String> = scanner
            .candidates(root)
            .map(|path| {
                path.strip_prefix(root)
                    .unwrap_or(path.as_path())
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        paths.sort();

        self.output_formatter
            .print_dry_run(&paths, &self.config.output.output_file);

        paths
    }

    fn check_preconditions(&self) {
        let root = &self.config.output.root;
        if !root.is_dir() {
            self.output_formatter.warning(&format!(
                "{} is not a readable directory; no files will be collected",
                root.display()
            ));
        }

        // Left as is: a previous document under the root is collected again
        if self.config.output_may_be_collected() {
            self.output_formatter.warning(&format!(
                "{} lies under {} and has a collected extension; a later run will include it",
                self.config.output.output_file.display(),
                root.display()
            ));
        }
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        Config::default().save_to_file(output_path)
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &AllCodesError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function: run with the built-in sets, quietly.
pub fn collect_all_codes<R, O>(root: R, output_file: O) -> Result<CollectionReport>
where
    R: Into<PathBuf>,
    O: Into<PathBuf>,
{
    let mut config = Config::default();
    config.output.root = root.into();
    config.output.output_file = output_file.into();

    AllCodes::new(config, OutputMode::Plain, 0, true).run()
}
