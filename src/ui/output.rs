use crate::collector::CollectionSummary;
use crate::error::{AllCodesError, ReadFault, UserFriendlyError};
use console::{style, Emoji, Term};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

static CROSS: Emoji = Emoji("❌ ", "x ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static ROCKET: Emoji = Emoji("🚀 ", "> ");

/// Console rendering. Stdout carries the run's contract lines (read
/// diagnostics, completion message, statistics); operational chatter goes to
/// stderr and is gated on verbosity.
pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stderr().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => eprintln!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => eprintln!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!("  {}", style(message).dim());
                    } else {
                        eprintln!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => eprintln!("DEBUG: {}", message),
            }
        }
    }

    pub fn start_operation(&self, operation: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!("{}{}", ROCKET, style(operation).bold());
                    } else {
                        eprintln!("> {}", operation);
                    }
                }
                OutputMode::Json => self.print_json_message("operation_start", operation),
                OutputMode::Plain => eprintln!("STARTING: {}", operation),
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &AllCodesError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => eprintln!("SUGGESTION: {}", suggestion),
            }
        }
    }

    /// Printed at the point of failure, never suppressed.
    pub fn read_failure(&self, fault: &ReadFault) {
        match self.mode {
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "read_error",
                "path": fault.path.display().to_string(),
                "message": fault.message,
            })),
            _ => println!("{}", fault),
        }
    }

    pub fn print_collection_summary(
        &self,
        summary: &CollectionSummary,
        output_path: &Path,
        failures: usize,
        elapsed: Duration,
    ) {
        match self.mode {
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "summary",
                "files": summary.total_files,
                "bytes": summary.total_bytes,
                "output": output_path.display().to_string(),
                "files_by_extension": summary.files_by_extension,
                "errors": failures,
                "duration_ms": elapsed.as_millis() as u64,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
            _ => {
                for line in completion_lines(summary, output_path) {
                    println!("{}", line);
                }
                self.debug(&format!(
                    "{} bytes collected in {}",
                    summary.total_bytes,
                    format_duration(elapsed)
                ));
            }
        }
    }

    pub fn print_dry_run(&self, paths: &[String], output_path: &Path) {
        match self.mode {
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "dry_run",
                "files": paths,
                "output": output_path.display().to_string(),
            })),
            _ => {
                for path in paths {
                    println!("{}", path);
                }
                println!();
                println!(
                    "{} arquivo(s) seriam coletados em '{}'",
                    paths.len(),
                    output_path.display()
                );
            }
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", CROSS, style(message).red().bold()),
                MessageType::Warning => {
                    eprintln!("{}{}", WARNING, style(message).yellow().bold())
                }
                MessageType::Info => eprintln!("{}{}", INFO, style(message).cyan()),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Error => "x",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };
            eprintln!("{} {}", prefix, message);
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
    Info,
}

/// The completion block exactly as it appears on the console.
pub fn completion_lines(summary: &CollectionSummary, output_path: &Path) -> Vec<String> {
    let mut lines = vec![
        format!(
            "✓ Concluído! {} arquivo(s) coletados em '{}'",
            summary.total_files,
            output_path.display()
        ),
        String::new(),
        "Estatísticas por tipo:".to_string(),
    ];
    lines.extend(summary.histogram_lines());
    lines
}

pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
