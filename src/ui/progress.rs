use crate::collector::CollectionProgress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// The candidate count is unknown up front, so collection gets a spinner
    /// rather than a bar.
    pub fn create_collect_spinner(&self) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
        );
        pb.set_message("Collecting source files...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Runs `f` with the spinner cleared so stdout lines are not torn.
    pub fn suspend<F, R>(&self, pb: &ProgressBar, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        if self.enabled {
            pb.suspend(f)
        } else {
            f()
        }
    }
}

pub fn update_collect_progress(pb: &ProgressBar, current_file: &str) {
    pb.inc(1);
    pb.set_message(current_file.to_string());
}

pub fn finish_progress_with_summary(pb: &ProgressBar, progress: &CollectionProgress) {
    pb.finish_with_message(format!(
        "collected, {} bytes in {}",
        progress.bytes_collected(),
        super::output::format_duration(progress.elapsed())
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::FileRecord;

    #[test]
    fn test_finish_keeps_summary_message() {
        let spinner = ProgressManager::new(false).create_collect_spinner();
        let mut progress = CollectionProgress::new();
        progress.records.push(FileRecord::new("a.py", "x=1", ".py"));

        finish_progress_with_summary(&spinner, &progress);

        assert!(spinner.is_finished());
        assert!(spinner.message().starts_with("collected, 3 bytes in "));
    }

    #[test]
    fn test_disabled_spinner_is_hidden() {
        let manager = ProgressManager::new(false);
        let spinner = manager.create_collect_spinner();
        assert!(spinner.is_hidden());

        update_collect_progress(&spinner, "a.py");
        assert_eq!(spinner.position(), 1);
    }

    #[test]
    fn test_suspend_returns_value() {
        let manager = ProgressManager::new(false);
        let spinner = manager.create_collect_spinner();
        assert_eq!(manager.suspend(&spinner, || 42), 42);
    }
}
