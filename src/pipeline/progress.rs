// file: src/pipeline/progress.rs
// description: stage reporting and spinner for interactive analysis runs
// reference: uses indicatif for the spinner and colored for stage lines

use crate::utils::logging::format_step;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

pub struct StageProgress {
    total_stages: usize,
    current: usize,
    enabled: bool,
    colored: bool,
    start_time: Instant,
}

impl StageProgress {
    pub fn new(total_stages: usize, enabled: bool, colored: bool) -> Self {
        Self {
            total_stages,
            current: 0,
            enabled,
            colored,
            start_time: Instant::now(),
        }
    }

    /// Advance to the next stage and return its rendered line.
    pub fn advance(&mut self, message: &str) -> String {
        self.current = (self.current + 1).min(self.total_stages);
        let line = format_step(self.current, self.total_stages, message);
        if self.enabled {
            eprintln!("{}", line);
        }
        line
    }

    /// Spinner shown while waiting on a long call; hidden when progress is disabled.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new_spinner();
        let template = if self.colored {
            "{spinner:.green} [{elapsed_precise}] {msg}"
        } else {
            "{spinner} [{elapsed_precise}] {msg}"
        };
        if let Ok(style) = ProgressStyle::default_spinner().template(template) {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
