use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const SCAN_BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} queries - {msg}";

/// StderrProgressReporter adapter for status messages and the scan bar
///
/// Everything goes to stderr so the table or JSON report on stdout stays
/// clean when piped.
pub struct StderrProgressReporter {
    scan_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            scan_bar: RefCell::new(None),
        }
    }

    fn scan_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.scan_bar.borrow_mut();
        if let Some(bar) = slot.as_ref() {
            return bar.clone();
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(SCAN_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        *slot = Some(bar.clone());
        bar
    }

    fn clear_scan_bar(&self) {
        if let Some(bar) = self.scan_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.scan_bar(total);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
        if current >= total {
            self.clear_scan_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_scan_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_scan_bar();
        eprintln!("{}", message);
    }
}
