//! Progress bar display for the bundle copy

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the install-copy step
pub struct CopyProgress {
    pb: ProgressBar,
}

impl CopyProgress {
    /// Create a new progress bar with the total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);

        Self { pb }
    }

    /// Record one copied file
    pub fn file_copied(&self, file_path: &str) {
        // Truncate long paths for display, keeping the tail. The cut must
        // land on a char boundary; bundle paths are not always ASCII.
        let display_path = if file_path.len() > 50 {
            let mut start = file_path.len() - 47;
            while !file_path.is_char_boundary(start) {
                start += 1;
            }
            format!("...{}", &file_path[start..])
        } else {
            file_path.to_string()
        };
        self.pb.set_message(display_path);
        self.pb.inc(1);
    }

    /// Finish the bar on success
    pub fn finish(&self) {
        self.pb.finish_with_message("done");
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
