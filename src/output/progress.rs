use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::styling::{bright_green, bright_yellow};

/// Spinner shown on stderr while the cluster list downloads.
///
/// The download is a single paginated call with no usable byte count, so
/// this is a plain spinner rather than a bar.
pub struct FetchProgress {
    pb: ProgressBar,
}

impl FetchProgress {
    pub fn start(quiet: bool) -> Self {
        let pb = create_spinner(bright_yellow("Fetching job flows from EMR").to_string());
        if quiet {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        Self { pb }
    }

    pub fn finish(self, clusters: usize) {
        self.pb
            .finish_with_message(bright_green(format!("Fetched {clusters} job flows ✓")).to_string());
    }
}

fn create_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {msg} {spinner}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
