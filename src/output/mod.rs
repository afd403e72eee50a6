mod progress;
mod report;
mod styling;

pub use progress::FetchProgress;
pub use report::print_report;

use styling::{dim, magenta_bold};

/// Prints the emraudit banner to stderr.
///
/// Displays the tool name, version, and description at the start of
/// execution. Skipped in quiet mode so stdout/stderr stay clean for
/// scripting.
pub fn print_banner() {
    eprintln!(
        r"
{} {}
  {}
",
        magenta_bold("📊 emraudit"),
        dim(env!("CARGO_PKG_VERSION")),
        dim("EMR Usage Report Tool")
    );
}
