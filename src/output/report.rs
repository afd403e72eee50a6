use std::fmt::Write;

use crate::report::UsageReport;

/// Timestamps in the report use this fixed human-readable form rather
/// than full ISO 8601; the report states once that all times are UTC.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prints the usage report to stdout.
///
/// `None` means the provider knows of no clusters; that case prints a
/// single informational line instead of the full report.
pub fn print_report(report: Option<&UsageReport>) {
    print!("{}", render_report(report));
}

/// Hour sums display as whole numbers with the fraction dropped, not
/// rounded: 3.99 hours shows as 3.
#[allow(clippy::cast_possible_truncation)]
fn whole_hours(hours: f64) -> i64 {
    hours as i64
}

fn render_report(report: Option<&UsageReport>) -> String {
    let Some(report) = report else {
        return "No job flows created in the past two months!\n".to_string();
    };

    let mut out = String::new();

    let _ = writeln!(out, "Total # of Job Flows: {}", report.total_clusters);
    let _ = writeln!(out);

    let _ = writeln!(out, "All times are in UTC");
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Min create time: {}",
        report.earliest_created.format(TIME_FORMAT)
    );
    let _ = writeln!(
        out,
        "Max create time: {}",
        report.latest_created.format(TIME_FORMAT)
    );
    let _ = writeln!(
        out,
        "   Current time: {}",
        report.generated_at.format(TIME_FORMAT)
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "All usage is measured in Normalized Instance Hours, which are"
    );
    let _ = writeln!(
        out,
        "roughly equivalent to running an m1.small instance for an hour"
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Total Usage: {}", whole_hours(report.total_hours));
    let _ = writeln!(out);

    let _ = writeln!(out, "Top jobs (based on which job started the job flow):");
    for group in &report.top_jobs {
        let _ = writeln!(
            out,
            "  {:5} {}",
            whole_hours(group.hours),
            group.display_label()
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top users (based on which user started the job flow):");
    for group in &report.top_users {
        let _ = writeln!(
            out,
            "  {:5} {}",
            whole_hours(group.hours),
            group.display_label()
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top job flows:");
    for cluster in &report.top_clusters {
        let _ = writeln!(
            out,
            "  {:5} {:<15} {}",
            whole_hours(cluster.normalized_hours),
            cluster.id,
            cluster.name
        );
    }
    let _ = writeln!(out);

    out
}
