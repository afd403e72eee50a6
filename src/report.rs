use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::record::ClusterRecord;

/// Label under which usage from clusters outside the mrjob naming
/// convention is reported.
pub const UNATTRIBUTED_LABEL: &str = "(not started by mrjob)";

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// One row of a usage breakdown: a group label (job name or user, `None`
/// for clusters not started by mrjob) and the summed hours behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageGroup {
    pub label: Option<String>,
    pub hours: f64,
}

impl UsageGroup {
    /// Label as it appears in the report. Unattributed groups render as
    /// [`UNATTRIBUTED_LABEL`]; this same string is what they sort by.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(UNATTRIBUTED_LABEL)
    }
}

/// Aggregated view over one fetch of the cluster list.
///
/// Computed once per run and handed to the renderer; building it twice
/// from the same records gives the same report.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub total_clusters: usize,
    pub earliest_created: DateTime<Utc>,
    pub latest_created: DateTime<Utc>,
    /// Wall-clock time the run started, shown alongside the min/max
    /// creation times so the retention window is readable at a glance.
    pub generated_at: DateTime<Utc>,
    pub total_hours: f64,
    pub top_jobs: Vec<UsageGroup>,
    pub top_users: Vec<UsageGroup>,
    pub top_clusters: Vec<ClusterRecord>,
}

impl UsageReport {
    /// Aggregates fetched records into the report, or `None` when there is
    /// nothing to report on.
    ///
    /// Breakdowns are ordered by descending hours; groups tied on hours
    /// fall back to ascending display label, individual clusters to
    /// ascending name.
    pub fn from_records(records: Vec<ClusterRecord>, generated_at: DateTime<Utc>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let earliest_created = records.iter().map(|r| r.created_at).min()?;
        let latest_created = records.iter().map(|r| r.created_at).max()?;
        let total_hours = records.iter().map(|r| r.normalized_hours).sum();

        let top_jobs = sum_hours_by(&records, ClusterRecord::job_name);
        let top_users = sum_hours_by(&records, ClusterRecord::user);

        let mut top_clusters = records;
        top_clusters.sort_by(|a, b| {
            cmp_f64(b.normalized_hours, a.normalized_hours).then_with(|| a.name.cmp(&b.name))
        });

        Some(Self {
            total_clusters: top_clusters.len(),
            earliest_created,
            latest_created,
            generated_at,
            total_hours,
            top_jobs,
            top_users,
            top_clusters,
        })
    }
}

/// Sums hours per group key, then orders groups by descending total with
/// ties broken by ascending display label.
fn sum_hours_by<F>(records: &[ClusterRecord], key: F) -> Vec<UsageGroup>
where
    F: Fn(&ClusterRecord) -> Option<&str>,
{
    let mut hours_by_label: HashMap<Option<String>, f64> = HashMap::new();
    for record in records {
        *hours_by_label
            .entry(key(record).map(str::to_string))
            .or_default() += record.normalized_hours;
    }

    let mut groups: Vec<UsageGroup> = hours_by_label
        .into_iter()
        .map(|(label, hours)| UsageGroup { label, hours })
        .collect();
    groups.sort_by(|a, b| {
        cmp_f64(b.hours, a.hours).then_with(|| a.display_label().cmp(b.display_label()))
    });
    groups
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::record::MrjobOrigin;
    use chrono::TimeZone;

    fn record(id: &str, name: &str, hours: f64, day: u32) -> ClusterRecord {
        ClusterRecord {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2010, 6, day, 12, 0, 0).unwrap(),
            normalized_hours: hours,
            origin: MrjobOrigin::parse(name),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2010, 6, 30, 18, 40, 8).unwrap()
    }

    #[test]
    fn empty_input_yields_no_report() {
        assert_eq!(UsageReport::from_records(vec![], now()), None);
    }

    #[test]
    fn header_stats_cover_all_records() {
        let records = vec![
            record("j-1", "mr_wc.alice.20100630.120000.000001", 5.5, 30),
            record("j-2", "mr_wc.bob.20100629.120000.000002", 2.0, 29),
            record("j-3", "custom-hive-cluster", 1.0, 12),
        ];

        let report = UsageReport::from_records(records, now()).unwrap();

        assert_eq!(report.total_clusters, 3);
        assert_eq!(
            report.earliest_created,
            Utc.with_ymd_and_hms(2010, 6, 12, 12, 0, 0).unwrap()
        );
        assert_eq!(
            report.latest_created,
            Utc.with_ymd_and_hms(2010, 6, 30, 12, 0, 0).unwrap()
        );
        assert_eq!(report.generated_at, now());
        assert_eq!(report.total_hours, 8.5);
    }

    #[test]
    fn breakdowns_partition_the_total() {
        let records = vec![
            record("j-1", "mr_wc.alice.20100630.120000.000001", 5.5, 30),
            record("j-2", "mr_wc.bob.20100629.120000.000002", 2.0, 29),
            record("j-3", "custom-hive-cluster", 1.0, 12),
        ];

        let report = UsageReport::from_records(records, now()).unwrap();

        let job_sum: f64 = report.top_jobs.iter().map(|g| g.hours).sum();
        let user_sum: f64 = report.top_users.iter().map(|g| g.hours).sum();
        assert_eq!(job_sum, report.total_hours);
        assert_eq!(user_sum, report.total_hours);
    }

    mod sum_hours_by {
        use super::*;

        #[test]
        fn jobs_aggregate_across_users() {
            let records = vec![
                record("j-1", "mr_wc.alice.20100630.120000.000001", 5.5, 30),
                record("j-2", "mr_wc.bob.20100629.120000.000002", 2.0, 29),
                record("j-3", "custom-hive-cluster", 1.0, 12),
            ];

            let groups = sum_hours_by(&records, ClusterRecord::job_name);

            assert_eq!(groups.len(), 2);
            assert_eq!(groups[0].label.as_deref(), Some("mr_wc"));
            assert_eq!(groups[0].hours, 7.5);
            assert_eq!(groups[1].label, None);
            assert_eq!(groups[1].hours, 1.0);
        }

        #[test]
        fn users_keep_their_own_totals() {
            let records = vec![
                record("j-1", "mr_wc.alice.20100630.120000.000001", 5.5, 30),
                record("j-2", "mr_wc.bob.20100629.120000.000002", 2.0, 29),
                record("j-3", "custom-hive-cluster", 1.0, 12),
            ];

            let groups = sum_hours_by(&records, ClusterRecord::user);

            let labels: Vec<_> = groups.iter().map(UsageGroup::display_label).collect();
            assert_eq!(labels, vec!["alice", "bob", UNATTRIBUTED_LABEL]);
            assert_eq!(groups[0].hours, 5.5);
            assert_eq!(groups[1].hours, 2.0);
            assert_eq!(groups[2].hours, 1.0);
        }

        #[test]
        fn equal_hours_tie_break_on_label() {
            let records = vec![
                record("j-1", "mr_zeta.carol.20100630.120000.000001", 3.0, 30),
                record("j-2", "mr_alpha.carol.20100629.120000.000002", 3.0, 29),
            ];

            let groups = sum_hours_by(&records, ClusterRecord::job_name);

            assert_eq!(groups[0].label.as_deref(), Some("mr_alpha"));
            assert_eq!(groups[1].label.as_deref(), Some("mr_zeta"));
        }

        #[test]
        fn unattributed_ties_sort_by_placeholder_text() {
            // "(not started by mrjob)" starts with a parenthesis, which
            // sorts before any alphanumeric label.
            let records = vec![
                record("j-1", "mr_alpha.carol.20100630.120000.000001", 3.0, 30),
                record("j-2", "custom-hive-cluster", 3.0, 29),
            ];

            let groups = sum_hours_by(&records, ClusterRecord::job_name);

            assert_eq!(groups[0].label, None);
            assert_eq!(groups[1].label.as_deref(), Some("mr_alpha"));
        }
    }

    mod from_records {
        use super::*;

        #[test]
        fn clusters_sorted_by_hours_then_name() {
            let records = vec![
                record("j-1", "mr_b.dave.20100630.120000.000001", 4.0, 30),
                record("j-2", "mr_a.dave.20100629.120000.000002", 4.0, 29),
                record("j-3", "mr_c.dave.20100628.120000.000003", 9.0, 28),
            ];

            let report = UsageReport::from_records(records, now()).unwrap();

            let ids: Vec<_> = report.top_clusters.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["j-3", "j-2", "j-1"]);
        }

        #[test]
        fn aggregation_is_deterministic() {
            let records = vec![
                record("j-1", "mr_wc.alice.20100630.120000.000001", 5.5, 30),
                record("j-2", "mr_wc.bob.20100629.120000.000002", 2.0, 29),
                record("j-3", "custom-hive-cluster", 1.0, 12),
            ];

            let first = UsageReport::from_records(records.clone(), now()).unwrap();
            let second = UsageReport::from_records(records, now()).unwrap();

            assert_eq!(first, second);
        }
    }
}
