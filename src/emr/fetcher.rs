use aws_sdk_emr::types::ClusterSummary;
use chrono::DateTime;
use log::{debug, info};

use super::EmrClient;
use crate::error::{EmrAuditError, Result};
use crate::record::{ClusterRecord, MrjobOrigin};

/// Downloads the full cluster list and normalizes it for reporting.
///
/// Any cluster whose creation time or usage value cannot be normalized
/// aborts the whole run; there is no per-record recovery, since a report
/// over a partial list would silently under-count usage.
pub async fn fetch_cluster_records(client: &EmrClient) -> Result<Vec<ClusterRecord>> {
    info!("getting info about all job flows (this goes back about 2 months)");

    let summaries = client.list_all_clusters().await?;
    debug!("normalizing {} clusters", summaries.len());

    summaries.iter().map(normalize_cluster).collect()
}

fn normalize_cluster(summary: &ClusterSummary) -> Result<ClusterRecord> {
    let id = summary.id().unwrap_or_default().to_string();
    let name = summary.name().unwrap_or_default().to_string();

    let creation = summary
        .status()
        .and_then(|status| status.timeline())
        .and_then(|timeline| timeline.creation_date_time())
        .ok_or_else(|| EmrAuditError::MalformedTimestamp {
            id: id.clone(),
            reason: "no creation time in cluster status".to_string(),
        })?;
    let created_at = DateTime::from_timestamp(creation.secs(), creation.subsec_nanos())
        .ok_or_else(|| EmrAuditError::MalformedTimestamp {
            id: id.clone(),
            reason: format!("epoch offset {}s is out of range", creation.secs()),
        })?;

    let hours = summary.normalized_instance_hours().ok_or_else(|| {
        EmrAuditError::MalformedUsageValue {
            id: id.clone(),
            reason: "NormalizedInstanceHours is not set".to_string(),
        }
    })?;
    if hours < 0 {
        return Err(EmrAuditError::MalformedUsageValue {
            id,
            reason: format!("NormalizedInstanceHours is negative ({hours})"),
        });
    }

    let origin = MrjobOrigin::parse(&name);

    Ok(ClusterRecord {
        id,
        name,
        created_at,
        normalized_hours: f64::from(hours),
        origin,
    })
}
