use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Job flows submitted through mrjob carry names like
/// `mr_word_freq_count.dave.20101103.121249.638552` — a job name, the
/// submitting user, and a date/time/serial triple, dot-separated.
static JOB_FLOW_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\.(.*)\.(\d+)\.(\d+)\.(\d+)$").unwrap());

/// A single provisioned cluster ("job flow") as reported by EMR.
///
/// Built fresh from the live API response on every run and read-only after
/// construction; the report is a pure function of a list of these.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterRecord {
    /// Opaque cluster identifier (e.g. `j-3H3Q13RGKKC98`)
    pub id: String,
    /// Free-form display name; may or may not follow the mrjob convention
    pub name: String,
    /// Creation time as recorded by the provisioning service
    pub created_at: DateTime<Utc>,
    /// Normalized Instance Hours, the provider's billing unit
    pub normalized_hours: f64,
    /// Set when `name` follows the mrjob naming convention
    pub origin: Option<MrjobOrigin>,
}

/// The job name and user extracted from an mrjob-style cluster name.
///
/// The two fields come out of a single pattern match: either both are
/// known or the cluster was not started by mrjob at all, which is why this
/// is one optional pair on [`ClusterRecord`] rather than two independent
/// optionals.
#[derive(Debug, Clone, PartialEq)]
pub struct MrjobOrigin {
    pub job_name: String,
    pub user: String,
}

impl MrjobOrigin {
    /// Extracts the job name and user from a cluster display name.
    ///
    /// A name matches when it ends in three dot-separated numeric
    /// components. Matching is greedy, so the job name captures everything
    /// up to the last three suffixes (it may itself contain dots) and the
    /// segment immediately before them is the user. Anything else returns
    /// `None`: the cluster was not started by mrjob.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = JOB_FLOW_NAME_RE.captures(name)?;
        Some(Self {
            job_name: caps[1].to_string(),
            user: caps[2].to_string(),
        })
    }
}

impl ClusterRecord {
    pub fn job_name(&self) -> Option<&str> {
        self.origin.as_ref().map(|o| o.job_name.as_str())
    }

    pub fn user(&self) -> Option<&str> {
        self.origin.as_ref().map(|o| o.user.as_str())
    }
}
