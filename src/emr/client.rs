use aws_config::BehaviorVersion;
use aws_sdk_emr::types::ClusterSummary;
use aws_sdk_emr::Client;
use log::debug;

use crate::config::AwsConfig;
use crate::error::{EmrAuditError, Result};

/// Thin wrapper over the EMR SDK client.
///
/// Adds marker pagination and error mapping; credentials resolution,
/// request signing, and transport retries stay with the SDK.
pub struct EmrClient {
    inner: Client,
}

impl EmrClient {
    /// Builds a client from the ambient AWS config chain (environment,
    /// shared credentials/config files, instance metadata), applying any
    /// overrides from the loaded configuration.
    pub async fn connect(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        Self {
            inner: Client::new(&sdk_config),
        }
    }

    /// Wraps an already-built SDK client. Tests use this to point the
    /// wrapper at a mock endpoint.
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }

    /// Fetches every cluster the provider will list, following the
    /// pagination marker until it runs out.
    ///
    /// The provider bounds its own retention window (terminated clusters
    /// stay listed for about two months); no date filter is sent.
    pub async fn list_all_clusters(&self) -> Result<Vec<ClusterSummary>> {
        let mut all_clusters = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let resp = self
                .inner
                .list_clusters()
                .set_marker(marker)
                .send()
                .await
                .map_err(|e| {
                    EmrAuditError::Api(aws_sdk_emr::error::DisplayErrorContext(&e).to_string())
                })?;

            all_clusters.extend(resp.clusters.unwrap_or_default());
            debug!("{} clusters listed so far", all_clusters.len());

            if resp.marker.is_none() {
                break;
            }
            marker = resp.marker;
        }

        Ok(all_clusters)
    }
}
