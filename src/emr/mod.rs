mod client;
mod fetcher;

pub use client::EmrClient;
pub use fetcher::fetch_cluster_records;
