use thiserror::Error;

/// Why a listing source contributed nothing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("{url} returned a body that is not a listing: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
