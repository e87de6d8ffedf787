//! HTTP client construction.

use std::time::Duration;

use reqwest::Client;

use crate::user_agent;

use super::FetchError;

/// Builds the shared HTTP session used for every request in a batch.
///
/// `read_timeout` bounds the whole request, body included, so a stalled PDF
/// transfer fails with [`FetchError::Timeout`] instead of hanging the batch.
///
/// # Errors
///
/// Returns [`FetchError::ClientBuild`] if reqwest rejects the configuration
/// (for example when no TLS backend can be initialized).
pub(crate) fn build_client(
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<Client, FetchError> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(read_timeout)
        .gzip(true)
        .user_agent(user_agent::default_user_agent())
        .build()
        .map_err(|error| FetchError::ClientBuild {
            reason: error.to_string(),
        })
}
