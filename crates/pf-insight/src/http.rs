//! Shared HTTP response check for the gateway transport and provider client.

use crate::error::InsightError;

/// Return the response unchanged on success; otherwise turn it into
/// [`InsightError::Api`] carrying the status and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, InsightError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(InsightError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
