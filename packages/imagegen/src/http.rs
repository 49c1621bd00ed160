use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::GenerationError;

const MAX_ERROR_BODY_CHARS: usize = 512;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, GenerationError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Read the response body, turning non-2xx statuses into [`GenerationError::Status`].
pub(crate) async fn response_text(
    provider: &str,
    response: Response,
) -> Result<String, GenerationError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(GenerationError::Status {
            provider: provider.to_string(),
            status: status.as_u16(),
            body: truncate(&body, MAX_ERROR_BODY_CHARS),
        });
    }
    Ok(body)
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
