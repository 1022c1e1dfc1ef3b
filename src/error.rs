use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },
}

impl ScrapeError {
    /// True only for TLS certificate-verification failures, the one
    /// network error we recover from (by retrying unverified).
    pub fn is_certificate_error(&self) -> bool {
        match self {
            ScrapeError::Network(e) => chain_mentions_certificate(e),
            ScrapeError::HttpStatus { .. } => false,
        }
    }
}

/// Walk the source chain looking for a verification failure. rustls
/// reports these as "invalid peer certificate: UnknownIssuer" and
/// friends, several layers below the reqwest error.
fn chain_mentions_certificate(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = Some(err);
    while let Some(err) = source {
        let msg = err.to_string().to_lowercase();
        if msg.contains("certificate") || msg.contains("unknownissuer") {
            return true;
        }
        source = err.source();
    }
    false
}
