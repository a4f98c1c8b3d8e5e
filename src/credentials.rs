//! API credential types.

/// Traxo API credentials.
///
/// Only `access_token` participates in request authentication. The consumer
/// key and secret are accepted for forward compatibility with the API's
/// OAuth flows; the GET-only surface never reads them.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
        }
    }

    /// Value for the `Authorization` header.
    ///
    /// No local validation: an empty token still yields `"Bearer "` and the
    /// server rejects it. Token validity is the server's call, not ours.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
