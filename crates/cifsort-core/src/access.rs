use crate::error::SortError;

/// Shared-secret check that must pass before any files are touched.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: Option<String>,
}

impl AccessGate {
    pub fn new(secret: Option<String>) -> Self {
        AccessGate { secret }
    }

    /// Compare the supplied password with the configured secret.
    ///
    /// Without a configured secret nothing is allowed through, and an empty
    /// password never matches.
    pub fn check(&self, supplied: &str) -> Result<(), SortError> {
        match self.secret.as_deref() {
            Some(secret) if !supplied.is_empty() && constant_time_eq(secret, supplied) => Ok(()),
            Some(_) => {
                tracing::warn!("access gate rejected a password");
                Err(SortError::AccessDenied)
            }
            None => {
                tracing::warn!("access gate has no secret configured; refusing");
                Err(SortError::AccessDenied)
            }
        }
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
