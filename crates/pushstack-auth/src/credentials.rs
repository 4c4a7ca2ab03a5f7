//! Application credentials.
//!
//! A PushStack application is identified by an application key (public, sent
//! in the clear) and an application secret (never transmitted; used only as
//! the HMAC key). Credentials are constructed once per client and borrowed
//! by every signing call; there is no hidden global state.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The application secret used as the HMAC key for all signing operations.
///
/// The secret never appears in any output produced by this crate; only its
/// HMAC output does. `Debug` output is redacted, and the backing memory is
/// zeroed when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AppSecret(String);

impl AppSecret {
    /// Expose the raw secret bytes for use as an HMAC key.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for AppSecret {
    fn from(secret: &str) -> Self {
        Self(secret.to_owned())
    }
}

impl From<String> for AppSecret {
    fn from(secret: String) -> Self {
        Self(secret)
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(*redacted*)")
    }
}

/// Application credentials: public key plus secret.
///
/// # Examples
///
/// ```
/// use pushstack_auth::Credentials;
///
/// let credentials = Credentials::new("278d425bdf160c739803", "7ad3773142a6692b25b8");
/// assert_eq!(credentials.key(), "278d425bdf160c739803");
/// ```
#[derive(Debug, Clone)]
pub struct Credentials {
    key: String,
    secret: AppSecret,
}

impl Credentials {
    /// Create credentials from an application key and secret.
    #[must_use]
    pub fn new(key: impl Into<String>, secret: impl Into<AppSecret>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The application key (public identifier).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The application secret.
    #[must_use]
    pub fn secret(&self) -> &AppSecret {
        &self.secret
    }
}
