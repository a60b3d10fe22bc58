//! Visitor identity service for signed session cookies.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::visitor::{SourceChannel, VisitorIdentity};
use crate::utils::id_generator::{IdGenerator, RandomVisitorIdGenerator};

type HmacSha256 = Hmac<Sha256>;

/// Outcome of resolving the visitor behind a request.
///
/// `issued_cookie` carries the full `<id>.<signature>` cookie value to set on
/// the response, and is populated only when the visitor is new (or presented
/// a cookie that failed verification).
#[derive(Debug, Clone)]
pub struct IdentityResolution {
    pub identity: VisitorIdentity,
    pub issued_cookie: Option<String>,
}

/// Service for verifying and minting signed visitor cookies.
///
/// Cookie values have the form `<id>.<signature>` where the signature is an
/// HMAC-SHA256 MAC (keyed by `signing_secret`) over the id, hex-encoded. A
/// client cannot forge or alter an identity without the server-side secret;
/// any value that fails verification is discarded and the visitor is treated
/// as new.
pub struct IdentityService {
    cookie_name: String,
    signing_secret: String,
    id_generator: Box<dyn IdGenerator>,
}

impl IdentityService {
    /// Creates a new identity service, minting ids from the system RNG.
    ///
    /// # Arguments
    ///
    /// - `cookie_name` - name of the visitor session cookie
    /// - `signing_secret` - HMAC key; must match the value used when cookies were minted
    pub fn new(cookie_name: String, signing_secret: String) -> Self {
        Self::with_id_generator(cookie_name, signing_secret, Box::new(RandomVisitorIdGenerator))
    }

    /// Creates an identity service with a custom visitor-id generator.
    pub fn with_id_generator(
        cookie_name: String,
        signing_secret: String,
        id_generator: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            cookie_name,
            signing_secret,
            id_generator,
        }
    }

    /// Name of the visitor session cookie.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resolves the visitor identity for a request.
    ///
    /// A request carrying a cookie whose signature verifies yields a
    /// `returning` visitor with the id taken from the cookie. Anything else
    /// (no cookie, malformed value, bad signature) yields a `new` visitor
    /// with a freshly minted id and a cookie value to issue.
    pub fn resolve(&self, path: &str, cookie_value: Option<&str>) -> IdentityResolution {
        let source = SourceChannel::from_path(path);

        if let Some(id) = cookie_value.and_then(|value| self.verify(value)) {
            return IdentityResolution {
                identity: VisitorIdentity::returning(source, id),
                issued_cookie: None,
            };
        }

        let id = self.id_generator.generate();
        let cookie = self.cookie_value(&id);

        IdentityResolution {
            identity: VisitorIdentity::new_visitor(source, id),
            issued_cookie: Some(cookie),
        }
    }

    /// Builds the full cookie value `<id>.<signature>` for a visitor id.
    pub fn cookie_value(&self, visitor_id: &str) -> String {
        format!("{}.{}", visitor_id, self.sign(visitor_id))
    }

    /// Signs a visitor id with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn sign(&self, visitor_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(visitor_id.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verifies a cookie value and extracts the visitor id.
    ///
    /// The signature is everything after the last `.`, so ids containing dots
    /// survive the split. Verification runs in constant time via
    /// [`Mac::verify_slice`].
    fn verify(&self, value: &str) -> Option<String> {
        let (id, signature) = value.rsplit_once('.')?;

        if id.is_empty() {
            return None;
        }

        let signature = hex::decode(signature).ok()?;

        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(id.as_bytes());
        mac.verify_slice(&signature).ok()?;

        Some(id.to_string())
    }
}
