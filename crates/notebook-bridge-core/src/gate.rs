//! Admin gate: shared-secret admission control for privileged routes.
//!
//! The configured secret is reduced to its SHA-256 digest at startup. Each
//! presented value is hashed the same way and the two fixed-length digests
//! are compared without early exit, so neither the secret's content nor its
//! length leaks through response timing.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use notebook_bridge_types::error::GateError;

/// Name of the request header carrying the admin secret.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Stateless predicate guarding privileged routes.
#[derive(Clone)]
pub struct AdminGate {
    expected: [u8; 32],
}

impl AdminGate {
    pub fn new(secret: &SecretString) -> Self {
        Self {
            expected: digest(secret.expose_secret()),
        }
    }

    /// Admit the request iff `presented` equals the configured secret.
    pub fn admit(&self, presented: Option<&str>) -> Result<(), GateError> {
        let presented = presented.ok_or(GateError::Missing)?;
        if constant_time_eq(&self.expected, &digest(presented)) {
            Ok(())
        } else {
            Err(GateError::Mismatch)
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
