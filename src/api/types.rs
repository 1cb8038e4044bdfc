//! Shared types for the API layer.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;
use subtle::ConstantTimeEq;

use crate::db::{self, DatabaseError};

/// The process-wide bearer secret. Loaded once at startup and immutable
/// for the process lifetime — no rotation, no per-client scoping.
#[derive(Clone)]
pub struct ApiSecret(Arc<str>);

impl ApiSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    /// Constant-time byte-for-byte comparison against the secret.
    pub fn verify(&self, presented: &str) -> bool {
        presented
            .as_bytes()
            .ct_eq(self.0.as_bytes())
            .into()
    }
}

impl std::fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiSecret(..)")
    }
}

/// Shared context for all API routes and middleware.
///
/// Holds the store location and the access-gate secret; both are
/// read-only after construction. A fresh connection is opened per call
/// and dropped when the request completes.
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
    pub secret: ApiSecret,
}

impl ApiContext {
    pub fn new(db_path: PathBuf, secret: ApiSecret) -> Self {
        Self {
            db_path: Arc::new(db_path),
            secret,
        }
    }

    /// Open a per-request connection to the store.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::open_connection(&self.db_path)
    }
}
