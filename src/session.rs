//! Per-login session identity
//!
//! Every visit and click recorded during one login session carries the same
//! identifier. The identifier lives in the session-scoped store, so it
//! survives kiosk restarts within a login but not the login itself.

use chrono::Utc;
use rand::Rng;
use std::fmt;
use tracing::{debug, error, info};

use crate::constants::session::{ID_PREFIX, SUFFIX_LEN};
use crate::constants::storage::SESSION_KEY;
use crate::storage::Storage;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Session identifier: `session_<millis>_<random base-36 suffix>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Reuse the stored identifier if one exists, otherwise generate and store one.
    /// A store that cannot be written still yields a usable, unpersisted identifier.
    pub fn load_or_generate(store: &mut dyn Storage) -> Self {
        match store.read(SESSION_KEY) {
            Ok(Some(id)) if !id.trim().is_empty() => {
                let id = Self(id.trim().to_string());
                debug!(session = %id, "Reusing stored session identifier");
                return id;
            }
            Ok(_) => {}
            Err(e) => error!(error = %e, "Failed to read stored session identifier"),
        }

        let id = Self::generate();
        match store.write(SESSION_KEY, id.as_str()) {
            Ok(()) => info!(session = %id, "Started new session"),
            Err(e) => {
                error!(error = %e, "Failed to store session identifier, continuing unpersisted")
            }
        }
        id
    }

    fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!(
            "{ID_PREFIX}{}_{suffix}",
            Utc::now().timestamp_millis()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
