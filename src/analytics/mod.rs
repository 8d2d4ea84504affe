//! Visit and click analytics
//!
//! The recorder owns the analytics document and the storage backend it
//! persists into. Every mutation is written back synchronously; a failed
//! write is logged and counted, never retried, and the in-memory document
//! keeps the data either way.

pub mod document;
pub mod stats;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::constants::storage::ANALYTICS_KEY;
use crate::session::SessionId;
use crate::storage::Storage;

pub use document::{AnalyticsDocument, ClickRecord, Platform, SessionRecord, Viewport};
pub use stats::Statistics;

/// Facts about the current launch, recorded with the visit
#[derive(Debug, Clone)]
pub struct VisitInfo {
    pub user_agent: String,
    pub viewport: Viewport,
}

pub struct AnalyticsRecorder {
    store: Box<dyn Storage>,
    session_id: SessionId,
    doc: AnalyticsDocument,
    write_failures: u64,
}

impl AnalyticsRecorder {
    /// Load or create the analytics document, settle session identity, and
    /// record this launch as a visit. The recorder is fully usable afterwards
    /// even when the backing store is broken.
    pub fn initialize(
        mut store: Box<dyn Storage>,
        session_store: &mut dyn Storage,
        visit: &VisitInfo,
    ) -> Self {
        let session_id = SessionId::load_or_generate(session_store);
        let doc = load_or_fresh(store.as_mut());
        let mut recorder = Self {
            store,
            session_id,
            doc,
            write_failures: 0,
        };
        recorder.record_visit(visit);
        recorder
    }

    /// Count a visit and append a session record, then persist
    pub fn record_visit(&mut self, visit: &VisitInfo) {
        let now = Utc::now();
        self.doc.total_visits += 1;
        self.doc.last_visit = Some(now);
        self.doc.sessions.push(SessionRecord {
            id: self.session_id.as_str().to_string(),
            timestamp: now,
            user_agent: visit.user_agent.clone(),
            viewport: visit.viewport,
        });
        self.persist();
        info!(
            session = %self.session_id,
            total_visits = self.doc.total_visits,
            "Visit recorded"
        );
    }

    /// Count a click for a platform named by the UI, then persist
    /// Unrecognized names leave every counter and log untouched.
    pub fn record_click(&mut self, platform: &str) {
        let Ok(platform) = platform.parse::<Platform>() else {
            debug!(platform = %platform, "Ignoring click for unrecognized platform");
            return;
        };

        self.doc.platforms.bump(platform);
        self.doc.clicks.push(ClickRecord {
            platform,
            timestamp: Utc::now(),
            session_id: self.session_id.as_str().to_string(),
        });
        self.persist();
        info!(platform = %platform, count = self.doc.platforms.get(platform), "Click recorded");
    }

    /// Snapshot of the current statistics
    pub fn statistics(&self) -> Statistics {
        Statistics::snapshot(&self.doc, self.write_failures)
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.doc) {
            Ok(blob) => blob,
            Err(e) => {
                self.write_failures += 1;
                error!(error = %e, failures = self.write_failures, "Failed to serialize analytics");
                return;
            }
        };
        if let Err(e) = self.store.write(ANALYTICS_KEY, &blob) {
            self.write_failures += 1;
            error!(error = %e, failures = self.write_failures, "Failed to persist analytics");
        }
    }
}

/// Read the stored document, falling back to a fresh one when the key is
/// absent or the stored blob does not parse
fn load_or_fresh(store: &mut dyn Storage) -> AnalyticsDocument {
    match store.read(ANALYTICS_KEY) {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "Stored analytics are unreadable, starting fresh");
                AnalyticsDocument::fresh(Utc::now())
            }
        },
        Ok(None) => {
            info!("No stored analytics, starting fresh");
            AnalyticsDocument::fresh(Utc::now())
        }
        Err(e) => {
            warn!(error = %e, "Failed to read stored analytics, starting fresh");
            AnalyticsDocument::fresh(Utc::now())
        }
    }
}
