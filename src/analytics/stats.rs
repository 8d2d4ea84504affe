//! Derived statistics snapshot
//!
//! A `Statistics` value is plain data computed from the analytics document.
//! Rendering (terminal report, overlay) lives elsewhere, so the same snapshot
//! feeds every view.

use chrono::{DateTime, Utc};

use crate::analytics::document::{AnalyticsDocument, ClickRecord, PlatformCounts};
use crate::constants::analytics::RECENT_CLICKS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_visits: u64,
    /// Recomputed from the per-platform counters on every snapshot
    pub total_clicks: u64,
    pub platform_breakdown: PlatformCounts,
    pub first_visit: DateTime<Utc>,
    pub last_visit: Option<DateTime<Utc>>,
    pub total_sessions: usize,
    /// Up to the last ten clicks, oldest first
    pub recent_clicks: Vec<ClickRecord>,
    /// Persist attempts that failed since the recorder started
    pub write_failures: u64,
}

impl Statistics {
    pub fn snapshot(doc: &AnalyticsDocument, write_failures: u64) -> Self {
        let skip = doc.clicks.len().saturating_sub(RECENT_CLICKS);
        Self {
            total_visits: doc.total_visits,
            total_clicks: doc.platforms.total(),
            platform_breakdown: doc.platforms,
            first_visit: doc.first_visit,
            last_visit: doc.last_visit,
            total_sessions: doc.sessions.len(),
            recent_clicks: doc.clicks[skip..].to_vec(),
            write_failures,
        }
    }

    /// Share of total clicks for one counter, as a percentage
    /// Zero total yields zero rather than a division error.
    pub fn percentage(&self, clicks: u64) -> f64 {
        if self.total_clicks == 0 {
            return 0.0;
        }
        clicks as f64 / self.total_clicks as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::document::Platform;
    use chrono::{TimeZone, Timelike};

    fn click(platform: Platform, minute: u32) -> ClickRecord {
        ClickRecord {
            platform,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 24, 12, minute, 0).unwrap(),
            session_id: "session_1_abc".to_string(),
        }
    }

    fn doc_with_clicks(clicks: Vec<ClickRecord>) -> AnalyticsDocument {
        let mut doc =
            AnalyticsDocument::fresh(Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap());
        for c in &clicks {
            doc.platforms.bump(c.platform);
        }
        doc.clicks = clicks;
        doc
    }

    #[test]
    fn test_recent_clicks_shorter_than_window() {
        let doc = doc_with_clicks(vec![click(Platform::Facebook, 1), click(Platform::Twitter, 2)]);
        let stats = Statistics::snapshot(&doc, 0);

        assert_eq!(stats.recent_clicks.len(), 2);
        assert_eq!(stats.total_clicks, 2);
    }

    #[test]
    fn test_recent_clicks_caps_at_window_newest_last() {
        let clicks: Vec<ClickRecord> = (0..12).map(|i| click(Platform::Facebook, i)).collect();
        let doc = doc_with_clicks(clicks);
        let stats = Statistics::snapshot(&doc, 0);

        assert_eq!(stats.recent_clicks.len(), 10);
        // The two oldest clicks fall out of the window
        assert_eq!(stats.recent_clicks[0].timestamp.minute(), 2);
        assert_eq!(stats.recent_clicks[9].timestamp.minute(), 11);
    }

    #[test]
    fn test_total_clicks_recomputed_from_counters() {
        let mut doc = doc_with_clicks(vec![click(Platform::Instagram, 1)]);
        // Tampered counter: the snapshot trusts counters, not the click log
        doc.platforms.tiktok = 5;

        let stats = Statistics::snapshot(&doc, 0);
        assert_eq!(stats.total_clicks, 6);
    }

    #[test]
    fn test_percentage_of_zero_total_is_zero() {
        let doc = doc_with_clicks(Vec::new());
        let stats = Statistics::snapshot(&doc, 0);

        assert_eq!(stats.percentage(0), 0.0);
    }

    #[test]
    fn test_percentage_split() {
        let doc = doc_with_clicks(vec![
            click(Platform::Facebook, 1),
            click(Platform::Facebook, 2),
            click(Platform::Twitter, 3),
            click(Platform::Twitter, 4),
        ]);
        let stats = Statistics::snapshot(&doc, 0);

        assert_eq!(stats.percentage(stats.platform_breakdown.facebook), 50.0);
        assert_eq!(stats.percentage(stats.platform_breakdown.instagram), 0.0);
    }

    #[test]
    fn test_write_failures_pass_through() {
        let doc = doc_with_clicks(Vec::new());
        let stats = Statistics::snapshot(&doc, 3);
        assert_eq!(stats.write_failures, 3);
    }
}
