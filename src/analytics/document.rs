//! Persisted analytics document
//!
//! This is the exact JSON shape stored under the analytics key. Field names
//! are part of the stored format and must not drift, so the serde renames
//! here are deliberate. A document that fails to parse is discarded wholesale
//! by the recorder; there is no partial recovery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::links;

/// Social platforms tracked for click attribution
/// The set is fixed; unknown names are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Tiktok,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Twitter,
    ];

    /// Canonical lowercase name, as stored and as accepted from the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Twitter => "twitter",
        }
    }

    /// Human-readable name for display
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Tiktok => "TikTok",
            Platform::Twitter => "Twitter",
        }
    }

    /// Campaign page this platform's card links to
    pub fn campaign_url(&self) -> &'static str {
        match self {
            Platform::Facebook => links::FACEBOOK,
            Platform::Instagram => links::INSTAGRAM,
            Platform::Tiktok => links::TIKTOK,
            Platform::Twitter => links::TWITTER,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for platform names outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    // Names are matched exactly; "Facebook" is not "facebook"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            "twitter" => Ok(Platform::Twitter),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

/// Per-platform click counters. One fixed field per platform, mirroring the
/// stored `platforms` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCounts {
    pub facebook: u64,
    pub instagram: u64,
    pub tiktok: u64,
    pub twitter: u64,
}

impl PlatformCounts {
    pub fn get(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Facebook => self.facebook,
            Platform::Instagram => self.instagram,
            Platform::Tiktok => self.tiktok,
            Platform::Twitter => self.twitter,
        }
    }

    pub fn bump(&mut self, platform: Platform) {
        match platform {
            Platform::Facebook => self.facebook += 1,
            Platform::Instagram => self.instagram += 1,
            Platform::Tiktok => self.tiktok += 1,
            Platform::Twitter => self.twitter += 1,
        }
    }

    /// Total clicks, always recomputed from the counters
    pub fn total(&self) -> u64 {
        self.facebook + self.instagram + self.tiktok + self.twitter
    }

    /// Counters in display order
    pub fn by_platform(&self) -> [(Platform, u64); 4] {
        Platform::ALL.map(|p| (p, self.get(p)))
    }
}

/// Window size recorded with each visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// One recorded visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub viewport: Viewport,
}

/// One recorded social card click
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRecord {
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
}

/// The whole persisted analytics state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDocument {
    pub total_visits: u64,
    pub first_visit: DateTime<Utc>,
    pub last_visit: Option<DateTime<Utc>>,
    pub platforms: PlatformCounts,
    pub sessions: Vec<SessionRecord>,
    pub clicks: Vec<ClickRecord>,
}

impl AnalyticsDocument {
    /// Zeroed document for a first run. `first_visit` is set now and never
    /// changes for the life of the document.
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            total_visits: 0,
            first_visit: now,
            last_visit: None,
            platforms: PlatformCounts::default(),
            sessions: Vec::new(),
            clicks: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_fresh_document_is_zeroed() {
        let now = ts("2026-08-24T12:00:00Z");
        let doc = AnalyticsDocument::fresh(now);

        assert_eq!(doc.total_visits, 0);
        assert_eq!(doc.first_visit, now);
        assert_eq!(doc.last_visit, None);
        assert_eq!(doc.platforms.total(), 0);
        assert!(doc.sessions.is_empty());
        assert!(doc.clicks.is_empty());
    }

    #[test]
    fn test_platform_parse_exact_names() {
        assert_eq!("facebook".parse::<Platform>(), Ok(Platform::Facebook));
        assert_eq!("tiktok".parse::<Platform>(), Ok(Platform::Tiktok));

        // Case matters, and names outside the fixed set are rejected
        assert!("Facebook".parse::<Platform>().is_err());
        assert!("myspace".parse::<Platform>().is_err());
        assert!("".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_display_parse_roundtrip() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
    }

    #[test]
    fn test_platform_counts_bump_and_total() {
        let mut counts = PlatformCounts::default();
        counts.bump(Platform::Facebook);
        counts.bump(Platform::Facebook);
        counts.bump(Platform::Twitter);

        assert_eq!(counts.get(Platform::Facebook), 2);
        assert_eq!(counts.get(Platform::Instagram), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_stored_field_names() {
        let json = serde_json::to_string(&AnalyticsDocument::fresh(ts("2026-08-24T12:00:00Z")))
            .unwrap();

        // The stored format is camelCase even though the Rust fields are not
        assert!(json.contains("\"totalVisits\":0"));
        assert!(json.contains("\"firstVisit\""));
        assert!(json.contains("\"lastVisit\":null"));
        assert!(json.contains("\"facebook\":0"));
        assert!(!json.contains("total_visits"));
    }

    #[test]
    fn test_click_record_field_names() {
        let click = ClickRecord {
            platform: Platform::Instagram,
            timestamp: ts("2026-08-24T12:00:00Z"),
            session_id: "session_1_abc".to_string(),
        };
        let json = serde_json::to_string(&click).unwrap();

        assert!(json.contains("\"platform\":\"instagram\""));
        assert!(json.contains("\"sessionId\":\"session_1_abc\""));
    }

    #[test]
    fn test_document_json_roundtrip() {
        let mut doc = AnalyticsDocument::fresh(ts("2026-08-24T12:00:00Z"));
        doc.total_visits = 2;
        doc.last_visit = Some(ts("2026-08-24T13:00:00Z"));
        doc.platforms.bump(Platform::Tiktok);
        doc.sessions.push(SessionRecord {
            id: "session_1_abc".to_string(),
            timestamp: ts("2026-08-24T12:00:00Z"),
            user_agent: "campaign-kiosk/0.1.0 (linux)".to_string(),
            viewport: Viewport {
                width: 1280,
                height: 800,
            },
        });
        doc.clicks.push(ClickRecord {
            platform: Platform::Tiktok,
            timestamp: ts("2026-08-24T12:30:00Z"),
            session_id: "session_1_abc".to_string(),
        });

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: AnalyticsDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_partial_document_rejected() {
        // Missing fields mean a malformed document, not a recoverable one
        let result = serde_json::from_str::<AnalyticsDocument>("{\"totalVisits\":3}");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_platform_in_stored_click_rejected() {
        let json = r#"{
            "totalVisits": 1,
            "firstVisit": "2026-08-24T12:00:00Z",
            "lastVisit": null,
            "platforms": {"facebook": 0, "instagram": 0, "tiktok": 0, "twitter": 0},
            "sessions": [],
            "clicks": [{"platform": "myspace", "timestamp": "2026-08-24T12:00:00Z", "sessionId": "s"}]
        }"#;
        assert!(serde_json::from_str::<AnalyticsDocument>(json).is_err());
    }
}
