//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Local storage layout constants
pub mod storage {
    /// Directory name for kiosk data under the platform data/runtime dirs
    pub const APP_DIR: &str = "jctt-campaign";

    /// Storage key for the persisted analytics document
    pub const ANALYTICS_KEY: &str = "jctt_campaign_analytics";

    /// Storage key for the per-login session identifier
    pub const SESSION_KEY: &str = "jctt_session_id";

    /// Environment variable overriding the analytics data directory
    pub const DATA_DIR_ENV: &str = "JCTT_DATA_DIR";
}

/// Session identifier format constants
pub mod session {
    /// Prefix for generated session identifiers
    pub const ID_PREFIX: &str = "session_";

    /// Length of the random base-36 suffix
    pub const SUFFIX_LEN: usize = 9;
}

/// Analytics bookkeeping constants
pub mod analytics {
    /// Number of most recent clicks included in a statistics snapshot
    pub const RECENT_CLICKS: usize = 10;
}

/// Particle physics and spawn scheduling constants
pub mod particles {
    /// Downward acceleration in logical points per second squared
    pub const GRAVITY: f32 = 200.0;

    /// Particle lifetime in seconds, counted from its first simulation step
    pub const LIFETIME_SECS: f32 = 1.0;

    /// Delay between consecutive spawns within one burst, in seconds
    pub const SPAWN_STAGGER_SECS: f32 = 0.020;

    /// Burst size when the caller has no reason to pick another
    pub const DEFAULT_BURST_COUNT: usize = 20;

    /// Burst size for social card clicks
    pub const CARD_BURST_COUNT: usize = 15;

    /// Burst size for the logo easter egg
    pub const EGG_BURST_COUNT: usize = 30;

    /// Upper bound on simultaneously live particles; excess spawns are dropped
    pub const MAX_LIVE: usize = 512;

    /// Diameter range lower bound in points (inclusive)
    pub const SIZE_MIN: f32 = 4.0;

    /// Diameter range upper bound in points (exclusive)
    pub const SIZE_MAX: f32 = 12.0;

    /// Launch speed range lower bound in points per second (inclusive)
    pub const SPEED_MIN: f32 = 50.0;

    /// Launch speed range upper bound in points per second (exclusive)
    pub const SPEED_MAX: f32 = 150.0;

    /// Largest simulation step in seconds; longer frame gaps are clamped
    pub const MAX_STEP_SECS: f32 = 0.1;
}

/// Logo easter egg constants
pub mod logo {
    /// Clicks required within one streak to trigger the easter egg
    pub const EGG_CLICK_THRESHOLD: u32 = 5;

    /// Quiet gap in milliseconds that ends a click streak
    pub const EGG_WINDOW_MS: u64 = 2000;
}

/// Connectivity watcher constants
pub mod netwatch {
    /// Probe target address (Cloudflare public DNS, TCP)
    pub const PROBE_IP: [u8; 4] = [1, 1, 1, 1];

    /// Probe target port
    pub const PROBE_PORT: u16 = 53;

    /// Seconds between connectivity probes
    pub const PROBE_PERIOD_SECS: u64 = 30;

    /// Probe connect timeout in milliseconds
    pub const PROBE_TIMEOUT_MS: u64 = 3000;
}

/// Campaign link targets for the social cards
pub mod links {
    /// Facebook campaign page
    pub const FACEBOOK: &str = "https://facebook.com/jcttcampaign";

    /// Instagram campaign profile
    pub const INSTAGRAM: &str = "https://instagram.com/jcttcampaign";

    /// TikTok campaign profile
    pub const TIKTOK: &str = "https://tiktok.com/@jcttcampaign";

    /// Twitter campaign profile
    pub const TWITTER: &str = "https://twitter.com/jcttcampaign";
}
