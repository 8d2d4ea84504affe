//! Terminal statistics report
//!
//! Read-only view over the stored analytics document for the `stats`
//! subcommand. This path never creates or repairs data; a missing document
//! is reported as its own condition instead of being silently zeroed.

use crate::analytics::document::AnalyticsDocument;
use crate::analytics::stats::Statistics;
use crate::constants::storage::ANALYTICS_KEY;
use crate::storage::Storage;
use chrono::{DateTime, Local, Utc};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("analytics not initialized yet; launch the kiosk once to start recording")]
    NotInitialized,

    #[error("stored analytics are unreadable ({0}); the kiosk will reset them on next launch")]
    Unreadable(#[from] serde_json::Error),

    #[error("failed to read analytics storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// Load statistics from storage without going through a recorder
pub fn load(store: &dyn Storage) -> Result<Statistics, ReportError> {
    let blob = store
        .read(ANALYTICS_KEY)?
        .ok_or(ReportError::NotInitialized)?;
    let doc: AnalyticsDocument = serde_json::from_str(&blob)?;
    Ok(Statistics::snapshot(&doc, 0))
}

/// Print the statistics report for the stored document
pub fn run(store: &dyn Storage) -> Result<(), ReportError> {
    let stats = load(store)?;
    print!("{}", render(&stats));
    Ok(())
}

/// Render a statistics snapshot as terminal text
pub fn render(stats: &Statistics) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Campaign analytics".to_string());
    lines.push("=".repeat(38));
    lines.push(String::new());
    lines.push(format!("Total visits:   {}", stats.total_visits));
    lines.push(format!("Total clicks:   {}", stats.total_clicks));
    lines.push(format!("Sessions:       {}", stats.total_sessions));
    lines.push(format!("First visit:    {}", local(stats.first_visit)));
    lines.push(format!(
        "Last visit:     {}",
        stats
            .last_visit
            .map(local)
            .unwrap_or_else(|| "never".to_string())
    ));

    lines.push(String::new());
    lines.push("Clicks by platform".to_string());
    for (platform, clicks) in stats.platform_breakdown.by_platform() {
        lines.push(format!(
            "  {:<10} {:>5}  ({:.1}%)",
            platform.label(),
            clicks,
            stats.percentage(clicks)
        ));
    }

    if !stats.recent_clicks.is_empty() {
        lines.push(String::new());
        lines.push("Recent clicks (newest last)".to_string());
        for click in &stats.recent_clicks {
            lines.push(format!(
                "  {}  {:<10} session ..{}",
                local(click.timestamp),
                click.platform.as_str(),
                id_tail(&click.session_id)
            ));
        }
    }

    if stats.write_failures > 0 {
        lines.push(String::new());
        lines.push(format!(
            "Storage health: {} write failure(s) this run",
            stats.write_failures
        ));
    }

    lines.push(String::new());
    lines.push("Data is recorded locally on this kiosk.".to_string());
    lines.join("\n") + "\n"
}

pub(crate) fn local(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Last eight characters of a session id, enough to tell sessions apart
pub(crate) fn id_tail(id: &str) -> &str {
    let start = id.len().saturating_sub(8);
    id.get(start..).unwrap_or(id)
}
