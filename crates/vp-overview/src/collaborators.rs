// collaborators.rs — Pieces of the overview that are rendered elsewhere.
//
// Date phrasing, the VersionPress activation sentence, the WordPress update
// sentence and the environment line are owned by other components. The
// engine only passes them the data they need and splices their output in.

use chrono::{DateTime, FixedOffset, Utc};

use crate::line::RenderedLine;

/// Formats commit dates for revert lines.
pub trait TimeFormatter {
    /// Relative phrase such as "3 days ago".
    fn relative(&self, date: &DateTime<FixedOffset>) -> String;

    /// Absolute timestamp such as "March 1, 2016 10:00 AM".
    fn absolute(&self, date: &DateTime<FixedOffset>) -> String;
}

/// chrono-backed formatter anchored to a fixed "now".
///
/// The anchor is captured once so that re-rendering the same commit through
/// the same engine produces the same text.
#[derive(Debug, Clone, Copy)]
pub struct ChronoTimeFormatter {
    now: DateTime<Utc>,
}

impl ChronoTimeFormatter {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn anchored_now() -> Self {
        Self::new(Utc::now())
    }
}

impl Default for ChronoTimeFormatter {
    fn default() -> Self {
        Self::anchored_now()
    }
}

fn rounded(value: f64) -> i64 {
    value.round() as i64
}

impl TimeFormatter for ChronoTimeFormatter {
    fn relative(&self, date: &DateTime<FixedOffset>) -> String {
        let delta = self.now.signed_duration_since(date.with_timezone(&Utc));
        let future = delta.num_seconds() < 0;
        let seconds = delta.num_seconds().unsigned_abs() as f64;

        let minutes = rounded(seconds / 60.0);
        let hours = rounded(seconds / 3600.0);
        let days = rounded(seconds / 86400.0);
        let months = rounded(seconds / 86400.0 / 30.4);
        let years = rounded(seconds / 86400.0 / 365.25);

        let phrase = if seconds < 45.0 {
            "a few seconds".to_string()
        } else if seconds < 90.0 {
            "a minute".to_string()
        } else if minutes < 45 {
            format!("{} minutes", minutes)
        } else if minutes < 90 {
            "an hour".to_string()
        } else if hours < 22 {
            format!("{} hours", hours)
        } else if hours < 36 {
            "a day".to_string()
        } else if days < 26 {
            format!("{} days", days)
        } else if days < 46 {
            "a month".to_string()
        } else if months < 11 {
            format!("{} months", months.max(2))
        } else if months < 18 {
            "a year".to_string()
        } else {
            format!("{} years", years.max(2))
        };

        if future {
            format!("in {}", phrase)
        } else {
            format!("{} ago", phrase)
        }
    }

    fn absolute(&self, date: &DateTime<FixedOffset>) -> String {
        date.format("%B %-d, %Y %-I:%M %p").to_string()
    }
}

/// Renders the sentences the engine delegates.
pub trait LineCollaborators {
    /// Line for VersionPress activating or deactivating itself.
    fn versionpress_line(&self, action: &str) -> RenderedLine;

    /// Line for a WordPress core update to `version`.
    fn wordpress_update_line(&self, version: &str) -> RenderedLine;

    /// Trailing line describing the commit's environment.
    fn environment_line(&self, environment: &str) -> RenderedLine;
}

/// Default English sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollaborators;

impl LineCollaborators for DefaultCollaborators {
    fn versionpress_line(&self, action: &str) -> RenderedLine {
        let verb = match action {
            "activate" => "Activated",
            "deactivate" => "Deactivated",
            _ => "Changed",
        };
        RenderedLine::new()
            .text(format!("{} ", verb))
            .identifier("VersionPress")
    }

    fn wordpress_update_line(&self, version: &str) -> RenderedLine {
        RenderedLine::new()
            .text("Updated ")
            .identifier("WordPress")
            .text(" to version ")
            .identifier(version)
    }

    fn environment_line(&self, environment: &str) -> RenderedLine {
        let environment = if environment.is_empty() {
            "?"
        } else {
            environment
        };
        RenderedLine::new()
            .text("Environment: ")
            .identifier(environment)
    }
}
