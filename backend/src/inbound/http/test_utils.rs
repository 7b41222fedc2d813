//! Test helpers for inbound HTTP components.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant so error bodies are reproducible.
///
/// Defaults to `2025-01-01T12:00:00Z`.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    pub utc_now: DateTime<Utc>,
}

impl Default for FixtureClock {
    fn default() -> Self {
        Self {
            utc_now: Utc
                .with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}
