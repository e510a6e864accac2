//! Request and response types exposed over the HTTP surface.

use std::time::SystemTime;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Game scheduling payloads.
pub mod game;
/// Health check payload.
pub mod health;
/// News payloads.
pub mod news;
/// Player registration payloads.
pub mod player;
/// Dashboard statistics payload.
pub mod stats;
/// Team payloads.
pub mod team;
/// Shared field validators.
pub mod validation;

fn format_system_time(time: SystemTime) -> String {
    OffsetDateTime::from(time)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "invalid-timestamp".into())
}

/// Parse an RFC3339 timestamp into a [`SystemTime`].
pub fn parse_rfc3339(value: &str) -> Result<SystemTime, time::error::Parse> {
    OffsetDateTime::parse(value, &Rfc3339).map(Into::into)
}
