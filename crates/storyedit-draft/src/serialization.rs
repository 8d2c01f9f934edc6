//! JSON wire shape for publish payloads.
//!
//! The payload travels inside a versioned envelope so the upload side can
//! tell which schema it is reading.

use serde::{Deserialize, Serialize};
use storyedit_core::ValidationError;
use thiserror::Error;

use crate::publish::PublishPayload;

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Errors reading or writing payload JSON.
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("Invalid payload JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("No migration path from payload version {0}")]
    NoMigration(u32),

    #[error("Invalid payload: {0}")]
    Invalid(#[from] ValidationError),
}

/// Versioned payload wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadEnvelope {
    /// Schema version for migration.
    pub version: u32,
    /// The finalized draft.
    pub payload: PublishPayload,
    /// Application version that wrote this payload.
    pub app_version: String,
}

impl PayloadEnvelope {
    pub fn new(payload: PublishPayload) -> Self {
        Self {
            version: CURRENT_VERSION,
            payload,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serialize to pretty JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Deserialize from JSON bytes, applying migrations if needed.
    pub fn from_json(data: &[u8]) -> Result<Self, SerializationError> {
        let raw: serde_json::Value = serde_json::from_slice(data)?;

        let version = raw.get("version").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        if version > CURRENT_VERSION {
            return Err(SerializationError::UnsupportedVersion {
                found: version,
                supported: CURRENT_VERSION,
            });
        }

        let migrated = migrate(raw, version)?;
        let envelope: Self = serde_json::from_value(migrated)?;

        if let Some(trim) = envelope.payload.trim {
            let duration = envelope.payload.media.playable_duration()?;
            if !trim.fits(duration) {
                return Err(ValidationError::InvalidTrim {
                    start: trim.start(),
                    end: trim.end(),
                    duration,
                }
                .into());
            }
        }
        Ok(envelope)
    }
}

/// Apply sequential migrations from `from_version` to CURRENT_VERSION.
fn migrate(
    mut data: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, SerializationError> {
    let mut version = from_version;

    while version < CURRENT_VERSION {
        match version {
            0 => {
                // v0 → v1: a bare payload without the envelope
                if data.get("payload").is_none() {
                    data = serde_json::json!({
                        "version": 1,
                        "payload": data,
                        "app_version": "0.0.0",
                    });
                } else {
                    data["version"] = serde_json::json!(1);
                }
                version = 1;
            }
            _ => return Err(SerializationError::NoMigration(version)),
        }
    }

    Ok(data)
}
