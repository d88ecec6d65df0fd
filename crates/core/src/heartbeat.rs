//! Heartbeat request parsing and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};

/// Wire message returned for any malformed heartbeat payload.
const INVALID_HEARTBEAT: &str = "Invalid sellerId or sessionId";

/// A session heartbeat: "this session was seen for this seller just now".
///
/// Both identifiers are opaque strings; the only constraint is that they
/// are present and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Heartbeat {
    #[validate(length(min = 1))]
    pub seller_id: String,
    #[validate(length(min = 1))]
    pub session_id: String,
}

impl Heartbeat {
    /// Parse a heartbeat from a raw JSON body.
    ///
    /// Any failure (malformed JSON, missing fields, non-string fields,
    /// empty strings) collapses to the same validation error so the
    /// caller sees a single stable message.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let heartbeat: Self =
            serde_json::from_slice(body).map_err(|_| Error::validation(INVALID_HEARTBEAT))?;

        heartbeat
            .validate()
            .map_err(|_| Error::validation(INVALID_HEARTBEAT))?;

        Ok(heartbeat)
    }
}
