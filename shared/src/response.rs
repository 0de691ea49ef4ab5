//! API response payloads
//!
//! The shipping API returns plain entity documents and arrays; only a few
//! endpoints wrap their result in a dedicated payload.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/generate-uid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UidResponse {
    pub uid: String,
}
