//! JSON response shapes.
//!
//! Admin lookups that miss still answer `200 OK` with `success: false`; clients branch on `success`.

use crate::model::Guest;
use serde::Serialize;
use utoipa::ToSchema;

pub const GUEST_NOT_FOUND: &str = "Guest not found";

#[derive(Debug, Serialize, ToSchema)]
pub struct RsvpCreated {
    pub success: bool,
    pub id: i32,
}

/// Outcome of an admin operation on a single guest.
#[derive(Debug, Serialize, ToSchema)]
pub struct GuestResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<Guest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GuestResult {
    pub fn found(guest: Guest) -> Self {
        GuestResult {
            success: true,
            guest: Some(guest),
            error: None,
        }
    }

    pub fn done() -> Self {
        GuestResult {
            success: true,
            guest: None,
            error: None,
        }
    }

    pub fn not_found() -> Self {
        GuestResult {
            success: false,
            guest: None,
            error: Some(GUEST_NOT_FOUND.to_string()),
        }
    }
}
