//! Common response envelope types.
//!
//! Every handler answers with an application-level `status` field inside the
//! JSON body: `100` on success, `404` on a handled failure. The HTTP status
//! code stays `200 OK` for both.

use serde::Serialize;

/// Application-level success code.
pub const STATUS_SUCCESS: u16 = 100;
/// Application-level failure code (validation or unknown id).
pub const STATUS_FAILURE: u16 = 404;
/// Application-level code for unrecovered server errors.
pub const STATUS_INTERNAL: u16 = 500;

pub const MSG_ADDED: &str = "New Address Added succesfully";
pub const MSG_UPDATED: &str = "Updated succesfully";
pub const MSG_DELETED: &str = "Deleted succesfully";
pub const MSG_INVALID_COORDINATES: &str =
    "Invalid Coordinates, please check the coordinates and try again!";
pub const MSG_INVALID_ADDRESS_ID: &str = "Invalid Address ID";

/// `{msg, status}` body used by the write endpoints and all failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusMessage {
    pub msg: String,
    pub status: u16,
}

impl StatusMessage {
    pub fn success(msg: &str) -> Self {
        StatusMessage {
            msg: msg.to_string(),
            status: STATUS_SUCCESS,
        }
    }

    pub fn failure(msg: &str) -> Self {
        StatusMessage {
            msg: msg.to_string(),
            status: STATUS_FAILURE,
        }
    }
}
