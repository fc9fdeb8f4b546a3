//! Wire types shared by every API endpoint.
//!
//! DTOs serialize with the camelCase keys clients already use (`brotherID`, `rollCall`,
//! `eventID`, `attendanceStatus`, ...). Conversion from and to server-side domain models
//! lives next to the domain models in `server::model`.

pub mod api;
pub mod attendance;
pub mod category;
pub mod count;
pub mod event;
pub mod member;
pub mod semester;
pub mod status;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes an absent key from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "crate::model::present")]` on an
/// `Option<Option<T>>`: a missing key stays `None`, `null` becomes `Some(None)`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
