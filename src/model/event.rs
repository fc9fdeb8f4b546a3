use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::attendance::EventAttendanceDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(rename = "eventID")]
    pub event_id: i32,
    pub event_name: String,
    pub category_name: String,
    pub event_location: String,
    /// Calendar date, e.g. `2024-07-27`.
    pub event_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    #[serde(alias = "name")]
    pub event_name: String,
    pub category_name: String,
    #[serde(alias = "location")]
    pub event_location: String,
    #[serde(alias = "date")]
    pub event_date: NaiveDate,
}

/// Sparse event update; only keys present in the body are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPatchDto {
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, alias = "location", skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
}

/// Body of `PUT /api/events`, which names the event inside the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventDto {
    #[serde(rename = "eventID")]
    pub event_id: i32,
    #[serde(flatten)]
    pub patch: EventPatchDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventRosterDto {
    pub event: EventDto,
    pub attendance: Vec<EventAttendanceDto>,
}
