use crate::{
    model::attendance::AttendanceStatus,
    server::error::{internal::InternalError, AppError},
};

/// Parses a stored attendance status string
///
/// # Arguments
/// - `value` - The stored status string
/// - `member_id` / `event_id` - Key of the row the value came from, for logging
///
/// # Returns
/// - `Ok(AttendanceStatus)` - Successfully parsed the stored label
/// - `Err(AppError::InternalErr(UnknownAttendanceStatus))` - The stored label is
///   not one of `Present`, `Absent` or `Excused`
pub fn parse_attendance_status(
    value: String,
    member_id: i32,
    event_id: i32,
) -> Result<AttendanceStatus, AppError> {
    let result = AttendanceStatus::from_label(&value).ok_or(
        InternalError::UnknownAttendanceStatus {
            value,
            member_id,
            event_id,
        },
    )?;

    Ok(result)
}

/// Trims a required text field, rejecting blank values with a 400 response.
pub fn require_text(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    Ok(trimmed.to_string())
}
