use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored attendance status is not one of `Present`, `Absent` or `Excused`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown attendance status '{value}' stored for member {member_id} at event {event_id}")]
    UnknownAttendanceStatus {
        /// The stored string that failed to parse
        value: String,
        member_id: i32,
        event_id: i32,
    },

    /// Event row was loaded without its category.
    ///
    /// The category foreign key restricts deletes, so this only happens when the
    /// database was modified outside of the application.
    #[error("Event {event_id} has no category")]
    MissingCategory {
        /// The event whose category could not be loaded
        event_id: i32,
    },
}
