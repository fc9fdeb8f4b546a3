pub use super::attendance::Entity as Attendance;
pub use super::event::Entity as Event;
pub use super::event_category::Entity as EventCategory;
pub use super::member::Entity as Member;
pub use super::member_status::Entity as MemberStatus;
pub use super::semester::Entity as Semester;
