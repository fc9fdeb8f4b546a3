//! Member fixtures for creating in-memory test data.

use entity::member;

/// Default roll call number.
pub const DEFAULT_ROLL_CALL: i32 = 100;

/// Default first name.
pub const DEFAULT_FIRST_NAME: &str = "Test";

/// Default last name.
pub const DEFAULT_LAST_NAME: &str = "Member";

/// Default major.
pub const DEFAULT_MAJOR: &str = "Computer Science";

/// Default membership status.
pub const DEFAULT_STATUS: &str = "Active";

/// Default class label.
pub const DEFAULT_CLASS_NAME: &str = "Alpha";

/// Creates a member entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - roll_call: `100`
/// - first_name / last_name: `"Test"` / `"Member"`
/// - major: `Some("Computer Science")`
/// - status: `"Active"`
/// - class_name: `Some("Alpha")`
/// - email / phone_number: `None`
/// - bad_standing: `0`
pub fn entity() -> member::Model {
    entity_builder().build()
}

/// Creates a member entity builder for customization.
pub fn entity_builder() -> MemberEntityBuilder {
    MemberEntityBuilder::default()
}

/// Builder for creating customized member entity models.
pub struct MemberEntityBuilder {
    id: i32,
    roll_call: i32,
    first_name: String,
    last_name: String,
    major: Option<String>,
    status: String,
    class_name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
    bad_standing: i32,
}

impl Default for MemberEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            roll_call: DEFAULT_ROLL_CALL,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            major: Some(DEFAULT_MAJOR.to_string()),
            status: DEFAULT_STATUS.to_string(),
            class_name: Some(DEFAULT_CLASS_NAME.to_string()),
            email: None,
            phone_number: None,
            bad_standing: 0,
        }
    }
}

impl MemberEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn roll_call(mut self, roll_call: i32) -> Self {
        self.roll_call = roll_call;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn major(mut self, major: Option<&str>) -> Self {
        self.major = major.map(str::to_string);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn class_name(mut self, class_name: Option<&str>) -> Self {
        self.class_name = class_name.map(str::to_string);
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    pub fn phone_number(mut self, phone_number: Option<&str>) -> Self {
        self.phone_number = phone_number.map(str::to_string);
        self
    }

    pub fn bad_standing(mut self, bad_standing: i32) -> Self {
        self.bad_standing = bad_standing;
        self
    }

    /// Builds and returns the member entity model.
    pub fn build(self) -> member::Model {
        member::Model {
            id: self.id,
            roll_call: self.roll_call,
            first_name: self.first_name,
            last_name: self.last_name,
            major: self.major,
            status: self.status,
            class_name: self.class_name,
            email: self.email,
            phone_number: self.phone_number,
            bad_standing: self.bad_standing,
        }
    }
}
