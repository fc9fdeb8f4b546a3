//! Member domain models and parameters.
//!
//! Provides the member domain model, creation parameters and the sparse patch used by
//! partial updates.

use crate::model::member::{CreateMemberDto, MemberDto, UpdateMemberDto};

/// Chapter member with roll call, contact details and standing.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Surrogate primary key, exposed as `brotherID`.
    pub id: i32,
    /// Chapter roll call number, unique across members.
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub major: Option<String>,
    /// Current membership status, one of the configured status labels.
    pub status: String,
    /// Class or cohort label.
    pub class_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Non-zero when the member is in bad standing.
    pub bad_standing: i32,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        Self {
            id: entity.id,
            roll_call: entity.roll_call,
            first_name: entity.first_name,
            last_name: entity.last_name,
            major: entity.major,
            status: entity.status,
            class_name: entity.class_name,
            email: entity.email,
            phone_number: entity.phone_number,
            bad_standing: entity.bad_standing,
        }
    }

    /// Converts the member domain model to a DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            brother_id: self.id,
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

/// Parameters for creating a new member.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub roll_call: i32,
    pub first_name: String,
    pub last_name: String,
    pub major: Option<String>,
    pub status: String,
    pub class_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bad_standing: i32,
}

impl CreateMemberParams {
    pub fn from_dto(dto: CreateMemberDto) -> Self {
        Self {
            roll_call: dto.roll_call,
            first_name: dto.first_name,
            last_name: dto.last_name,
            major: dto.major,
            status: dto.status,
            class_name: dto.class_name,
            email: dto.email,
            phone_number: dto.phone_number,
            bad_standing: dto.bad_standing,
        }
    }
}

/// One updatable member column together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberField {
    RollCall(i32),
    FirstName(String),
    LastName(String),
    Major(Option<String>),
    Status(String),
    ClassName(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    BadStanding(i32),
}

/// Sparse update over the member allow-list.
///
/// Holds one entry per key present in the request body, in allow-list order.
#[derive(Debug, Clone)]
pub struct UpdateMemberParams {
    pub id: i32,
    pub fields: Vec<MemberField>,
}

impl UpdateMemberParams {
    pub fn from_dto(id: i32, dto: UpdateMemberDto) -> Self {
        let candidates = [
            dto.roll_call.map(MemberField::RollCall),
            dto.first_name.map(MemberField::FirstName),
            dto.last_name.map(MemberField::LastName),
            dto.major.map(MemberField::Major),
            dto.status.map(MemberField::Status),
            dto.class_name.map(MemberField::ClassName),
            dto.email.map(MemberField::Email),
            dto.phone_number.map(MemberField::PhoneNumber),
            dto.bad_standing.map(MemberField::BadStanding),
        ];

        Self {
            id,
            fields: candidates.into_iter().flatten().collect(),
        }
    }

    /// New status label, if the patch changes it.
    pub fn status(&self) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            MemberField::Status(status) => Some(status.as_str()),
            _ => None,
        })
    }
}
