use crate::model::semester::SemesterDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    pub id: i32,
    /// Human-readable term label, e.g. `Fall 2023`.
    pub label: String,
}

impl Semester {
    pub fn from_entity(entity: entity::semester::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> SemesterDto {
        SemesterDto {
            semester_id: self.id,
            semester_label: self.label,
        }
    }
}
