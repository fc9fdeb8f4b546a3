use crate::model::category::CategoryDto;

/// Label classifying events, e.g. `Social` or `Brotherhood`.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn from_entity(entity: entity::event_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            category_id: self.id,
            category_name: self.name,
        }
    }
}
