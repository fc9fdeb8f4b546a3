use sea_orm::FromQueryResult;

use crate::model::count::LabelCountDto;

/// One group of an aggregate count.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

impl LabelCount {
    pub fn into_dto(self) -> LabelCountDto {
        LabelCountDto {
            label: self.label,
            count: self.count,
        }
    }
}
