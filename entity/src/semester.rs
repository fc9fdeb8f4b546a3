use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "semester")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human readable term, e.g. "Fall 2023".
    #[sea_orm(unique)]
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_status::Entity")]
    MemberStatus,
}

impl Related<super::member_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
