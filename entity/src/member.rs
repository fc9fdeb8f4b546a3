use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::member_status::Entity")]
    MemberStatus,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::member_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
