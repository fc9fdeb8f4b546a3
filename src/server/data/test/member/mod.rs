use crate::server::{
    data::member::MemberRepository,
    model::member::{CreateMemberParams, MemberField, UpdateMemberParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod delete_by_roll_call;
mod get;
mod update;

fn create_params(roll_call: i32) -> CreateMemberParams {
    CreateMemberParams {
        roll_call,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        major: Some("Mathematics".to_string()),
        status: "Active".to_string(),
        class_name: Some("Beta".to_string()),
        email: Some("ada@example.edu".to_string()),
        phone_number: None,
        bad_standing: 0,
    }
}
