use crate::server::{data::member_status::MemberStatusRepository, model::status::SetStatusParams};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_semester;
mod create;
mod delete;
mod get_history;
mod get_roster;
mod update_status;
