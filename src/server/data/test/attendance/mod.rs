use crate::{
    model::attendance::AttendanceStatus,
    server::{data::attendance::AttendanceRepository, model::attendance::AttendanceParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update_status;
