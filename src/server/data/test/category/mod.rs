use crate::server::data::category::CategoryRepository;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_name;
mod get_all;
