use crate::server::data::semester::SemesterRepository;
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
