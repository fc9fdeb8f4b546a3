use crate::server::{config::StatusTaxonomy, error::AppError};
use std::time::Duration;

mod event;

const TIMEOUT: Duration = Duration::from_secs(5);

fn taxonomy() -> StatusTaxonomy {
    StatusTaxonomy::parse("Active,Alumnus,Co-op").unwrap()
}
