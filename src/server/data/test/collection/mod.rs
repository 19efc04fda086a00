use crate::server::data::collection::CollectionRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod drop;
mod ensure;
mod exists;
mod reset;
