use crate::server::data::document::DocumentRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory, fixture};

mod delete;
mod find_by_id;
mod insert_many;
mod update_body;
