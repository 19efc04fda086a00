use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub property: Option<String>,
}

/// Body of a create request; a client supplied `_id` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    #[serde(default)]
    pub property: Option<String>,
}

/// Body of an update request; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemDto {
    #[serde(default)]
    pub property: Option<String>,
}
