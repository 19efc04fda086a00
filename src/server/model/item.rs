//! Domain & parameter models for item operations
//!
//! Items are documents of the `Collection` collection with a single optional
//! `property` field. Documents seeded from fixtures may carry additional fields;
//! those are preserved on update and ignored when converting to the domain model.

use serde_json::{Map, Value};

use crate::model::item::{CreateItemDto, ItemDto, UpdateItemDto};

/// Name of the collection holding items.
pub const ITEM_COLLECTION: &str = "Collection";

const PROPERTY_FIELD: &str = "property";

/// The item domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub property: Option<String>,
}

impl Item {
    /// Converts a document entity to the item domain model
    ///
    /// A missing or non-string `property` field becomes `None`.
    ///
    /// # Arguments
    /// - `entity` - The document entity from the database
    ///
    /// # Returns
    /// - `Item` - The converted item domain model
    pub fn from_entity(entity: entity::document::Model) -> Self {
        let property = entity
            .body
            .get(PROPERTY_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            id: entity.id,
            property,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            property: self.property,
        }
    }
}

/// Parameters for creating a new item
#[derive(Debug, Clone, Default)]
pub struct CreateItemParam {
    pub property: Option<String>,
}

impl CreateItemParam {
    /// Builds the JSON body stored for the new item
    pub fn into_body(self) -> Value {
        let mut body = Map::new();
        if let Some(property) = self.property {
            body.insert(PROPERTY_FIELD.to_string(), Value::String(property));
        }
        Value::Object(body)
    }
}

impl From<CreateItemDto> for CreateItemParam {
    fn from(dto: CreateItemDto) -> Self {
        Self {
            property: dto.property,
        }
    }
}

/// Parameters for updating an existing item
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemParam {
    pub property: Option<String>,
}

impl UpdateItemParam {
    /// Merges the provided fields into an existing document body
    ///
    /// Fields not named by the parameter are left untouched. A body that is not a JSON
    /// object is replaced by an object holding only the provided fields.
    ///
    /// # Arguments
    /// - `body` - The stored document body
    ///
    /// # Returns
    /// - `Value` - The merged body
    pub fn merge_into(self, body: Value) -> Value {
        let mut fields = match body {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        if let Some(property) = self.property {
            fields.insert(PROPERTY_FIELD.to_string(), Value::String(property));
        }

        Value::Object(fields)
    }
}

impl From<UpdateItemDto> for UpdateItemParam {
    fn from(dto: UpdateItemDto) -> Self {
        Self {
            property: dto.property,
        }
    }
}
