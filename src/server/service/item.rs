use sea_orm::DatabaseConnection;

use crate::server::{
    data::{collection::CollectionRepository, document::DocumentRepository},
    error::AppError,
    model::item::{CreateItemParam, Item, UpdateItemParam, ITEM_COLLECTION},
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all items in insertion order
    pub async fn list(&self) -> Result<Vec<Item>, AppError> {
        let documents = DocumentRepository::new(self.db)
            .find_all(ITEM_COLLECTION)
            .await?;

        Ok(documents.into_iter().map(Item::from_entity).collect())
    }

    /// Creates a new item, registering the item collection first if it was never seeded
    ///
    /// Registration ignores an existing collection, so concurrent first creates both
    /// succeed.
    pub async fn create(&self, param: CreateItemParam) -> Result<Item, AppError> {
        CollectionRepository::new(self.db)
            .ensure(ITEM_COLLECTION)
            .await?;

        let document = DocumentRepository::new(self.db)
            .insert(ITEM_COLLECTION, param.into_body())
            .await?;

        Ok(Item::from_entity(document))
    }

    /// Merges the provided fields into an existing item
    ///
    /// # Returns
    /// - `Ok(Some(Item))` - The updated item
    /// - `Ok(None)` - No item with that id
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, id: i32, param: UpdateItemParam) -> Result<Option<Item>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let Some(document) = repo.find_by_id(ITEM_COLLECTION, id).await? else {
            return Ok(None);
        };

        let body = param.merge_into(document.body.clone());
        let updated = repo.update_body(document, body).await?;

        Ok(Some(Item::from_entity(updated)))
    }

    /// Deletes an item; deleting a missing item is not an error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        DocumentRepository::new(self.db)
            .delete(ITEM_COLLECTION, id)
            .await?;

        Ok(())
    }
}
