pub use super::collection::Entity as Collection;
pub use super::document::Entity as Document;
