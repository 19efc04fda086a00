use super::*;
use sea_orm::EntityTrait;

/// Tests registering a new collection.
///
/// Expected: Ok(true) with registry entry created
#[tokio::test]
async fn registers_new_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CollectionRepository::new(db);
    let created = repo.ensure("widgets").await?;

    assert!(created);
    assert!(repo.exists("widgets").await?);
    assert_eq!(repo.names().await?, vec!["widgets".to_string()]);

    Ok(())
}

/// Tests that registering an existing collection succeeds and keeps its documents.
///
/// Repeated registrations must not conflict on the registry primary key.
///
/// Expected: Ok(false) with the existing document still present
#[tokio::test]
async fn keeps_existing_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_collection_with_documents(db, "widgets", vec![json!({ "a": 1 })]).await?;

    let repo = CollectionRepository::new(db);
    assert!(!repo.ensure("widgets").await?);
    assert!(!repo.ensure("widgets").await?);
    assert!(repo.ensure("gadgets").await?);

    assert_eq!(
        repo.names().await?,
        vec!["gadgets".to_string(), "widgets".to_string()]
    );
    let documents = entity::prelude::Document::find().all(db).await?;
    assert_eq!(documents.len(), 1);

    Ok(())
}
