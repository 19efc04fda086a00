use super::*;
use crate::server::data::document::DocumentRepository;

/// Tests resetting a collection that still holds documents.
///
/// Verifies that the registry entry survives, its documents are removed and other
/// collections are untouched.
///
/// Expected: Ok(false) with the collection empty
#[tokio::test]
async fn empties_existing_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_collection_with_documents(
        db,
        "widgets",
        vec![json!({ "a": 1 }), json!({ "a": 2 })],
    )
    .await?;
    factory::create_collection_with_documents(db, "gadgets", vec![json!({ "b": 1 })]).await?;

    let repo = CollectionRepository::new(db);
    let created = repo.reset("widgets").await?;

    assert!(!created);
    assert!(repo.exists("widgets").await?);

    let documents = DocumentRepository::new(db);
    assert_eq!(documents.count("widgets").await?, 0);
    assert_eq!(documents.count("gadgets").await?, 1);

    Ok(())
}

/// Tests resetting a collection that does not exist yet.
///
/// Expected: Ok(true) with the collection registered
#[tokio::test]
async fn registers_missing_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CollectionRepository::new(db);
    let created = repo.reset("widgets").await?;

    assert!(created);
    assert!(repo.exists("widgets").await?);

    Ok(())
}
