use super::*;
use crate::server::data::document::DocumentRepository;

/// Tests dropping a collection with documents.
///
/// Verifies that both the registry entry and the documents are removed while
/// documents of other collections are untouched.
///
/// Expected: Ok(true)
#[tokio::test]
async fn drops_collection_and_documents() -> Result<(), DbErr> {
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
    let dropped = repo.drop("widgets").await?;

    assert!(dropped);
    assert!(!repo.exists("widgets").await?);

    let documents = DocumentRepository::new(db);
    assert_eq!(documents.count("widgets").await?, 0);
    assert_eq!(documents.count("gadgets").await?, 1);

    Ok(())
}

/// Tests dropping a collection that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CollectionRepository::new(db);
    let dropped = repo.drop("widgets").await?;

    assert!(!dropped);

    Ok(())
}
