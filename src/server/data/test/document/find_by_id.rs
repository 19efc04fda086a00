use super::*;

/// Tests finding a document by id within its collection.
///
/// Expected: Ok(Some) with matching body
#[tokio::test]
async fn finds_document_in_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, documents) =
        factory::create_collection_with_documents(db, "widgets", vec![json!({ "a": 1 })]).await?;

    let repo = DocumentRepository::new(db);
    let found = repo.find_by_id("widgets", documents[0].id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().body, json!({ "a": 1 }));

    Ok(())
}

/// Tests that a document id does not resolve inside another collection.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_documents_of_other_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, documents) =
        factory::create_collection_with_documents(db, "widgets", vec![json!({ "a": 1 })]).await?;
    factory::create_collection(db, "gadgets").await?;

    let repo = DocumentRepository::new(db);
    let found = repo.find_by_id("gadgets", documents[0].id).await?;

    assert!(found.is_none());

    Ok(())
}
