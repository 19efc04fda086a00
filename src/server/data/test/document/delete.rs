use super::*;

/// Tests deleting a document by id.
///
/// Expected: Ok(1) and the document is gone
#[tokio::test]
async fn deletes_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, documents) = factory::create_collection_with_documents(
        db,
        "widgets",
        vec![json!({ "a": 1 }), json!({ "a": 2 })],
    )
    .await?;

    let repo = DocumentRepository::new(db);
    let deleted = repo.delete("widgets", documents[0].id).await?;

    assert_eq!(deleted, 1);
    assert_eq!(repo.count("widgets").await?, 1);
    assert!(repo.find_by_id("widgets", documents[0].id).await?.is_none());

    Ok(())
}

/// Tests deleting a document id that belongs to another collection.
///
/// Expected: Ok(0) and the document is kept
#[tokio::test]
async fn does_not_delete_across_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, documents) =
        factory::create_collection_with_documents(db, "widgets", vec![json!({ "a": 1 })]).await?;

    let repo = DocumentRepository::new(db);
    let deleted = repo.delete("gadgets", documents[0].id).await?;

    assert_eq!(deleted, 0);
    assert_eq!(repo.count("widgets").await?, 1);

    Ok(())
}
