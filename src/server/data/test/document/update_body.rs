use super::*;

/// Tests replacing the body of a document.
///
/// Expected: Ok with the new body persisted
#[tokio::test]
async fn replaces_body() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_collection(db, "widgets").await?;
    let document = factory::create_document(db, "widgets", json!({ "a": 1 })).await?;
    let id = document.id;

    let repo = DocumentRepository::new(db);
    let updated = repo.update_body(document, json!({ "a": 2 })).await?;

    assert_eq!(updated.id, id);
    assert_eq!(updated.body, json!({ "a": 2 }));

    let stored = repo.find_by_id("widgets", id).await?.unwrap();
    assert_eq!(stored.body, json!({ "a": 2 }));

    Ok(())
}
