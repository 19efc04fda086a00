use super::*;

/// Tests detecting an existing collection.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_collection(db, "widgets").await?;

    let repo = CollectionRepository::new(db);
    let result = repo.exists("widgets").await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting a missing collection.
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

    factory::create_collection(db, "gadgets").await?;

    let repo = CollectionRepository::new(db);
    let result = repo.exists("widgets").await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests that the existence check surfaces database errors.
///
/// Runs against a database without the registry table.
///
/// Expected: Err
#[tokio::test]
async fn fails_without_registry_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CollectionRepository::new(db);
    let result = repo.exists("widgets").await;

    assert!(result.is_err());

    Ok(())
}
