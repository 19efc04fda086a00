use super::*;

/// Tests inserting records into a collection.
///
/// Verifies that records are stored in order and that key order within each record
/// is preserved.
///
/// Expected: Ok(2) with both documents stored
#[tokio::test]
async fn inserts_records_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_collection(db, "widgets").await?;

    let repo = DocumentRepository::new(db);
    let inserted = repo
        .insert_many(
            "widgets",
            fixture::record::objects(vec![json!({ "z": 1, "a": 2 }), json!({ "a": 3 })]),
        )
        .await?;

    assert_eq!(inserted, 2);

    let documents = repo.find_all("widgets").await?;
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].body, json!({ "z": 1, "a": 2 }));
    assert_eq!(documents[1].body, json!({ "a": 3 }));

    let keys: Vec<&String> = documents[0].body.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a"]);

    Ok(())
}

/// Tests that an empty insert is a no-op.
///
/// Runs without the document tables: no query may be issued.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_insert_issues_no_query() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let inserted = repo.insert_many("widgets", Vec::new()).await?;

    assert_eq!(inserted, 0);

    Ok(())
}

/// Tests inserting more records than fit into one statement.
///
/// Expected: Ok with every record stored
#[tokio::test]
async fn inserts_across_chunks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_collection(db, "numbers").await?;

    let records = (0..1234)
        .map(|n| json!({ "n": n }))
        .collect::<Vec<_>>();

    let repo = DocumentRepository::new(db);
    let inserted = repo
        .insert_many("numbers", fixture::record::objects(records))
        .await?;

    assert_eq!(inserted, 1234);
    assert_eq!(repo.count("numbers").await?, 1234);

    Ok(())
}

/// Tests that a failed insert stores nothing.
///
/// The target collection is not registered, so the foreign key rejects the rows.
///
/// Expected: Err with zero documents stored
#[tokio::test]
async fn failed_insert_is_rolled_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db);
    let result = repo
        .insert_many("missing", fixture::record::objects(fixture::record::widgets()))
        .await;

    assert!(result.is_err());
    assert_eq!(repo.count("missing").await?, 0);

    Ok(())
}
