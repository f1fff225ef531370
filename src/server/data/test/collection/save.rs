use super::*;

/// Tests creating an empty collection.
///
/// Expected: Ok(Collection) owned by the user with no slots
#[tokio::test]
async fn saves_empty_collection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let owner = factory::user::create_verified_user(db).await?;

    let collection = CollectionRepository::new(db, &caches)
        .save(owner.id, info("Vintage"))
        .await?;

    assert_eq!(collection.owner_id, owner.id);
    assert_eq!(collection.name, "Vintage");
    assert!(collection.slots.is_empty());

    Ok(())
}

/// Tests renaming a collection.
///
/// Expected: Ok(Some(Collection)) with the new name and description
#[tokio::test]
async fn updates_info() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let owner = factory::user::create_verified_user(db).await?;
    let repo = CollectionRepository::new(db, &caches);
    let collection = repo.save(owner.id, info("Vintage")).await?;

    let updated = repo.update_info(collection.id, info("Legacy")).await?.unwrap();

    assert_eq!(updated.name, "Legacy");
    assert_eq!(updated.description, "Legacy description");
    assert_eq!(repo.find_by_id(collection.id).await?.unwrap().name, "Legacy");

    Ok(())
}

/// Tests renaming a collection that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_info_returns_none_for_missing_collection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let result = CollectionRepository::new(db, &caches)
        .update_info(999, info("Legacy"))
        .await?;

    assert!(result.is_none());

    Ok(())
}
