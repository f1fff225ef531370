use super::*;

/// Tests deleting a collection together with its slots.
///
/// Expected: Ok(true) and later lookups miss, including the cached copy
#[tokio::test]
async fn deletes_collection_and_forgets_it() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (owner, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let collection = factory::create_collection(db, owner.id).await?;
    factory::create_collection_slot(db, collection.id, card.id, 1).await?;
    let repo = CollectionRepository::new(db, &caches);

    repo.find_by_id(collection.id).await?;

    assert!(repo.delete(collection.id).await?);
    assert!(repo.find_by_id(collection.id).await?.is_none());
    assert_eq!(entity::prelude::CollectionSlot::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a collection that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_returns_false_for_missing_collection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    assert!(!CollectionRepository::new(db, &caches).delete(999).await?);

    Ok(())
}
