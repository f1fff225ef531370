use super::*;

/// Tests inserting a slot for a new card.
///
/// Expected: Ok(Some(Collection)) with the new slot
#[tokio::test]
async fn inserts_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (owner, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let collection = factory::create_collection(db, owner.id).await?;

    let updated = CollectionRepository::new(db, &caches)
        .insert_slot(collection.id, card.id, 2)
        .await?
        .unwrap();

    assert_eq!(updated.slot_for(card.id).map(|s| s.amount), Some(2));

    Ok(())
}

/// Tests that slot writes refresh the cached collection.
///
/// Reads the collection into the cache first, then updates and deletes a slot.
///
/// Expected: later reads reflect each write
#[tokio::test]
async fn slot_writes_refresh_cache() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (owner, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let collection = factory::create_collection(db, owner.id).await?;
    let slot = factory::create_collection_slot(db, collection.id, card.id, 2).await?;
    let repo = CollectionRepository::new(db, &caches);

    assert_eq!(repo.find_by_id(collection.id).await?.unwrap().slots[0].amount, 2);

    repo.update_slot(collection.id, slot.id, 5).await?;
    assert_eq!(repo.find_by_id(collection.id).await?.unwrap().slots[0].amount, 5);

    repo.delete_slot(collection.id, slot.id).await?;
    assert!(repo.find_by_id(collection.id).await?.unwrap().slots.is_empty());

    Ok(())
}
