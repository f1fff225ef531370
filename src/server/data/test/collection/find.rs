use super::*;

/// Tests loading a collection with its slot cards resolved.
///
/// Expected: Ok(Some(Collection)) with one slot carrying the full card
#[tokio::test]
async fn finds_collection_with_resolved_slots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let (owner, refs, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let collection = factory::create_collection(db, owner.id).await?;
    factory::create_collection_slot(db, collection.id, card.id, 3).await?;

    let found = CollectionRepository::new(db, &caches)
        .find_by_id(collection.id)
        .await?
        .unwrap();

    assert_eq!(found.slots.len(), 1);
    assert_eq!(found.slots[0].amount, 3);
    assert_eq!(found.slots[0].card.id, card.id);
    assert_eq!(found.slots[0].card.expansion.id, refs.expansion.id);

    Ok(())
}

/// Tests querying for a collection that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_collection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let found = CollectionRepository::new(db, &caches).find_by_id(1).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests listing only the collections of one owner.
///
/// Expected: Ok(Vec) with the owner's two collections in id order
#[tokio::test]
async fn finds_collections_by_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let owner = factory::user::create_verified_user(db).await?;
    let other = factory::user::create_verified_user(db).await?;
    let first = factory::create_collection(db, owner.id).await?;
    let second = factory::create_collection(db, owner.id).await?;
    factory::create_collection(db, other.id).await?;

    let collections = CollectionRepository::new(db, &caches)
        .find_by_owner(owner.id)
        .await?;

    let ids: Vec<i32> = collections.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
