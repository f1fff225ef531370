use super::*;

/// Tests inserting, updating and deleting cart slots through a warm cache.
///
/// Expected: every read after a write reflects that write
#[tokio::test]
async fn slot_writes_refresh_cache() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (user, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CartRepository::new(db, &caches);
    let cart = repo.save(user.id).await?;

    let inserted = repo.insert_slot(user.id, cart.id, card.id, 2).await?.unwrap();
    let slot = inserted.slot_for(card.id).unwrap().clone();
    assert_eq!(slot.amount, 2);
    assert_eq!(repo.find_by_user_id(user.id).await?.unwrap().slots.len(), 1);

    repo.update_slot(user.id, slot.id, 4).await?;
    assert_eq!(
        repo.find_by_user_id(user.id).await?.unwrap().slots[0].amount,
        4
    );

    repo.delete_slot(user.id, slot.id).await?;
    assert!(repo.find_by_user_id(user.id).await?.unwrap().slots.is_empty());

    Ok(())
}
