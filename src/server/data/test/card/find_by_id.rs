use super::*;

/// Tests finding an existing card.
///
/// Expected: Ok(Some(Card)) with matching data
#[tokio::test]
async fn finds_existing_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let (poster, refs, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let found = CardRepository::new(db, &caches).find_by_id(card.id).await?;

    let found = found.unwrap();
    assert_eq!(found.id, card.id);
    assert_eq!(found.name, card.name);
    assert_eq!(found.poster_id, poster.id);
    assert_eq!(found.card_key_id, refs.card_key.id);

    Ok(())
}

/// Tests querying for a card that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let found = CardRepository::new(db, &caches).find_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a found card is served from the cache afterwards.
///
/// Verifies the cache hit by deleting the row behind the repository's back.
///
/// Expected: Ok(Some(Card)) from the cache after the row is gone
#[tokio::test]
async fn serves_remembered_card_from_cache() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (_, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CardRepository::new(db, &caches);

    repo.find_by_id(card.id).await?;
    entity::prelude::Card::delete_by_id(card.id).exec(db).await?;

    let cached = repo.find_by_id(card.id).await?;

    assert_eq!(cached.map(|c| c.id), Some(card.id));

    Ok(())
}
