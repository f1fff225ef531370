use super::*;

/// Tests saving a card with every reference resolved.
///
/// Verifies that the returned card carries the poster and the resolved card type,
/// language and expansion rows.
///
/// Expected: Ok(Card) with references resolved
#[tokio::test]
async fn saves_card_with_resolved_references() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;

    let repo = CardRepository::new(db, &caches);
    let card = repo.save(poster.id, card_params(&refs, "Black Lotus", 25.0)).await?;

    assert_eq!(card.name, "Black Lotus");
    assert_eq!(card.poster_id, poster.id);
    assert_eq!(card.card_type.id, refs.card_type.id);
    assert_eq!(card.language.long_name, refs.language.long_name);
    assert_eq!(card.expansion.full_name, refs.expansion.full_name);
    assert!(card.foiling.is_none());

    Ok(())
}

/// Tests saving a foil card.
///
/// Expected: Ok(Card) with the foiling resolved
#[tokio::test]
async fn saves_foil_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;

    let mut params = card_params(&refs, "Foil", 5.0);
    params.foiling_id = Some(refs.foiling.id.clone());

    let card = CardRepository::new(db, &caches).save(poster.id, params).await?;

    assert_eq!(card.foiling.map(|f| f.id), Some(refs.foiling.id));

    Ok(())
}

/// Tests that saving a card flushes cached searches.
///
/// Verifies that a search cached before the insert sees the new card afterwards.
///
/// Expected: Ok with the new card present in the repeated search
#[tokio::test]
async fn save_invalidates_cached_queries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    let repo = CardRepository::new(db, &caches);
    let query = CardQuery {
        page: 1,
        ..Default::default()
    };

    let before = repo.query(&query, 20).await?;
    assert_eq!(before.total, 0);

    repo.save(poster.id, card_params(&refs, "New", 1.0)).await?;

    let after = repo.query(&query, 20).await?;
    assert_eq!(after.total, 1);
    assert_eq!(after.cards[0].name, "New");

    Ok(())
}
