use super::*;

/// Tests replacing every field of a card.
///
/// Verifies that the poster is kept while the other fields take the new values.
///
/// Expected: Ok(Some(Card)) with updated fields
#[tokio::test]
async fn updates_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (poster, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let other_refs = factory::create_reference_data(db).await?;

    let mut params = card_params(&other_refs, "Renamed", 42.0);
    params.in_stock_amount = 7;

    let updated = CardRepository::new(db, &caches)
        .update(card.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.id, card.id);
    assert_eq!(updated.poster_id, poster.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.price, 42.0);
    assert_eq!(updated.in_stock_amount, 7);
    assert_eq!(updated.language.id, other_refs.language.id);

    Ok(())
}

/// Tests that a full update flushes cached searches.
///
/// Caches a search for the old and the new name before renaming the card.
///
/// Expected: the old name no longer matches and the new one does
#[tokio::test]
async fn update_invalidates_cached_queries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (_, refs, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CardRepository::new(db, &caches);

    let old_name = CardQuery {
        name: card.name.clone(),
        page: 1,
        ..Default::default()
    };
    let new_name = CardQuery {
        name: "Renamed".to_string(),
        page: 1,
        ..Default::default()
    };
    assert_eq!(repo.query(&old_name, 20).await?.total, 1);
    assert_eq!(repo.query(&new_name, 20).await?.total, 0);

    repo.update(card.id, card_params(&refs, "Renamed", 10.0))
        .await?
        .unwrap();

    assert_eq!(repo.query(&old_name, 20).await?.total, 0);
    assert_eq!(repo.query(&new_name, 20).await?.total, 1);

    Ok(())
}

/// Tests updating a card that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let refs = factory::create_reference_data(db).await?;

    let result = CardRepository::new(db, &caches)
        .update(999, card_params(&refs, "Ghost", 1.0))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a price patch refreshes the cached card.
///
/// Expected: Ok with the new price served by a later lookup
#[tokio::test]
async fn update_price_refreshes_cached_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (_, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CardRepository::new(db, &caches);

    assert_eq!(repo.find_by_id(card.id).await?.unwrap().price, 10.0);

    repo.update_price(card.id, 100.0).await?;

    assert_eq!(repo.find_by_id(card.id).await?.unwrap().price, 100.0);

    Ok(())
}

/// Tests that a price patch flushes cached searches.
///
/// Prices card at 10, caches both bounded searches, then patches the price to 100.
///
/// Expected: `minPrice = 9` matches the card and `maxPrice = 9` doesn't
#[tokio::test]
async fn update_price_invalidates_cached_queries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (_, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CardRepository::new(db, &caches);

    let above = CardQuery {
        min_price: Some(9.0),
        page: 1,
        ..Default::default()
    };
    let below = CardQuery {
        max_price: Some(9.0),
        page: 1,
        ..Default::default()
    };
    assert_eq!(repo.query(&above, 20).await?.total, 1);
    assert_eq!(repo.query(&below, 20).await?.total, 0);

    repo.update_price(card.id, 100.0).await?;
    repo.update_price(card.id, 5.0).await?;

    assert_eq!(repo.query(&above, 20).await?.total, 0);
    assert_eq!(repo.query(&below, 20).await?.total, 1);

    Ok(())
}

/// Tests patching the price of a card that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_price_returns_none_for_missing_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let result = CardRepository::new(db, &caches).update_price(999, 1.0).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests patching the stocked amount.
///
/// Expected: Ok(Some(Card)) with the new amount
#[tokio::test]
async fn updates_in_stock_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (_, _, card) = factory::helpers::create_card_with_dependencies(db).await?;

    let updated = CardRepository::new(db, &caches)
        .update_in_stock_amount(card.id, 0)
        .await?
        .unwrap();

    assert_eq!(updated.in_stock_amount, 0);

    Ok(())
}

/// Tests that a stocked amount patch flushes cached searches.
///
/// Caches an in-stock-only search, then sells out the card and restocks it.
///
/// Expected: the card leaves the search at 0 and comes back once restocked
#[tokio::test]
async fn update_in_stock_amount_invalidates_cached_queries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let (_, _, card) = factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CardRepository::new(db, &caches);

    let in_stock = CardQuery {
        in_stock_only: true,
        page: 1,
        ..Default::default()
    };
    assert_eq!(repo.query(&in_stock, 20).await?.total, 1);

    repo.update_in_stock_amount(card.id, 0).await?;
    assert_eq!(repo.query(&in_stock, 20).await?.total, 0);

    repo.update_in_stock_amount(card.id, 4).await?;
    assert_eq!(repo.query(&in_stock, 20).await?.total, 1);

    Ok(())
}
