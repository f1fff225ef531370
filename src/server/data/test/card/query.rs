use super::*;

fn query() -> CardQuery {
    CardQuery {
        page: 1,
        ..Default::default()
    }
}

/// Tests that price bounds are strict on both sides.
///
/// Creates cards priced 5, 10 and 15 and searches with the boundary values.
///
/// Expected: a card priced exactly at a bound is excluded
#[tokio::test]
async fn price_bounds_are_exclusive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    for price in [5.0, 10.0, 15.0] {
        CardFactory::new(db, poster.id, &refs).price(price).build().await?;
    }

    let repo = CardRepository::new(db, &caches);

    let above_ten = repo
        .query(
            &CardQuery {
                min_price: Some(10.0),
                ..query()
            },
            20,
        )
        .await?;
    assert_eq!(above_ten.total, 1);
    assert_eq!(above_ten.cards[0].price, 15.0);

    let between = repo
        .query(
            &CardQuery {
                min_price: Some(5.0),
                max_price: Some(15.0),
                ..query()
            },
            20,
        )
        .await?;
    assert_eq!(between.total, 1);
    assert_eq!(between.cards[0].price, 10.0);

    Ok(())
}

/// Tests negative bounds other than the `-1` sentinel.
///
/// Expected: `maxPrice = -5` matches nothing and `minPrice = -5` matches every card
#[tokio::test]
async fn negative_bounds_still_filter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    factory::helpers::create_card_with_dependencies(db).await?;
    let repo = CardRepository::new(db, &caches);

    let below = CardQuery::from_params(
        CardQueryParams {
            max_price: -5.0,
            ..Default::default()
        },
        10,
    )?;
    assert_eq!(repo.query(&below, 20).await?.total, 0);

    let above = CardQuery::from_params(
        CardQueryParams {
            min_price: -5.0,
            ..Default::default()
        },
        10,
    )?;
    assert_eq!(repo.query(&above, 20).await?.total, 1);

    Ok(())
}

/// Tests requesting a page whose offset can't be addressed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unaddressable_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let result = CardRepository::new(db, &caches)
        .query(
            &CardQuery {
                page: u64::MAX,
                ..query()
            },
            20,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the case-insensitive name filter.
///
/// Expected: only cards whose name contains the filter, ignoring case
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    CardFactory::new(db, poster.id, &refs).name("Black Lotus").build().await?;
    CardFactory::new(db, poster.id, &refs).name("Mox Pearl").build().await?;

    let page = CardRepository::new(db, &caches)
        .query(
            &CardQuery {
                name: "lotus".to_string(),
                ..query()
            },
            20,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.cards[0].name, "Black Lotus");

    Ok(())
}

/// Tests exact reference filters combined with stock and foil flags.
///
/// Expected: only the in-stock foil card of the requested language
#[tokio::test]
async fn combines_structured_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    let other = factory::create_reference_data(db).await?;

    let wanted = CardFactory::new(db, poster.id, &refs)
        .foiling(Some(refs.foiling.id.clone()))
        .build()
        .await?;
    CardFactory::new(db, poster.id, &refs)
        .foiling(Some(refs.foiling.id.clone()))
        .in_stock_amount(0)
        .build()
        .await?;
    CardFactory::new(db, poster.id, &refs).build().await?;
    CardFactory::new(db, poster.id, &other)
        .foiling(Some(other.foiling.id.clone()))
        .build()
        .await?;

    let page = CardRepository::new(db, &caches)
        .query(
            &CardQuery {
                language_id: refs.language.id.clone(),
                in_stock_only: true,
                foil_only: true,
                ..query()
            },
            20,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.cards[0].id, wanted.id);

    Ok(())
}

/// Tests that keywords widen the search instead of narrowing it.
///
/// One keyword matches a card by name, the other matches a different card by its
/// expansion short name.
///
/// Expected: both cards returned
#[tokio::test]
async fn keywords_match_any_field_of_any_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    let other = factory::create_reference_data(db).await?;

    let by_name = CardFactory::new(db, poster.id, &refs).name("Black Lotus").build().await?;
    let by_expansion = CardFactory::new(db, poster.id, &other).name("Island").build().await?;
    CardFactory::new(db, poster.id, &refs).name("Forest").build().await?;

    let page = CardRepository::new(db, &caches)
        .query(
            &CardQuery {
                keywords: vec!["LOTUS".to_string(), other.expansion.short_name.to_uppercase()],
                ..query()
            },
            20,
        )
        .await?;

    let ids: Vec<i32> = page.cards.iter().map(|c| c.id).collect();
    assert_eq!(page.total, 2);
    assert_eq!(ids, vec![by_name.id, by_expansion.id]);

    Ok(())
}

/// Tests keyword matching on reference ids and card key names.
///
/// Expected: a language id matches only in full, a card key name matches ignoring case
#[tokio::test]
async fn keywords_match_language_and_card_key() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    let other = factory::create_reference_data(db).await?;
    let card = CardFactory::new(db, poster.id, &refs).build().await?;
    CardFactory::new(db, poster.id, &other).build().await?;

    let repo = CardRepository::new(db, &caches);

    let by_language = repo
        .query(
            &CardQuery {
                keywords: vec![refs.language.id.to_lowercase()],
                ..query()
            },
            20,
        )
        .await?;
    assert_eq!(by_language.total, 1);
    assert_eq!(by_language.cards[0].id, card.id);

    let language_id = refs.language.id.to_lowercase();
    let partial = &language_id[..language_id.len() - 1];
    let by_partial_language = repo
        .query(
            &CardQuery {
                keywords: vec![partial.to_string()],
                ..query()
            },
            20,
        )
        .await?;
    assert_eq!(by_partial_language.total, 0);

    let by_key = repo
        .query(
            &CardQuery {
                keywords: vec![refs.card_key.eng_name.to_lowercase()],
                ..query()
            },
            20,
        )
        .await?;
    assert_eq!(by_key.total, 1);
    assert_eq!(by_key.cards[0].id, card.id);

    Ok(())
}

/// Tests that keywords are combined with the structured filters.
///
/// Expected: a keyword match above the price bound is excluded
#[tokio::test]
async fn keywords_respect_structured_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    CardFactory::new(db, poster.id, &refs).name("Cheap Lotus").price(1.0).build().await?;
    CardFactory::new(db, poster.id, &refs).name("Pricey Lotus").price(50.0).build().await?;

    let page = CardRepository::new(db, &caches)
        .query(
            &CardQuery {
                keywords: vec!["lotus".to_string()],
                max_price: Some(10.0),
                ..query()
            },
            20,
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.cards[0].name, "Cheap Lotus");

    Ok(())
}

/// Tests paging through results ordered by id.
///
/// Expected: pages of the configured size and the total count of every match
#[tokio::test]
async fn paginates_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(CardFactory::new(db, poster.id, &refs).build().await?.id);
    }

    let repo = CardRepository::new(db, &caches);

    let second = repo.query(&CardQuery { page: 2, ..query() }, 2).await?;
    assert_eq!(second.total, 5);
    assert_eq!(second.cards.iter().map(|c| c.id).collect::<Vec<_>>(), ids[2..4].to_vec());

    let third = repo.query(&CardQuery { page: 3, ..query() }, 2).await?;
    assert_eq!(third.cards.len(), 1);

    let past_end = repo.query(&CardQuery { page: 4, ..query() }, 2).await?;
    assert!(past_end.cards.is_empty());
    assert_eq!(past_end.total, 5);

    Ok(())
}

/// Tests that a repeated search is answered from the query cache.
///
/// Inserts a card directly through the factory, which bypasses invalidation.
///
/// Expected: the stale cached page is returned
#[tokio::test]
async fn repeated_query_hits_cache() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    let poster = factory::user::create_verified_user(db).await?;
    let refs = factory::create_reference_data(db).await?;
    let repo = CardRepository::new(db, &caches);

    assert_eq!(repo.query(&query(), 20).await?.total, 0);

    CardFactory::new(db, poster.id, &refs).build().await?;

    assert_eq!(repo.query(&query(), 20).await?.total, 0);

    caches.card_queries.forget_all().await?;
    assert_eq!(repo.query(&query(), 20).await?.total, 1);

    Ok(())
}
