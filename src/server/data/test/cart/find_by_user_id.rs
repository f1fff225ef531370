use super::*;

/// Tests creating and then finding a user's cart.
///
/// Expected: Ok(Some(Cart)) belonging to the user with no slots
#[tokio::test]
async fn finds_saved_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let user = factory::create_user(db).await?;
    let repo = CartRepository::new(db, &caches);
    let saved = repo.save(user.id).await?;

    let found = repo.find_by_user_id(user.id).await?.unwrap();

    assert_eq!(found.id, saved.id);
    assert_eq!(found.user_id, user.id);
    assert!(found.slots.is_empty());

    Ok(())
}

/// Tests finding the cart of a user without one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let user = factory::create_user(db).await?;

    assert!(CartRepository::new(db, &caches)
        .find_by_user_id(user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a second cart for the same user is rejected.
///
/// Expected: Err(AppError::DbErr) from the unique user id
#[tokio::test]
async fn rejects_second_cart() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let user = factory::create_user(db).await?;
    let repo = CartRepository::new(db, &caches);
    repo.save(user.id).await?;

    assert!(matches!(repo.save(user.id).await, Err(AppError::DbErr(_))));

    Ok(())
}
