use super::*;

/// Tests finding a user by id and by username.
///
/// Expected: Ok(Some(User)) for both lookups
#[tokio::test]
async fn finds_by_id_and_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(user.id).await?.unwrap().username, user.username);
    assert_eq!(repo.find_by_username(&user.username).await?.unwrap().id, user.id);
    assert!(repo.find_by_id(user.id + 1000).await?.is_none());
    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests that email lookup ignores unverified users.
///
/// Expected: Ok(None) for an unverified owner, Ok(Some) for a verified one
#[tokio::test]
async fn finds_only_verified_email_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("shared@mail.com")
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(repo.find_verified_by_email("shared@mail.com").await?.is_none());

    let verified = factory::user::UserFactory::new(db)
        .email("shared@mail.com")
        .verified(true)
        .build()
        .await?;

    assert_eq!(
        repo.find_verified_by_email("shared@mail.com").await?.map(|u| u.id),
        Some(verified.id)
    );

    Ok(())
}
