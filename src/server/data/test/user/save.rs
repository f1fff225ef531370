use super::*;

/// Tests inserting a new user.
///
/// Expected: Ok(User) that is neither admin nor verified
#[tokio::test]
async fn saves_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .save(NewUser {
            username: "newuser".to_string(),
            email: "new@mail.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "newuser");
    assert!(!user.is_admin);
    assert!(!user.verified);

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err(DbErr) for the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserRepository::new(db)
        .save(NewUser {
            username: existing.username,
            email: "other@mail.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
