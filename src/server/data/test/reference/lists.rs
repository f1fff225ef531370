use super::*;

/// Tests listing languages and expansions.
///
/// Expected: Ok(Vec) with every row in id order
#[tokio::test]
async fn lists_languages_and_expansions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    factory::reference::create_language(db, "JPN", "Japanese").await?;
    factory::reference::create_language(db, "ENG", "English").await?;
    factory::reference::create_expansion(db, "LEB", "LEB", "Beta").await?;

    let repo = ReferenceRepository::new(db, &caches);

    let languages = repo.languages().await?;
    let ids: Vec<&str> = languages.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["ENG", "JPN"]);

    let expansions = repo.expansions().await?;
    assert_eq!(expansions.len(), 1);
    assert_eq!(expansions[0].full_name, "Beta");

    Ok(())
}

/// Tests that language lists are cached after the first read.
///
/// Expected: a language inserted after the first read isn't listed
#[tokio::test]
async fn caches_languages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::memory();

    factory::reference::create_language(db, "ENG", "English").await?;
    let repo = ReferenceRepository::new(db, &caches);

    assert_eq!(repo.languages().await?.len(), 1);

    factory::reference::create_language(db, "JPN", "Japanese").await?;

    assert_eq!(repo.languages().await?.len(), 1);

    Ok(())
}

/// Tests the existence checks used to validate card references.
///
/// Expected: true for created ids, false for unknown ones
#[tokio::test]
async fn checks_reference_existence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let caches = Caches::noop();

    let refs = factory::create_reference_data(db).await?;
    let repo = ReferenceRepository::new(db, &caches);

    assert!(repo.card_type_exists(&refs.card_type.id).await?);
    assert!(repo.language_exists(&refs.language.id).await?);
    assert!(repo.expansion_exists(&refs.expansion.id).await?);
    assert!(repo.card_key_exists(&refs.card_key.id).await?);
    assert!(repo.foiling_exists(&refs.foiling.id).await?);
    assert!(!repo.language_exists("missing").await?);

    assert_eq!(repo.card_types().await?.len(), 1);
    assert_eq!(repo.card_keys().await?.len(), 1);

    Ok(())
}
