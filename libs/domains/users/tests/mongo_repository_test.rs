//! MongoDB repository tests
//!
//! Require Docker; run with `cargo test -p domain_users -- --ignored`.

use domain_users::*;
use futures_util::TryStreamExt;
use ::mongodb::IndexModel;
use test_utils::{TestDataBuilder, TestMongo};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        hashed_password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$ZGlnZXN0".to_string(),
    }
}

async fn repository(mongo: &TestMongo, test_name: &str) -> MongoUserRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repo = MongoUserRepository::new(mongo.database(&builder.database_name()));
    repo.ensure_indexes().await.unwrap();
    repo
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_find_replace_delete() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "mongo_crud").await;

    let id = repo
        .insert(new_user("Juan Pérez", "juan@email.com"))
        .await
        .unwrap();

    let stored = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Juan Pérez");
    assert_eq!(
        repo.find_by_email("juan@email.com").await.unwrap(),
        Some(stored.clone())
    );
    assert!(repo.find_by_email("JUAN@email.com").await.unwrap().is_none());

    repo.replace_by_id(id, new_user("Juan P.", "juan.perez@email.com"))
        .await
        .unwrap();
    let replaced = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(replaced.id, id);
    assert_eq!(replaced.email, "juan.perez@email.com");

    assert_eq!(repo.delete_by_id(id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(id).await.unwrap(), 0);
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_email_index_is_not_unique() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "mongo_non_unique").await;

    let first = repo.insert(new_user("A", "same@example.com")).await.unwrap();
    let second = repo.insert(new_user("B", "same@example.com")).await.unwrap();

    assert_ne!(first, second);

    let indexes: Vec<IndexModel> = repo
        .collection()
        .list_indexes()
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    let email_index = indexes
        .iter()
        .find(|index| index.keys.contains_key("email"))
        .expect("email index should exist");
    let options = email_index.options.as_ref().unwrap();
    assert_eq!(options.name.as_deref(), Some("email_lookup"));
    assert_ne!(options.unique, Some(true));
    assert_eq!(
        repo.find_by_email_excluding_id("same@example.com", first)
            .await
            .unwrap()
            .map(|u| u.id),
        Some(second)
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_all_in_insertion_order() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "mongo_list").await;

    for name in ["c", "a", "b"] {
        repo.insert(new_user(name, &format!("{name}@example.com")))
            .await
            .unwrap();
    }

    let names: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_against_mongo() {
    let mongo = TestMongo::new().await;
    let service = UserService::new(repository(&mongo, "mongo_service").await);

    let created = service
        .create_user(CreateUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(service.get_user(&created.id).await.unwrap(), created);
    assert!(matches!(
        service
            .create_user(CreateUser {
                name: "Other".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .await,
        Err(UserError::AlreadyExists { .. })
    ));
    assert_eq!(service.delete_user(&created.id).await.unwrap().deleted_count, 1);
}
