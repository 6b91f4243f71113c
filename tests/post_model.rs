//! PostService against a seeded in-memory store.

mod common;

use common::{count, migrated_pool, seeded_pool};
use posts_api::{AppError, NewPost, PostService, SEED_POSTS};

#[tokio::test]
async fn list_returns_seeded_posts() {
    let pool = seeded_pool().await;
    let posts = PostService::list(&pool).await.unwrap();
    assert_eq!(posts.len(), SEED_POSTS.len());
    for (post, (user_id, text)) in posts.iter().zip(SEED_POSTS) {
        assert_eq!(post.user_id, *user_id);
        assert_eq!(post.text, *text);
    }
}

#[tokio::test]
async fn list_is_empty_without_rows() {
    let pool = migrated_pool().await;
    assert!(PostService::list(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn get_by_id_finds_and_misses() {
    let pool = seeded_pool().await;
    let posts = PostService::list(&pool).await.unwrap();
    for post in [&posts[0], &posts[1], &posts[posts.len() - 1]] {
        assert_eq!(PostService::get_by_id(&pool, post.id).await.unwrap().as_ref(), Some(post));
    }
    let missing = SEED_POSTS.len() as i64 + 1;
    assert_eq!(PostService::get_by_id(&pool, missing).await.unwrap(), None);
}

#[tokio::test]
async fn insert_returns_new_row_and_grows_list() {
    let pool = seeded_pool().await;
    let before = PostService::list(&pool).await.unwrap();
    let post = PostService::insert(&pool, &NewPost::new("new base post", 1)).await.unwrap().unwrap();
    assert_eq!(post.text, "new base post");
    assert_eq!(post.user_id, 1);

    let after = PostService::list(&pool).await.unwrap();
    let mut expected = before.clone();
    expected.push(post);
    assert_eq!(after, expected);
}

#[tokio::test]
async fn insert_with_unknown_user_is_constraint_violation() {
    let pool = seeded_pool().await;
    let err = PostService::insert(&pool, &NewPost::new("this post is invalid", 1000))
        .await
        .unwrap_err();
    match err {
        AppError::ConstraintViolation(message) => assert!(message.contains("FOREIGN KEY"), "{}", message),
        other => panic!("expected constraint violation, got {:?}", other),
    }
    assert_eq!(count(&pool, "posts").await, SEED_POSTS.len() as i64);
}

#[tokio::test]
async fn update_reports_rows_changed() {
    let pool = seeded_pool().await;
    let changes = NewPost::new("updated post text", 1);
    assert_eq!(PostService::update(&pool, 1, &changes).await.unwrap(), 1);
    let post = PostService::get_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!((post.text.as_str(), post.user_id), ("updated post text", 1));

    let before = PostService::list(&pool).await.unwrap();
    assert_eq!(PostService::update(&pool, 40, &changes).await.unwrap(), 0);
    assert_eq!(PostService::list(&pool).await.unwrap(), before);
}

#[tokio::test]
async fn update_can_move_post_to_another_user() {
    let pool = seeded_pool().await;
    let changes = NewPost::new("handed over", 9);
    assert_eq!(PostService::update(&pool, 1, &changes).await.unwrap(), 1);
    assert_eq!(PostService::get_by_id(&pool, 1).await.unwrap().unwrap().user_id, 9);
}

#[tokio::test]
async fn update_with_unknown_user_is_constraint_violation() {
    let pool = seeded_pool().await;
    let err = PostService::update(&pool, 1, &NewPost::new("orphan", 1000)).await.unwrap_err();
    assert!(matches!(err, AppError::ConstraintViolation(_)));
    let post = PostService::get_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(post.user_id, SEED_POSTS[0].0);
}

#[tokio::test]
async fn remove_deletes_exactly_one() {
    let pool = seeded_pool().await;
    assert_eq!(PostService::remove(&pool, 3).await.unwrap(), 1);
    assert_eq!(PostService::get_by_id(&pool, 3).await.unwrap(), None);
    assert_eq!(PostService::list(&pool).await.unwrap().len(), SEED_POSTS.len() - 1);
    assert_eq!(PostService::remove(&pool, 3).await.unwrap(), 0);
}
