// tests/schema_tests.rs

mod common;

use common::{new_user, seed_post, seed_user, setup_pool};
use social_model::models::{
    comment::{NewComment, UpdateComment},
    media::{MediaType, NewMedia, UpdateMedia},
    post::NewPost,
    user::UpdateUser,
};
use social_model::repo::{comments, media, posts, users};
use social_model::{AppError, ConstraintKind};

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let pool = setup_pool().await;
    seed_user(&pool, "alice").await;

    let mut dup = new_user("alice");
    dup.email = "other@example.com".to_string();

    let err = users::create_user(&pool, &dup).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let pool = setup_pool().await;
    seed_user(&pool, "alice").await;

    let mut dup = new_user("alice2");
    dup.email = "alice@example.com".to_string();

    let err = users::create_user(&pool, &dup).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
    assert_eq!(users::list_users(&pool).await.unwrap().len(), 1);
}

#[tokio::test]
async fn post_requires_existing_owner() {
    let pool = setup_pool().await;

    let err = posts::create_post(&pool, &NewPost { user_id: 4242 })
        .await
        .unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn comment_requires_existing_author_and_post() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let missing_post = NewComment {
        comment_text: "hi".to_string(),
        author_id: user.id,
        post_id: post.id + 100,
    };
    let err = comments::create_comment(&pool, &missing_post).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));

    let missing_author = NewComment {
        comment_text: "hi".to_string(),
        author_id: user.id + 100,
        post_id: post.id,
    };
    let err = comments::create_comment(&pool, &missing_author).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn media_requires_existing_post() {
    let pool = setup_pool().await;

    let payload = NewMedia {
        media_type: MediaType::Image,
        url: "https://cdn.example.com/a.png".to_string(),
        post_id: 1,
    };
    let err = media::create_media(&pool, &payload).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
}

#[tokio::test]
async fn media_type_outside_enum_fails_at_schema_level() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let result = sqlx::query("INSERT INTO media (type, url, post_id) VALUES ('gif', 'u', ?)")
        .bind(post.id)
        .execute(&pool)
        .await;

    let err = AppError::from(result.unwrap_err());
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));
}

#[tokio::test]
async fn media_round_trips_through_the_table() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let created = media::create_media(
        &pool,
        &NewMedia {
            media_type: MediaType::Video,
            url: "https://cdn.example.com/clip.mp4".to_string(),
            post_id: post.id,
        },
    )
    .await
    .unwrap();

    let loaded = media::get_media(&pool, created.id).await.unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.serialize()["type"], "video");

    let updated = media::update_media(
        &pool,
        created.id,
        &UpdateMedia {
            media_type: Some(MediaType::Image),
            url: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.media_type, MediaType::Image);
    assert_eq!(updated.url, "https://cdn.example.com/clip.mp4");

    assert_eq!(media::post_of_media(&pool, created.id).await.unwrap(), post);
}

#[tokio::test]
async fn over_length_values_are_rejected_by_payload_and_schema() {
    let pool = setup_pool().await;

    let mut long_name = new_user("bob");
    long_name.username = "b".repeat(51);
    let err = users::create_user(&pool, &long_name).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));

    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let raw = sqlx::query(
        "INSERT INTO comments (comment_text, author_id, post_id) VALUES (?, ?, ?)",
    )
    .bind("c".repeat(501))
    .bind(user.id)
    .bind(post.id)
    .execute(&pool)
    .await;
    let err = AppError::from(raw.unwrap_err());
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Check));
}

#[tokio::test]
async fn missing_required_column_is_a_not_null_violation() {
    let pool = setup_pool().await;

    let raw = sqlx::query(r#"INSERT INTO "user" (username, firstname, lastname) VALUES ('x', 'f', 'l')"#)
        .execute(&pool)
        .await;
    let err = AppError::from(raw.unwrap_err());
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::NotNull));
}

#[tokio::test]
async fn partial_user_update_touches_only_given_fields() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;

    let updated = users::update_user(
        &pool,
        user.id,
        &UpdateUser {
            email: Some("alice@new.example.com".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.email, "alice@new.example.com");
    assert_eq!(updated.username, user.username);
    assert_eq!(updated.firstname, user.firstname);
    assert_eq!(updated.lastname, user.lastname);

    let missing = users::update_user(&pool, 999, &UpdateUser::default()).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_into_taken_email_is_rejected() {
    let pool = setup_pool().await;
    seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    let err = users::update_user(
        &pool,
        bob.id,
        &UpdateUser {
            email: Some("alice@example.com".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::Unique));
}

#[tokio::test]
async fn deleting_post_cascades_to_media_and_comments() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let m = media::create_media(
        &pool,
        &NewMedia {
            media_type: MediaType::Image,
            url: "https://cdn.example.com/a.png".to_string(),
            post_id: post.id,
        },
    )
    .await
    .unwrap();
    let c = comments::create_comment(
        &pool,
        &NewComment {
            comment_text: "first".to_string(),
            author_id: user.id,
            post_id: post.id,
        },
    )
    .await
    .unwrap();

    posts::delete_post(&pool, post.id).await.unwrap();

    assert!(matches!(media::get_media(&pool, m.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        comments::get_comment(&pool, c.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        posts::delete_post(&pool, post.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn deleting_user_with_content_is_restricted() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let err = users::delete_user(&pool, user.id).await.unwrap_err();
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    assert_eq!(users::get_user(&pool, user.id).await.unwrap(), user);

    posts::delete_post(&pool, post.id).await.unwrap();
    users::delete_user(&pool, user.id).await.unwrap();
    assert!(matches!(
        users::get_user(&pool, user.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn comment_text_can_be_edited() {
    let pool = setup_pool().await;
    let user = seed_user(&pool, "alice").await;
    let post = seed_post(&pool, user.id).await;

    let c = comments::create_comment(
        &pool,
        &NewComment {
            comment_text: "typo".to_string(),
            author_id: user.id,
            post_id: post.id,
        },
    )
    .await
    .unwrap();

    let edited = comments::update_comment(
        &pool,
        c.id,
        &UpdateComment {
            comment_text: "fixed".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(edited.comment_text, "fixed");
    assert_eq!(edited.author_id, user.id);

    comments::delete_comment(&pool, c.id).await.unwrap();
    assert!(matches!(
        comments::delete_comment(&pool, c.id).await,
        Err(AppError::NotFound(_))
    ));
}
