//! Path, verb, and payload coverage for the endpoint services against a
//! mock server.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blogkit_api::{BlogApi, LoginInput};
use blogkit_core::{CommentInput, Credentials, PostInput, ProfileInput, TopicInput};
use blogkit_http::{AuthClient, MemoryTokenStore, TokenStore, TokenStoreExt};

async fn api_for(server: &MockServer) -> (BlogApi, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_credentials(Credentials::new(
        "A1", "R1",
    )));
    let client = AuthClient::builder(server.uri())
        .token_store(store.clone() as Arc<dyn TokenStore>)
        .build()
        .unwrap();
    (BlogApi::new(client), store)
}

#[tokio::test]
async fn login_stores_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "j@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"access_token": "A1", "refresh_token": "R1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = AuthClient::builder(server.uri())
        .token_store(store.clone() as Arc<dyn TokenStore>)
        .build()
        .unwrap();
    let api = BlogApi::new(client);

    let creds = api
        .auth()
        .login(&LoginInput {
            email: "j@example.com".into(),
            password: "hunter2".into(),
        })
        .await
        .unwrap();

    assert_eq!(creds, Credentials::new("A1", "R1"));
    assert_eq!(store.credentials(), Some(Credentials::new("A1", "R1")));

    api.auth().logout();
    assert_eq!(store.credentials(), None);
}

#[tokio::test]
async fn posts_feed_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "title": "First", "slug": "first", "likes_count": 3},
                {"id": 2, "title": "Second", "slug": "second"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts/slug/first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "title": "First", "slug": "first", "content": "body text"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;

    let posts = api.posts().list().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].likes_count, 3);

    let detail = api.posts().by_slug("first").await.unwrap();
    assert_eq!(detail.content.as_deref(), Some("body text"));
}

#[tokio::test]
async fn post_interactions_use_authenticated_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts/7/like"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/posts/7/bookmark"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    api.posts().toggle_like(7).await.unwrap();
    api.posts().toggle_bookmark(7).await.unwrap();
}

#[tokio::test]
async fn post_create_update_delete() {
    let server = MockServer::start().await;
    let input = PostInput {
        title: "Hello".into(),
        content: "world".into(),
        topic_ids: vec![3],
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_json(json!({
            "title": "Hello", "content": "world", "topic_ids": [3], "published": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 9, "title": "Hello", "slug": "hello"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/posts/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/posts/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let created = api.posts().create(&input).await.unwrap();
    assert_eq!(created.id, 9);
    api.posts().update(9, &input).await.unwrap();
    api.posts().delete(9).await.unwrap();
}

#[tokio::test]
async fn comment_create_carries_parent_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(body_json(json!({
            "post_id": 4, "content": "nice post", "parent_id": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 31, "post_id": 4, "content": "nice post", "parent_id": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let reply = api
        .comments()
        .create(&CommentInput {
            post_id: 4,
            content: "nice post".into(),
            parent_id: Some(10),
        })
        .await
        .unwrap();
    assert_eq!(reply.parent_id, Some(10));
}

#[tokio::test]
async fn comment_update_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/comments/31"))
        .and(body_json(json!({"content": "edited"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 31, "post_id": 4, "content": "edited"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/comments/31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let edited = api.comments().update(31, "edited").await.unwrap();
    assert_eq!(edited.content, "edited");
    api.comments().delete(31).await.unwrap();
}

#[tokio::test]
async fn topic_posts_are_paginated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics/rust/posts"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "data": [{"id": 11, "title": "Eleventh", "slug": "eleventh"}],
                "page": 2,
                "limit": 10,
                "total": 25
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let page = api.topics().posts("rust", 2, 10).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total_pages(), 3);
    assert!(page.has_next());
}

#[tokio::test]
async fn topic_crud() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 3, "name": "Rust", "slug": "rust"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/topics"))
        .and(body_json(json!({"name": "Go"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 4, "name": "Go", "slug": "go"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let topics = api.topics().list().await.unwrap();
    assert_eq!(topics[0].slug, "rust");

    let created = api
        .topics()
        .create(&TopicInput {
            name: "Go".into(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn follow_requests_use_the_expected_body_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/follows/follow"))
        .and(body_json(json!({"followedId": 8})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/follows/check/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"is_following": true}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/follows/stats/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"followers": 120, "following": 45}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    api.follows().follow(8).await.unwrap();
    assert!(api.follows().check(8).await.unwrap());
    let stats = api.follows().stats(8).await.unwrap();
    assert_eq!(stats.followers, 120);
    assert_eq!(stats.following, 45);
}

#[tokio::test]
async fn profile_edit_serializes_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/profile/jdoe/edit"))
        .and(body_json(json!({"about": "rustacean"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"username": "jdoe", "about": "rustacean"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let profile = api
        .profiles()
        .edit(
            "jdoe",
            &ProfileInput {
                about: Some("rustacean".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(profile.about.as_deref(), Some("rustacean"));
}

#[tokio::test]
async fn users_and_conversations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/jdoe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "username": "jdoe", "name": "Jane Doe"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/conversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 5, "last_message": "see you", "unread_count": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = api_for(&server).await;
    let user = api.users().by_username("jdoe").await.unwrap();
    assert_eq!(user.display_name(), "Jane Doe");

    let inbox = api.conversations().list().await.unwrap();
    assert_eq!(inbox[0].unread_count, 2);
}
