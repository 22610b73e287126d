use std::time::Duration;

use blog_remote::{
    application::{BlogServiceRemote, RemoteError},
    domain::{Blog, BlogPrivacy, CommentSortOrder, Publicizer, RemoteBlogSettings},
    infra::rest::{RestApi, RestBlogServiceRemote},
};
use httpmock::MockServer;
use serde_json::json;
use url::Url;

const SITE: u64 = 42;

fn remote(server: &MockServer) -> RestBlogServiceRemote {
    let base = Url::parse(&server.url("/rest/v1.1/")).expect("base url");
    let api = RestApi::new(&base, "token", Duration::from_secs(5)).expect("rest api");
    RestBlogServiceRemote::new(api)
}

fn blog() -> Blog {
    Blog::new(SITE, "https://blog.example.com").expect("blog")
}

#[tokio::test]
async fn single_author_blog_is_not_multi_author() -> Result<(), RemoteError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1.1/sites/42/users")
            .query_param("authors_only", "1")
            .header("authorization", "Bearer token");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"found":1,"users":[{"ID":1}]}"#);
    });

    assert!(!remote(&server).check_multi_author(&blog()).await?);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn two_authors_make_a_multi_author_blog() -> Result<(), RemoteError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"users":[{"ID":1},{"ID":2}]}"#);
    });

    assert!(remote(&server).check_multi_author(&blog()).await?);
    Ok(())
}

#[tokio::test]
async fn options_map_site_fields() -> Result<(), RemoteError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "ID": 42,
                    "URL": "https://blog.example.com",
                    "is_private": false,
                    "jetpack": false,
                    "options": {
                        "admin_url": "https://blog.example.com/wp-admin/",
                        "software_version": "4.5",
                        "featured_images_enabled": false
                    }
                })
                .to_string(),
            );
    });

    let options = remote(&server).sync_options(&blog()).await?;
    mock.assert();
    assert_eq!(options.get("home_url"), Some(&json!("https://blog.example.com")));
    assert_eq!(options.get("blog_public"), Some(&json!("0")));
    assert_eq!(
        options.get("admin_url"),
        Some(&json!("https://blog.example.com/wp-admin/"))
    );
    assert_eq!(options.get("software_version"), Some(&json!("4.5")));
    assert_eq!(options.get("post_thumbnail"), Some(&json!(false)));
    Ok(())
}

#[tokio::test]
async fn array_options_fall_back_to_defaults() -> Result<(), RemoteError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ID":42,"URL":"https://blog.example.com","is_private":true,"options":[]}"#);
    });

    let options = remote(&server).sync_options(&blog()).await?;
    assert_eq!(options.get("blog_public"), Some(&json!("-1")));
    assert_eq!(options.get("software_version"), Some(&json!("3.6")));
    assert_eq!(options.get("admin_url"), None);
    Ok(())
}

#[tokio::test]
async fn post_formats_include_standard() -> Result<(), RemoteError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42/post-formats");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"formats":{"aside":"Aside","gallery":"Gallery"}}"#);
    });

    let formats = remote(&server).sync_post_formats(&blog()).await?;
    assert_eq!(formats.len(), 3);
    assert_eq!(formats.get("gallery"), Some("Gallery"));
    assert_eq!(formats.get("standard"), Some("Standard"));
    Ok(())
}

#[tokio::test]
async fn connections_are_mapped_in_order() -> Result<(), RemoteError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1.1/sites/42/publicize-connections");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "connections": [
                        {
                            "ID": 11,
                            "service": "twitter",
                            "external_name": "notes",
                            "issued": "2016-03-01T10:00:00+00:00",
                            "keyring_connection_ID": 5,
                            "status": "ok",
                            "shared": false
                        },
                        {
                            "ID": "12",
                            "service": "facebook",
                            "status": "broken",
                            "shared": "1"
                        }
                    ]
                })
                .to_string(),
            );
    });

    let connections = remote(&server).sync_connections(&blog()).await?;
    assert_eq!(connections.len(), 2);
    assert_eq!(connections[0].connection_id, 11);
    assert_eq!(connections[0].keyring_connection_id, Some(5));
    assert!(connections[0].date_issued.is_some());
    assert!(!connections[0].needs_reconnect());
    assert_eq!(connections[1].connection_id, 12);
    assert!(connections[1].shared);
    assert!(connections[1].needs_reconnect());
    Ok(())
}

#[tokio::test]
async fn authorization_returns_keyring_and_accounts() -> Result<(), RemoteError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/me/keyring-connections");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "connections": [
                        {"ID": 3, "service": "twitter"},
                        {
                            "ID": 8,
                            "service": "facebook",
                            "additional_external_users": [
                                {"external_ID": "page-1", "external_name": "Page One"},
                                {"external_ID": 22, "external_name": "Page Two"}
                            ]
                        }
                    ]
                })
                .to_string(),
            );
    });

    let service = Publicizer::new(SITE, "facebook")?;
    let authorization = remote(&server).check_authorization(&service).await?;
    mock.assert();
    assert_eq!(authorization.keyring_id, 8);
    assert_eq!(authorization.accounts.len(), 2);
    assert_eq!(authorization.accounts[1].external_id.as_deref(), Some("22"));
    Ok(())
}

#[tokio::test]
async fn authorization_without_keyring_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/me/keyring-connections");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"connections":[{"ID":3,"service":"twitter"}]}"#);
    });

    let service = Publicizer::new(SITE, "linkedin").expect("publicizer");
    let err = remote(&server)
        .check_authorization(&service)
        .await
        .expect_err("no keyring");
    assert_eq!(
        err,
        RemoteError::KeyringNotFound {
            service: "linkedin".into()
        }
    );
}

#[tokio::test]
async fn connect_without_account_omits_external_user() -> Result<(), RemoteError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/rest/v1.1/sites/42/publicize-connections/new")
            .json_body(json!({"keyring_connection_ID": 3}));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ID":11}"#);
    });

    let service = Publicizer::new(SITE, "twitter")?;
    remote(&server).connect_publicizer(&service, 3, None).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn disconnect_requires_connection() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST");
        then.status(200);
    });

    let service = Publicizer::new(SITE, "twitter").expect("publicizer");
    let err = remote(&server)
        .disconnect_publicizer(&service)
        .await
        .expect_err("not connected");
    assert_eq!(
        err,
        RemoteError::NotConnected {
            service: "twitter".into()
        }
    );
    mock.assert_hits(0);
}

#[tokio::test]
async fn disconnect_posts_to_delete_endpoint() -> Result<(), RemoteError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/rest/v1.1/sites/42/publicize-connections/11/delete");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"ID":11,"deleted":true}"#);
    });

    let service = Publicizer::new(SITE, "twitter")?.with_connection(11);
    remote(&server).disconnect_publicizer(&service).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn settings_sync_reads_nested_options() -> Result<(), RemoteError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42/settings");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "ID": 42,
                    "name": "Field Notes",
                    "description": "Observations",
                    "settings": {
                        "blog_public": -1,
                        "default_category": "4",
                        "default_post_format": "aside",
                        "default_comment_status": true,
                        "thread_comments": "1",
                        "thread_comments_depth": 5,
                        "comment_order": "desc",
                        "moderation_keys": "spam\nscam",
                        "jetpack_relatedposts_enabled": false
                    }
                })
                .to_string(),
            );
    });

    let settings = remote(&server).sync_settings(&blog()).await?;
    assert_eq!(settings.name.as_deref(), Some("Field Notes"));
    assert_eq!(settings.tagline.as_deref(), Some("Observations"));
    assert_eq!(settings.privacy, Some(BlogPrivacy::Private));
    assert_eq!(settings.default_category_id, Some(4));
    assert_eq!(settings.default_post_format.as_deref(), Some("aside"));
    assert_eq!(settings.discussion.comments_allowed, Some(true));
    assert_eq!(settings.discussion.comments_threading_enabled, Some(true));
    assert_eq!(settings.discussion.comments_threading_depth, Some(5));
    assert_eq!(
        settings.discussion.comments_sort_order,
        Some(CommentSortOrder::Descending)
    );
    assert_eq!(
        settings.discussion.moderation_keys,
        Some(vec!["spam".to_string(), "scam".to_string()])
    );
    assert_eq!(settings.related_posts.enabled, Some(false));
    assert_eq!(settings.discussion.comments_paging_enabled, None);
    Ok(())
}

#[tokio::test]
async fn settings_update_sends_only_known_fields() -> Result<(), RemoteError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/rest/v1.1/sites/42/settings")
            .json_body(json!({
                "blogname": "Field Notes",
                "blog_public": 1,
                "default_post_format": "0"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"updated":{"blogname":"Field Notes"}}"#);
    });

    let settings = RemoteBlogSettings {
        name: Some("Field Notes".into()),
        privacy: Some(BlogPrivacy::Public),
        default_post_format: Some("standard".into()),
        ..Default::default()
    };
    remote(&server)
        .update_settings(&blog().with_settings(settings))
        .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn settings_update_without_ack_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/rest/v1.1/sites/42/settings");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });

    let blog = blog().with_settings(RemoteBlogSettings {
        tagline: Some("x".into()),
        ..Default::default()
    });
    let err = remote(&server)
        .update_settings(&blog)
        .await
        .expect_err("missing ack");
    assert_eq!(err, RemoteError::Rejected);
}

#[tokio::test]
async fn settings_update_needs_local_settings() {
    let server = MockServer::start();
    let err = remote(&server)
        .update_settings(&blog())
        .await
        .expect_err("no settings");
    assert_eq!(err, RemoteError::MissingSettings { site_id: SITE });
}

#[tokio::test]
async fn api_errors_carry_status_and_code() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42/settings");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error":"authorization_required","message":"An active access token must be used"}"#);
    });

    let err = remote(&server)
        .sync_settings(&blog())
        .await
        .expect_err("unauthorized");
    assert!(err.is_unauthorized());
    assert!(matches!(
        err,
        RemoteError::Api { status: 401, ref code, .. } if code == "authorization_required"
    ));
}

#[tokio::test]
async fn malformed_bodies_are_decode_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42");
        then.status(200)
            .header("content-type", "application/json")
            .body("<html>maintenance</html>");
    });

    let err = remote(&server)
        .sync_options(&blog())
        .await
        .expect_err("html body");
    assert!(matches!(err, RemoteError::Decode(_)));
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1.1/sites/42/post-formats");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_secs(3))
            .body(r#"{"formats":{}}"#);
    });

    let base = Url::parse(&server.url("/rest/v1.1/")).expect("base url");
    let api = RestApi::new(&base, "token", Duration::from_secs(1)).expect("rest api");
    let err = RestBlogServiceRemote::new(api)
        .sync_post_formats(&blog())
        .await
        .expect_err("deadline exceeded");
    assert_eq!(err, RemoteError::Timeout);
}
