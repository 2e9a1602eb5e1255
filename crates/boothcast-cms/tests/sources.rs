/// Content source tests
///
/// The local source is exercised against the bundled seed content, the remote
/// source against a mock CMS speaking the `{ data: [{ id, attributes }] }` format.

use boothcast_cms::{
    CmsError, ContentSource, Dataset, LocalSource, PublishStatus, RemoteConfig, RemoteSource,
};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn remote(server: &MockServer, token: Option<&str>) -> RemoteSource {
    RemoteSource::new(&RemoteConfig {
        base_url: server.base_url(),
        api_token: token.map(str::to_string),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_local_listing_order_and_visibility() {
    let source = LocalSource::bundled().unwrap();

    let videos = source.get_videos().await.unwrap();
    let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["vid-003", "vid-002", "vid-001"]);

    let events = source.get_events().await.unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["evt-001", "evt-002"]);

    let djs = source.get_djs().await.unwrap();
    assert_eq!(djs.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(), vec!["Kito", "Nova"]);
    assert!(source.get_dj("mara").await.unwrap().is_none());
}

#[tokio::test]
async fn test_local_lookups_and_relations() {
    let source = LocalSource::bundled().unwrap();

    let series = source.get_series_by_slug("warehouse-nights").await.unwrap().unwrap();
    assert_eq!(series.title, "Warehouse Nights");

    let in_series = source.get_series_videos("warehouse-nights").await.unwrap();
    assert_eq!(in_series.len(), 2);

    let with_kito = source.get_dj_videos("kito").await.unwrap();
    assert_eq!(with_kito.len(), 2);

    assert!(source.get_event("evt-000").await.unwrap().is_none());
    assert_eq!(source.get_video("vid-002").await.unwrap().unwrap().slug, "kito-rooftop-sunset");
}

#[tokio::test]
async fn test_local_stats() {
    let source = LocalSource::bundled().unwrap();
    let stats = source.get_stats().await.unwrap();

    assert_eq!(stats.videos, 3);
    assert_eq!(stats.djs, 2);
    assert_eq!(stats.events, 2);
    assert_eq!(stats.series, 2);
    assert_eq!(stats.total_duration_secs, 7200 + 5400 + 10800);
    // techno, dub techno, deep house, balearic, house
    assert_eq!(stats.genres, 5);
}

#[tokio::test]
async fn test_local_from_path_and_reload() {
    let dir = std::env::temp_dir().join(format!("boothcast-cms-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("content.json");

    tokio::fs::write(&path, serde_json::to_string(&Dataset::default()).unwrap())
        .await
        .unwrap();
    let source = LocalSource::from_path(&path).await.unwrap();
    assert!(source.get_series().await.unwrap().is_empty());

    let updated = json!({
        "series": [{ "id": "s1", "slug": "late-nights", "title": "Late Nights" }]
    });
    tokio::fs::write(&path, updated.to_string()).await.unwrap();
    source.reload().await.unwrap();
    assert_eq!(source.get_series().await.unwrap().len(), 1);

    tokio::fs::write(&path, "{ not json").await.unwrap();
    assert!(matches!(source.reload().await, Err(CmsError::Decode(_))));
    assert_eq!(source.get_series().await.unwrap().len(), 1);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn test_remote_videos_are_normalized() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/videos")
                .header("authorization", "Bearer secret");
            then.status(200).json_body(json!({
                "data": [
                    {
                        "id": 1,
                        "attributes": {
                            "title": "Older", "slug": "older", "sessionDate": "2023-01-01",
                            "genres": [{ "name": "House" }],
                            "publishedAt": "2023-01-02T00:00:00Z"
                        }
                    },
                    {
                        "id": 2,
                        "attributes": {
                            "title": "Newer", "slug": "newer", "sessionDate": "2024-01-01",
                            "videoUrl": "https://cdn.example/newer.m3u8",
                            "publishedAt": "2024-01-02T00:00:00Z"
                        }
                    },
                    {
                        "id": 3,
                        "attributes": { "title": "Draft", "slug": "draft", "sessionDate": "2024-06-01" }
                    }
                ],
                "meta": { "pagination": { "total": 3 } }
            }));
        })
        .await;

    let videos = remote(&server, Some("secret")).get_videos().await.unwrap();
    mock.assert_async().await;

    assert_eq!(videos.iter().map(|v| v.id.as_str()).collect::<Vec<_>>(), vec!["2", "1"]);
    assert_eq!(videos[0].media.video_url.as_deref(), Some("https://cdn.example/newer.m3u8"));
    assert_eq!(videos[1].genres, vec!["House"]);
    assert!(videos.iter().all(|v| v.status == PublishStatus::Published));
}

#[tokio::test]
async fn test_remote_lookup_by_slug_and_missing_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/djs")
                .query_param("filters[slug][$eq]", "nova");
            then.status(200).json_body(json!({
                "data": [{
                    "id": 7,
                    "attributes": {
                        "name": "Nova", "slug": "nova",
                        "avatar": { "url": "https://cdn.example/nova.jpg" },
                        "publishedAt": "2024-01-01T00:00:00Z"
                    }
                }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/99");
            then.status(404).json_body(json!({ "data": null, "error": { "status": 404 } }));
        })
        .await;

    let source = remote(&server, None);
    let dj = source.get_dj("nova").await.unwrap().unwrap();
    assert_eq!(dj.id, "7");
    assert_eq!(dj.avatar_url.as_deref(), Some("https://cdn.example/nova.jpg"));

    assert!(source.get_event("99").await.unwrap().is_none());
}

#[tokio::test]
async fn test_remote_server_error_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/series");
            then.status(502);
        })
        .await;

    let err = remote(&server, None).get_series().await.unwrap_err();
    assert!(matches!(err, CmsError::Status { status: 502, .. }));
}
