use newsrs::domain::services::headline_service::HeadlineService;
use newsrs::domain::services::scoring::{KeywordScorer, TitleScorer};
use newsrs::engines::reqwest_engine::ReqwestEngine;
use newsrs::engines::traits::{EngineError, FetchEngine, FetchRequest};
use newsrs::infrastructure::csv_report;
use newsrs::queue::task_queue::InMemoryTaskQueue;
use newsrs::workers::WorkerManager;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"
    <html><body>
        <h2><a href="/security/bug">Major Security Bug</a></h2>
        <h3><a href="/cloud/azure">Microsoft Cloud Update</a></h3>
    </body></html>
"#;

async fn serve_page(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_extract_analyze_persist() {
    let server = serve_page(PAGE).await;

    // Fetch
    let engine = ReqwestEngine;
    let request = FetchRequest::new(server.uri()).with_timeout(Duration::from_secs(5));
    let response = engine.fetch(&request).await.unwrap();
    assert_eq!(response.status_code, 200);

    // The engine sends its browser-like headers with the request. The mock
    // server splits comma-separated header values, so inspect the recorded
    // request instead of using a header matcher.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    let language_values: Vec<&str> = sent
        .headers
        .iter()
        .filter(|(name, _)| name.as_str().eq_ignore_ascii_case("accept-language"))
        .flat_map(|(_, values)| values.iter().map(|v| v.as_str()))
        .collect();
    assert!(
        language_values.iter().any(|v| v.contains("en-US")),
        "Accept-Language header missing from request: {:?}",
        language_values
    );
    let agent_values: Vec<&str> = sent
        .headers
        .iter()
        .filter(|(name, _)| name.as_str().eq_ignore_ascii_case("user-agent"))
        .flat_map(|(_, values)| values.iter().map(|v| v.as_str()))
        .collect();
    assert!(
        agent_values.iter().any(|v| v.contains("Mozilla/5.0")),
        "browser user agent missing from request: {:?}",
        agent_values
    );

    // Extract
    let tasks = HeadlineService::extract_tasks(&response.content, &server.uri()).unwrap();
    assert_eq!(tasks.len(), 2);

    // Analyze
    let queue = Arc::new(InMemoryTaskQueue::new());
    let scorer: Arc<dyn TitleScorer> = Arc::new(KeywordScorer);
    let mut manager = WorkerManager::new(
        queue,
        vec!["Security".to_string(), "Cloud".to_string()],
        scorer,
        NonZeroUsize::new(2).unwrap(),
        Duration::from_millis(100),
    );
    let records = manager.run(tasks).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.total_score == 1 && r.status == "OK"));

    // Persist
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analyzed_news.csv");
    csv_report::save_records(&path, &records).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("TITLE,URL,TOTAL_SCORE,STATUS"));
    assert_eq!(content.trim().lines().count(), 3);
    assert!(content.contains("Major Security Bug"));
    assert!(content.contains("Microsoft Cloud Update"));
}

#[tokio::test]
async fn test_page_without_articles_yields_zero_tasks() {
    let server = serve_page("<html><body><h1>Maintenance</h1></body></html>").await;

    let engine = ReqwestEngine;
    let request = FetchRequest::new(server.uri());
    let response = engine.fetch(&request).await.unwrap();

    let tasks = HeadlineService::extract_tasks(&response.content, &server.uri()).unwrap();
    // The producer boundary treats this as fatal (exit code 1)
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_server_error_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = ReqwestEngine;
    let request = FetchRequest::new(server.uri());
    let err = engine.fetch(&request).await.unwrap_err();
    match err {
        EngineError::BadStatus(status) => assert_eq!(status, 500),
        other => panic!("expected BadStatus, got {}", other),
    }
}

#[tokio::test]
async fn test_fetch_timeout_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let engine = ReqwestEngine;
    let request = FetchRequest::new(server.uri()).with_timeout(Duration::from_millis(100));
    let err = engine.fetch(&request).await.unwrap_err();
    assert!(matches!(err, EngineError::RequestFailed(_)));
}
