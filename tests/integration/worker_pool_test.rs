use newsrs::domain::models::task::ArticleTask;
use newsrs::domain::services::scoring::{KeywordScorer, ScoreError, TitleScorer};
use newsrs::queue::task_queue::InMemoryTaskQueue;
use newsrs::workers::WorkerManager;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(100);

fn workers(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn tasks(n: usize) -> Vec<ArticleTask> {
    (0..n)
        .map(|i| ArticleTask::new(format!("Cloud story {}", i), format!("https://e/{}", i)))
        .collect()
}

struct CrashingScorer;

impl TitleScorer for CrashingScorer {
    fn score(&self, _text: &str, _keywords: &[String]) -> Result<u64, ScoreError> {
        Err(ScoreError::ScorerFailure("always fails".to_string()))
    }
}

#[tokio::test]
async fn test_two_tasks_two_workers_produce_two_records() {
    let queue = Arc::new(InMemoryTaskQueue::new());
    let mut manager = WorkerManager::new(
        queue,
        vec!["Security".to_string(), "Cloud".to_string()],
        Arc::new(KeywordScorer),
        workers(2),
        POLL,
    );

    let records = manager
        .run(vec![
            ArticleTask::new("Major Security Bug", "https://e/security"),
            ArticleTask::new("Microsoft Cloud Update", "https://e/cloud"),
        ])
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let scores: HashSet<u64> = records.iter().map(|r| r.total_score).collect();
    assert!(scores.contains(&1));
    assert!(records.iter().all(|r| r.status == "OK"));
}

#[tokio::test]
async fn test_every_task_produces_exactly_one_record() {
    let input = tasks(50);
    let expected: HashSet<(String, String)> = input
        .iter()
        .map(|t| (t.title.clone(), t.url.clone()))
        .collect();

    let queue = Arc::new(InMemoryTaskQueue::new());
    let mut manager = WorkerManager::new(
        queue,
        vec!["Cloud".to_string()],
        Arc::new(KeywordScorer),
        workers(4),
        POLL,
    );
    let records = manager.run(input).await.unwrap();

    assert_eq!(records.len(), 50);
    let produced: HashSet<(String, String)> = records
        .iter()
        .map(|r| (r.title.clone(), r.url.clone()))
        .collect();
    assert_eq!(produced, expected, "no omissions, no duplicates");
}

#[tokio::test]
async fn test_single_worker_handles_full_load() {
    let queue = Arc::new(InMemoryTaskQueue::new());
    let mut manager = WorkerManager::new(
        queue,
        vec!["Cloud".to_string()],
        Arc::new(KeywordScorer),
        workers(1),
        POLL,
    );
    let records = manager.run(tasks(10)).await.unwrap();

    assert_eq!(records.len(), 10);
    assert!(records.iter().all(|r| r.total_score == 1));
}

#[tokio::test]
async fn test_crashing_scorer_degrades_to_error_rows() {
    let queue = Arc::new(InMemoryTaskQueue::new());
    let mut manager = WorkerManager::new(
        queue,
        Vec::new(),
        Arc::new(CrashingScorer),
        workers(3),
        POLL,
    );
    let records = manager.run(tasks(12)).await.unwrap();

    // The run completes and no worker is lost: one error row per task
    assert_eq!(records.len(), 12);
    for record in &records {
        assert_eq!(record.total_score, 0);
        assert!(record.status.starts_with("Error:"), "got {}", record.status);
    }
}

#[tokio::test]
async fn test_more_workers_than_tasks() {
    let queue = Arc::new(InMemoryTaskQueue::new());
    let mut manager = WorkerManager::new(
        queue,
        vec!["Cloud".to_string()],
        Arc::new(KeywordScorer),
        workers(8),
        POLL,
    );
    let records = manager.run(tasks(2)).await.unwrap();
    assert_eq!(records.len(), 2);
}
