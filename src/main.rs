// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use newsrs::config::settings::Settings;
use newsrs::domain::services::headline_service::HeadlineService;
use newsrs::domain::services::scoring::{KeywordScorer, TitleScorer};
use newsrs::engines::reqwest_engine::ReqwestEngine;
use newsrs::engines::traits::{FetchEngine, FetchRequest};
use newsrs::infrastructure::csv_report;
use newsrs::queue::task_queue::InMemoryTaskQueue;
use newsrs::utils::telemetry;
use newsrs::workers::WorkerManager;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// 主函数
///
/// 应用程序入口点：抓取目标页面，提取文章任务，
/// 运行工作器池分析，并将结果写入CSV报告
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting newsrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    let started = Instant::now();

    // 3. Producer: fetch the page and extract candidate articles
    info!("Fetching news from {}...", settings.fetch.target_url);
    let engine = ReqwestEngine;
    let request = FetchRequest::new(&settings.fetch.target_url)
        .with_timeout(Duration::from_secs(settings.fetch.timeout_secs));

    let response = match engine.fetch(&request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Fetch failed: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Fetched {} bytes ({}) in {} ms",
        response.content.len(),
        response.content_type,
        response.response_time_ms
    );

    let tasks = HeadlineService::extract_tasks(&response.content, &settings.fetch.target_url)?;
    if tasks.is_empty() {
        warn!("No articles found; the page structure may have changed");
        std::process::exit(1);
    }
    info!("Found {} unique articles, starting analysis...", tasks.len());

    // 4. Build the shared per-run state and run the worker pool
    let queue = Arc::new(InMemoryTaskQueue::new());
    let scorer: Arc<dyn TitleScorer> = Arc::new(KeywordScorer);
    let workers = NonZeroUsize::new(settings.analysis.workers)
        .context("analysis.workers must be greater than zero")?;

    let mut manager = WorkerManager::new(
        queue,
        settings.analysis.keywords.clone(),
        scorer,
        workers,
        Duration::from_secs(settings.analysis.poll_timeout_secs),
    );
    let records = manager.run(tasks).await?;

    // 5. Persist; a write failure is reported but does not discard the run
    match csv_report::save_records(&settings.report.output_path, &records) {
        Ok(()) => info!(
            "Saved {} records to {} ({:.2}s)",
            records.len(),
            settings.report.output_path,
            started.elapsed().as_secs_f64()
        ),
        Err(e) => error!("Failed to write report: {}", e),
    }

    Ok(())
}
