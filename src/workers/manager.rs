// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::AnalysisRecord;
use crate::domain::models::task::ArticleTask;
use crate::domain::services::scoring::TitleScorer;
use crate::queue::task_queue::{QueueError, TaskQueue};
use crate::utils::errors::WorkerError;
use crate::workers::analysis_worker::AnalysisWorker;
use crate::workers::result_sink::ResultSink;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 工作器池管理器
///
/// 为一次运行构造共享的队列、关键词、评分函数和结果收集器，
/// 启动固定数量的工作器并等待队列排空。
/// 队列、收集器等共享状态都在此按运行构造并通过参数注入，
/// 不存在进程级单例。
pub struct WorkerManager<Q>
where
    Q: TaskQueue + 'static,
{
    queue: Arc<Q>,
    keywords: Arc<Vec<String>>,
    scorer: Arc<dyn TitleScorer>,
    sink: ResultSink,
    worker_count: NonZeroUsize,
    poll_timeout: Duration,
    handles: Vec<JoinHandle<()>>,
}

impl<Q> WorkerManager<Q>
where
    Q: TaskQueue + Send + Sync,
{
    /// 创建新的工作器池管理器实例
    ///
    /// # 参数
    ///
    /// * `queue` - 共享任务队列
    /// * `keywords` - 关键词列表，启动后只读
    /// * `scorer` - 可插拔评分函数
    /// * `worker_count` - 工作器数量
    /// * `poll_timeout` - 单次出队的轮询超时时间
    pub fn new(
        queue: Arc<Q>,
        keywords: Vec<String>,
        scorer: Arc<dyn TitleScorer>,
        worker_count: NonZeroUsize,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            queue,
            keywords: Arc::new(keywords),
            scorer,
            sink: ResultSink::new(),
            worker_count,
            poll_timeout,
            handles: Vec::new(),
        }
    }

    /// 运行分析
    ///
    /// 入队全部任务，启动工作器，等待排空并回收工作器，
    /// 返回结果记录。保证每个入队任务恰好产生一条记录。
    pub async fn run(&mut self, tasks: Vec<ArticleTask>) -> Result<Vec<AnalysisRecord>, QueueError> {
        let task_count = tasks.len();
        for task in tasks {
            self.queue.enqueue(task)?;
        }

        self.start_workers();
        self.queue.await_drain().await;
        // Drain means every task is acknowledged; workers may still be inside
        // their final poll window, so join them before handing results back.
        self.join_workers().await;

        info!(
            "Analysis complete: {} tasks in, {} records out",
            task_count,
            self.sink.len()
        );
        Ok(self.sink.snapshot())
    }

    /// 启动工作进程
    ///
    /// 创建并启动配置数量的工作器，全部共享同一个队列、
    /// 结果收集器和评分函数
    fn start_workers(&mut self) {
        for _ in 0..self.worker_count.get() {
            let worker = AnalysisWorker::new(
                self.keywords.clone(),
                self.sink.clone(),
                self.scorer.clone(),
                self.poll_timeout,
            );

            let queue = self.queue.clone();
            // We spawn the worker loop on a separate task to avoid blocking
            // the loop that spawns workers.
            let handle = tokio::spawn(async move {
                worker.run(queue).await;
            });
            self.handles.push(handle);
        }
    }

    /// 等待所有工作器退出
    async fn join_workers(&mut self) {
        for handle in self.handles.drain(..) {
            if let Err(e) = handle.await {
                let err = WorkerError::Join(e.to_string());
                error!("{}", err);
            }
        }
    }
}
