// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::AnalysisRecord;
use crate::domain::models::task::ArticleTask;
use crate::domain::services::scoring::TitleScorer;
use crate::queue::task_queue::TaskQueue;
use crate::workers::result_sink::ResultSink;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// 分析工作器
///
/// 独立调度的队列消费者。循环出队任务、调用评分函数、
/// 追加结果记录，队列在轮询窗口内无任务时退出。
pub struct AnalysisWorker {
    keywords: Arc<Vec<String>>,
    sink: ResultSink,
    scorer: Arc<dyn TitleScorer>,
    poll_timeout: Duration,
    worker_id: Uuid,
}

impl AnalysisWorker {
    /// 创建新的分析工作器实例
    pub fn new(
        keywords: Arc<Vec<String>>,
        sink: ResultSink,
        scorer: Arc<dyn TitleScorer>,
        poll_timeout: Duration,
    ) -> Self {
        Self {
            keywords,
            sink,
            scorer,
            poll_timeout,
            worker_id: Uuid::new_v4(),
        }
    }

    /// 运行分析工作器
    ///
    /// 出队超时是正常终止信号；一旦退出循环不再恢复
    pub async fn run<Q>(&self, queue: Arc<Q>)
    where
        Q: TaskQueue + Send + Sync,
    {
        info!("Analysis worker {} started", self.worker_id);

        loop {
            let task = match queue.try_dequeue(self.poll_timeout).await {
                Some(task) => task,
                None => break, // Queue drained within the poll window
            };

            self.process_article(&task);
            // Acknowledge unconditionally so the drain count stays correct
            // even when scoring failed.
            queue.acknowledge();
        }

        info!("Analysis worker {} exiting", self.worker_id);
    }

    /// 处理单个文章任务
    ///
    /// 评分失败被完全隔离：降级为一条错误记录，
    /// 绝不终止工作器或向上传播
    fn process_article(&self, task: &ArticleTask) {
        let record = match self.scorer.score(&task.title, &self.keywords) {
            Ok(score) => AnalysisRecord::ok(task, score),
            Err(e) => {
                debug!(
                    "Worker {}: scoring failed for {}: {}",
                    self.worker_id, task.url, e
                );
                AnalysisRecord::error(task, e.kind())
            }
        };
        self.sink.append(record);
    }
}
