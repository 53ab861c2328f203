// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::ArticleTask;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Notify;

/// 队列错误类型
#[derive(Error, Debug)]
pub enum QueueError {
    /// 队列已关闭
    #[error("Queue closed")]
    Closed,
}

/// 任务队列特质
///
/// 无界线程安全队列，支持独占分发和排空确认协议。
/// 每次成功出队之后必须恰好调用一次 [`acknowledge`](TaskQueue::acknowledge)，
/// 无论处理成功与否，否则 [`await_drain`](TaskQueue::await_drain) 永远不会返回。
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// 入队任务，从不阻塞
    fn enqueue(&self, task: ArticleTask) -> Result<(), QueueError>;

    /// 出队任务
    ///
    /// 最多阻塞 `timeout` 等待可用任务。超时返回 `None`，
    /// 这是工作器的正常终止信号而不是错误。
    /// 同一任务不会分发给两个调用者。
    async fn try_dequeue(&self, timeout: Duration) -> Option<ArticleTask>;

    /// 确认一个已出队的工作单元已处理完毕
    fn acknowledge(&self);

    /// 阻塞直到确认数追平入队数
    ///
    /// 多个并发调用者在条件满足时一起解除阻塞
    async fn await_drain(&self);
}

/// 内存任务队列实现
pub struct InMemoryTaskQueue {
    tx: UnboundedSender<ArticleTask>,
    rx: tokio::sync::Mutex<UnboundedReceiver<ArticleTask>>,
    unfinished: parking_lot::Mutex<usize>,
    drained: Notify,
}

impl InMemoryTaskQueue {
    /// 创建新的内存任务队列实例
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx: tokio::sync::Mutex::new(rx),
            unfinished: parking_lot::Mutex::new(0),
            drained: Notify::new(),
        }
    }

    /// 获取尚未确认的工作单元数量
    pub fn unfinished(&self) -> usize {
        *self.unfinished.lock()
    }
}

impl Default for InMemoryTaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskQueue for InMemoryTaskQueue {
    fn enqueue(&self, task: ArticleTask) -> Result<(), QueueError> {
        // Count and send under the same lock so await_drain observes a
        // consistent outstanding-work count.
        let mut unfinished = self.unfinished.lock();
        self.tx.send(task).map_err(|_| QueueError::Closed)?;
        *unfinished += 1;
        Ok(())
    }

    async fn try_dequeue(&self, timeout: Duration) -> Option<ArticleTask> {
        // The receiver lock serializes waiters; the timeout covers both the
        // wait for the lock and the wait for an item, so every caller is
        // released within its poll window.
        let pop = async {
            let mut rx = self.rx.lock().await;
            rx.recv().await
        };
        match tokio::time::timeout(timeout, pop).await {
            Ok(Some(task)) => Some(task),
            _ => None,
        }
    }

    fn acknowledge(&self) {
        let mut unfinished = self.unfinished.lock();
        debug_assert!(*unfinished > 0, "acknowledge without matching dequeue");
        *unfinished = unfinished.saturating_sub(1);
        if *unfinished == 0 {
            self.drained.notify_waiters();
        }
    }

    async fn await_drain(&self) {
        loop {
            let notified = self.drained.notified();
            tokio::pin!(notified);
            // Register before checking the count, otherwise an acknowledge
            // landing between check and await would be missed.
            notified.as_mut().enable();
            if *self.unfinished.lock() == 0 {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl<T: TaskQueue + ?Sized> TaskQueue for std::sync::Arc<T> {
    fn enqueue(&self, task: ArticleTask) -> Result<(), QueueError> {
        (**self).enqueue(task)
    }

    async fn try_dequeue(&self, timeout: Duration) -> Option<ArticleTask> {
        (**self).try_dequeue(timeout).await
    }

    fn acknowledge(&self) {
        (**self).acknowledge()
    }

    async fn await_drain(&self) {
        (**self).await_drain().await
    }
}
