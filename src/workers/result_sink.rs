// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::AnalysisRecord;
use parking_lot::Mutex;
use std::sync::Arc;

/// 结果收集器
///
/// 所有工作器共享的结果记录集合，生命周期为一次运行。
/// 追加操作由互斥锁保护，锁只在push期间持有，
/// 评分和I/O都不会在锁内进行。
#[derive(Clone, Default)]
pub struct ResultSink {
    records: Arc<Mutex<Vec<AnalysisRecord>>>,
}

impl ResultSink {
    /// 创建新的结果收集器实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条结果记录
    pub fn append(&self, record: AnalysisRecord) {
        self.records.lock().push(record);
    }

    /// 获取当前记录数量
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// 判断收集器是否为空
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// 复制当前全部记录
    ///
    /// 记录顺序反映完成顺序，跨工作器不保证确定性
    pub fn snapshot(&self) -> Vec<AnalysisRecord> {
        self.records.lock().clone()
    }
}
