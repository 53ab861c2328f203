// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::ArticleTask;
use serde::Serialize;

/// 成功状态标记
pub const STATUS_OK: &str = "OK";

/// 分析结果记录
///
/// 每个被出队的任务恰好产生一条记录。记录在追加到结果
/// 收集器之后不再变更，也不会在单次运行中被移除。
/// 序列化字段顺序即CSV列顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRecord {
    /// 文章标题
    #[serde(rename = "TITLE")]
    pub title: String,
    /// 文章链接
    #[serde(rename = "URL")]
    pub url: String,
    /// 关键词总分
    #[serde(rename = "TOTAL_SCORE")]
    pub total_score: u64,
    /// 处理状态，"OK" 或 "Error: <kind>"
    #[serde(rename = "STATUS")]
    pub status: String,
}

impl AnalysisRecord {
    /// 创建成功记录
    pub fn ok(task: &ArticleTask, total_score: u64) -> Self {
        Self {
            title: task.title.clone(),
            url: task.url.clone(),
            total_score,
            status: STATUS_OK.to_string(),
        }
    }

    /// 创建失败记录
    ///
    /// 评分失败降级为一条错误记录，分数固定为0
    pub fn error(task: &ArticleTask, kind: &str) -> Self {
        Self {
            title: task.title.clone(),
            url: task.url.clone(),
            total_score: 0,
            status: format!("Error: {}", kind),
        }
    }

    /// 判断记录是否为失败记录
    pub fn is_error(&self) -> bool {
        self.status != STATUS_OK
    }
}
