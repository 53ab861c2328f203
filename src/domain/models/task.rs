// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 文章任务实体
///
/// 表示一个待评分的文章条目。由生产者从页面标记中提取，
/// 入队后不可变，并且恰好被一个工作器消费一次。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleTask {
    /// 文章标题，评分函数的输入文本
    pub title: String,
    /// 文章链接，已解析为绝对URL
    pub url: String,
}

impl ArticleTask {
    /// 创建新的文章任务
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}
