// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务：
/// - 标题评分服务（scoring）：可插拔的关键词评分逻辑
/// - 标题提取服务（headline_service）：从页面标记中提取候选文章链接
pub mod headline_service;
pub mod scoring;
