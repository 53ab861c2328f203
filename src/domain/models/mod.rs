// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 任务（task）：表示一个待评分的文章条目
/// - 报告（report）：存储单个任务的分析结果记录
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为。
pub mod report;
pub mod task;
