// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 队列模块
///
/// 提供任务队列功能
/// 负责任务的排队、独占分发和排空确认协议
pub mod task_queue;
