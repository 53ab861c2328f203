// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供分析任务处理和工作器池管理功能
/// 包括任务执行、结果收集和工作器生命周期管理
pub mod analysis_worker;
pub mod manager;
pub mod result_sink;

pub use analysis_worker::AnalysisWorker;
pub use manager::WorkerManager;
pub use result_sink::ResultSink;
