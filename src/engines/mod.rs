// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 引擎模块
///
/// 提供网页抓取引擎的特质定义和实现
pub mod reqwest_engine;
pub mod traits;
