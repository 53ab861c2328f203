// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含抓取、分析和报告输出等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub fetch: FetchSettings,
    /// 分析配置
    pub analysis: AnalysisSettings,
    /// 报告输出配置
    pub report: ReportSettings,
}

/// 抓取配置设置
#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    /// 目标页面URL
    pub target_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 分析配置设置
#[derive(Debug, Deserialize)]
pub struct AnalysisSettings {
    /// 关键词列表（大小写不敏感匹配）
    pub keywords: Vec<String>,
    /// 工作器数量
    pub workers: usize,
    /// 队列轮询超时时间（秒）
    pub poll_timeout_secs: u64,
}

/// 报告输出配置设置
#[derive(Debug, Deserialize)]
pub struct ReportSettings {
    /// CSV输出文件路径
    pub output_path: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default fetch settings
            .set_default("fetch.target_url", "https://www.theverge.com")?
            .set_default("fetch.timeout_secs", 15)?
            // Default analysis settings
            .set_default(
                "analysis.keywords",
                vec![
                    "AI", "Apple", "Samsung", "Google", "Gaming", "SpaceX", "VR", "Cloud",
                    "Review",
                ],
            )?
            .set_default("analysis.workers", 4)?
            .set_default("analysis.poll_timeout_secs", 1)?
            // Default report settings
            .set_default("report.output_path", "analyzed_news.csv")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("NEWSRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
