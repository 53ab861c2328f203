// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::report::AnalysisRecord;
use csv::WriterBuilder;
use std::path::Path;
use thiserror::Error;

/// CSV列头，字段顺序固定
pub const CSV_HEADERS: [&str; 4] = ["TITLE", "URL", "TOTAL_SCORE", "STATUS"];

/// 报告输出错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV序列化或写入错误
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 保存分析结果到CSV文件
///
/// 总是写入列头行，即使记录为空。记录顺序未定义，
/// 列顺序固定为 TITLE, URL, TOTAL_SCORE, STATUS。
///
/// # 参数
///
/// * `path` - 输出文件路径
/// * `records` - 分析结果记录
///
/// # 返回值
///
/// * `Ok(())` - 写入成功
/// * `Err(ReportError)` - 写入失败，已计算的结果不受影响
pub fn save_records(path: impl AsRef<Path>, records: &[AnalysisRecord]) -> Result<(), ReportError> {
    // Header row is written explicitly so an empty run still produces a
    // well-formed file.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
