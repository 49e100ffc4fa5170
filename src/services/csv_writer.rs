//! CSV 导出服务
//!
//! 只负责"把题目表格写成 CSV"，不关心流程

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{McqError, McqResult};
use crate::models::question::{QuestionRecord, COLUMN_CHOICES, COLUMN_CORRECT, COLUMN_MCQ};

/// CSV 导出服务
///
/// 列顺序：MCQ, CHOICES, CORRECT ANSWER，不写行号
pub struct CsvWriter {
    output_path: PathBuf,
}

impl CsvWriter {
    /// 使用默认路径 `mcq.csv`
    pub fn new() -> Self {
        Self::with_path("mcq.csv")
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 写入 CSV 文件（覆盖已有文件）
    pub fn write(&self, records: &[QuestionRecord]) -> McqResult<()> {
        let path_str = self.output_path.display().to_string();
        debug!("写入 CSV: {} ({} 道题)", path_str, records.len());

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| McqError::export_failed(&path_str, e))?;
            }
        }

        let file = std::fs::File::create(&self.output_path)
            .map_err(|e| McqError::export_failed(&path_str, e))?;
        write_records(file, records).map_err(|e| McqError::export_failed(&path_str, e))
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// 把题目写入任意输出
pub fn write_records<W: Write>(out: W, records: &[QuestionRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([COLUMN_MCQ, COLUMN_CHOICES, COLUMN_CORRECT])?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new(
                "What does photosynthesis produce?",
                vec![
                    ("a".to_string(), "Glucose".to_string()),
                    ("b".to_string(), "Iron, mostly".to_string()),
                ],
                "a",
            ),
            QuestionRecord::new("Second?", vec![("a".to_string(), "Yes".to_string())], "a"),
        ]
    }

    #[test]
    fn test_write_records() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "MCQ,CHOICES,CORRECT ANSWER");
        // 含逗号的字段会被加引号
        assert_eq!(
            lines[1],
            "What does photosynthesis produce?,\"a: Glucose | b: Iron, mostly\",a"
        );
        assert_eq!(lines[2], "Second?,a: Yes,a");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_to_file_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("mcq.csv");

        CsvWriter::with_path(&path).write(&sample()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[2], "CORRECT ANSWER");
        assert_eq!(reader.records().count(), 2);
    }

    #[test]
    fn test_empty_set_writes_header_only() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "MCQ,CHOICES,CORRECT ANSWER\n");
    }
}
