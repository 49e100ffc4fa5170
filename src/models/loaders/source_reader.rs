use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::error::{McqError, McqResult};

/// 支持的源文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Txt,
    Pdf,
}

impl SourceFormat {
    /// 根据扩展名判断格式（不区分大小写）
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(SourceFormat::Txt),
            "pdf" => Some(SourceFormat::Pdf),
            _ => None,
        }
    }
}

/// 读取 .txt 或 .pdf 文件的文本内容
///
/// PDF 按页提取文字后拼接成一段文本
pub async fn read_source(path: &Path) -> McqResult<String> {
    let path_str = path.display().to_string();
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| McqError::UnsupportedFormat { path: path_str.clone() })?;

    let bytes = fs::read(path)
        .await
        .map_err(|e| McqError::read_failed(&path_str, e))?;
    debug!("已读取 {} 字节: {}", bytes.len(), path_str);

    let text = match format {
        SourceFormat::Txt => String::from_utf8(bytes)
            .map_err(|e| McqError::read_failed(&path_str, e))?,
        SourceFormat::Pdf => pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| McqError::read_failed(&path_str, e.to_string()))?,
    };

    info!("📄 已加载源文件 {} ({} 个字符)", path_str, text.chars().count());
    Ok(text)
}
