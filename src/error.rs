use thiserror::Error;

/// 装箱的底层错误（LLM 调用、IO、PDF 解析等）
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum McqError {
    // ---------- 提示词模板 ----------
    /// 模板中引用的占位符在渲染时没有提供
    #[error("模板 {template} 缺少变量: {variable}")]
    MissingVariable { template: String, variable: String },

    // ---------- LLM 流水线 ----------
    /// 第一阶段（出题）LLM 调用失败
    #[error("出题阶段 LLM 调用失败: {source}")]
    GenerationFailure {
        #[source]
        source: BoxError,
    },

    /// 第二阶段（评审）LLM 调用失败
    #[error("评审阶段 LLM 调用失败: {source}")]
    EvaluationFailure {
        #[source]
        source: BoxError,
    },

    // ---------- 输出解析 ----------
    /// 提取出的文本不是合法 JSON
    #[error("JSON 解析失败: {source}")]
    ParseError {
        #[source]
        source: serde_json::Error,
    },

    /// JSON 结构与题目格式不符
    #[error("题目格式错误 (题目 {key}): {reason}")]
    SchemaError { key: String, reason: String },

    /// 无法生成题目表格（解析或格式错误的统一对外表现）
    #[error("无法生成题目表格")]
    TableUnavailable,

    /// 生成的题目数量与请求不一致
    #[error("题目数量不一致: 请求 {requested} 道, 实际 {produced} 道")]
    QuestionCountMismatch { requested: usize, produced: usize },

    // ---------- 输入 ----------
    /// 不支持的文件格式
    #[error("不支持的文件格式: {path} (仅支持 .pdf 和 .txt)")]
    UnsupportedFormat { path: String },

    /// 读取源文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadError {
        path: String,
        #[source]
        source: BoxError,
    },

    /// 请求参数不合法
    #[error("请求参数不合法: {0}")]
    InvalidRequest(String),

    /// 题目格式说明文件无法加载
    #[error("题目格式文件无效 ({path}): {reason}")]
    SchemaResource { path: String, reason: String },

    // ---------- 配置与输出 ----------
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 导出 CSV 失败
    #[error("导出 CSV 失败 ({path}): {source}")]
    Export {
        path: String,
        #[source]
        source: BoxError,
    },
}

// ========== 便捷构造函数 ==========

impl McqError {
    /// 创建出题阶段错误
    pub fn generation_failed(source: impl Into<BoxError>) -> Self {
        McqError::GenerationFailure {
            source: source.into(),
        }
    }

    /// 创建评审阶段错误
    pub fn evaluation_failed(source: impl Into<BoxError>) -> Self {
        McqError::EvaluationFailure {
            source: source.into(),
        }
    }

    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        McqError::ReadError {
            path: path.into(),
            source: source.into(),
        }
    }

    /// 创建题目格式错误
    pub fn schema(key: impl Into<String>, reason: impl Into<String>) -> Self {
        McqError::SchemaError {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// 创建 CSV 导出错误
    pub fn export_failed(path: impl Into<String>, source: impl Into<BoxError>) -> Self {
        McqError::Export {
            path: path.into(),
            source: source.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type McqResult<T> = Result<T, McqError>;
