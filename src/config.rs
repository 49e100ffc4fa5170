use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{McqError, McqResult};

/// 程序配置文件
///
/// 加载顺序：默认值 → TOML 配置文件（可选）→ 环境变量。
/// 进程启动时构造一次，之后以引用方式传入各组件。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 采样温度
    pub llm_temperature: f32,
    /// 单次回复的最大 token 数
    pub llm_max_tokens: u32,
    // --- 题目配置 ---
    /// 题目格式说明（JSON）文件路径，未设置时使用内置格式
    pub response_schema_path: Option<PathBuf>,
    /// 题目数量与请求不一致时是否直接判定失败
    pub strict_count: bool,
    // --- 输出配置 ---
    /// CSV 输出文件
    pub output_csv_path: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-1.5-flash".to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 4096,
            response_schema_path: None,
            strict_count: false,
            output_csv_path: PathBuf::from("mcq.csv"),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置
    ///
    /// # 参数
    /// - `path`: TOML 配置文件路径（可选，文件不存在时报错）
    ///
    /// # 返回
    /// 合并了环境变量之后的配置
    pub fn load(path: Option<&Path>) -> McqResult<Self> {
        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// 从环境变量加载配置（其余使用默认值）
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// 从 TOML 文件读取配置
    pub fn from_toml_file(path: &Path) -> McqResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            McqError::Config(format!("无法读取配置文件 {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            McqError::Config(format!("无法解析配置文件 {}: {}", path.display(), e))
        })
    }

    /// 用环境变量覆盖配置项
    ///
    /// `lookup` 抽象了环境变量读取，方便测试时注入
    pub fn with_env_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = self;
        Self {
            llm_api_key: lookup("LLM_API_KEY")
                .or_else(|| lookup("GOOGLE_API_KEY"))
                .unwrap_or(default.llm_api_key),
            llm_api_base_url: lookup("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: lookup("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            llm_temperature: lookup("LLM_TEMPERATURE").and_then(|v| v.parse().ok()).unwrap_or(default.llm_temperature),
            llm_max_tokens: lookup("LLM_MAX_TOKENS").and_then(|v| v.parse().ok()).unwrap_or(default.llm_max_tokens),
            response_schema_path: lookup("RESPONSE_SCHEMA_PATH").map(PathBuf::from).or(default.response_schema_path),
            strict_count: lookup("STRICT_COUNT").and_then(|v| v.parse().ok()).unwrap_or(default.strict_count),
            output_csv_path: lookup("OUTPUT_CSV_PATH").map(PathBuf::from).unwrap_or(default.output_csv_path),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 检查运行所需的配置是否齐全
    pub fn validate(&self) -> McqResult<()> {
        if self.llm_api_key.trim().is_empty() {
            return Err(McqError::Config(
                "未设置 LLM_API_KEY（或 GOOGLE_API_KEY）".to_string(),
            ));
        }
        if self.llm_model_name.trim().is_empty() {
            return Err(McqError::Config("LLM_MODEL_NAME 不能为空".to_string()));
        }
        Ok(())
    }
}
