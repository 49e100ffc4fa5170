//! 提示词模板注册表
//!
//! 只做占位符替换，没有其他逻辑

mod templates;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{McqError, McqResult};

pub use templates::{EVALUATION_TEMPLATE, GENERATION_TEMPLATE};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex"));

/// 带命名占位符的提示词模板
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub input_variables: &'static [&'static str],
    pub template: &'static str,
}

/// 出题模板
pub const GENERATION_PROMPT: PromptTemplate = PromptTemplate {
    name: "quiz_generation",
    input_variables: &["text", "number", "subject", "tone", "response_json"],
    template: GENERATION_TEMPLATE,
};

/// 评审模板
pub const EVALUATION_PROMPT: PromptTemplate = PromptTemplate {
    name: "quiz_evaluation",
    input_variables: &["subject", "quiz"],
    template: EVALUATION_TEMPLATE,
};

impl PromptTemplate {
    /// 模板中出现的占位符（按出现顺序，可能重复）
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.template)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// 渲染模板
    ///
    /// # 参数
    /// - `vars`: 变量名 → 取值
    ///
    /// # 返回
    /// 替换后的提示词；填入的值原样插入，不会再次展开
    pub fn render(&self, vars: &HashMap<&str, String>) -> McqResult<String> {
        let mut rendered = String::with_capacity(self.template.len());
        let mut last = 0;

        for cap in PLACEHOLDER.captures_iter(self.template) {
            let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            let value = vars.get(name.as_str()).ok_or_else(|| McqError::MissingVariable {
                template: self.name.to_string(),
                variable: name.as_str().to_string(),
            })?;
            rendered.push_str(&self.template[last..whole.start()]);
            rendered.push_str(value);
            last = whole.end();
        }
        rendered.push_str(&self.template[last..]);

        Ok(rendered)
    }
}
