/// 表格列名
pub const COLUMN_MCQ: &str = "MCQ";
pub const COLUMN_CHOICES: &str = "CHOICES";
pub const COLUMN_CORRECT: &str = "CORRECT ANSWER";

/// 单道选择题（表格中的一行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// 题干
    pub mcq: String,

    /// 选项（保持文档中的顺序）：(标签, 内容)
    pub choices: Vec<(String, String)>,

    /// 正确答案的标签或内容
    pub correct: String,
}

impl QuestionRecord {
    pub fn new(
        mcq: impl Into<String>,
        choices: Vec<(String, String)>,
        correct: impl Into<String>,
    ) -> Self {
        Self {
            mcq: mcq.into(),
            choices,
            correct: correct.into(),
        }
    }

    /// 把选项渲染成一列可显示的文本
    ///
    /// 格式: `a: 选项一 | b: 选项二`
    pub fn choices_display(&self) -> String {
        self.choices
            .iter()
            .map(|(label, text)| format!("{}: {}", label, text))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// 按列顺序（MCQ, CHOICES, CORRECT ANSWER）输出一行
    pub fn to_row(&self) -> [String; 3] {
        [self.mcq.clone(), self.choices_display(), self.correct.clone()]
    }
}

/// 一次生成得到的全部题目，顺序与 LLM 输出的文档顺序一致
pub type QuestionSet = Vec<QuestionRecord>;
