//! 两个阶段使用的提示词原文
//!
//! 占位符写作 `{name}`，模板正文中不能出现其他花括号标识符

/// 出题模板
///
/// 要求模型把 JSON 放在 ```json 代码块中，输出解析依赖这一点
pub const GENERATION_TEMPLATE: &str = r#"Text: {text}

You are an expert MCQ maker. Given the above text, it is your job to create a quiz of {number} multiple choice questions for {subject} students in {tone} tone.
Make sure the questions are not repeated and check that every question conforms to the text.
Each question must have exactly one correct answer, and the correct answer must be one of the option labels.

Format your response like the RESPONSE_JSON below and use it as a guide. Ensure to make exactly {number} MCQs.
Return only the JSON object, wrapped in a markdown code block that starts with ```json and ends with ```.

### RESPONSE_JSON
{response_json}
"#;

/// 评审模板
pub const EVALUATION_TEMPLATE: &str = r#"You are an expert English grammarian and writer. Given a multiple choice quiz for {subject} students, you need to evaluate the complexity of the questions and give a complete analysis of the quiz. Use at most 50 words for the complexity analysis.
If the quiz is not on par with the cognitive and analytical abilities of the students, update the quiz questions which need to be changed and change the tone so that it fits the students' abilities.

Quiz_MCQs:
{quiz}

Review of the above quiz from an expert English writer:
"#;
