//! Classify a user's follow-up question to pick which parser should consume
//! the assistant's answer

use serde::{Deserialize, Serialize};

const EDIT_VERBS: &[&str] = &[
    "调整", "修改", "更改", "更新", "重新", "优化", "改进", "添加", "删除", "移除", "替换",
];
const PLANNING_NOUNS: &[&str] = &["方案", "计划", "行程", "时间线", "安排"];
const TIMELINE_WORDS: &[&str] = &["时间线", "行程", "时间安排", "详细安排", "日程"];
const PLAN_WORDS: &[&str] = &["方案", "计划", "选项"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// The answer should replace the current timeline
    Timeline,
    /// The answer should replace the current plan options
    Plans,
    /// Plain conversation; nothing to parse
    Chat,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestKind::Timeline => write!(f, "timeline"),
            RequestKind::Plans => write!(f, "plans"),
            RequestKind::Chat => write!(f, "chat"),
        }
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

pub fn classify_request(question: &str) -> RequestKind {
    let adjustment = contains_any(question, EDIT_VERBS) || contains_any(question, PLANNING_NOUNS);
    if !adjustment {
        return RequestKind::Chat;
    }

    if contains_any(question, TIMELINE_WORDS) {
        RequestKind::Timeline
    } else if contains_any(question, PLAN_WORDS) {
        RequestKind::Plans
    } else {
        RequestKind::Chat
    }
}
