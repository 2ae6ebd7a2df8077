use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AnswerType;

/// A single question with its expected answer. Leaf entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub answer_type: AnswerType,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Check a candidate answer.
    ///
    /// The candidate must be of the kind the question expects (a string for
    /// `text`, a number for `number`, a boolean for `checkbox`) and its string
    /// form must equal the stored answer exactly.
    #[must_use]
    pub fn accepts(&self, candidate: &AnswerInput) -> bool {
        candidate.answer_type() == self.answer_type && candidate.to_answer_string() == self.answer
    }
}

/// A submitted answer, typed by its JSON kind.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum AnswerInput {
    Checkbox(bool),
    Number(f64),
    Text(String),
}

impl AnswerInput {
    /// The answer type this candidate's kind corresponds to.
    #[must_use]
    pub const fn answer_type(&self) -> AnswerType {
        match self {
            Self::Text(_) => AnswerType::Text,
            Self::Number(_) => AnswerType::Number,
            Self::Checkbox(_) => AnswerType::Checkbox,
        }
    }

    /// String form compared against the stored answer. Numbers use the
    /// ECMAScript `Number::toString` form (`3`, `1e+21`, `1e-7`, `Infinity`).
    #[must_use]
    pub fn to_answer_string(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Checkbox(checked) => checked.to_string(),
            Self::Number(n) => ryu_js::Buffer::new().format(*n).to_string(),
        }
    }
}
