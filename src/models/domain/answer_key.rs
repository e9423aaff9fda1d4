use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One line of the trailing answer key. Auxiliary data only; never
/// cross-validated against the quiz at parse time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerKeyEntry {
    pub question_number: u32,
    pub answer_label: String,
}
