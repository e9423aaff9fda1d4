use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::StudyResult;

/// Body of a document-processing request: the raw completion text obtained
/// by the surrounding service. An empty payload is the caller's contract
/// violation and the only hard failure in the pipeline.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ProcessTextRequestDto {
    #[validate(length(min = 1, message = "no text content received"))]
    pub text: String,
}

impl ProcessTextRequestDto {
    pub fn into_validated_text(self) -> StudyResult<String> {
        self.validate()?;
        Ok(self.text)
    }
}
