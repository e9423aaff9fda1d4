use serde::Serialize;

use crate::errors::StudyResult;
use crate::models::domain::ExtractedDocument;

/// Envelope the surrounding service returns to its clients. The extracted
/// document rides under `data`, the way the presentation layer expects it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Serialized body the surrounding service writes out.
    pub fn to_json(&self) -> StudyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub type ProcessedContentResponse = ApiResponse<ExtractedDocument>;

impl From<ExtractedDocument> for ProcessedContentResponse {
    fn from(document: ExtractedDocument) -> Self {
        ApiResponse {
            success: true,
            data: document,
        }
    }
}
