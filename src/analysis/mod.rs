//! Client side of the generative content API.
//!
//! The API itself is an external collaborator reached through the
//! [`TextModel`] trait; this module builds the prompts, interprets the
//! responses and tracks the single in-flight request of a view.

mod analyzer;
mod prompt;
mod response;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analyzer::ContentAnalyzer;
pub use prompt::{analysis_prompt, description_prompt};
pub use response::{parse_analysis, strip_code_fence, ContentAnalysis, SafetyRating, Sentiment};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Content model not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to parse analysis from model response: {0}")]
    MalformedResponse(String),

    #[error("Nothing to analyze")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub format: ResponseFormat,
    /// Let the model ground its answer in web search results
    pub grounded_search: bool,
}

impl GenerationRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: ResponseFormat::Text,
            grounded_search: false,
        }
    }

    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            format: ResponseFormat::Json,
            ..Self::text(prompt)
        }
    }

    /// Grounded requests must not ask for JSON output
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self {
            grounded_search: true,
            ..Self::text(prompt)
        }
    }
}

/// Web page the model cited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    pub text: String,
    pub sources: Vec<WebSource>,
}

/// Seam to the external generative text API
#[async_trait::async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, AnalysisError>;
}

/// Loading state of a fire-and-forget request.
///
/// There is no retry and no cancellation; starting a new request simply
/// replaces whatever the previous one produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalysisTask<T> {
    #[default]
    Idle,
    Loading,
    Done(T),
    /// Error rendered for display
    Failed(String),
}

impl<T> AnalysisTask<T> {
    pub fn begin(&mut self) {
        *self = AnalysisTask::Loading;
    }

    pub fn complete(&mut self, result: Result<T, AnalysisError>) {
        *self = match result {
            Ok(value) => AnalysisTask::Done(value),
            Err(err) => AnalysisTask::Failed(err.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisTask::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AnalysisTask::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisTask::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Marks the task loading, awaits `request` and stores its outcome
    pub async fn run<F>(&mut self, request: F)
    where
        F: std::future::Future<Output = Result<T, AnalysisError>>,
    {
        self.begin();
        let result = request.await;
        self.complete(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_constructors() {
        assert_eq!(GenerationRequest::json("x").format, ResponseFormat::Json);
        let grounded = GenerationRequest::grounded("x");
        assert!(grounded.grounded_search);
        assert_eq!(grounded.format, ResponseFormat::Text);
    }

    #[test]
    fn test_task_lifecycle() {
        let mut task: AnalysisTask<String> = AnalysisTask::default();
        assert_eq!(task, AnalysisTask::Idle);

        task.begin();
        assert!(task.is_loading());

        task.complete(Err(AnalysisError::Request("timeout".into())));
        assert_eq!(task.error(), Some("Request failed: timeout"));

        futures::executor::block_on(task.run(async { Ok("done".to_string()) }));
        assert_eq!(task.value().map(String::as_str), Some("done"));
    }
}
