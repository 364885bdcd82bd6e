use log::{error, info, warn};

use super::prompt::{analysis_prompt, description_prompt};
use super::response::{parse_analysis, ContentAnalysis};
use super::{AnalysisError, GenerationRequest, TextModel};

/// Sticker content tagging and copywriting on top of a [`TextModel`]
pub struct ContentAnalyzer<M> {
    model: M,
}

impl<M: TextModel> ContentAnalyzer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Summary, tags, sentiment and safety rating for a sticker description.
    ///
    /// The image reference only goes into the prompt; no pixels are analyzed.
    pub async fn analyze_sticker_content(
        &self,
        description: &str,
        image_url: Option<&str>,
    ) -> Result<ContentAnalysis, AnalysisError> {
        if description.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let request = GenerationRequest::json(analysis_prompt(description, image_url));
        let response = self.model.generate(request).await.inspect_err(|err| {
            error!("❌ Content analysis request failed: {}", err);
        })?;

        let mut analysis = parse_analysis(&response.text)?;
        analysis.sources = response.sources;
        info!(
            "✅ Analyzed sticker content: {} tags, {} sources",
            analysis.suggested_tags.len(),
            analysis.sources.len()
        );
        Ok(analysis)
    }

    /// Short marketing copy for a sticker
    pub async fn generate_description(
        &self,
        name: &str,
        keywords: Option<&str>,
    ) -> Result<String, AnalysisError> {
        if name.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let request = GenerationRequest::text(description_prompt(name, keywords));
        let response = self.model.generate(request).await.inspect_err(|err| {
            error!("❌ Description generation failed: {}", err);
        })?;
        Ok(response.text.trim().to_owned())
    }

    /// Free-form question answered with web search grounding
    pub async fn search_grounded(&self, query: &str) -> Result<ContentAnalysis, AnalysisError> {
        if query.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let response = self
            .model
            .generate(GenerationRequest::grounded(query))
            .await
            .inspect_err(|err| warn!("Grounded search failed: {}", err))?;
        Ok(ContentAnalysis {
            summary: Some(response.text),
            sources: response.sources,
            ..Default::default()
        })
    }
}
