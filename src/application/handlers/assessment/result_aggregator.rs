//! ResultAggregator - issues the scoring and summary requests for a snapshot.
//!
//! Both sides are awaited to completion before anything is returned. If
//! either fails the whole call fails and no narrative is produced.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::domain::assessment::AnswerSnapshot;
use crate::domain::scoring::{AssessmentResults, ItemScore, Prompt, PromptBuilder, PromptSet};
use crate::ports::{AIError, AIProvider, CompletionRequest, RequestMetadata};

/// Fans a snapshot out to the assessor and joins the replies.
pub struct ResultAggregator {
    provider: Arc<dyn AIProvider>,
    builder: PromptBuilder,
    concurrency: usize,
}

impl ResultAggregator {
    /// `concurrency` bounds in-flight scoring requests; clamped to at least 1.
    pub fn new(provider: Arc<dyn AIProvider>, builder: PromptBuilder, concurrency: usize) -> Self {
        Self {
            provider,
            builder,
            concurrency: concurrency.max(1),
        }
    }

    /// Requests scoring and summary narratives for `snapshot`.
    ///
    /// The returned results carry the snapshot's generation.
    pub async fn aggregate(&self, snapshot: &AnswerSnapshot) -> Result<AssessmentResults, AIError> {
        let PromptSet {
            scoring,
            summary: summary_prompt,
        } = self.builder.build(&snapshot.answers);

        let provider = self.provider.provider_info();
        tracing::info!(
            assessment_id = %snapshot.assessment_id,
            generation = %snapshot.generation,
            provider = %provider.name,
            model = %provider.model,
            strategy = %self.builder.strategy(),
            scoring_requests = scoring.len(),
            "Requesting assessment results"
        );

        let (scores, summary) = tokio::join!(
            self.score_all(snapshot, scoring),
            self.complete(snapshot, &summary_prompt),
        );

        let scores = scores?;
        let summary = summary?;

        Ok(AssessmentResults::new(snapshot.generation, scores, summary))
    }

    /// Runs every scoring prompt, keeping prompt order. All requests finish
    /// before the first failure, if any, is returned.
    async fn score_all(
        &self,
        snapshot: &AnswerSnapshot,
        prompts: Vec<Prompt>,
    ) -> Result<Vec<ItemScore>, AIError> {
        let outcomes: Vec<Result<ItemScore, AIError>> = stream::iter(prompts)
            .map(|prompt| async move {
                let index = prompt.item_index.unwrap_or(0);
                let narrative = self.complete(snapshot, &prompt).await?;
                let question = snapshot
                    .answers
                    .get(index)
                    .map(|a| a.question.clone())
                    .unwrap_or_default();
                Ok::<_, AIError>(ItemScore {
                    index,
                    question,
                    narrative,
                })
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        outcomes.into_iter().collect()
    }

    async fn complete(&self, snapshot: &AnswerSnapshot, prompt: &Prompt) -> Result<String, AIError> {
        let metadata = RequestMetadata::new(
            snapshot.assessment_id,
            snapshot.generation,
            prompt.kind,
            prompt.item_index,
        );
        let trace_id = metadata.trace_id.clone();

        tracing::debug!(
            trace_id = %trace_id,
            kind = %prompt.kind,
            item = ?prompt.item_index,
            prompt = %prompt.user_prompt,
            "Sending assessor prompt"
        );

        match self
            .provider
            .complete(CompletionRequest::from_prompt(prompt, metadata))
            .await
        {
            Ok(response) => {
                tracing::info!(
                    trace_id = %trace_id,
                    kind = %prompt.kind,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "Assessor completion received"
                );
                Ok(response.content)
            }
            Err(err) => {
                tracing::warn!(
                    trace_id = %trace_id,
                    kind = %prompt.kind,
                    error = %err,
                    "Assessor request failed"
                );
                Err(err)
            }
        }
    }
}
