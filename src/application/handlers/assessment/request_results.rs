//! RequestResultsHandler - Command handler for scoring a completed assessment.
//!
//! The answers are copied under the lock and the assessor round trip runs on
//! its own task, so a caller that goes away does not cancel requests already
//! issued. Callers asking for the same generation share one run. Results are
//! stored only if the answers have not changed in the meantime.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;

use crate::application::AssessmentHandle;
use crate::domain::assessment::AnswerSnapshot;
use crate::domain::foundation::Generation;

use super::{AssessmentError, ResultAggregator, ResultsView};

type ResultsRun = Shared<BoxFuture<'static, Result<ResultsView, AssessmentError>>>;

/// The run currently scoring a given generation.
struct InFlight {
    generation: Generation,
    run: ResultsRun,
}

/// Command to produce results for the current answers.
#[derive(Debug, Clone, Default)]
pub struct RequestResultsCommand;

/// Handler for requesting results.
pub struct RequestResultsHandler {
    handle: AssessmentHandle,
    aggregator: Arc<ResultAggregator>,
    in_flight: Arc<Mutex<Option<InFlight>>>,
}

impl RequestResultsHandler {
    pub fn new(handle: AssessmentHandle, aggregator: Arc<ResultAggregator>) -> Self {
        Self {
            handle,
            aggregator,
            in_flight: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns stored results if they match the current answers, joins a run
    /// already scoring them, or starts a new one.
    pub async fn handle(&self, _cmd: RequestResultsCommand) -> Result<ResultsView, AssessmentError> {
        // Held until the run is registered so a finished run cannot slip
        // between the cache check and the in-flight check.
        let mut in_flight = self.in_flight.lock().await;

        let snapshot = {
            let session = self.handle.read().await;
            let snapshot = session.answer_snapshot()?;
            if let Some(results) = session.results() {
                return Ok(ResultsView::from(results));
            }
            snapshot
        };

        let joined = in_flight
            .as_ref()
            .filter(|current| current.generation == snapshot.generation)
            .map(|current| current.run.clone());

        let run = match joined {
            Some(run) => {
                tracing::debug!(
                    assessment_id = %snapshot.assessment_id,
                    generation = %snapshot.generation,
                    "Joining in-flight assessment results"
                );
                run
            }
            None => {
                let generation = snapshot.generation;
                let task = tokio::spawn(score_and_store(
                    self.handle.clone(),
                    Arc::clone(&self.aggregator),
                    Arc::clone(&self.in_flight),
                    snapshot,
                ));
                let run = async move {
                    task.await.unwrap_or_else(|err| {
                        Err(AssessmentError::Internal(format!("results task failed: {}", err)))
                    })
                }
                .boxed()
                .shared();
                *in_flight = Some(InFlight {
                    generation,
                    run: run.clone(),
                });
                run
            }
        };
        drop(in_flight);

        run.await
    }
}

/// Runs one scoring round trip to completion and clears the in-flight marker
/// once the outcome is settled.
async fn score_and_store(
    handle: AssessmentHandle,
    aggregator: Arc<ResultAggregator>,
    in_flight: Arc<Mutex<Option<InFlight>>>,
    snapshot: AnswerSnapshot,
) -> Result<ResultsView, AssessmentError> {
    let outcome = store_results(&handle, &aggregator, &snapshot).await;

    let mut in_flight = in_flight.lock().await;
    if in_flight
        .as_ref()
        .is_some_and(|current| current.generation == snapshot.generation)
    {
        *in_flight = None;
    }

    outcome
}

async fn store_results(
    handle: &AssessmentHandle,
    aggregator: &ResultAggregator,
    snapshot: &AnswerSnapshot,
) -> Result<ResultsView, AssessmentError> {
    let results = aggregator.aggregate(snapshot).await.map_err(|err| {
        tracing::error!(
            assessment_id = %snapshot.assessment_id,
            generation = %snapshot.generation,
            error = %err,
            "Assessment results unavailable"
        );
        AssessmentError::from(err)
    })?;

    let mut session = handle.write().await;
    if let Err(err) = session.apply_results(results) {
        tracing::warn!(
            assessment_id = %snapshot.assessment_id,
            result_generation = %snapshot.generation,
            current_generation = %session.generation(),
            "Discarding stale assessment results"
        );
        return Err(err.into());
    }

    let view = session
        .results()
        .map(ResultsView::from)
        .ok_or_else(|| AssessmentError::Internal("results missing after apply".to_string()))?;

    tracing::info!(
        assessment_id = %snapshot.assessment_id,
        generation = %snapshot.generation,
        "Assessment results stored"
    );
    Ok(view)
}
