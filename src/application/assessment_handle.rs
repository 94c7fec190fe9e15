//! Shared ownership of the single active assessment session.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::assessment::AssessmentSession;
use crate::domain::catalog::QuestionCatalog;

/// Handle to the active session, cloned into every handler.
///
/// Guards must not be held across an await on the scoring service.
#[derive(Debug, Clone)]
pub struct AssessmentHandle {
    inner: Arc<RwLock<AssessmentSession>>,
}

impl AssessmentHandle {
    pub fn new(session: AssessmentSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Starts a fresh session over `catalog`.
    pub fn for_catalog(catalog: &QuestionCatalog) -> Self {
        Self::new(AssessmentSession::new(catalog))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AssessmentSession> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, AssessmentSession> {
        self.inner.write().await
    }

    /// Runs `f` against a copy of the session and keeps the copy only if `f` succeeds.
    pub async fn update<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut AssessmentSession) -> Result<T, E>,
    {
        let mut session = self.inner.write().await;
        let mut draft = session.clone();
        let value = f(&mut draft)?;
        *session = draft;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuestionItem;
    use crate::domain::foundation::{DomainError, ReadinessScore};

    fn handle() -> AssessmentHandle {
        AssessmentHandle::new(AssessmentSession::from_items(&[
            QuestionItem::new("A", "q1"),
            QuestionItem::new("A", "q2"),
        ]))
    }

    #[tokio::test]
    async fn update_commits_on_success() {
        let handle = handle();

        handle
            .update(|s| {
                s.record_score(0, ReadinessScore::FullyImplemented)?;
                s.advance().map(|_| ())
            })
            .await
            .unwrap();

        assert_eq!(handle.read().await.current_index(), 1);
    }

    #[tokio::test]
    async fn update_discards_partial_changes_on_failure() {
        let handle = handle();
        let before = handle.read().await.clone();

        let result: Result<(), DomainError> = handle
            .update(|s| {
                s.record_comment(0, "half done")?;
                s.advance().map(|_| ())
            })
            .await;

        assert!(result.is_err());
        assert_eq!(*handle.read().await, before);
    }
}
