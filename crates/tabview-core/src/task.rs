//! Module: task
//! Responsibility: lifecycle state for the simulated long-running actions
//! (upload, verify, generate) that produce a dataset for a view.
//! Does not own: the work itself; the host drives transitions and hands the
//! resulting rows to `TableView::set_rows` on success.
//! Boundary: illegal transitions are invariant errors, never silent.

use crate::error::EngineError;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Failure reason recorded when a running task is cancelled.
pub const CANCELLED_REASON: &str = "cancelled";

///
/// TaskState
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum TaskState {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed {
        reason: String,
    },
}

///
/// CancelToken
///
/// Cooperative cancellation flag handed out by `ActionTask::start`. The
/// host polls it between units of simulated work.
///

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn set(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

///
/// ActionTask
///
/// Explicit {idle, running, succeeded, failed} machine replacing the
/// fixed-delay timer simulation. One task instance per view action.
///

#[derive(Clone, Debug, Default)]
pub struct ActionTask {
    state: TaskState,
    token: Option<CancelToken>,
}

impl ActionTask {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TaskState::Idle,
            token: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &TaskState {
        &self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TaskState::Running)
    }

    /// Begin the action. Only legal from `Idle`.
    pub fn start(&mut self) -> Result<CancelToken, EngineError> {
        if self.state != TaskState::Idle {
            return Err(EngineError::task_invariant(format!(
                "cannot start task from state {:?}",
                self.state
            )));
        }

        let token = CancelToken::new();
        self.token = Some(token.clone());
        self.state = TaskState::Running;

        Ok(token)
    }

    /// Record success. Only legal from `Running`.
    pub fn succeed(&mut self) -> Result<(), EngineError> {
        self.expect_running("succeed")?;
        self.state = TaskState::Succeeded;
        self.token = None;

        Ok(())
    }

    /// Record failure with a reason. Only legal from `Running`.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), EngineError> {
        self.expect_running("fail")?;
        self.state = TaskState::Failed {
            reason: reason.into(),
        };
        self.token = None;

        Ok(())
    }

    /// Cancel a running task: flags the token and records the failure.
    pub fn cancel(&mut self) -> Result<(), EngineError> {
        self.expect_running("cancel")?;

        if let Some(token) = &self.token {
            token.set();
        }
        self.state = TaskState::Failed {
            reason: CANCELLED_REASON.to_string(),
        };
        self.token = None;

        Ok(())
    }

    /// Return to `Idle` from a terminal state, ready for a re-run.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::task_invariant(
                "cannot reset a running task; cancel it first",
            ));
        }

        self.state = TaskState::Idle;
        self.token = None;

        Ok(())
    }

    fn expect_running(&self, action: &str) -> Result<(), EngineError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(EngineError::task_invariant(format!(
                "cannot {action} task from state {:?}",
                self.state
            )))
        }
    }
}
