//! Background settlement worker
//!
//! Runs settlement computations off the caller's task and publishes the
//! outcome through a watch channel. Every submission receives a
//! monotonically increasing sequence number; a completing computation
//! only overwrites the published state if it is not older than what is
//! already published. A newer snapshot submitted while an older one is
//! still running therefore wins unconditionally (last-writer-wins), and
//! the stale result is dropped on arrival. No cancellation or queueing
//! is needed: computations are cheap and side-effect-free.

use crate::core::SettlementEngine;
use crate::types::{Expense, SettlementError, Transfer};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Published state of the most recent settlement computation
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationState {
    /// No snapshot has been submitted yet
    Idle,

    /// A snapshot is being computed
    Pending {
        /// Sequence number of the in-flight submission
        seq: u64,
    },

    /// The latest computation finished successfully
    Ready {
        /// Sequence number of the completed submission
        seq: u64,
        /// The settlement transfers for that snapshot
        transfers: Vec<Transfer>,
    },

    /// The latest computation failed
    Failed {
        /// Sequence number of the failed submission
        seq: u64,
        /// The error the engine reported
        error: SettlementError,
    },
}

impl ComputationState {
    /// Sequence number of the state, 0 for [`ComputationState::Idle`]
    pub fn seq(&self) -> u64 {
        match self {
            ComputationState::Idle => 0,
            ComputationState::Pending { seq }
            | ComputationState::Ready { seq, .. }
            | ComputationState::Failed { seq, .. } => *seq,
        }
    }

    /// Whether a computation is currently in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, ComputationState::Pending { .. })
    }
}

/// Background settlement worker
///
/// Owns a [`SettlementEngine`] and publishes [`ComputationState`]
/// updates. `submit` must be called from within a tokio runtime.
pub struct SettlementWorker {
    engine: Arc<SettlementEngine>,
    next_seq: AtomicU64,
    sender: Arc<watch::Sender<ComputationState>>,
}

impl SettlementWorker {
    /// Create a worker around an engine
    ///
    /// The initial published state is [`ComputationState::Idle`].
    pub fn new(engine: SettlementEngine) -> Self {
        let (sender, _receiver) = watch::channel(ComputationState::Idle);
        SettlementWorker {
            engine: Arc::new(engine),
            next_seq: AtomicU64::new(0),
            sender: Arc::new(sender),
        }
    }

    /// Subscribe to published computation states
    pub fn subscribe(&self) -> watch::Receiver<ComputationState> {
        self.sender.subscribe()
    }

    /// Submit an expense snapshot for background settlement
    ///
    /// Marks the published state pending (unless a newer submission has
    /// already been published) and spawns the computation on the current
    /// tokio runtime.
    ///
    /// # Arguments
    ///
    /// * `expenses` - The snapshot to settle; the worker takes ownership
    ///
    /// # Returns
    ///
    /// The sequence number assigned to this submission. Subscribers can
    /// compare it against [`ComputationState::seq`] to tell whether a
    /// published result is at least as new as their snapshot.
    pub fn submit(&self, expenses: Vec<Expense>) -> u64 {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;

        self.sender.send_modify(|state| {
            if state.seq() <= seq {
                *state = ComputationState::Pending { seq };
            }
        });

        let engine = Arc::clone(&self.engine);
        let sender = Arc::clone(&self.sender);
        tokio::spawn(async move {
            let result = engine.settle(&expenses);
            sender.send_modify(|state| {
                // A newer submission owns the published state; drop
                // this result instead of rolling the display back.
                if state.seq() <= seq {
                    *state = match result {
                        Ok(transfers) => ComputationState::Ready { seq, transfers },
                        Err(error) => ComputationState::Failed { seq, error },
                    };
                }
            });
        });

        seq
    }
}

/// Wait until a submission (or anything newer) has completed
///
/// Blocks on the watch channel until the published state is a finished
/// computation with a sequence number of at least `seq`, then returns
/// its outcome.
///
/// # Errors
///
/// Returns the engine's error if the awaited computation failed, or an
/// I/O-category error if the worker was dropped while waiting.
pub async fn await_settlement(
    receiver: &mut watch::Receiver<ComputationState>,
    seq: u64,
) -> Result<Vec<Transfer>, SettlementError> {
    loop {
        {
            let state = receiver.borrow_and_update();
            match &*state {
                ComputationState::Ready { seq: done, transfers } if *done >= seq => {
                    return Ok(transfers.clone());
                }
                ComputationState::Failed { seq: done, error } if *done >= seq => {
                    return Err(error.clone());
                }
                _ => {}
            }
        }

        receiver.changed().await.map_err(|_| SettlementError::Io {
            message: "settlement worker stopped before completing".to_string(),
        })?;
    }
}
