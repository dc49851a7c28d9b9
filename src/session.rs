//! Debounced evaluation session.
//!
//! Each keystroke submits the current password. Submissions are numbered;
//! a newer submission cancels the pending debounce of the older one, and a
//! breach lookup that finishes after being superseded is dropped instead
//! of reaching the display.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachChecker, HttpRangeClient, RangeClient};
use crate::evaluator::LocalAssessment;
use crate::generator::{GeneratorConfig, GeneratorError, generate};
use crate::types::{BreachStatus, CriteriaReport, StrengthVerdict};

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Quiet period after a submission before evaluation starts.
    pub debounce: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}

/// Progress of one submission, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// Composition rows are final; the breach row is loading.
    Criteria { seq: u64, criteria: CriteriaReport },
    Verdict { seq: u64, verdict: StrengthVerdict },
}

impl SessionUpdate {
    pub fn seq(&self) -> u64 {
        match self {
            SessionUpdate::Criteria { seq, .. } | SessionUpdate::Verdict { seq, .. } => *seq,
        }
    }
}

/// Runs evaluations for one input field and streams their updates.
pub struct EvaluationSession<C = HttpRangeClient> {
    checker: Arc<BreachChecker<C>>,
    config: SessionConfig,
    latest: Arc<AtomicU64>,
    in_flight: Option<CancellationToken>,
    tx: mpsc::Sender<SessionUpdate>,
}

impl<C: RangeClient + 'static> EvaluationSession<C> {
    pub fn new(
        checker: Arc<BreachChecker<C>>,
        config: SessionConfig,
    ) -> (Self, mpsc::Receiver<SessionUpdate>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let session = Self {
            checker,
            config,
            latest: Arc::new(AtomicU64::new(0)),
            in_flight: None,
            tx,
        };
        (session, rx)
    }

    /// Schedules an evaluation and returns its sequence number.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, password: SecretString) -> u64 {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.cancel();

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        tokio::spawn(run_evaluation(
            seq,
            password,
            Arc::clone(&self.checker),
            Arc::clone(&self.latest),
            token,
            self.tx.clone(),
            self.config.debounce,
        ));
        seq
    }

    /// Generates a password and submits it for evaluation.
    ///
    /// Returns the generated password so the caller can show it.
    pub fn submit_generated(
        &mut self,
        config: &GeneratorConfig,
    ) -> Result<(SecretString, u64), GeneratorError> {
        let password = generate(config)?;
        let copy = SecretString::new(password.expose_secret().into());
        let seq = self.submit(copy);
        Ok((password, seq))
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }

    /// Cancels the pending submission, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

async fn run_evaluation<C: RangeClient>(
    seq: u64,
    password: SecretString,
    checker: Arc<BreachChecker<C>>,
    latest: Arc<AtomicU64>,
    token: CancellationToken,
    tx: mpsc::Sender<SessionUpdate>,
    debounce: Duration,
) {
    let is_stale = || token.is_cancelled() || latest.load(Ordering::SeqCst) != seq;

    if password.expose_secret().is_empty() {
        if !is_stale() {
            send(&tx, SessionUpdate::Verdict {
                seq,
                verdict: StrengthVerdict::idle(),
            })
            .await;
        }
        return;
    }

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(debounce) => {}
    }
    if is_stale() {
        return;
    }

    let Some(local) = LocalAssessment::of(&password) else {
        return;
    };
    send(&tx, SessionUpdate::Criteria {
        seq,
        criteria: local.criteria(BreachStatus::Loading),
    })
    .await;

    let breach = checker.check(&password).await;
    if is_stale() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Discarding stale evaluation #{}", seq);
        return;
    }

    send(&tx, SessionUpdate::Verdict {
        seq,
        verdict: local.verdict(breach),
    })
    .await;
}

async fn send(tx: &mpsc::Sender<SessionUpdate>, update: SessionUpdate) {
    if let Err(_e) = tx.send(update).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send session update: {}", _e);
    }
}

/// What the presentation layer currently shows.
///
/// Apply every [`SessionUpdate`] here; updates older than the newest one
/// already seen are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    seq: u64,
    settled: bool,
    criteria: CriteriaReport,
    verdict: StrengthVerdict,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            seq: 0,
            settled: true,
            criteria: CriteriaReport::idle(),
            verdict: StrengthVerdict::idle(),
        }
    }
}

impl DisplayState {
    /// Applies an update; returns `false` if it was stale and ignored.
    pub fn apply(&mut self, update: SessionUpdate) -> bool {
        match update {
            SessionUpdate::Criteria { seq, criteria } => {
                if seq < self.seq || (seq == self.seq && self.settled) {
                    return false;
                }
                self.seq = seq;
                self.settled = false;
                self.criteria = criteria;
            }
            SessionUpdate::Verdict { seq, verdict } => {
                if seq < self.seq {
                    return false;
                }
                self.seq = seq;
                self.settled = true;
                self.criteria = verdict.criteria.clone();
                self.verdict = verdict;
            }
        }
        true
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn criteria(&self) -> &CriteriaReport {
        &self.criteria
    }

    pub fn verdict(&self) -> &StrengthVerdict {
        &self.verdict
    }
}
