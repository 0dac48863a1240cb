//! # Even-Number Status Flow
//!
//! Read and write paths of the status widget, expressed as events reduced
//! into [`EvenNumberViewState`]. The widget keeps the state in a signal and
//! feeds every [`StatusEvent`] through [`EvenNumberViewState::apply`]; tests
//! do the same with a plain value.
//!
//! ## Write path
//!
//! ```text
//! Idle ─▶ Validating ─▶ SignerAcquired ─▶ Submitting ─▶ PendingConfirmation ─▶ Confirmed ─▶ Idle
//!              │               │               │                  │
//!              └───────────────┴───────────────┴──────────────────┴──▶ Idle + error
//! ```
//!
//! Validation runs before the provider is touched, so bad input never costs a
//! round trip. Every failure lands back in `Idle` with a message, ready for
//! the next attempt.

use alloy_primitives::{B256, U256};

use crate::contract::Receipt;
use crate::error::{DappError, PENDING_CONFIRMATION_MESSAGE};
use crate::provider::ProviderResolver;
use crate::seal::SealProvider;
use crate::utils::{format_value, truncate_hash};
use crate::validation::parse_even_number;

/// Where the current submission is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    SignerAcquired,
    Submitting,
    PendingConfirmation {
        tx_hash: B256,
    },
    Confirmed,
}

/// Everything that changes the status widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    InputChanged(String),
    FetchSucceeded(U256),
    FetchFailed(DappError),
    Phase(SubmissionPhase),
    Submitted(B256),
    Confirmed(Receipt),
    SubmitFailed(DappError),
}

/// What the status line shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusLine {
    Error(String),
    Notice(String),
    Value(String),
    Loading,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvenNumberViewState {
    pub value: Option<U256>,
    pub input: String,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub phase: SubmissionPhase,
    pub in_flight: bool,
}

impl EvenNumberViewState {
    /// Start a submission: clears the previous error and returns the input
    /// to submit.
    ///
    /// Refuses while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Result<String, DappError> {
        if self.in_flight {
            return Err(DappError::SubmissionInFlight);
        }
        self.in_flight = true;
        self.error = None;
        self.notice = None;
        self.phase = SubmissionPhase::Validating;
        Ok(self.input.clone())
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight
    }

    pub fn apply(&mut self, event: StatusEvent) {
        match event {
            StatusEvent::InputChanged(text) => self.input = text,
            StatusEvent::FetchSucceeded(value) => {
                self.value = Some(value);
                if self.phase == SubmissionPhase::Confirmed {
                    self.phase = SubmissionPhase::Idle;
                }
            }
            StatusEvent::FetchFailed(err) => {
                self.error = Some(err.user_message());
                if self.phase == SubmissionPhase::Confirmed {
                    self.phase = SubmissionPhase::Idle;
                }
            }
            StatusEvent::Phase(phase) => self.phase = phase,
            StatusEvent::Submitted(tx_hash) => {
                self.phase = SubmissionPhase::PendingConfirmation { tx_hash };
                self.notice = Some(PENDING_CONFIRMATION_MESSAGE.to_string());
            }
            StatusEvent::Confirmed(_) => {
                self.phase = SubmissionPhase::Confirmed;
                self.error = None;
                self.notice = None;
                self.input.clear();
                self.in_flight = false;
            }
            StatusEvent::SubmitFailed(err) => {
                self.phase = SubmissionPhase::Idle;
                self.error = Some(err.user_message());
                self.notice = None;
                self.in_flight = false;
            }
        }
    }

    /// Errors win over notices, notices over the value.
    pub fn status_line(&self) -> StatusLine {
        if let Some(err) = &self.error {
            return StatusLine::Error(err.clone());
        }
        if let Some(notice) = &self.notice {
            return StatusLine::Notice(notice.clone());
        }
        match &self.value {
            Some(value) => StatusLine::Value(format_value(value)),
            None => StatusLine::Loading,
        }
    }

    /// Short hash of the transaction awaiting confirmation.
    pub fn pending_tx(&self) -> Option<String> {
        match &self.phase {
            SubmissionPhase::PendingConfirmation { tx_hash } => Some(truncate_hash(tx_hash)),
            _ => None,
        }
    }
}

/// Read and write operations of the status widget.
pub struct EvenNumberFlow<'a> {
    resolver: &'a ProviderResolver,
    seal: &'a dyn SealProvider,
}

impl<'a> EvenNumberFlow<'a> {
    pub fn new(resolver: &'a ProviderResolver, seal: &'a dyn SealProvider) -> Self {
        Self { resolver, seal }
    }

    /// Read `number()` through a fresh provider.
    pub async fn fetch(&self) -> Result<U256, DappError> {
        let provider = self.resolver.resolve()?;
        let value = provider
            .read_number()
            .await
            .map_err(|e| DappError::Fetch(e.to_string()))?;
        log::info!("[READ] current even number: {}", value);
        Ok(value)
    }

    /// [`fetch`](Self::fetch), reported as an event.
    pub async fn refresh(&self, emit: &mut impl FnMut(StatusEvent)) {
        match self.fetch().await {
            Ok(value) => emit(StatusEvent::FetchSucceeded(value)),
            Err(err) => {
                log::error!("[READ] fetching even number failed: {}", err);
                let err = match err {
                    DappError::Fetch(_) => err,
                    other => DappError::Fetch(other.user_message()),
                };
                emit(StatusEvent::FetchFailed(err));
            }
        }
    }

    /// Validate `input`, submit `set(x, seal)`, wait for confirmation, refresh.
    ///
    /// Call after [`EvenNumberViewState::begin_submit`]. Every failure is
    /// emitted as [`StatusEvent::SubmitFailed`] and also returned.
    pub async fn submit(&self, input: &str, emit: &mut impl FnMut(StatusEvent)) -> Result<Receipt, DappError> {
        match self.run_submit(input, emit).await {
            Ok(receipt) => {
                emit(StatusEvent::Confirmed(receipt));
                self.refresh(emit).await;
                Ok(receipt)
            }
            Err(err) => {
                log::error!("[SUBMIT] submission failed: {}", err);
                emit(StatusEvent::SubmitFailed(err.clone()));
                Err(err)
            }
        }
    }

    async fn run_submit(&self, input: &str, emit: &mut impl FnMut(StatusEvent)) -> Result<Receipt, DappError> {
        emit(StatusEvent::Phase(SubmissionPhase::Validating));
        let x = parse_even_number(input)?;

        let provider = self.resolver.resolve()?;
        let signer = provider.signer().await?;
        log::debug!("[SUBMIT] signer acquired: {}", signer.address());
        emit(StatusEvent::Phase(SubmissionPhase::SignerAcquired));

        let seal = self.seal.seal_for(x).await?;
        if self.seal.is_placeholder() {
            log::warn!("[SUBMIT] using placeholder seal, no proof of evenness is attached");
        }

        log::info!("[SUBMIT] attempting to set number: {}", x);
        emit(StatusEvent::Phase(SubmissionPhase::Submitting));
        let tx_hash = signer.submit_set(x, seal).await?;
        log::info!("[SUBMIT] transaction sent: {:#x}", tx_hash);
        emit(StatusEvent::Submitted(tx_hash));

        let receipt = signer.wait_for_receipt(tx_hash).await?;
        log::info!("[SUBMIT] transaction confirmed in block {:?}", receipt.block_number);
        Ok(receipt)
    }
}
