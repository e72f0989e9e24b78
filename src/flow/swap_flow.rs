//! The review → submit → result state machine around a single swap.

use tracing::debug;

use super::TransactionHash;
use crate::error::SwapError;
use crate::quote::SwapQuote;

/// Where a swap is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowState {
    /// The user is entering amounts.
    #[default]
    Editing,
    /// A quote is shown for confirmation.
    Review(SwapQuote),
    /// The confirmed swap is in flight.
    Submitting(SwapQuote),
    /// The swap went through.
    Completed {
        /// The executed quote.
        quote: SwapQuote,
        /// Hash of the settling transaction.
        tx_hash: TransactionHash,
    },
    /// Submission failed; the quote can be retried.
    Failed {
        /// The quote that failed.
        quote: SwapQuote,
        /// Reason reported by the submitter.
        error: String,
    },
}

impl FlowState {
    /// Short lowercase name, used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Review(_) => "reviewing",
            Self::Submitting(_) => "submitting",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }

    /// The quote attached to this state, if any.
    #[must_use]
    pub const fn quote(&self) -> Option<&SwapQuote> {
        match self {
            Self::Editing => None,
            Self::Review(quote)
            | Self::Submitting(quote)
            | Self::Completed { quote, .. }
            | Self::Failed { quote, .. } => Some(quote),
        }
    }
}

/// Drives one swap from editing to a final result.
///
/// | From | Action | To |
/// |------|--------|----|
/// | `Editing` | [`initiate`](Self::initiate) | `Review` |
/// | `Review` | [`back`](Self::back) | `Editing` |
/// | `Review`, `Failed` | [`confirm`](Self::confirm) | `Submitting` |
/// | `Submitting` | [`complete`](Self::complete) | `Completed` |
/// | `Submitting` | [`fail`](Self::fail) | `Failed` |
/// | any | [`reset`](Self::reset) | `Editing` |
///
/// Any other action returns [`SwapError::InvalidTransition`] and leaves the
/// state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwapFlow {
    state: FlowState,
}

impl SwapFlow {
    /// A flow in the `Editing` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    /// Opens the review of `quote`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] unless editing.
    pub fn initiate(&mut self, quote: SwapQuote) -> Result<(), SwapError> {
        match self.state {
            FlowState::Editing => {
                self.set("initiate", FlowState::Review(quote));
                Ok(())
            }
            _ => Err(self.invalid("initiate")),
        }
    }

    /// Leaves the review and returns to editing.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] unless reviewing.
    pub fn back(&mut self) -> Result<(), SwapError> {
        match self.state {
            FlowState::Review(_) => {
                self.set("back", FlowState::Editing);
                Ok(())
            }
            _ => Err(self.invalid("back")),
        }
    }

    /// Submits the reviewed quote, or retries a failed one.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] unless reviewing or failed.
    pub fn confirm(&mut self) -> Result<(), SwapError> {
        let quote = match &self.state {
            FlowState::Review(quote) | FlowState::Failed { quote, .. } => quote.clone(),
            _ => return Err(self.invalid("confirm")),
        };
        self.set("confirm", FlowState::Submitting(quote));
        Ok(())
    }

    /// Records a successful submission.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] unless submitting.
    pub fn complete(&mut self, tx_hash: TransactionHash) -> Result<(), SwapError> {
        let FlowState::Submitting(quote) = &self.state else {
            return Err(self.invalid("complete"));
        };
        let quote = quote.clone();
        self.set("complete", FlowState::Completed { quote, tx_hash });
        Ok(())
    }

    /// Records a failed submission.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] unless submitting.
    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), SwapError> {
        let FlowState::Submitting(quote) = &self.state else {
            return Err(self.invalid("fail"));
        };
        let quote = quote.clone();
        self.set(
            "fail",
            FlowState::Failed {
                quote,
                error: error.into(),
            },
        );
        Ok(())
    }

    /// Returns to editing from any state.
    pub fn reset(&mut self) {
        self.set("reset", FlowState::Editing);
    }

    fn set(&mut self, action: &'static str, next: FlowState) {
        debug!(from = self.state.name(), to = next.name(), action, "swap flow transition");
        self.state = next;
    }

    fn invalid(&self, action: &'static str) -> SwapError {
        debug!(from = self.state.name(), action, "rejected swap flow transition");
        SwapError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}
