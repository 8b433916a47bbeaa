//! One-shot asynchronous result envelopes.
//!
//! Every port that may touch storage or another aggregate returns an
//! [`AsyncResult`]. The envelope carries exactly one outcome, either a value
//! or an error, and callers only ever "call and await" it. How the outcome is
//! produced (already known, computed lazily, or delivered from a spawned task
//! through a one-shot channel) stays hidden behind the envelope.
//!
//! # Examples
//!
//! ```
//! use fieldwork::async_result::{AsyncResult, ResultChannelClosed};
//!
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! struct Closed;
//!
//! impl From<ResultChannelClosed> for Closed {
//!     fn from(_: ResultChannelClosed) -> Self {
//!         Self
//!     }
//! }
//!
//! # fn main() -> std::io::Result<()> {
//! # let runtime = tokio::runtime::Builder::new_current_thread().build()?;
//! # runtime.block_on(async {
//! let (sender, mut envelope) = AsyncResult::<u32, Closed>::channel();
//! assert!(sender.send(Ok(7)).is_ok());
//! assert_eq!(envelope.wait().await, Ok(7));
//! assert_eq!(envelope.wait().await, Ok(7));
//! # });
//! # Ok(())
//! # }
//! ```

use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::{Future, IntoFuture};
use thiserror::Error;
use tokio::sync::oneshot;

/// Error produced when the producing side of an envelope goes away without
/// delivering an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("result channel closed before an outcome was delivered")]
pub struct ResultChannelClosed;

/// Single-delivery container for the outcome of an asynchronous operation.
///
/// The error type must absorb [`ResultChannelClosed`] so that a producer
/// dropped mid-flight still resolves the envelope instead of hanging it.
pub struct AsyncResult<T, E> {
    state: State<T, E>,
}

enum State<T, E> {
    Ready(Result<T, E>),
    Deferred(BoxFuture<'static, Result<T, E>>),
    Waiting(oneshot::Receiver<Result<T, E>>),
}

/// Producing half of a channel-backed [`AsyncResult`].
///
/// Sending consumes the sender, so an outcome is delivered at most once.
pub struct ResultSender<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

impl<T, E> ResultSender<T, E> {
    /// Delivers the outcome to the paired envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ResultChannelClosed`] when the envelope was dropped before
    /// the outcome arrived.
    pub fn send(self, outcome: Result<T, E>) -> Result<(), ResultChannelClosed> {
        self.tx.send(outcome).map_err(|_| ResultChannelClosed)
    }

    /// Returns `true` when the paired envelope no longer listens.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl<T, E> AsyncResult<T, E>
where
    E: From<ResultChannelClosed>,
{
    /// Wraps an outcome that is already known.
    #[must_use]
    pub const fn ready(outcome: Result<T, E>) -> Self {
        Self {
            state: State::Ready(outcome),
        }
    }

    /// Wraps a successful value.
    #[must_use]
    pub const fn ok(value: T) -> Self {
        Self::ready(Ok(value))
    }

    /// Wraps an error.
    #[must_use]
    pub const fn err(error: E) -> Self {
        Self::ready(Err(error))
    }

    /// Creates an envelope driven by `future` when first awaited.
    #[must_use]
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            state: State::Deferred(future.boxed()),
        }
    }

    /// Creates a channel-backed envelope and its producing half.
    #[must_use]
    pub fn channel() -> (ResultSender<T, E>, Self) {
        let (tx, rx) = oneshot::channel();
        (
            ResultSender { tx },
            Self {
                state: State::Waiting(rx),
            },
        )
    }

    /// Runs `future` on the current Tokio runtime and delivers its outcome
    /// through a one-shot channel.
    ///
    /// Outside a runtime the future is kept and driven on first await
    /// instead.
    #[must_use]
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return Self::from_future(future);
        };

        let (sender, envelope) = Self::channel();
        handle.spawn(async move {
            if sender.send(future.await).is_err() {
                tracing::trace!("async result dropped before delivery");
            }
        });
        envelope
    }

    /// Returns `true` once the outcome has been received.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Returns the outcome if it has already been received.
    #[must_use]
    pub const fn peek(&self) -> Option<&Result<T, E>> {
        match &self.state {
            State::Ready(outcome) => Some(outcome),
            State::Deferred(_) | State::Waiting(_) => None,
        }
    }

    /// Waits for the outcome and keeps it, so later reads return the same
    /// envelope contents.
    pub async fn wait(&mut self) -> Result<T, E>
    where
        T: Clone,
        E: Clone,
    {
        let outcome = match &mut self.state {
            State::Ready(outcome) => return outcome.clone(),
            State::Deferred(future) => future.await,
            State::Waiting(rx) => rx.await.unwrap_or_else(closed),
        };
        self.state = State::Ready(outcome.clone());
        outcome
    }
}

fn closed<T, E: From<ResultChannelClosed>>(_: oneshot::error::RecvError) -> Result<T, E> {
    Err(E::from(ResultChannelClosed))
}

impl<T, E> IntoFuture for AsyncResult<T, E>
where
    T: Send + 'static,
    E: From<ResultChannelClosed> + Send + 'static,
{
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        match self.state {
            State::Ready(outcome) => futures::future::ready(outcome).boxed(),
            State::Deferred(future) => future,
            State::Waiting(rx) => async move { rx.await.unwrap_or_else(closed) }.boxed(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for AsyncResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Ready(outcome) => f.debug_tuple("AsyncResult").field(outcome).finish(),
            State::Deferred(_) => f.write_str("AsyncResult(<deferred>)"),
            State::Waiting(_) => f.write_str("AsyncResult(<waiting>)"),
        }
    }
}

impl<T, E> fmt::Debug for ResultSender<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultSender")
            .field("closed", &self.is_closed())
            .finish()
    }
}
