// View-state controller - one submit/wait/result cycle per interactive view
use crate::application::prediction_gateway::TransportError;
use crate::application::validation::ValidationError;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

/// Opaque identifier minted per request, used to discard stale resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Lifecycle of one interactive view. Transitions are the only mutation
/// path; "loading and error at the same time" is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Validating,
    InFlight { token: RequestToken },
    Success { value: T },
    Failure { message: String },
}

struct Inner<T> {
    state: ViewState<T>,
    // Monotonic counter; tokens are never reused within a controller.
    minted: u64,
    current: Option<RequestToken>,
}

/// One controller per view. Handles are cheap to clone and share state, so
/// overlapping submissions from rapid user interaction race through the
/// same token check: only the most recently minted request may resolve.
pub struct ViewController<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for ViewController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for ViewController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewController<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ViewState::Idle,
                minted: 0,
                current: None,
            })),
        }
    }

    /// Entering validation for a fresh submission.
    pub fn begin_validation(&self) {
        let mut inner = self.inner.lock();
        inner.state = ViewState::Validating;
    }

    /// Validation rejected the input; no request is issued.
    pub fn fail_validation(&self, message: impl Into<String>) {
        let mut inner = self.inner.lock();
        inner.current = None;
        inner.state = ViewState::Failure {
            message: message.into(),
        };
    }

    /// Mint a fresh token and move in-flight. Any earlier in-flight request
    /// is superseded: its eventual resolution no longer matches `current`
    /// and will be discarded.
    pub fn begin_request(&self) -> RequestToken {
        let mut inner = self.inner.lock();
        inner.minted += 1;
        let token = RequestToken(inner.minted);
        inner.current = Some(token);
        inner.state = ViewState::InFlight { token };
        token
    }

    /// Apply a completed request's outcome, but only if `token` is still the
    /// current one. Returns whether the outcome was applied; stale and
    /// post-reset resolutions are dropped silently.
    pub fn resolve(&self, token: RequestToken, outcome: Result<T, TransportError>) -> bool {
        let mut inner = self.inner.lock();
        if inner.current != Some(token) {
            tracing::debug!(token = token.0, "discarding stale resolution");
            return false;
        }
        inner.current = None;
        inner.state = match outcome {
            Ok(value) => ViewState::Success { value },
            Err(err) => ViewState::Failure {
                message: err.user_message(),
            },
        };
        true
    }

    /// User-initiated clear. Always lands on `Idle`, from any state, and
    /// invalidates the in-flight token so late resolutions are no-ops.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.current = None;
        inner.state = ViewState::Idle;
    }

    /// Drive one full submit cycle: validate, go in-flight, invoke the
    /// gateway call, resolve under the staleness guard. A second `submit`
    /// through another handle while this one is awaiting supersedes it.
    pub async fn submit<P, F, Fut>(&self, input: Result<P, ValidationError>, call: F)
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, TransportError>>,
    {
        self.begin_validation();
        let payload = match input {
            Ok(payload) => payload,
            Err(err) => {
                self.fail_validation(err.to_string());
                return;
            }
        };
        let token = self.begin_request();
        let outcome = call(payload).await;
        self.resolve(token, outcome);
    }
}

impl<T: Clone> ViewController<T> {
    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState<T> {
        self.inner.lock().state.clone()
    }
}
