//! Transient notifications.
//!
//! A notification stays visible for [`TOAST_DURATION`]. Showing a new one
//! replaces the message and restarts the timer; nothing is queued.

use std::time::Duration;

#[cfg(feature = "async")]
use std::sync::{Arc, Mutex, MutexGuard};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// How long a notification stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Receives user-visible, fire-and-forget messages.
pub trait Notify {
    fn notify(&self, message: &str);
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

#[cfg(feature = "async")]
#[derive(Debug, Default)]
struct ToastState {
    message: Option<String>,
    dismiss: Option<CancellationToken>,
}

/// Toast that hides itself after a fixed duration.
///
/// The dismiss timer runs on the current Tokio runtime. Clones share the
/// same toast.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    state: Arc<Mutex<ToastState>>,
    duration: Duration,
}

#[cfg(feature = "async")]
impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "async")]
impl ToastNotifier {
    pub fn new() -> Self {
        Self::with_duration(TOAST_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastState::default())),
            duration,
        }
    }

    /// Message currently on screen, if any.
    pub fn current(&self) -> Option<String> {
        self.state().message.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state().message.is_some()
    }

    /// Shows `message` and (re)starts the dismiss timer.
    ///
    /// Outside a Tokio runtime the message stays until the next call.
    pub fn show(&self, message: &str) {
        let token = CancellationToken::new();
        {
            let mut state = self.state();
            if let Some(previous) = state.dismiss.replace(token.clone()) {
                previous.cancel();
            }
            state.message = Some(message.to_string());
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("No runtime for toast dismiss timer: {}", _e);
                return;
            }
        };

        let state = Arc::clone(&self.state);
        let duration = self.duration;
        handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(duration) => {
                    let mut state = state.lock().unwrap_or_else(|e| e.into_inner());
                    // A newer toast may have replaced us while we waited for the lock
                    if !token.is_cancelled() {
                        state.message = None;
                        state.dismiss = None;
                    }
                }
            }
        });
    }

    fn state(&self) -> MutexGuard<'_, ToastState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(feature = "async")]
impl Notify for ToastNotifier {
    fn notify(&self, message: &str) {
        self.show(message)
    }
}
