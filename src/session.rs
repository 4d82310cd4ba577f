//! Headless password session.
//!
//! Holds what a password page shows (the current input, whether it is
//! masked, its live evaluation and the theme) and reacts to the page's
//! actions. Rendering is left to the host.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::evaluator::evaluate_password_strength;
use crate::generator::generate_password_with;
use crate::history::{HistoryEntry, HistoryError, HistoryStore};
use crate::notify::Notify;
use crate::storage::{KeyValueStore, StorageError};
use crate::theme::{Theme, ThemeStore};
use crate::types::StrengthResult;

pub const MSG_GENERATED: &str = "Password generated!";
pub const MSG_COPIED: &str = "Password copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy password";
pub const MSG_NOTHING_TO_COPY: &str = "No password to copy";

/// What happened on a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Empty,
    Failed(ClipboardError),
}

pub struct PasswordSession<S, N> {
    input: SecretString,
    visible: bool,
    evaluation: StrengthResult,
    theme: Theme,
    history: HistoryStore<S>,
    themes: ThemeStore<S>,
    notifier: N,
}

impl<S: KeyValueStore + Clone, N: Notify> PasswordSession<S, N> {
    /// Opens a session over `store`, loading the saved theme and
    /// evaluating the empty input.
    pub fn new(store: S, notifier: N) -> Result<Self, StorageError> {
        let themes = ThemeStore::new(store.clone());
        let theme = themes.get()?;
        let input = SecretString::new(String::new().into());
        let evaluation = evaluate_password_strength(&input);

        Ok(Self {
            input,
            visible: false,
            evaluation,
            theme,
            history: HistoryStore::new(store),
            themes,
            notifier,
        })
    }

    pub fn input(&self) -> &SecretString {
        &self.input
    }

    /// Live evaluation of the current input.
    pub fn evaluation(&self) -> &StrengthResult {
        &self.evaluation
    }

    /// Replaces the input and re-evaluates it right away.
    pub fn set_input(&mut self, text: &str) -> StrengthResult {
        self.input = SecretString::new(text.to_string().into());
        self.evaluation = evaluate_password_strength(&self.input);
        self.evaluation
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Switches between masked and plain input. Returns the new visibility.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Generates a password with the thread-local CSPRNG.
    pub fn generate(&mut self) -> Result<StrengthResult, HistoryError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generates a password, makes it the input and records it in history.
    pub fn generate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<StrengthResult, HistoryError> {
        let password = generate_password_with(rng);
        self.history.append(password.expose_secret())?;

        self.input = password;
        self.evaluation = evaluate_password_strength(&self.input);
        self.notifier.notify(MSG_GENERATED);

        Ok(self.evaluation)
    }

    /// Copies the input to the clipboard and notifies the outcome.
    ///
    /// A clipboard failure is reported, never retried or propagated.
    pub fn copy<C: Clipboard + ?Sized>(&self, clipboard: &C) -> CopyOutcome {
        let password = self.input.expose_secret();
        if password.is_empty() {
            self.notifier.notify(MSG_NOTHING_TO_COPY);
            return CopyOutcome::Empty;
        }

        match clipboard.write_text(password) {
            Ok(()) => {
                self.notifier.notify(MSG_COPIED);
                CopyOutcome::Copied
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to copy: {}", e);
                self.notifier.notify(MSG_COPY_FAILED);
                CopyOutcome::Failed(e)
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and saves it. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        let theme = self.theme.toggled();
        self.themes.set(theme)?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        self.history.list()
    }

    /// Deletes one history entry, newest first. Out of range is a no-op.
    pub fn delete_history(&mut self, index: usize) -> Result<Option<HistoryEntry>, HistoryError> {
        self.history.remove(index)
    }
}
