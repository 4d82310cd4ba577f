//! Password strength meter library
//!
//! This library scores passwords against five simple criteria, generates
//! strong random passwords and keeps a small history of generated
//! passwords plus a theme preference in a key-value store.
//!
//! # Features
//!
//! - `async` (default): Enables the self-dismissing toast notifier
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_METER_STORE_PATH`: Custom path to the JSON store file
//!   (default: `./pwd-meter-store.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{evaluate_password_strength, generate_password, FileStore, HistoryStore};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {}", evaluation.score);
//! println!("Strength: {}", evaluation.level());
//!
//! // Generate one and keep it in history
//! let generated = generate_password();
//! let history = HistoryStore::new(FileStore::open_default());
//! history.append(generated.expose_secret()).expect("Failed to save history");
//! ```

// Internal modules
mod clipboard;
mod denylist;
mod evaluator;
mod generator;
mod history;
mod notify;
mod sections;
mod session;
mod storage;
mod theme;
mod types;

// Public API
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use denylist::{is_common, COMMON_PASSWORDS};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use generator::{generate_password, generate_password_with, LENGTH_RANGE, SYMBOLS};
pub use history::{HistoryEntry, HistoryError, HistoryStore, HISTORY_CAPACITY, HISTORY_KEY};
pub use notify::{Notify, TOAST_DURATION};
pub use sections::MIN_LENGTH;
pub use session::{CopyOutcome, PasswordSession};
pub use storage::{get_store_path, FileStore, KeyValueStore, MemoryStore, StorageError};
pub use theme::{Theme, ThemeStore, UnknownTheme, THEME_KEY};
pub use types::{Criterion, StrengthLevel, StrengthResult, POINTS_PER_CRITERION};

#[cfg(feature = "async")]
pub use notify::ToastNotifier;
