//! Interactive terminal chat with an LLM
//!
//! Each line read from standard input is recorded in a plain-text transcript,
//! answered by a freshly built responder (a tool-using agent or a plain chat
//! call), printed, and recorded again. The session ends on `exit`, end of
//! input, or a termination signal.

#![warn(missing_docs)]

pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod session;
pub mod signal;
pub mod transcript;

pub use config::{Config, ConfigError, Mode};
pub use dispatcher::{DispatchError, Dispatcher};
pub use session::{Ending, Query, Session, SessionError};
pub use transcript::{Transcript, TranscriptError};
