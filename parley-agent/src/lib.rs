//! Responders for the parley chat client
//!
//! A [`Responder`] turns one user utterance into one answer. [`Chat`] sends
//! the utterance on its own; [`Agent`] replays conversation memory and lets
//! the model call tools before it answers.

#![warn(missing_docs)]

pub mod agent;
pub mod chat;
pub mod error;
pub mod responder;

pub use agent::{Agent, AgentBuilder, DEFAULT_MAX_ITERATIONS, DEFAULT_SYSTEM_PROMPT};
pub use chat::Chat;
pub use error::{AgentError, AgentResult};
pub use responder::Responder;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use parley_core::{Error, Provider, Request, Response};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replies with canned responses in order and records every request
    #[derive(Default)]
    pub struct ScriptedProvider {
        replies: Mutex<VecDeque<Response>>,
        pub requests: Mutex<Vec<Request>>,
    }

    impl ScriptedProvider {
        pub fn new(replies: impl IntoIterator<Item = Response>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                requests: Mutex::default(),
            }
        }

        pub fn sent(&self, index: usize) -> Request {
            self.requests.lock().unwrap()[index].clone()
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        async fn request(&self, request: Request) -> Result<Response, Error> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| Error::provider("scripted", "no more replies"))
        }
    }
}
