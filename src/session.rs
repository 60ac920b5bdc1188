//! The interactive read, query, print loop

use crate::dispatcher::DispatchError;
use crate::transcript::{Transcript, TranscriptError};
use async_trait::async_trait;
use parley_memory::ConversationMemory;
use std::io::{self, Write};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Printed once at startup
pub const BANNER: &str = "Interactive Chat with OpenAI (Type 'exit' to quit)";
/// Typing this ends the session
pub const EXIT_KEYWORD: &str = "exit";
/// Shown before each read
pub const PROMPT: &str = "\nYou: ";
/// Shown when the session ends normally
pub const FAREWELL: &str = "\nGoodbye!\n";

/// Answers one utterance
#[async_trait]
pub trait Query: Send + Sync {
    /// Produce the response text for `input`
    async fn query(
        &self,
        memory: &mut dyn ConversationMemory,
        input: &str,
    ) -> Result<String, DispatchError>;
}

/// Errors that end the session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the transcript failed
    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    /// The query failed
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The terminal could not be read or written
    #[error("terminal I/O failed")]
    Terminal(#[from] io::Error),
}

/// How a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The user typed the exit keyword
    ExitKeyword,
    /// Standard input was closed
    EndOfInput,
}

/// One run of the chat: transcript, dispatcher and conversation memory
pub struct Session<Q, M, W = std::fs::File> {
    transcript: Transcript<W>,
    dispatcher: Q,
    memory: M,
}

impl<Q, M, W> Session<Q, M, W>
where
    Q: Query,
    M: ConversationMemory,
    W: Write,
{
    /// Assemble a session
    pub fn new(transcript: Transcript<W>, dispatcher: Q, memory: M) -> Self {
        Self {
            transcript,
            dispatcher,
            memory,
        }
    }

    /// Run until the exit keyword, end of input, or the first error
    pub async fn run<R, O>(&mut self, input: R, out: &mut O) -> Result<Ending, SessionError>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
    {
        writeln!(out, "{BANNER}")?;
        let mut lines = input.lines();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                debug!("standard input closed");
                return farewell(out, Ending::EndOfInput);
            };
            let line = line.trim();
            if line == EXIT_KEYWORD {
                return farewell(out, Ending::ExitKeyword);
            }

            self.transcript.append(line)?;
            let answer = self.dispatcher.query(&mut self.memory, line).await?;

            write!(out, "\nAI: {answer}\n")?;
            out.flush()?;
            self.transcript.append(&answer)?;
        }
    }

    /// Consume the session, returning its transcript
    pub fn into_transcript(self) -> Transcript<W> {
        self.transcript
    }
}

fn farewell<O: Write>(out: &mut O, ending: Ending) -> Result<Ending, SessionError> {
    write!(out, "{FAREWELL}")?;
    out.flush()?;
    Ok(ending)
}
