use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::content_store::application::ports::outgoing::DocumentHeader;
use crate::modules::maintenance::application::domain::candidate_lines;
use crate::modules::maintenance::application::ports::outgoing::{
    ConfirmationPrompt, ConfirmationPromptError,
};

/// Shows the candidates and reads one line of confirmation. The terminal
/// exchange runs on the blocking pool.
pub struct TerminalPrompt<R, W> {
    io: Arc<Mutex<(R, W)>>,
}

impl TerminalPrompt<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> TerminalPrompt<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Arc::new(Mutex::new((reader, writer))),
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> Result<(R, W), ConfirmationPromptError> {
        Arc::try_unwrap(self.io)
            .map_err(|_| ConfirmationPromptError::Io("prompt still in use".into()))?
            .into_inner()
            .map_err(|_| ConfirmationPromptError::Io("prompt lock poisoned".into()))
    }
}

fn converse<R, W>(io: &Mutex<(R, W)>, lines: &[String]) -> Result<String, ConfirmationPromptError>
where
    R: BufRead,
    W: Write,
{
    let mut guard = io
        .lock()
        .map_err(|_| ConfirmationPromptError::Io("prompt lock poisoned".into()))?;
    let (reader, writer) = &mut *guard;

    let io_error = |e: io::Error| ConfirmationPromptError::Io(e.to_string());

    for line in lines {
        writeln!(writer, "{line}").map_err(io_error)?;
    }
    writeln!(writer).map_err(io_error)?;
    writeln!(writer, "WARNING: This will permanently delete these documents!")
        .map_err(io_error)?;
    writeln!(
        writer,
        "Type \"y\" to confirm deletion, or any other key to cancel:"
    )
    .map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    let mut answer = String::new();
    reader.read_line(&mut answer).map_err(io_error)?;
    Ok(answer)
}

#[async_trait]
impl<R, W> ConfirmationPrompt for TerminalPrompt<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    async fn ask(&self, candidates: &[DocumentHeader]) -> Result<String, ConfirmationPromptError> {
        let io = Arc::clone(&self.io);
        let lines = candidate_lines(candidates);

        tokio::task::spawn_blocking(move || converse(&io, &lines))
            .await
            .map_err(|e| ConfirmationPromptError::Io(e.to_string()))?
    }
}
