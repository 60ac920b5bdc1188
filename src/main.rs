use anyhow::Context;
use parley::{logging, signal, Config, Dispatcher, Session, Transcript};
use parley_memory::BufferMemory;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let listener = signal::Listener::install().context("program failure")?;
    tokio::spawn(listener.shutdown_on_signal());

    let config = Config::from_env().context("program failure")?;
    debug!(chat_file = %config.chat_file.display(), mode = %config.mode, "starting session");

    let transcript = Transcript::create(&config.chat_file).context("program failure")?;
    let mut session = Session::new(transcript, Dispatcher::new(config), BufferMemory::new());

    let stdin = BufReader::new(tokio::io::stdin());
    let ending = session
        .run(stdin, &mut std::io::stdout())
        .await
        .context("program failure")?;
    debug!(?ending, "session finished");
    Ok(())
}
