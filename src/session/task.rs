use std::io;

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt},
    select,
};

use crate::{
    consts::SERVER_CLOSED_NOTICE,
    error::Error,
    message,
    probe::{PeerProbe, ProbeOutcome},
    session::Session,
};

// Why the chat loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    // The server went away: peer probe failure or zero-byte read.
    ServerClosed,
    // Local input reached end of file.
    InputClosed,
    // An unexpected error; the operator was shown the hint or the detail.
    Fault,
}

// Outcome of one readiness wait.
enum Event {
    Inbound(io::Result<usize>),
    Line(io::Result<Option<String>>),
}

// Drives one session until the connection dies, local input ends, or the
// first unexpected error. Single control flow: the `select!` below is the
// only suspension point, so no locking is needed anywhere.
//
// Generic over the connection, the local input and the operator output so the
// whole state machine runs against in-memory transports in tests.
pub async fn run_chat_loop<C, I, O>(
    session: &mut Session<C>,
    input: I,
    mut output: O,
) -> Result<Exit, Error>
where
    C: AsyncRead + AsyncWrite + PeerProbe + Unpin,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut chunk = vec![0u8; session.config.read_chunk_size];

    loop {
        // Cheap liveness check before committing to a blocking wait.
        match session.conn.probe_peer() {
            ProbeOutcome::Alive(_) => {}
            ProbeOutcome::Anonymous => {
                tracing::warn!("peer probe returned no identity, continuing");
                output
                    .write_all(b"warning: peer identity unavailable\n")
                    .await?;
            }
            ProbeOutcome::Lost(e) => {
                tracing::debug!(error = %e, "peer probe failed, treating as server closure");
                if session.verbose {
                    output
                        .write_all(b"Detected that the connection to the server was lost\n")
                        .await?;
                }
                return server_closed(&mut output).await;
            }
        }

        // The readiness wait: block until either source has data, with no
        // timeout. Both pending futures are dropped once one resolves, so
        // the dispatch below has the connection to itself again.
        let event = select! {
            read = session.conn.read(&mut chunk) => Event::Inbound(read),
            line = lines.next_line() => Event::Line(line),
        };

        let step = match event {
            // Zero-byte read is the orderly close convention; nothing else
            // is processed this iteration.
            Event::Inbound(Ok(0)) => {
                tracing::debug!("connection closed by peer");
                return server_closed(&mut output).await;
            }
            Event::Inbound(Ok(n)) => {
                forward_inbound(&chunk[..n], session.verbose, &mut output).await
            }
            Event::Inbound(Err(e)) => Err(e.into()),
            Event::Line(Ok(Some(line))) => forward_outbound(session, &line, &mut output).await,
            Event::Line(Ok(None)) => {
                tracing::debug!("local input closed");
                return Ok(Exit::InputClosed);
            }
            Event::Line(Err(e)) => Err(e.into()),
        };

        // Fail fast: the first unexpected error ends the run. Nothing is
        // retried.
        if let Err(e) = step {
            tracing::debug!(error = %e, "terminating after error");
            if session.verbose {
                output
                    .write_all(
                        format!("Encountered error: {e}. This error will now terminate the program.\n")
                            .as_bytes(),
                    )
                    .await?;
            } else {
                output
                    .write_all(
                        b"Encountered an error and will now exit the program.\nTurn on verbose (-v) to see more.\n",
                    )
                    .await?;
            }
            return Ok(Exit::Fault);
        }
    }
}

async fn server_closed<O: AsyncWrite + Unpin>(output: &mut O) -> Result<Exit, Error> {
    output.write_all(SERVER_CLOSED_NOTICE.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(Exit::ServerClosed)
}

// Prints one received chunk verbatim. No reassembly: a chunk may hold a
// partial line or several lines and is displayed as-is.
async fn forward_inbound<O: AsyncWrite + Unpin>(
    data: &[u8],
    verbose: bool,
    output: &mut O,
) -> Result<(), Error> {
    let text = std::str::from_utf8(data)?;
    if verbose {
        output
            .write_all(format!("Got message: Server: {text}\n").as_bytes())
            .await?;
    }
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    Ok(())
}

// Sends one line of operator input with the display name attached. write_all
// either transmits the whole payload or fails; partial sends are invisible.
async fn forward_outbound<C, O>(
    session: &mut Session<C>,
    line: &str,
    output: &mut O,
) -> Result<(), Error>
where
    C: AsyncRead + AsyncWrite + Unpin,
    O: AsyncWrite + Unpin,
{
    if session.verbose {
        output
            .write_all(format!("Sending message: Server: {line}\n").as_bytes())
            .await?;
    }
    let payload = message::outgoing(&session.name, line);
    session.conn.write_all(payload.as_bytes()).await?;
    tracing::debug!(bytes = payload.len(), "sent line");
    Ok(())
}
