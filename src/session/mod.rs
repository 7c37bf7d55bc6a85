mod task;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::{Config, consts::Port, error::Error, message};

pub use task::{Exit, run_chat_loop};

// One run of the client: the live connection plus the immutable per-run
// attributes. Owned exclusively by the chat loop until it terminates; the
// connection is never reused or reopened.
pub struct Session<C> {
    pub(crate) conn: C,
    pub(crate) name: String,
    pub(crate) verbose: bool,
    pub(crate) config: Config,
}

impl Session<TcpStream> {
    // Opens the connection and sends the one-time announcement. Failure here
    // is fatal before the loop ever starts; nothing is retried.
    pub async fn connect(
        server: &str,
        port: Port,
        name: &str,
        verbose: bool,
        config: Config,
    ) -> Result<Self, Error> {
        let addr = format!("{server}:{port}");
        let conn = TcpStream::connect(&addr)
            .await
            .map_err(|source| Error::Connect {
                addr: addr.clone(),
                source,
            })?;
        conn.set_nodelay(true)?;
        tracing::debug!(%addr, "connected to server");

        let mut session = Self::new(conn, name, verbose, config);
        session.announce().await?;
        Ok(session)
    }
}

impl<C> Session<C>
where
    C: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(conn: C, name: &str, verbose: bool, config: Config) -> Self {
        Self {
            conn,
            name: name.to_string(),
            verbose,
            config,
        }
    }

    // Fire-and-forget "<name> says: connected", exactly once per session,
    // before any operator input is accepted.
    async fn announce(&mut self) -> Result<(), Error> {
        let payload = message::announcement(&self.name);
        self.conn.write_all(payload.as_bytes()).await?;
        tracing::debug!(bytes = payload.len(), "sent announcement");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn new_session_sends_nothing() {
        let (local, mut remote) = tokio::io::duplex(64);
        let _session = Session::new(local, "Alice", false, Config::default());

        // Nothing may reach the wire until announce() is called.
        let mut buf = [0u8; 64];
        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            remote.read(&mut buf),
        )
        .await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn announce_sends_single_payload() {
        let (local, mut remote) = tokio::io::duplex(64);
        let mut session = Session::new(local, "Alice", false, Config::default());
        session.announce().await.unwrap();
        drop(session);

        let mut wire = Vec::new();
        remote.read_to_end(&mut wire).await.unwrap();
        assert_eq!(wire, b"Alice says: connected");
    }
}
