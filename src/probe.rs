use std::io;
use std::net::SocketAddr;

use tokio::net::TcpStream;

// Result of asking the transport who is on the other end of the connection.
#[derive(Debug)]
pub enum ProbeOutcome {
    // The peer is identified; the connection looks viable.
    Alive(SocketAddr),
    // The probe succeeded but yielded no usable identity. Anomalous, never
    // fatal: the loop warns and carries on.
    Anonymous,
    // The transport no longer has a peer. Treated as graceful server-side
    // closure regardless of the exact error class.
    Lost(io::Error),
}

// Cheap liveness check run before every readiness wait, so a vanished peer
// is noticed without committing to a blocking read.
pub trait PeerProbe {
    fn probe_peer(&self) -> ProbeOutcome;
}

impl PeerProbe for TcpStream {
    fn probe_peer(&self) -> ProbeOutcome {
        match self.peer_addr() {
            Ok(addr) if addr.ip().is_unspecified() => ProbeOutcome::Anonymous,
            Ok(addr) => ProbeOutcome::Alive(addr),
            Err(e) => ProbeOutcome::Lost(e),
        }
    }
}
