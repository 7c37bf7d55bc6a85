pub mod cli;
mod config;
mod consts;
mod error;
mod message;
mod probe;
mod session;

pub use config::Config;
pub use error::Error;
pub use probe::{PeerProbe, ProbeOutcome};
pub use session::{Exit, Session, run_chat_loop};
