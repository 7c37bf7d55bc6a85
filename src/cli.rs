use std::process::Command;

use clap::Parser;

use crate::consts::{DEFAULT_PORT, DEFAULT_SERVER, Port};

#[derive(Parser, Debug)]
#[command(author, version, about = "A prattle talk client", long_about = None)]
pub struct Args {
    /// Name to be prepended in messages (default: machine name)
    #[arg(short, long, default_value_t = default_name())]
    pub name: String,

    /// Server hostname or IP address
    #[arg(short, long, default_value = DEFAULT_SERVER)]
    pub server: String,

    /// TCP port the server is listening on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: Port,

    /// Turn verbose output on
    #[arg(short, long)]
    pub verbose: bool,
}

// Machine hostname as the default display name.
fn default_name() -> String {
    Command::new("hostname")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "anonymous".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["prattle"]).unwrap();
        assert_eq!(args.server, "127.0.0.1");
        assert_eq!(args.port, 12345);
        assert!(!args.verbose);
        assert!(!args.name.is_empty());
    }

    #[test]
    fn explicit_flags() {
        let args =
            Args::try_parse_from(["prattle", "-n", "Alice", "-s", "10.0.0.7", "-p", "4242", "-v"])
                .unwrap();
        assert_eq!(args.name, "Alice");
        assert_eq!(args.server, "10.0.0.7");
        assert_eq!(args.port, 4242);
        assert!(args.verbose);
    }
}
