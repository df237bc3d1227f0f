use clap::{Parser};

use super::error::{PongError};

#[derive(Parser, Debug)]
#[command(
    name = "pong",
    version,
    about = "Send a single ICMPv6 echo reply to a remote host"
)]
pub struct Cli {
    /// Hostname or IPv6 address of the receiving host
    #[arg(value_name = "remote-address", allow_hyphen_values = true)]
    pub remote_address: String,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} <remote-address>", program)
}

/// Every failure before the send call terminates with 1.
pub fn exit_code(err: &PongError) -> i32 {
    match err {
        PongError::Resolve(_) => 1,
        PongError::NoViableAddress => 1,
        PongError::SocketConnect(_, _) => 1,
        PongError::PacketReadField(_, _) => 1,
    }
}
