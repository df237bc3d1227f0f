use thiserror::{Error};

#[derive(Error, Debug)]
pub enum PongError {
    #[error("getaddrinfo: {0}")]
    Resolve(String),
    #[error("No viable network addresses")]
    NoViableAddress,
    #[error("connect: failed connecting to '{0}', reason: {1}")]
    SocketConnect(String, String),
    #[error("Failed to read packet field '{0}', reason: {1}")]
    PacketReadField(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_diagnostics() {
        assert_eq!(PongError::NoViableAddress.to_string(), "No viable network addresses");
        assert_eq!(PongError::Resolve("Name or service not known".into()).to_string(),
            "getaddrinfo: Name or service not known");
    }
}
