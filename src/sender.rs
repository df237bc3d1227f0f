use std::{

    io::{Result as IoResult},
    net::{SocketAddrV6},
};

use socket2::{

    SockAddr,
    Socket,
};

use super::{

    packets::{

        ECHO_REPLY_LEN,
        ECHO_REPLY,
        EchoReply,
    },

    resolver::{

        Candidate,
        resolve,
    },

    error::{PongError},
};

/// The two socket operations the sender needs once a socket is open.
pub trait Transport {
    fn connect(&self, address: &SocketAddrV6) -> IoResult<()>;
    fn send(&self, buffer: &[u8]) -> IoResult<usize>;
}

impl Transport for Socket {
    fn connect(&self, address: &SocketAddrV6) -> IoResult<()> {
        Socket::connect(self, &(SockAddr::from(*address)))
    }

    fn send(&self, buffer: &[u8]) -> IoResult<usize> {
        Socket::send(self, buffer)
    }
}

/// Outcome of the single send call. None of these are fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Complete,
    Short { sent: usize },
    Failed(String),
}

/// Open a raw socket matching the candidate's family, type and protocol.
pub fn open_raw(candidate: &Candidate) -> IoResult<Socket> {
    Socket::new(candidate.domain, candidate.socket_type, Some(candidate.protocol))
}

/// Open a socket for the first candidate that allows it.
///
/// Failures are reported and skipped, the scan stops at the first success.
pub fn acquire<T, F>(candidates: &[Candidate], mut open: F) -> Result<(T, Candidate), PongError>
where
    F: FnMut(&Candidate) -> IoResult<T>,
{
    let mut chosen = None;

    for candidate in candidates {
        match open(candidate) {

            Ok(transport) => {
                chosen = Some((transport, candidate.clone()));
                break
            }

            Err(e) => log::warn!("socket: {}", e),
        }
    }

    chosen.ok_or(PongError::NoViableAddress)
}

pub struct Pong<T: Transport> {
    target: SocketAddrV6,
    transport: T,
}

impl Pong<Socket> {

    /// Resolve the target and connect a raw ICMPv6 socket to it.
    pub fn with_target(target: &str) -> Result<Pong<Socket>, PongError> {
        let candidates = resolve(target)?;
        Pong::connect(candidates, open_raw)
    }
}

impl<T: Transport> Pong<T> {

    /// Acquire a transport from the candidates and connect it to the chosen address.
    pub fn connect<F>(candidates: Vec<Candidate>, open: F) -> Result<Pong<T>, PongError>
    where
        F: FnMut(&Candidate) -> IoResult<T>,
    {
        let (transport, chosen) = acquire(&candidates, open)?;
        drop(candidates);

        log::debug!("chosen address: {}", chosen.address);

        transport.connect(&(chosen.address)).map_err(|e| {
            PongError::SocketConnect(chosen.address.to_string(), e.to_string())
        })?;

        Ok(Pong {

            target: chosen.address,
            transport: transport,
        })
    }

    pub fn target(&self) -> &SocketAddrV6 {
        &(self.target)
    }

    /// Write the echo reply in one send call.
    pub fn transmit(&self) -> Delivery {
        log::debug!("sending {:?} to {}", EchoReply::fixed(), self.target);

        match self.transport.send(&(ECHO_REPLY)) {

            Ok(sent) if sent == ECHO_REPLY_LEN => Delivery::Complete,

            Ok(sent) => {
                log::error!("send: wrote {} of {} octets", sent, ECHO_REPLY_LEN);
                Delivery::Short { sent: sent }
            }

            Err(e) => {
                log::error!("send: {}", e);
                Delivery::Failed(e.to_string())
            }
        }
    }
}

/// Resolve, connect and send one echo reply to `target`.
pub fn run(target: &str) -> Result<Delivery, PongError> {
    let pong = Pong::with_target(target)?;
    Ok(pong.transmit())
}
