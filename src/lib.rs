//! Pong sends one unsolicited ICMPv6 echo reply to a remote host over a raw socket.
//!
//! ## Example
//! ```rust,no_run
//! use pong::{ error::{PongError},
//!     Delivery,
//!     Pong,
//! };
//!
//! fn main() -> Result<(), PongError> {
//!     let pong = Pong::with_target("::1")?;
//!
//!     match pong.transmit() {
//!
//!         Delivery::Complete => println!("sent to {}", pong.target()),
//!         other => eprintln!("{:?}", other),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod packets;
mod resolver;
mod sender;

pub mod error;
pub mod cli;

pub use packets::{

    ECHO_REPLY_LEN,
    ECHO_REPLY,
    EchoReply,
};

pub use resolver::{

    Candidate,
    resolve,
};

pub use sender::{

    Transport,
    Delivery,
    Pong,

    open_raw,
    acquire,
    run,
};
