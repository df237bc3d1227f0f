use std::{

    fmt::{

        Result as FmtResult,
        Formatter,
        Debug,
    },

    io::{Cursor},
};

use byteorder::{

    ReadBytesExt,
    BigEndian,
};

use super::error::{PongError};

/// Total octets of the echo reply put on the wire.
pub const ECHO_REPLY_LEN: usize = 13;

/// Echo reply, identifier and sequence number left at zero. The checksum is
/// left at zero as well, the kernel fills it in for raw ICMPv6 sockets.
pub const ECHO_REPLY: [u8; ECHO_REPLY_LEN] = [

    0x81,       // type: echo reply
    0x00,       // code
    0x00, 0x00, // checksum
    0x00, 0x00, // identifier
    0x00, 0x00, // sequence number

    b'P', b'I', b'N', b'G', b'!',
];

const HEADER_LEN: usize = 8;

/// Read-only view over an ICMPv6 echo reply.
pub struct EchoReply<'a>(&'a [u8]);

impl EchoReply<'static> {
    /// View over the packet this utility sends.
    pub fn fixed() -> EchoReply<'static> {
        EchoReply(&(ECHO_REPLY))
    }
}

impl<'a> EchoReply<'a> {
    pub fn new(buffer: &'a [u8]) -> EchoReply<'a> {
        EchoReply(buffer)
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.0
    }

    pub fn get_type(&self) -> Result<u8, PongError> {
        let mut cursor = Cursor::new(self.0);
        cursor.set_position(0);
        Ok(cursor.read_u8().map_err(|e| {
            PongError::PacketReadField("type", e.to_string())
        })?)
    }

    pub fn get_code(&self) -> Result<u8, PongError> {
        let mut cursor = Cursor::new(self.0);
        cursor.set_position(1);
        Ok(cursor.read_u8().map_err(|e| {
            PongError::PacketReadField("code", e.to_string())
        })?)
    }

    pub fn get_checksum(&self) -> Result<u16, PongError> {
        let mut cursor = Cursor::new(self.0);
        cursor.set_position(2);
        Ok(cursor.read_u16::<BigEndian>().map_err(|e| {
            PongError::PacketReadField("checksum", e.to_string())
        })?)
    }

    pub fn get_identifier(&self) -> Result<u16, PongError> {
        let mut cursor = Cursor::new(self.0);
        cursor.set_position(4);
        Ok(cursor.read_u16::<BigEndian>().map_err(|e| {
            PongError::PacketReadField("identifier", e.to_string())
        })?)
    }

    pub fn get_sequence(&self) -> Result<u16, PongError> {
        let mut cursor = Cursor::new(self.0);
        cursor.set_position(6);
        Ok(cursor.read_u16::<BigEndian>().map_err(|e| {
            PongError::PacketReadField("sequence number", e.to_string())
        })?)
    }

    pub fn get_payload(&self) -> Result<&'a [u8], PongError> {
        match self.0.get(HEADER_LEN..) {

            Some(payload) => Ok(payload),
            None => Err(PongError::PacketReadField("payload", {
                format!("packet holds {} octets, header needs {}", self.0.len(), HEADER_LEN)
            })),
        }
    }
}

impl<'a> Debug for EchoReply<'a> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.debug_struct("EchoReply")
            .field("identifier", &(self.get_identifier()))
            .field("sequence", &(self.get_sequence()))
            .field("checksum", &(self.get_checksum()))
            .field("type", &(self.get_type()))
            .field("code", &(self.get_code()))
            .field("length", &(self.0.len()))
            .finish()
    }
}
