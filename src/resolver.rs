use std::{

    ffi::{

        CString,
        CStr,
    },

    net::{

        SocketAddrV6,
        Ipv6Addr,
    },

    mem::{size_of},
    io::{Error as IoError},
    ptr::{self},
};

use socket2::{

    Protocol,
    Domain,
    Type,
};

use super::error::{PongError};

/// One resolved address, ready for socket creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub domain: Domain,
    pub socket_type: Type,
    pub protocol: Protocol,
    pub address: SocketAddrV6,
}

/// Owns the list handed out by `getaddrinfo`, freed on drop.
struct AddrInfoList(*mut libc::addrinfo);

impl AddrInfoList {
    fn iter(&self) -> AddrInfoIter<'_> {
        AddrInfoIter {
            next: self.0,
            _list: self,
        }
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { libc::freeaddrinfo(self.0) };
        }
    }
}

struct AddrInfoIter<'a> {
    next: *const libc::addrinfo,
    _list: &'a AddrInfoList,
}

impl<'a> Iterator for AddrInfoIter<'a> {
    type Item = &'a libc::addrinfo;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: entries stay valid as long as the owning list is alive.
        let entry = unsafe { self.next.as_ref()? };
        self.next = entry.ai_next;
        Some(entry)
    }
}

/// Resolve `target` to raw ICMPv6 candidates, in resolver order.
///
/// Only addresses the host has a configured family for are returned
/// (`AI_ADDRCONFIG`). An empty list is not an error here, socket
/// acquisition reports it.
pub fn resolve(target: &str) -> Result<Vec<Candidate>, PongError> {
    let node = CString::new(target).map_err(|e| {
        PongError::Resolve(e.to_string())
    })?;

    let mut hints: libc::addrinfo = unsafe { std::mem::zeroed() };
    hints.ai_flags = libc::AI_ADDRCONFIG;
    hints.ai_family = libc::AF_INET6;
    hints.ai_socktype = libc::SOCK_RAW;
    hints.ai_protocol = libc::IPPROTO_ICMPV6;

    let mut head: *mut libc::addrinfo = ptr::null_mut();
    let code = unsafe {
        libc::getaddrinfo(node.as_ptr(), ptr::null(), &hints, &mut head)
    };

    if code != 0 {
        return Err(PongError::Resolve(resolver_message(code)))
    }

    let list = AddrInfoList(head);
    let candidates: Vec<Candidate> = list.iter()
        .filter_map(candidate_from)
        .collect();

    log::debug!("resolved '{}' to {} candidate(s)", target, candidates.len());

    Ok(candidates)
}

fn resolver_message(code: libc::c_int) -> String {
    if code == libc::EAI_SYSTEM {
        return IoError::last_os_error().to_string()
    }

    // SAFETY: gai_strerror returns a static, nul terminated string.
    unsafe { CStr::from_ptr(libc::gai_strerror(code)) }
        .to_string_lossy()
        .into_owned()
}

fn candidate_from(entry: &libc::addrinfo) -> Option<Candidate> {
    if entry.ai_family != libc::AF_INET6 || entry.ai_addr.is_null() {
        return None
    }

    if (entry.ai_addrlen as usize) < size_of::<libc::sockaddr_in6>() {
        return None
    }

    // SAFETY: family and length were checked above.
    let raw = unsafe {
        ptr::read_unaligned(entry.ai_addr as *const libc::sockaddr_in6)
    };

    let address = SocketAddrV6::new(

        Ipv6Addr::from(raw.sin6_addr.s6_addr),
        u16::from_be(raw.sin6_port),

        raw.sin6_flowinfo,
        raw.sin6_scope_id,
    );

    Some(Candidate {

        domain: Domain::from(entry.ai_family),
        socket_type: Type::from(entry.ai_socktype),
        protocol: Protocol::from(entry.ai_protocol),

        address: address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sockaddr(ip: Ipv6Addr, scope: u32) -> libc::sockaddr_in6 {
        let mut raw: libc::sockaddr_in6 = unsafe { std::mem::zeroed() };
        raw.sin6_family = libc::AF_INET6 as libc::sa_family_t;
        raw.sin6_addr.s6_addr = ip.octets();
        raw.sin6_scope_id = scope;
        raw
    }

    fn entry(family: libc::c_int, raw: &mut libc::sockaddr_in6) -> libc::addrinfo {
        let mut entry: libc::addrinfo = unsafe { std::mem::zeroed() };
        entry.ai_family = family;
        entry.ai_socktype = libc::SOCK_RAW;
        entry.ai_protocol = libc::IPPROTO_ICMPV6;
        entry.ai_addrlen = size_of::<libc::sockaddr_in6>() as libc::socklen_t;
        entry.ai_addr = raw as *mut libc::sockaddr_in6 as *mut libc::sockaddr;
        entry
    }

    #[test]
    fn converts_ipv6_entry() {
        let mut raw = sockaddr(Ipv6Addr::LOCALHOST, 3);
        let candidate = candidate_from(&(entry(libc::AF_INET6, &mut raw))).unwrap();

        assert_eq!(candidate.domain, Domain::IPV6);
        assert_eq!(candidate.socket_type, Type::RAW);
        assert_eq!(candidate.protocol, Protocol::ICMPV6);
        assert_eq!(candidate.address, SocketAddrV6::new(Ipv6Addr::LOCALHOST, 0, 0, 3));
    }

    #[test]
    fn skips_foreign_family() {
        let mut raw = sockaddr(Ipv6Addr::LOCALHOST, 0);
        assert_eq!(candidate_from(&(entry(libc::AF_INET, &mut raw))), None);
    }

    #[test]
    fn skips_short_address() {
        let mut raw = sockaddr(Ipv6Addr::LOCALHOST, 0);
        let mut short = entry(libc::AF_INET6, &mut raw);
        short.ai_addrlen = 4;

        assert_eq!(candidate_from(&short), None);
    }

    #[test]
    fn interior_nul_is_a_resolution_error() {
        assert!(matches!(resolve("::1\0evil"), Err(PongError::Resolve(_))));
    }

    #[test]
    fn resolver_text_is_surfaced() {
        assert!(!resolver_message(libc::EAI_NONAME).is_empty());
    }
}
