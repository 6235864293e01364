use super::{decode_link, RawPayload, RawProto, RawRecord, LINK_FAMILY};
use crate::record::Family;
use crate::Error;
use log::debug;
use std::ffi::CStr;
use std::marker::PhantomData;
use std::mem;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Owned `getifaddrs(3)` list. The kernel-allocated chain is released on
/// every exit path through `Drop`.
struct IfAddrs {
    base: *mut libc::ifaddrs,
}

impl IfAddrs {
    fn query() -> Result<Self, Error> {
        let mut base = mem::MaybeUninit::<*mut libc::ifaddrs>::uninit();
        match unsafe { libc::getifaddrs(base.as_mut_ptr()) } {
            0 => Ok(Self {
                base: unsafe { base.assume_init() },
            }),
            _ => Err(Error::Enumerate(nix::errno::Errno::last())),
        }
    }

    fn iter(&self) -> IfAddrsIter<'_> {
        IfAddrsIter {
            next: self.base,
            _list: PhantomData,
        }
    }
}

impl Drop for IfAddrs {
    fn drop(&mut self) {
        if !self.base.is_null() {
            unsafe { libc::freeifaddrs(self.base) }
        }
    }
}

struct IfAddrsIter<'a> {
    next: *mut libc::ifaddrs,
    _list: PhantomData<&'a IfAddrs>,
}

impl<'a> Iterator for IfAddrsIter<'a> {
    type Item = &'a libc::ifaddrs;

    fn next(&mut self) -> Option<Self::Item> {
        let current = unsafe { self.next.as_ref() }?;
        self.next = current.ifa_next;
        Some(current)
    }
}

pub(crate) fn interface_records() -> Result<Vec<RawRecord>, Error> {
    let list = IfAddrs::query()?;
    Ok(list.iter().map(decode_record).collect())
}

fn decode_record(ifa: &libc::ifaddrs) -> RawRecord {
    let name = unsafe { CStr::from_ptr(ifa.ifa_name) }
        .to_string_lossy()
        .into_owned();
    let flags = ifa.ifa_flags;
    let family = unsafe { ifa.ifa_addr.as_ref() }.map(|sa| sa.sa_family as libc::c_int);

    let payload = if family == Some(LINK_FAMILY) {
        decode_link(ifa)
    } else {
        RawPayload::Proto(decode_proto(ifa, family, &name))
    };

    RawRecord {
        name,
        flags,
        payload,
    }
}

fn decode_proto(ifa: &libc::ifaddrs, family: Option<libc::c_int>, name: &str) -> RawProto {
    let family = match family {
        Some(libc::AF_INET) => Family::Ipv4,
        Some(libc::AF_INET6) => Family::Ipv6,
        Some(af) => {
            debug!("{name}: address of unsupported family {af}");
            Family::Unknown
        }
        None => Family::Unknown,
    };

    let ifu = decode_sockaddr(ifa_broad_or_dst(ifa));
    let (broadcast, destination) = split_broad_or_dst(ifa.ifa_flags, ifu);

    RawProto {
        family,
        address: decode_sockaddr(ifa.ifa_addr),
        netmask: decode_sockaddr(ifa.ifa_netmask),
        broadcast,
        destination,
    }
}

// The broadcast and destination pointers share storage in the `ifaddrs`
// union; the interface flags say which one is meaningful.
fn split_broad_or_dst(
    flags: libc::c_uint,
    ifu: Option<IpAddr>,
) -> (Option<IpAddr>, Option<IpAddr>) {
    if flags & libc::IFF_BROADCAST as libc::c_uint != 0 {
        (ifu, None)
    } else if flags & libc::IFF_POINTOPOINT as libc::c_uint != 0 {
        (None, ifu)
    } else {
        (None, None)
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        fn ifa_broad_or_dst(ifa: &libc::ifaddrs) -> *mut libc::sockaddr {
            ifa.ifa_ifu
        }
    } else {
        fn ifa_broad_or_dst(ifa: &libc::ifaddrs) -> *mut libc::sockaddr {
            ifa.ifa_dstaddr
        }
    }
}

fn decode_sockaddr(sa: *const libc::sockaddr) -> Option<IpAddr> {
    let sa = unsafe { sa.as_ref() }?;
    match sa.sa_family as libc::c_int {
        libc::AF_INET => {
            let sin = unsafe { &*(sa as *const libc::sockaddr as *const libc::sockaddr_in) };
            Some(IpAddr::V4(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr))))
        }
        libc::AF_INET6 => {
            let sin6 = unsafe { &*(sa as *const libc::sockaddr as *const libc::sockaddr_in6) };
            Some(IpAddr::V6(Ipv6Addr::from(sin6.sin6_addr.s6_addr)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use libc::c_uint;

    #[test]
    fn test_broadcast_interface_gets_broadcast_address() {
        let ifu: Option<IpAddr> = Some("192.168.1.255".parse().unwrap());
        let flags = (libc::IFF_UP | libc::IFF_BROADCAST) as c_uint;
        assert_eq!(split_broad_or_dst(flags, ifu), (ifu, None));
    }

    #[test]
    fn test_pointopoint_interface_gets_destination_address() {
        let ifu: Option<IpAddr> = Some("10.0.0.2".parse().unwrap());
        let flags = (libc::IFF_UP | libc::IFF_POINTOPOINT) as c_uint;
        assert_eq!(split_broad_or_dst(flags, ifu), (None, ifu));
    }

    #[test]
    fn test_neither_flag_drops_the_shared_pointer() {
        let ifu: Option<IpAddr> = Some("127.255.255.255".parse().unwrap());
        let flags = libc::IFF_UP as c_uint;
        assert_eq!(split_broad_or_dst(flags, ifu), (None, None));
    }
}
