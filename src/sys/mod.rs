use crate::record::{Family, LinkStats};
use hwaddr::MacAddr6;
use std::net::IpAddr;

/// One decoded `getifaddrs` node, with the per-family `sockaddr`
/// reinterpretation done exactly once.
pub(crate) struct RawRecord {
    pub(crate) name: String,
    pub(crate) flags: libc::c_uint,
    pub(crate) payload: RawPayload,
}

pub(crate) enum RawPayload {
    Link {
        mac: Option<MacAddr6>,
        stats: Option<LinkStats>,
    },
    Proto(RawProto),
}

pub(crate) struct RawProto {
    pub(crate) family: Family,
    pub(crate) address: Option<IpAddr>,
    pub(crate) netmask: Option<IpAddr>,
    pub(crate) broadcast: Option<IpAddr>,
    pub(crate) destination: Option<IpAddr>,
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod linux;
        pub(crate) use linux::{decode_link, LINK_FAMILY};
    } else if #[cfg(any(
        target_os = "macos",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
    ))] {
        mod darwin;
        pub(crate) use darwin::{decode_link, LINK_FAMILY};
    } else {
        compile_error!("ifsnap supports Linux, macOS and the BSDs");
    }
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod posix;
        pub(crate) use posix::interface_records;
    }
}
