use std::net::{Ipv4Addr, Ipv6Addr};

/// Number of leading one-bits in an IPv4 netmask, i.e. the CIDR prefix
/// length for a contiguous mask.
pub(crate) fn ipv4_mask_len(mask: Ipv4Addr) -> u8 {
    u32::from(mask).leading_ones() as u8
}

/// Number of leading one-bits in an IPv6 netmask. Counting stops at the
/// first zero bit, so a non-contiguous mask reports only its leading run.
pub(crate) fn ipv6_mask_len(mask: Ipv6Addr) -> u8 {
    u128::from(mask).leading_ones() as u8
}
