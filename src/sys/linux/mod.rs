#![allow(non_camel_case_types)]
#![allow(dead_code)]

use super::RawPayload;
use crate::record::LinkStats;
use hwaddr::MacAddr6;

pub(crate) const LINK_FAMILY: libc::c_int = libc::AF_PACKET;

// `struct rtnl_link_stats` from <linux/if_link.h>; not declared by the libc
// crate. `getifaddrs` attaches it to AF_PACKET records via `ifa_data`.
#[repr(C)]
struct rtnl_link_stats {
    rx_packets: u32,
    tx_packets: u32,
    rx_bytes: u32,
    tx_bytes: u32,
    rx_errors: u32,
    tx_errors: u32,
    rx_dropped: u32,
    tx_dropped: u32,
    multicast: u32,
    collisions: u32,
    rx_length_errors: u32,
    rx_over_errors: u32,
    rx_crc_errors: u32,
    rx_frame_errors: u32,
    rx_fifo_errors: u32,
    rx_missed_errors: u32,
    tx_aborted_errors: u32,
    tx_carrier_errors: u32,
    tx_fifo_errors: u32,
    tx_heartbeat_errors: u32,
    tx_window_errors: u32,
    rx_compressed: u32,
    tx_compressed: u32,
    rx_nohandler: u32,
}

pub(crate) fn decode_link(ifa: &libc::ifaddrs) -> RawPayload {
    let mac = unsafe { (ifa.ifa_addr as *const libc::sockaddr_ll).as_ref() }.and_then(|sll| {
        // Non-Ethernet links (sit, tun) carry halen 0 or 4; no MAC then.
        if sll.sll_halen != 6 {
            return None;
        }
        MacAddr6::try_from(&sll.sll_addr[..6]).ok()
    });

    let stats =
        unsafe { (ifa.ifa_data as *const rtnl_link_stats).as_ref() }.map(|stats| LinkStats {
            tx_packets: stats.tx_packets as u64,
            tx_bytes: stats.tx_bytes as u64,
            rx_packets: stats.rx_packets as u64,
            rx_bytes: stats.rx_bytes as u64,
        });

    RawPayload::Link { mac, stats }
}
