use super::RawPayload;
use crate::record::LinkStats;
use hwaddr::MacAddr6;
use std::slice;

pub(crate) const LINK_FAMILY: libc::c_int = libc::AF_LINK;

pub(crate) fn decode_link(ifa: &libc::ifaddrs) -> RawPayload {
    let mac = unsafe { (ifa.ifa_addr as *const libc::sockaddr_dl).as_ref() }.and_then(|sdl| {
        if sdl.sdl_alen != 6 {
            return None;
        }
        // sdl_data holds the interface name followed by the link-layer
        // address; the structure is allocated large enough for both.
        let lladdr = unsafe {
            slice::from_raw_parts(
                sdl.sdl_data.as_ptr().add(sdl.sdl_nlen as usize) as *const u8,
                6,
            )
        };
        MacAddr6::try_from(lladdr).ok()
    });

    let stats = unsafe { (ifa.ifa_data as *const libc::if_data).as_ref() }.map(|data| LinkStats {
        tx_packets: data.ifi_opackets as u64,
        tx_bytes: data.ifi_obytes as u64,
        rx_packets: data.ifi_ipackets as u64,
        rx_bytes: data.ifi_ibytes as u64,
    });

    RawPayload::Link { mac, stats }
}
