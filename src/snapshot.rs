use crate::record::{AddressEntry, Family, InterfaceRecord};
use crate::sys::{self, RawPayload, RawProto, RawRecord};
use crate::{flags, prefix, Error};
use std::collections::HashMap;
use std::net::IpAddr;

/// Takes a snapshot of the local network interfaces.
///
/// Returns one record per distinct interface name, ordered lexicographically
/// by name. Multiple kernel records sharing a name are merged: the
/// link-layer record contributes `mac` and `statistics`, and each protocol
/// record appends one entry to `addresses` in kernel-reported order.
pub fn snapshot() -> Result<Vec<InterfaceRecord>, Error> {
    Ok(build_records(sys::interface_records()?))
}

fn build_records(raw: Vec<RawRecord>) -> Vec<InterfaceRecord> {
    let mut names: Vec<&str> = raw.iter().map(|record| record.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    let index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, i))
        .collect();

    let mut records: Vec<InterfaceRecord> = names
        .iter()
        .map(|name| InterfaceRecord {
            name: name.to_string(),
            flags: String::new(),
            mac: None,
            statistics: None,
            addresses: None,
        })
        .collect();

    for raw_record in &raw {
        let record = &mut records[index[raw_record.name.as_str()]];
        record.flags = flags::format_flags(raw_record.flags);

        match &raw_record.payload {
            RawPayload::Link { mac, stats } => {
                record.mac = *mac;
                record.statistics = *stats;
            }
            RawPayload::Proto(proto) => {
                record
                    .addresses
                    .get_or_insert_with(Vec::new)
                    .push(address_entry(proto));
            }
        }
    }

    records
}

fn address_entry(proto: &RawProto) -> AddressEntry {
    let prefix_length = match (proto.family, proto.netmask) {
        (Family::Ipv4, Some(IpAddr::V4(mask))) => Some(prefix::ipv4_mask_len(mask)),
        (Family::Ipv6, Some(IpAddr::V6(mask))) => Some(prefix::ipv6_mask_len(mask)),
        _ => None,
    };

    AddressEntry {
        family: proto.family,
        address: proto.address,
        netmask: proto.netmask,
        broadcast_address: proto.broadcast,
        destination_address: proto.destination,
        prefix_length,
    }
}
