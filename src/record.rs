use hwaddr::MacAddr6;
use serde::Serialize;
use std::net::IpAddr;

/// One entry per distinct interface name within a snapshot.
///
/// `mac` and `statistics` come from the interface's link-layer record,
/// `addresses` accumulates its protocol (IPv4/IPv6) records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRecord {
    pub name: String,
    pub flags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<MacAddr6>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<LinkStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<AddressEntry>>,
}

/// Per-interface traffic counters, as reported by the kernel alongside the
/// link-layer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub tx_packets: u64,
    pub tx_bytes: u64,
    pub rx_packets: u64,
    pub rx_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Ipv4,
    Ipv6,
    Unknown,
}

/// One protocol address assigned to an interface.
///
/// Fields the OS did not supply are `None`; an address of an unsupported
/// family yields an entry with every field absent and `family: Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressEntry {
    pub family: Family,
    pub address: Option<IpAddr>,
    pub netmask: Option<IpAddr>,
    pub broadcast_address: Option<IpAddr>,
    pub destination_address: Option<IpAddr>,
    pub prefix_length: Option<u8>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_json_shape() {
        let record = InterfaceRecord {
            name: "eth0".to_string(),
            flags: "UP,BROADCAST,RUNNING,MULTICAST".to_string(),
            mac: Some(MacAddr6::from([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff])),
            statistics: Some(LinkStats {
                tx_packets: 123,
                tx_bytes: 456,
                rx_packets: 789,
                rx_bytes: 1011,
            }),
            addresses: Some(vec![AddressEntry {
                family: Family::Ipv4,
                address: Some("192.168.1.10".parse().unwrap()),
                netmask: Some("255.255.255.0".parse().unwrap()),
                broadcast_address: Some("192.168.1.255".parse().unwrap()),
                destination_address: None,
                prefix_length: Some(24),
            }]),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "eth0",
                "flags": "UP,BROADCAST,RUNNING,MULTICAST",
                "mac": "aa:bb:cc:dd:ee:ff",
                "statistics": {
                    "txPackets": 123, "txBytes": 456,
                    "rxPackets": 789, "rxBytes": 1011,
                },
                "addresses": [
                    {
                        "family": "ipv4",
                        "address": "192.168.1.10",
                        "netmask": "255.255.255.0",
                        "broadcastAddress": "192.168.1.255",
                        "destinationAddress": null,
                        "prefixLength": 24,
                    }
                ],
            })
        );
    }

    #[test]
    fn test_link_only_record_omits_addresses() {
        let record = InterfaceRecord {
            name: "dummy0".to_string(),
            flags: String::new(),
            mac: None,
            statistics: None,
            addresses: None,
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"name": "dummy0", "flags": ""})
        );
    }
}
