use libc::c_uint;

// Bit-name pairs in the kernel's enumeration order; the order is visible in
// the formatted flag string, so it must stay stable.
cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        static FLAG_NAMES: [(c_uint, &str); 19] = [
            (libc::IFF_UP as c_uint, "UP"),
            (libc::IFF_BROADCAST as c_uint, "BROADCAST"),
            (libc::IFF_DEBUG as c_uint, "DEBUG"),
            (libc::IFF_LOOPBACK as c_uint, "LOOPBACK"),
            (libc::IFF_POINTOPOINT as c_uint, "POINTOPOINT"),
            (libc::IFF_NOTRAILERS as c_uint, "NOTRAILERS"),
            (libc::IFF_RUNNING as c_uint, "RUNNING"),
            (libc::IFF_NOARP as c_uint, "NOARP"),
            (libc::IFF_PROMISC as c_uint, "PROMISC"),
            (libc::IFF_ALLMULTI as c_uint, "ALLMULTI"),
            (libc::IFF_MASTER as c_uint, "MASTER"),
            (libc::IFF_SLAVE as c_uint, "SLAVE"),
            (libc::IFF_MULTICAST as c_uint, "MULTICAST"),
            (libc::IFF_PORTSEL as c_uint, "PORTSEL"),
            (libc::IFF_AUTOMEDIA as c_uint, "AUTOMEDIA"),
            (libc::IFF_DYNAMIC as c_uint, "DYNAMIC"),
            (libc::IFF_LOWER_UP as c_uint, "LOWER_UP"),
            (libc::IFF_DORMANT as c_uint, "DORMANT"),
            (libc::IFF_ECHO as c_uint, "ECHO"),
        ];
    } else {
        static FLAG_NAMES: [(c_uint, &str); 10] = [
            (libc::IFF_UP as c_uint, "UP"),
            (libc::IFF_BROADCAST as c_uint, "BROADCAST"),
            (libc::IFF_DEBUG as c_uint, "DEBUG"),
            (libc::IFF_LOOPBACK as c_uint, "LOOPBACK"),
            (libc::IFF_POINTOPOINT as c_uint, "POINTOPOINT"),
            (libc::IFF_RUNNING as c_uint, "RUNNING"),
            (libc::IFF_NOARP as c_uint, "NOARP"),
            (libc::IFF_PROMISC as c_uint, "PROMISC"),
            (libc::IFF_ALLMULTI as c_uint, "ALLMULTI"),
            (libc::IFF_MULTICAST as c_uint, "MULTICAST"),
        ];
    }
}

/// Decodes an interface flag bitmask into a comma-joined list of flag names.
pub(crate) fn format_flags(bits: c_uint) -> String {
    let mut out = String::new();
    for (bit, name) in FLAG_NAMES {
        if bits & bit != 0 {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(name);
        }
    }
    out
}
