use std::net::IpAddr;

/// Transports that count toward connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Wired,
    WiFi,
    Cellular,
}

const VIRTUAL_PREFIXES: &[&str] = &[
    "docker", "veth", "br-", "virbr", "vmnet", "vboxnet", "utun", "tun", "tap", "awdl", "llw",
    "bridge", "gif", "stf", "anpi", "ap", "tailscale", "wg", "zt",
];

/// Name fragments of virtual adapters that otherwise look like hardware,
/// e.g. "Hyper-V Virtual Ethernet Adapter".
const VIRTUAL_MARKERS: &[&str] = &["virtual", "pseudo", "tunnel", "vpn"];

/// `lo`, `lo0`, `lo1`, ... and Windows' "Loopback Pseudo-Interface".
fn is_loopback_name(lower: &str) -> bool {
    lower.starts_with("loopback")
        || lower
            .strip_prefix("lo")
            .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
}

/// Classify an interface by name. `None` for loopback, virtual and
/// unrecognized interfaces.
pub fn classify_interface(name: &str) -> Option<Transport> {
    let lower = name.to_ascii_lowercase();
    if lower.is_empty() || is_loopback_name(&lower) {
        return None;
    }
    if VIRTUAL_PREFIXES.iter().any(|p| lower.starts_with(p))
        || VIRTUAL_MARKERS.iter().any(|m| lower.contains(m))
    {
        return None;
    }

    if lower.starts_with("wl") || lower.contains("wi-fi") || lower.contains("wireless") {
        Some(Transport::WiFi)
    } else if lower.starts_with("wwan")
        || lower.starts_with("rmnet")
        || lower.starts_with("pdp_ip")
        || lower.starts_with("ccmni")
        || lower.contains("cellular")
        || lower.contains("mobile broadband")
    {
        Some(Transport::Cellular)
    } else if lower.starts_with("en")
        || lower.starts_with("eth")
        || lower.contains("ethernet")
        || lower.contains("local area connection")
    {
        Some(Transport::Wired)
    } else {
        None
    }
}

/// Not loopback, link-local, unspecified or broadcast.
pub fn is_routable(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => {
            !(v4.is_loopback() || v4.is_link_local() || v4.is_unspecified() || v4.is_broadcast())
        }
        IpAddr::V6(v6) => {
            let link_local = (v6.segments()[0] & 0xffc0) == 0xfe80;
            !(v6.is_loopback() || v6.is_unspecified() || link_local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn classifies_common_names() {
        assert_eq!(classify_interface("en0"), Some(Transport::Wired));
        assert_eq!(classify_interface("eth0"), Some(Transport::Wired));
        assert_eq!(classify_interface("enp3s0"), Some(Transport::Wired));
        assert_eq!(classify_interface("wlp2s0"), Some(Transport::WiFi));
        assert_eq!(classify_interface("Wi-Fi"), Some(Transport::WiFi));
        assert_eq!(classify_interface("wwan0"), Some(Transport::Cellular));
        assert_eq!(classify_interface("pdp_ip0"), Some(Transport::Cellular));
        assert_eq!(classify_interface("Ethernet 2"), Some(Transport::Wired));
    }

    #[test]
    fn rejects_loopback_and_virtual() {
        for name in ["lo", "lo0", "docker0", "br-1a2b", "virbr0", "utun3", "vboxnet0", ""] {
            assert_eq!(classify_interface(name), None, "{name}");
        }
    }

    #[test]
    fn virtual_adapters_named_like_hardware_are_rejected() {
        for name in [
            "Hyper-V Virtual Ethernet Adapter",
            "vEthernet (Default Switch)",
            "Loopback Pseudo-Interface 1",
            "tailscale0",
            "wg0",
            "zt3jnwghuq",
        ] {
            assert_eq!(classify_interface(name), None, "{name}");
        }
    }

    #[test]
    fn lo_prefix_alone_is_not_loopback() {
        assert_eq!(
            classify_interface("Local Area Connection"),
            Some(Transport::Wired)
        );
        assert_eq!(classify_interface("lo1"), None);
    }

    #[test]
    fn unrecognized_interfaces_do_not_count() {
        assert_eq!(classify_interface("ppp0"), None);
        assert_eq!(classify_interface("dummy0"), None);
    }

    #[test]
    fn routable_addresses() {
        assert!(is_routable(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))));
        assert!(is_routable(IpAddr::V6("2001:db8::1".parse::<Ipv6Addr>().unwrap())));
        assert!(!is_routable(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert!(!is_routable(IpAddr::V4(Ipv4Addr::UNSPECIFIED)));
        assert!(!is_routable(IpAddr::V4(Ipv4Addr::new(169, 254, 0, 1))));
        assert!(!is_routable(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(!is_routable(IpAddr::V6("fe80::abcd".parse::<Ipv6Addr>().unwrap())));
    }
}
