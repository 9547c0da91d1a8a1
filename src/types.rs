/// Which host form a validated URL matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HostKind {
    /// Domain name with a top-level domain, e.g. `www.example.com`
    #[default]
    Domain,
    /// Public dotted-quad IPv4 address, e.g. `142.42.1.1`
    Ipv4,
    /// Bracketed public IPv6 address, e.g. `[2010:836B:4179::836B:4179]`
    Ipv6,
}

impl HostKind {
    /// Check if the host is an IP literal rather than a domain name
    pub fn is_ip(self) -> bool {
        self != Self::Domain
    }
}
