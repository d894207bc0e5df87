//! Spoke network planning
//!
//! Parses the caller's spoke CIDR and derives the two delegated /24 subnet
//! ranges: the first /24 of the spoke for the private subnet and the second
//! for the public subnet. Spokes narrower than /16 are rejected: the
//! derivation uses only the first two octets, so a narrower spoke would
//! yield subnets outside its own address space.

use crate::error::ComposeError;
use std::fmt;

/// Parsed spoke CIDR block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpokeCidr {
    pub octets: [u8; 4],
    pub prefix: u8,
}

impl SpokeCidr {
    /// Parse an `<IPv4>/<prefix>` string
    pub fn parse(cidr: &str) -> Result<Self, ComposeError> {
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(ComposeError::InvalidArgument(format!(
                "spoke CIDR '{}' must be of the form <IPv4>/<prefix>",
                cidr
            )));
        }

        let components: Vec<&str> = parts[0].split('.').collect();
        if components.len() != 4 {
            return Err(ComposeError::InvalidArgument(format!(
                "spoke CIDR address '{}' must have four dot-separated octets",
                parts[0]
            )));
        }

        let mut octets = [0u8; 4];
        for (i, component) in components.iter().enumerate() {
            octets[i] = component.parse().map_err(|_| {
                ComposeError::InvalidArgument(format!(
                    "spoke CIDR octet '{}' is not a valid IPv4 octet",
                    component
                ))
            })?;
        }

        let prefix: u8 = parts[1].parse().map_err(|_| {
            ComposeError::InvalidArgument(format!(
                "spoke CIDR prefix '{}' is not a valid prefix length",
                parts[1]
            ))
        })?;
        if prefix > 32 {
            return Err(ComposeError::InvalidArgument(format!(
                "spoke CIDR prefix /{} exceeds /32",
                prefix
            )));
        }

        Ok(Self { octets, prefix })
    }
}

impl fmt::Display for SpokeCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}/{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3], self.prefix
        )
    }
}

/// Derived subnet layout for one spoke network
///
/// Invariant: both subnet CIDRs are disjoint /24s contained in the spoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkPlan {
    pub spoke_cidr: String,
    pub private_subnet_cidr: String,
    pub public_subnet_cidr: String,
}

impl NetworkPlan {
    /// Derive the subnet layout from a parsed spoke
    pub fn derive(spoke: &SpokeCidr) -> Result<Self, ComposeError> {
        if spoke.prefix > 16 {
            return Err(ComposeError::InvalidArgument(format!(
                "spoke CIDR {} is narrower than /16; the derived /24 subnets would fall outside it",
                spoke
            )));
        }

        Ok(Self {
            spoke_cidr: spoke.to_string(),
            private_subnet_cidr: format!("{}.{}.0.0/24", spoke.octets[0], spoke.octets[1]),
            public_subnet_cidr: format!("{}.{}.1.0/24", spoke.octets[0], spoke.octets[1]),
        })
    }

    /// Parse and derive in one step
    pub fn from_cidr(cidr: &str) -> Result<Self, ComposeError> {
        Self::derive(&SpokeCidr::parse(cidr)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_first_two_slash_24s_of_the_spoke() {
        let plan = NetworkPlan::from_cidr("10.1.0.0/16").unwrap();
        assert_eq!(plan.spoke_cidr, "10.1.0.0/16");
        assert_eq!(plan.private_subnet_cidr, "10.1.0.0/24");
        assert_eq!(plan.public_subnet_cidr, "10.1.1.0/24");
    }

    #[test]
    fn subnets_are_disjoint_and_inside_the_spoke() {
        for cidr in ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16", "10.42.7.9/16"] {
            let spoke = SpokeCidr::parse(cidr).unwrap();
            let plan = NetworkPlan::derive(&spoke).unwrap();

            let private = SpokeCidr::parse(&plan.private_subnet_cidr).unwrap();
            let public = SpokeCidr::parse(&plan.public_subnet_cidr).unwrap();

            assert_eq!(private.prefix, 24);
            assert_eq!(public.prefix, 24);
            // Disjoint: /24s with different third octets never overlap
            assert_ne!(private.octets[2], public.octets[2]);

            // Contained: both share the spoke's network bits
            let spoke_bits = u32::from_be_bytes(spoke.octets) >> (32 - spoke.prefix);
            for subnet in [private, public] {
                let subnet_bits = u32::from_be_bytes(subnet.octets) >> (32 - spoke.prefix);
                assert_eq!(subnet_bits, spoke_bits, "subnet escapes spoke {}", cidr);
            }
        }
    }

    #[test]
    fn rejects_cidr_without_prefix() {
        let err = NetworkPlan::from_cidr("10.1.0.0").unwrap_err();
        assert!(matches!(err, ComposeError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_malformed_cidrs() {
        for cidr in [
            "10.1.0.0/16/8",
            "10.1.0/16",
            "10.1.0.0.0/16",
            "300.1.0.0/16",
            "10.one.0.0/16",
            "10.1.0.0/33",
            "10.1.0.0/x",
            "",
        ] {
            assert!(
                matches!(
                    NetworkPlan::from_cidr(cidr),
                    Err(ComposeError::InvalidArgument(_))
                ),
                "expected {:?} to be rejected",
                cidr
            );
        }
    }

    #[test]
    fn rejects_spokes_narrower_than_slash_16() {
        let err = NetworkPlan::from_cidr("10.1.2.0/24").unwrap_err();
        assert!(err.to_string().contains("narrower than /16"));
    }
}
