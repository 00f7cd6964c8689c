//! Ingress/egress rule records.
//!
//! Rules are carried, not interpreted: selectors are opaque strings here
//! and port ranges are not checked for overlap or ordering. Sequence order
//! inside a rule is preserved and equality-relevant.

use serde::{Deserialize, Serialize};

/// Transport protocol a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// Port coverage: a single port, or an inclusive range when `end_port` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRange {
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_port: Option<u16>,
}

impl PortRange {
    /// Single-port coverage.
    pub fn single(port: u16) -> Self {
        Self {
            port,
            end_port: None,
        }
    }

    /// Inclusive range coverage.
    pub fn range(port: u16, end_port: u16) -> Self {
        Self {
            port,
            end_port: Some(end_port),
        }
    }
}

/// Rule governing inbound traffic.
///
/// `from` holds peer service selectors (e.g., `"payments/api"`); an empty
/// sequence means the rule names no peers, which this layer does not
/// interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngressRule {
    /// Stable identifier within its rule set.
    pub identifier: String,
    /// Peer service selectors traffic may arrive from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<String>,
    /// Ports the rule covers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortRange>,
    /// Transport protocol.
    pub protocol: Protocol,
}

/// Rule governing outbound traffic. Mirrors [`IngressRule`] with `to`
/// selectors for destinations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EgressRule {
    /// Stable identifier within its rule set.
    pub identifier: String,
    /// Peer service selectors traffic may go to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<String>,
    /// Ports the rule covers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortRange>,
    /// Transport protocol.
    pub protocol: Protocol,
}
