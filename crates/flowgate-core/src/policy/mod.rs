//! Transport policy model (rule elements + rule-set container).
//!
//! This module hosts the policy value types:
//! - `rules`: individual ingress/egress rule records and their parts.
//! - `ruleset`: the two-sequence container that pairs them.
//!
//! All types are plain values with derived, order-sensitive equality and a
//! matching `Hash`. Nothing here validates rule contents; this layer only
//! carries them faithfully.

pub mod rules;
pub mod ruleset;

pub use rules::{EgressRule, IngressRule, PortRange, Protocol};
pub use ruleset::TransportRuleSet;
