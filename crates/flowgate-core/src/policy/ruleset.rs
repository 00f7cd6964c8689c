//! Rule-set container pairing ingress and egress rule sequences.

use serde::{Deserialize, Serialize};

use super::rules::{EgressRule, IngressRule};

/// A transport policy rule set: ordered ingress and egress rule sequences.
///
/// Either sequence may be unset; unset is distinct from empty, both in the
/// wire form (an unset field is omitted entirely) and in equality (an unset
/// side never equals an empty one). Sequence order is preserved faithfully
/// and equality is order-sensitive.
///
/// This is a plain value type with no interior mutability: the fields are
/// public, so reads are live views (mutating a sequence in place is visible
/// to every later read of the same instance, no defensive copies are made),
/// and concurrent sharing is the caller's problem to synchronize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransportRuleSet {
    /// Rules for inbound traffic, in stored order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress: Option<Vec<IngressRule>>,
    /// Rules for outbound traffic, in stored order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub egress: Option<Vec<EgressRule>>,
}

impl TransportRuleSet {
    /// Fully unset rule set (both sequences absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable constructor: set the ingress sequence.
    pub fn with_ingress(mut self, rules: Vec<IngressRule>) -> Self {
        self.ingress = Some(rules);
        self
    }

    /// Chainable constructor: set the egress sequence.
    pub fn with_egress(mut self, rules: Vec<EgressRule>) -> Self {
        self.egress = Some(rules);
        self
    }

    /// Replace the ingress sequence wholesale (`None` clears back to unset).
    /// No validation is performed.
    pub fn set_ingress(&mut self, rules: Option<Vec<IngressRule>>) -> &mut Self {
        self.ingress = rules;
        self
    }

    /// Replace the egress sequence wholesale (`None` clears back to unset).
    /// No validation is performed.
    pub fn set_egress(&mut self, rules: Option<Vec<EgressRule>>) -> &mut Self {
        self.egress = rules;
        self
    }

    /// Read-only view of the ingress rules; unset reads as empty.
    ///
    /// The stored absence/empty distinction is not disturbed: this is a
    /// convenience for iteration only.
    pub fn ingress_rules(&self) -> &[IngressRule] {
        self.ingress.as_deref().unwrap_or(&[])
    }

    /// Read-only view of the egress rules; unset reads as empty.
    pub fn egress_rules(&self) -> &[EgressRule] {
        self.egress.as_deref().unwrap_or(&[])
    }
}
