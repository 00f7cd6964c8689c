//! JSON wire codec for rule sets (lenient decode).
//!
//! Decoding ignores unknown fields at every nesting level so newer payload
//! producers can add fields without breaking older consumers. Absence is
//! preserved: an omitted `ingress`/`egress` decodes to unset, never to an
//! empty sequence, and unset fields are omitted again on encode.
//!
//! All paths are panic-free: malformed input is reported as
//! `PolicyError::Decode` instead of panicking.

use crate::error::{PolicyError, Result};
use crate::policy::TransportRuleSet;

/// Decode a rule set from a JSON string.
pub fn decode(s: &str) -> Result<TransportRuleSet> {
    let rs: TransportRuleSet =
        serde_json::from_str(s).map_err(|e| PolicyError::Decode(format!("invalid json: {e}")))?;
    tracing::debug!(
        ingress = rs.ingress_rules().len(),
        egress = rs.egress_rules().len(),
        "decoded transport rule set"
    );
    Ok(rs)
}

/// Decode a rule set from raw JSON bytes.
pub fn decode_slice(b: &[u8]) -> Result<TransportRuleSet> {
    let rs: TransportRuleSet =
        serde_json::from_slice(b).map_err(|e| PolicyError::Decode(format!("invalid json: {e}")))?;
    tracing::debug!(
        ingress = rs.ingress_rules().len(),
        egress = rs.egress_rules().len(),
        "decoded transport rule set"
    );
    Ok(rs)
}

/// Encode a rule set to its JSON wire form. Unset sequences are omitted.
pub fn encode(rs: &TransportRuleSet) -> Result<String> {
    serde_json::to_string(rs).map_err(|e| PolicyError::Encode(format!("serialize failed: {e}")))
}
