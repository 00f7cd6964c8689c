//! Wire round-trip tests (absence preservation + forward compatibility).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use flowgate_core::policy::{IngressRule, PortRange, Protocol, TransportRuleSet};
use flowgate_core::wire;

fn sample() -> TransportRuleSet {
    TransportRuleSet::new().with_ingress(vec![IngressRule {
        identifier: "allow-api".into(),
        from: vec!["payments/api".into()],
        ports: vec![PortRange::range(8000, 8999)],
        protocol: Protocol::Tcp,
    }])
}

#[test]
fn absence_survives_roundtrip() {
    let rs = sample();
    let s = wire::encode(&rs).unwrap();

    // Unset egress must be omitted from the wire form, not emitted as [].
    assert!(!s.contains("egress"), "encoded: {s}");

    let back = wire::decode(&s).unwrap();
    assert_eq!(back, rs);
    assert!(back.egress.is_none());
}

#[test]
fn empty_sequence_survives_roundtrip() {
    let rs = sample().with_egress(vec![]);
    let s = wire::encode(&rs).unwrap();

    assert!(s.contains("\"egress\":[]"), "encoded: {s}");

    let back = wire::decode(&s).unwrap();
    assert_eq!(back, rs);
    assert_eq!(back.egress.as_deref(), Some(&[][..]));
}

#[test]
fn unknown_fields_decode_to_equal_ruleset() {
    let rs = sample();
    let plain = wire::encode(&rs).unwrap();

    // Splice an unrecognized field into the payload a newer producer might
    // emit; the decoded result must equal the plain one.
    let extended = format!("{{\"revision\":7,{}", &plain[1..]);
    let back = wire::decode(&extended).unwrap();
    assert_eq!(back, wire::decode(&plain).unwrap());
}

#[test]
fn fully_unset_encodes_to_empty_object() {
    let s = wire::encode(&TransportRuleSet::new()).unwrap();
    assert_eq!(s, "{}");
    assert_eq!(wire::decode(&s).unwrap(), TransportRuleSet::new());
}
