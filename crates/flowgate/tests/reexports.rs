//! Facade smoke test: the core model is reachable through `flowgate::core`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use flowgate::core::policy::TransportRuleSet;
use flowgate::core::wire;

#[test]
fn facade_reaches_core() {
    let rs = wire::decode("{}").unwrap();
    assert_eq!(rs, TransportRuleSet::new());
}
