//! Global subscriber installation.
//!
//! Lives in its own test binary so no other test has installed a subscriber
//! first.

use membership_server::config::Config;
use membership_server::observability;

#[test]
fn test_init_installs_once() {
    let mut config = Config::default_for_test();
    config.observability.json = true;

    assert!(observability::init(&config.observability).is_ok());

    let second = observability::init(&config.observability);
    assert!(second.is_err());
}
