//! # Condition Flag Tests

use armsim_core::core::arch::{Flag, Flags};

#[test]
fn test_flags_default_clear() {
    let flags = Flags::default();
    for flag in Flag::ALL {
        assert!(!flags.get(flag));
    }
}

#[test]
fn test_flag_order_and_names() {
    let names: Vec<String> = Flag::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["Z", "N", "C", "V"]);
    assert!(Flag::Z < Flag::N && Flag::N < Flag::C && Flag::C < Flag::V);
}

#[test]
fn test_flag_set_returns_previous() {
    let mut flags = Flags::default();
    assert!(!flags.set(Flag::C, true));
    assert!(flags.set(Flag::C, true));
    assert!(flags.get(Flag::C));
    assert!(!flags.get(Flag::Z));
}

#[test]
fn test_flags_serialize_as_booleans() {
    let mut flags = Flags::default();
    let _ = flags.set(Flag::N, true);
    let json = serde_json::to_value(flags).unwrap();
    assert_eq!(json["n"], true);
    assert_eq!(json["z"], false);
}
