//! # Machine State Tests
//!
//! Register masking, change tracking, and reset.

use armsim_core::core::arch::Flag;
use armsim_core::core::state::{MachineState, StepChanges};
use proptest::prelude::*;

#[test]
fn test_default_state_is_zeroed() {
    let state = MachineState::default();
    assert_eq!(state.registers(), [0; 16]);
    assert_eq!(state.pc(), 0);
    assert_eq!(state.memory().len(), 65536);
    assert!(state.changes().is_empty());
}

#[test]
fn test_register_write_is_tracked() {
    let mut state = MachineState::new(16);
    state.set_register(3, 9);
    assert_eq!(state.register(3), 9);
    assert!(state.changed_registers().contains(&3));
}

#[test]
fn test_unchanged_register_write_is_not_tracked() {
    let mut state = MachineState::new(16);
    state.set_register(3, 0);
    state.set_register(4, 0x1_0000_0000);
    assert!(state.changed_registers().is_empty());
    assert_eq!(state.register(4), 0);
}

#[test]
fn test_flag_write_is_tracked_only_on_change() {
    let mut state = MachineState::new(16);
    state.set_flag(Flag::Z, false);
    state.set_flag(Flag::C, true);
    assert_eq!(state.changed_flags().iter().copied().collect::<Vec<_>>(), [Flag::C]);
    assert!(state.flag(Flag::C));
}

#[test]
fn test_out_of_range_register_write_is_ignored() {
    let mut state = MachineState::new(16);
    state.set_register(16, 1);
    assert!(state.changes().is_empty());
    assert_eq!(state.register(16), 0);
}

#[test]
fn test_pc_and_memory_are_not_tracked() {
    let mut state = MachineState::new(16);
    state.set_pc(8);
    state.memory_mut().write_u32(0, 1).unwrap();
    assert_eq!(state.changes(), &StepChanges::default());
}

#[test]
fn test_clear_change_tracking() {
    let mut state = MachineState::new(16);
    state.set_register(1, 1);
    state.set_flag(Flag::V, true);
    state.clear_change_tracking();
    assert!(state.changes().is_empty());
    assert_eq!(state.register(1), 1);
}

#[test]
fn test_reset_zeroes_everything() {
    let mut state = MachineState::new(32);
    for i in 0..16 {
        state.set_register(i, u64::from(u32::MAX));
    }
    for flag in Flag::ALL {
        state.set_flag(flag, true);
    }
    state.set_pc(12);
    state.memory_mut().write_u32(28, u32::MAX).unwrap();

    state.reset();

    assert_eq!(state.registers(), [0; 16]);
    assert!(Flag::ALL.iter().all(|&f| !state.flag(f)));
    assert_eq!(state.pc(), 0);
    assert!(state.memory().as_bytes().iter().all(|&b| b == 0));
    assert!(state.changes().is_empty());
}

proptest! {
    #[test]
    fn test_set_register_reads_back_masked(idx in 0usize..16, value in any::<u64>()) {
        let mut state = MachineState::new(4);
        state.set_register(idx, value);
        prop_assert_eq!(u64::from(state.register(idx)), value & 0xFFFF_FFFF);
        prop_assert_eq!(state.changed_registers().contains(&idx), value & 0xFFFF_FFFF != 0);
    }
}
