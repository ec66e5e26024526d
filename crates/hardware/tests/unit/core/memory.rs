//! # Memory Tests
//!
//! Little-endian word access, bounds checks, and inspection views.

use armsim_core::common::{AccessType, MemoryError};
use armsim_core::core::memory::{Memory, MemoryRow};
use rstest::rstest;

#[test]
fn test_memory_starts_zeroed() {
    let mem = Memory::new(64);
    assert_eq!(mem.len(), 64);
    assert!(!mem.is_empty());
    assert!(mem.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_word_is_little_endian() {
    let mut mem = Memory::new(16);
    mem.write_u32(4, 0x1122_3344).unwrap();
    assert_eq!(mem.view(4, 4), [0x44, 0x33, 0x22, 0x11]);
    assert_eq!(mem.read_u32(4).unwrap(), 0x1122_3344);
    assert_eq!(mem.read_u8(4), Some(0x44));
}

#[test]
fn test_last_word_fits() {
    let mut mem = Memory::new(16);
    mem.write_u32(12, 7).unwrap();
    assert_eq!(mem.read_u32(12).unwrap(), 7);
}

#[rstest]
#[case(13)]
#[case(16)]
#[case(u64::MAX)]
fn test_word_past_end_is_rejected_without_side_effects(#[case] addr: u64) {
    let mut mem = Memory::new(16);
    let before = mem.clone();
    let err = mem.write_u32(addr, 0xFFFF_FFFF).unwrap_err();
    assert!(matches!(
        err,
        MemoryError::OutOfBounds { len: 4, size: 16, access: AccessType::Write, .. }
    ));
    assert_eq!(mem, before);
    assert_eq!(mem.read_u32(addr).unwrap_err().access(), AccessType::Read);
}

#[test]
fn test_clear_zeroes_every_byte() {
    let mut mem = Memory::new(8);
    mem.write_u32(0, u32::MAX).unwrap();
    mem.clear();
    assert_eq!(mem, Memory::new(8));
}

#[test]
fn test_view_is_clamped() {
    let mem = Memory::new(8);
    assert_eq!(mem.view(6, 10).len(), 2);
    assert!(mem.view(100, 4).is_empty());
    assert_eq!(mem.read_u8(8), None);
}

#[test]
fn test_rows_split_into_sixteen_byte_chunks() {
    let mut mem = Memory::new(40);
    mem.write_u32(16, 0xAABB_CCDD).unwrap();
    let rows = mem.rows(0, 40);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].address, 16);
    assert_eq!(rows[1].bytes[..4], [0xDD, 0xCC, 0xBB, 0xAA]);
    assert_eq!(
        rows[2],
        MemoryRow {
            address: 32,
            bytes: vec![0; 8]
        }
    );
}

#[test]
fn test_rows_start_mid_memory() {
    let mem = Memory::new(64);
    let rows = mem.rows(8, 20);
    assert_eq!(rows.iter().map(|r| r.address).collect::<Vec<_>>(), [8, 24]);
    assert_eq!(rows[1].bytes.len(), 4);
}
