//! # Decoder Properties
//!
//! Randomized checks that decoding never panics, that every valid register and
//! immediate survives decoding, and that disassembly decodes back to itself.

use armsim_core::isa::decode::decode;
use armsim_core::isa::instruction::{Operand, Operands};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decode_never_panics(line in "\\PC{0,40}") {
        let _ = decode(&line);
    }

    #[test]
    fn test_mov_immediate_truncates_to_32_bits(value in any::<i32>()) {
        let inst = decode(&format!("MOV R1, #{value}")).unwrap();
        prop_assert_eq!(
            *inst.operands(),
            Operands::Move { rd: 1, src: Operand::Immediate(value as u32) }
        );
    }

    #[test]
    fn test_data_registers_round_trip(rd in 0usize..16, rn in 0usize..16, rm in 0usize..16) {
        let inst = decode(&format!("orr r{rd}, r{rn}, r{rm}")).unwrap();
        prop_assert_eq!(*inst.operands(), Operands::Data { rd, rn, src: Operand::Register(rm) });
    }

    #[test]
    fn test_memory_offset_round_trips(rd in 0usize..16, rn in 0usize..16, offset in any::<i32>()) {
        let inst = decode(&format!("LDR R{rd}, [R{rn}, #{offset}]")).unwrap();
        prop_assert_eq!(*inst.operands(), Operands::Memory { rd, rn, offset });
    }

    #[test]
    fn test_disassembly_decodes_to_same_operands(rd in 0usize..16, rn in 0usize..16, imm in any::<u32>()) {
        let inst = decode(&format!("SUBS R{rd}, R{rn}, #{imm}")).unwrap();
        let again = decode(&inst.to_string()).unwrap();
        prop_assert_eq!(again.operands(), inst.operands());
        prop_assert_eq!(again.op(), inst.op());
    }
}
