use crate::reg::Reg;
use serde::{Deserialize, Serialize};

/// Addressing form of operand B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddrMode {
    /// `acc`
    Acc,
    /// `ix`
    Ix,
    /// `d`
    Imm,
    /// `[d]`
    Abs,
    /// `(d)`
    AbsStore,
    /// `[ix+d]`
    Idx,
    /// `(ix+d)`
    IdxStore,
}

impl AddrMode {
    pub fn reg(reg: Reg) -> Self {
        match reg {
            Reg::ACC => AddrMode::Acc,
            Reg::IX => AddrMode::Ix,
        }
    }

    /// Value added to the opcode byte.
    pub fn offset(self) -> u8 {
        match self {
            AddrMode::Acc => 0,
            AddrMode::Ix => 1,
            AddrMode::Imm => 2,
            AddrMode::Abs => 4,
            AddrMode::AbsStore => 5,
            AddrMode::Idx => 6,
            AddrMode::IdxStore => 7,
        }
    }

    /// Whether the form is followed by a second instruction byte.
    pub fn has_byte(self) -> bool {
        !matches!(self, AddrMode::Acc | AddrMode::Ix)
    }
}

#[test]
fn test() {
    assert_eq!(AddrMode::reg(Reg::ACC).offset(), 0);
    assert_eq!(AddrMode::reg(Reg::IX).offset(), 1);
    assert_eq!(AddrMode::IdxStore.offset(), 7);
    assert!(!AddrMode::Ix.has_byte());
    assert!(AddrMode::Abs.has_byte());
}
