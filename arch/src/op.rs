use crate::{mode::AddrMode, reg::Reg};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Op {
    NOP,
    #[strum(to_string = "hlt", serialize = "halt")]
    HLT,
    OUT,
    IN,
    RCF,
    SCF,

    LD,
    ST,
    ADD,
    ADC,
    SUB,
    SBC,
    CMP,
    AND,
    OR,
    EOR,

    SRA,
    SLA,
    SRL,
    SLL,
    RRA,
    RLA,
    RRL,
    RLL,

    BA,
    BNZ,
    BZP,
    BP,
    BNI,
    BNC,
    BGE,
    BGT,
    BVF,
    BZ,
    BN,
    BZN,
    BNO,
    BC,
    BLT,
    BLE,
}

/// Operand layout of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    /// No operand
    Implied,
    /// `op A`
    RegOnly,
    /// `op d`, operand B restricted to an immediate
    Branch,
    /// `op A, B`
    Alu,
    /// `op B, A`, operand B restricted to memory targets
    Store,
}

/// Encoding descriptor of a mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desc {
    pub base: u8,
    pub shape: Shape,
}

impl Op {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(op) => Ok(op),
            Err(_) => Err(format!("Undefined Op: {s}")),
        }
    }

    pub fn desc(&self) -> Desc {
        use Op::*;
        use Shape::*;
        let (base, shape) = match self {
            NOP => (0x00, Implied),
            HLT => (0x0f, Implied),
            OUT => (0x10, Implied),
            IN => (0x1f, Implied),
            RCF => (0x20, Implied),
            SCF => (0x2f, Implied),

            LD => (0x60, Alu),
            ST => (0x70, Store),
            ADD => (0xb0, Alu),
            ADC => (0x90, Alu),
            SUB => (0xa0, Alu),
            SBC => (0x80, Alu),
            CMP => (0xf0, Alu),
            AND => (0xe0, Alu),
            OR => (0xd0, Alu),
            EOR => (0xc0, Alu),

            SRA => (0x40, RegOnly),
            SLA => (0x41, RegOnly),
            SRL => (0x42, RegOnly),
            SLL => (0x43, RegOnly),
            RRA => (0x44, RegOnly),
            RLA => (0x45, RegOnly),
            RRL => (0x46, RegOnly),
            RLL => (0x47, RegOnly),

            BA => (0x2e, Branch),
            BNZ => (0x2f, Branch),
            BZP => (0x30, Branch),
            BP => (0x31, Branch),
            BNI => (0x32, Branch),
            BNC => (0x33, Branch),
            BGE => (0x34, Branch),
            BGT => (0x35, Branch),
            BVF => (0x36, Branch),
            BZ => (0x37, Branch),
            BN => (0x38, Branch),
            BZN => (0x39, Branch),
            BNO => (0x3a, Branch),
            BC => (0x3b, Branch),
            BLT => (0x3c, Branch),
            BLE => (0x3d, Branch),
        };
        Desc { base, shape }
    }
}

impl Desc {
    pub fn has_a(&self) -> bool {
        matches!(self.shape, Shape::RegOnly | Shape::Alu | Shape::Store)
    }

    pub fn has_b(&self) -> bool {
        matches!(self.shape, Shape::Branch | Shape::Alu | Shape::Store)
    }

    /// Operand B is written before operand A in source.
    pub fn swapped(&self) -> bool {
        self.shape == Shape::Store
    }

    /// Whether operand B may take the given form.
    pub fn accepts(&self, mode: AddrMode) -> bool {
        match self.shape {
            Shape::Implied | Shape::RegOnly => false,
            Shape::Alu => true,
            Shape::Branch => mode == AddrMode::Imm,
            Shape::Store => !matches!(mode, AddrMode::Acc | AddrMode::Ix | AddrMode::Imm),
        }
    }

    /// Opcode byte: base + 8 * A + offset of B.
    pub fn encode(&self, a: Option<Reg>, b: Option<AddrMode>) -> u8 {
        let a = a.map_or(0, |reg| 8 * reg.id());
        let b = b.map_or(0, AddrMode::offset);
        self.base + a + b
    }
}
