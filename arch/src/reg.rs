use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Reg {
    ACC,
    IX,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(reg) => Ok(reg),
            Err(_) => Err(format!("Unknown reg name: {s}")),
        }
    }

    pub fn id(self) -> u8 {
        self.into()
    }
}

#[test]
fn test() {
    assert_eq!(Reg::parse("acc"), Ok(Reg::ACC));
    assert_eq!(Reg::parse("IX"), Ok(Reg::IX));
    assert!(Reg::parse("hoge").is_err());
    assert_eq!(Reg::IX.id(), 1);
    assert_eq!(Reg::try_from(0u8).ok(), Some(Reg::ACC));
    assert!(Reg::try_from(2u8).is_err());
    assert_eq!(Reg::ACC.to_string(), "acc");
}
