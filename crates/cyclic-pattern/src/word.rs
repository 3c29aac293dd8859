use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Register width a pattern is sized for.
///
/// The discriminant is the width in bytes, which is also the block size to
/// generate with when the captured value is a register of that width.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum WordSize {
    /// 32-bit targets
    #[default]
    #[strum(serialize = "dword")]
    Dword = 4,
    /// 64-bit targets
    #[strum(serialize = "qword")]
    Qword = 8,
}

impl WordSize {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Width in bytes
    pub fn bytes(&self) -> usize {
        *self as usize
    }

    pub fn block_size(&self) -> usize {
        self.bytes()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
