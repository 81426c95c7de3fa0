//! Condition Codes.
//!
//! Every instruction carries a 4-bit condition evaluated against the executing
//! core's Z and C flags before the effect may commit. The code doubles as a
//! truth table: bit `2*C + Z` of the code is the predicate's value.

/// The sixteen execution conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Never execute.
    Never = 0b0000,
    /// Execute if Z clear and C clear.
    NzAndNc = 0b0001,
    /// Execute if Z set and C clear.
    ZAndNc = 0b0010,
    /// Execute if C clear.
    Nc = 0b0011,
    /// Execute if Z clear and C set.
    NzAndC = 0b0100,
    /// Execute if Z clear.
    Nz = 0b0101,
    /// Execute if Z differs from C.
    ZNeC = 0b0110,
    /// Execute if Z clear or C clear.
    NzOrNc = 0b0111,
    /// Execute if Z set and C set.
    ZAndC = 0b1000,
    /// Execute if Z equals C.
    ZEqC = 0b1001,
    /// Execute if Z set.
    Z = 0b1010,
    /// Execute if Z set or C clear.
    ZOrNc = 0b1011,
    /// Execute if C set.
    C = 0b1100,
    /// Execute if Z clear or C set.
    NzOrC = 0b1101,
    /// Execute if Z set or C set.
    ZOrC = 0b1110,
    /// Always execute.
    #[default]
    Always = 0b1111,
}

/// All conditions indexed by their 4-bit code.
pub const ALL_CONDITIONS: [Condition; 16] = [
    Condition::Never,
    Condition::NzAndNc,
    Condition::ZAndNc,
    Condition::Nc,
    Condition::NzAndC,
    Condition::Nz,
    Condition::ZNeC,
    Condition::NzOrNc,
    Condition::ZAndC,
    Condition::ZEqC,
    Condition::Z,
    Condition::ZOrNc,
    Condition::C,
    Condition::NzOrC,
    Condition::ZOrC,
    Condition::Always,
];

impl Condition {
    /// Decodes a 4-bit condition field; only the low four bits are used.
    #[inline]
    pub const fn from_code(code: u32) -> Self {
        ALL_CONDITIONS[(code & 0xF) as usize]
    }

    /// The 4-bit encoding of this condition.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Evaluates the predicate against the Z and C flags.
    pub const fn test(self, z: bool, c: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Z => z,
            Self::Nz => !z,
            Self::C => c,
            Self::Nc => !c,
            Self::ZAndC => z && c,
            Self::ZOrC => z || c,
            Self::ZEqC => z == c,
            Self::ZNeC => z != c,
            Self::NzAndNc => !z && !c,
            Self::NzOrNc => !z || !c,
            Self::ZAndNc => z && !c,
            Self::ZOrNc => z || !c,
            Self::NzAndC => !z && c,
            Self::NzOrC => !z || c,
        }
    }

    /// Assembler prefix for this condition (e.g. `"IF_NZ"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Always => "IF_ALWAYS",
            Self::Never => "IF_NEVER",
            Self::Z => "IF_Z",
            Self::Nz => "IF_NZ",
            Self::C => "IF_C",
            Self::Nc => "IF_NC",
            Self::ZAndC => "IF_Z_AND_C",
            Self::ZOrC => "IF_Z_OR_C",
            Self::ZEqC => "IF_Z_EQ_C",
            Self::ZNeC => "IF_Z_NE_C",
            Self::NzAndNc => "IF_NZ_AND_NC",
            Self::NzOrNc => "IF_NZ_OR_NC",
            Self::ZAndNc => "IF_Z_AND_NC",
            Self::ZOrNc => "IF_Z_OR_NC",
            Self::NzAndC => "IF_NZ_AND_C",
            Self::NzOrC => "IF_NZ_OR_C",
        }
    }
}
