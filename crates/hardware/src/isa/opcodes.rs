//! Opcode Table.
//!
//! Maps the 6-bit opcode field to one of sixty operations. Each entry provides
//! its assembler name, its readiness family (how many ticks after fetch the
//! effect may commit), and whether it manages the program counter itself.
//! Codes `0b000100..=0b000111` are reserved and decode to `None`.

/// Readiness family of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timing {
    /// Commits once 4 ticks have elapsed since fetch.
    Fixed,
    /// Commits 8 ticks after the bus window first aligned with the core.
    HubAccess,
    /// Commits once 6 ticks have elapsed and the wait condition holds.
    Wait,
}

/// Every defined operation, discriminant equal to its 6-bit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Opcode {
    RdByte = 0b000000,
    RdWord = 0b000001,
    RdLong = 0b000010,
    HubOp = 0b000011,
    Ror = 0b001000,
    Rol = 0b001001,
    Shr = 0b001010,
    Shl = 0b001011,
    Rcr = 0b001100,
    Rcl = 0b001101,
    Sar = 0b001110,
    Rev = 0b001111,
    Mins = 0b010000,
    Maxs = 0b010001,
    Min = 0b010010,
    Max = 0b010011,
    Movs = 0b010100,
    Movd = 0b010101,
    Movi = 0b010110,
    JmpRet = 0b010111,
    And = 0b011000,
    AndN = 0b011001,
    Or = 0b011010,
    Xor = 0b011011,
    MuxC = 0b011100,
    MuxNc = 0b011101,
    MuxZ = 0b011110,
    MuxNz = 0b011111,
    Add = 0b100000,
    Sub = 0b100001,
    AddAbs = 0b100010,
    SubAbs = 0b100011,
    SumC = 0b100100,
    SumNc = 0b100101,
    SumZ = 0b100110,
    SumNz = 0b100111,
    Mov = 0b101000,
    Neg = 0b101001,
    Abs = 0b101010,
    AbsNeg = 0b101011,
    NegC = 0b101100,
    NegNc = 0b101101,
    NegZ = 0b101110,
    NegNz = 0b101111,
    Cmps = 0b110000,
    Cmpsx = 0b110001,
    AddX = 0b110010,
    SubX = 0b110011,
    AddS = 0b110100,
    SubS = 0b110101,
    AddSx = 0b110110,
    SubSx = 0b110111,
    CmpSub = 0b111000,
    Djnz = 0b111001,
    Tjnz = 0b111010,
    Tjz = 0b111011,
    WaitPeq = 0b111100,
    WaitPne = 0b111101,
    WaitCnt = 0b111110,
    WaitVid = 0b111111,
}

/// Opcode lookup indexed by the 6-bit code; reserved codes are `None`.
const TABLE: [Option<Opcode>; 64] = {
    let mut table = [None; 64];
    let mut i = 0;
    while i < ALL_OPCODES.len() {
        let op = ALL_OPCODES[i];
        table[op as usize] = Some(op);
        i += 1;
    }
    table
};

/// All sixty defined opcodes in code order.
pub const ALL_OPCODES: [Opcode; 60] = [
    Opcode::RdByte,
    Opcode::RdWord,
    Opcode::RdLong,
    Opcode::HubOp,
    Opcode::Ror,
    Opcode::Rol,
    Opcode::Shr,
    Opcode::Shl,
    Opcode::Rcr,
    Opcode::Rcl,
    Opcode::Sar,
    Opcode::Rev,
    Opcode::Mins,
    Opcode::Maxs,
    Opcode::Min,
    Opcode::Max,
    Opcode::Movs,
    Opcode::Movd,
    Opcode::Movi,
    Opcode::JmpRet,
    Opcode::And,
    Opcode::AndN,
    Opcode::Or,
    Opcode::Xor,
    Opcode::MuxC,
    Opcode::MuxNc,
    Opcode::MuxZ,
    Opcode::MuxNz,
    Opcode::Add,
    Opcode::Sub,
    Opcode::AddAbs,
    Opcode::SubAbs,
    Opcode::SumC,
    Opcode::SumNc,
    Opcode::SumZ,
    Opcode::SumNz,
    Opcode::Mov,
    Opcode::Neg,
    Opcode::Abs,
    Opcode::AbsNeg,
    Opcode::NegC,
    Opcode::NegNc,
    Opcode::NegZ,
    Opcode::NegNz,
    Opcode::Cmps,
    Opcode::Cmpsx,
    Opcode::AddX,
    Opcode::SubX,
    Opcode::AddS,
    Opcode::SubS,
    Opcode::AddSx,
    Opcode::SubSx,
    Opcode::CmpSub,
    Opcode::Djnz,
    Opcode::Tjnz,
    Opcode::Tjz,
    Opcode::WaitPeq,
    Opcode::WaitPne,
    Opcode::WaitCnt,
    Opcode::WaitVid,
];

impl Opcode {
    /// Decodes a 6-bit opcode field; reserved codes return `None`.
    #[inline]
    pub const fn from_code(code: u32) -> Option<Self> {
        TABLE[(code & 0x3F) as usize]
    }

    /// The 6-bit encoding of this opcode.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Readiness family deciding when the effect may commit.
    pub const fn timing(self) -> Timing {
        match self {
            Self::RdByte | Self::RdWord | Self::RdLong | Self::HubOp => Timing::HubAccess,
            Self::WaitCnt | Self::WaitPeq | Self::WaitPne => Timing::Wait,
            _ => Timing::Fixed,
        }
    }

    /// Whether the effect sets the program counter instead of the uniform advance.
    pub const fn manages_pc(self) -> bool {
        matches!(self, Self::JmpRet | Self::Djnz | Self::Tjnz | Self::Tjz)
    }

    /// Assembler mnemonic from the static name table.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RdByte => "RDBYTE",
            Self::RdWord => "RDWORD",
            Self::RdLong => "RDLONG",
            Self::HubOp => "HUBOP",
            Self::Ror => "ROR",
            Self::Rol => "ROL",
            Self::Shr => "SHR",
            Self::Shl => "SHL",
            Self::Rcr => "RCR",
            Self::Rcl => "RCL",
            Self::Sar => "SAR",
            Self::Rev => "REV",
            Self::Mins => "MINS",
            Self::Maxs => "MAXS",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Movs => "MOVS",
            Self::Movd => "MOVD",
            Self::Movi => "MOVI",
            Self::JmpRet => "JMPRET",
            Self::And => "AND",
            Self::AndN => "ANDN",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::MuxC => "MUXC",
            Self::MuxNc => "MUXNC",
            Self::MuxZ => "MUXZ",
            Self::MuxNz => "MUXNZ",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::AddAbs => "ADDABS",
            Self::SubAbs => "SUBABS",
            Self::SumC => "SUMC",
            Self::SumNc => "SUMNC",
            Self::SumZ => "SUMZ",
            Self::SumNz => "SUMNZ",
            Self::Mov => "MOV",
            Self::Neg => "NEG",
            Self::Abs => "ABS",
            Self::AbsNeg => "ABSNEG",
            Self::NegC => "NEGC",
            Self::NegNc => "NEGNC",
            Self::NegZ => "NEGZ",
            Self::NegNz => "NEGNZ",
            Self::Cmps => "CMPS",
            Self::Cmpsx => "CMPSX",
            Self::AddX => "ADDX",
            Self::SubX => "SUBX",
            Self::AddS => "ADDS",
            Self::SubS => "SUBS",
            Self::AddSx => "ADDSX",
            Self::SubSx => "SUBSX",
            Self::CmpSub => "CMPSUB",
            Self::Djnz => "DJNZ",
            Self::Tjnz => "TJNZ",
            Self::Tjz => "TJZ",
            Self::WaitPeq => "WAITPEQ",
            Self::WaitPne => "WAITPNE",
            Self::WaitCnt => "WAITCNT",
            Self::WaitVid => "WAITVID",
        }
    }
}

/// Core and lock control sub-operations of `HUBOP`, selected by the source value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HubOp {
    /// Clock reconfiguration (clock is not modeled; no effect).
    ClkSet = 0,
    /// Returns the executing core's id.
    CoreId = 1,
    /// Starts or restarts a core.
    CoreInit = 2,
    /// Stops a core.
    CoreStop = 3,
    /// Allocates a free lock.
    LockNew = 4,
    /// Releases a lock.
    LockRet = 5,
    /// Sets a lock, returning its prior state.
    LockSet = 6,
    /// Clears a lock, returning its prior state.
    LockClr = 7,
}

impl HubOp {
    /// Selects the sub-operation named by the source value.
    ///
    /// Values above 7 name no sub-operation; `HUBOP` then has no effect.
    pub const fn from_source(source: u32) -> Option<Self> {
        let sub = match source {
            0 => Self::ClkSet,
            1 => Self::CoreId,
            2 => Self::CoreInit,
            3 => Self::CoreStop,
            4 => Self::LockNew,
            5 => Self::LockRet,
            6 => Self::LockSet,
            7 => Self::LockClr,
            _ => return None,
        };
        Some(sub)
    }

    /// Assembler mnemonic of the sub-operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClkSet => "CLKSET",
            Self::CoreId => "COGID",
            Self::CoreInit => "COGINIT",
            Self::CoreStop => "COGSTOP",
            Self::LockNew => "LOCKNEW",
            Self::LockRet => "LOCKRET",
            Self::LockSet => "LOCKSET",
            Self::LockClr => "LOCKCLR",
        }
    }
}
