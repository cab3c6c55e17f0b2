use crate::error::RegisterError;
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    F,
    H,
    L,
}

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Register16 {
    AF,
    BC,
    DE,
    HL,
    SP,
    PC,
}

impl Register {
    pub const ALL: [Register; 8] = [
        Register::A,
        Register::B,
        Register::C,
        Register::D,
        Register::E,
        Register::F,
        Register::H,
        Register::L,
    ];

    // 3-bit r8 field of LD r, r' / INC r / ALU / CB opcodes.
    pub fn from_r8_bits(data: u8) -> Result<Register, RegisterError> {
        match data {
            0b000 => Ok(Register::B),
            0b001 => Ok(Register::C),
            0b010 => Ok(Register::D),
            0b011 => Ok(Register::E),
            0b100 => Ok(Register::H),
            0b101 => Ok(Register::L),
            0b110 => Err(RegisterError::MemoryOperand { data }),
            0b111 => Ok(Register::A),
            _ => Err(RegisterError::UnknownRegisterBits { data }),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::F => "F",
            Register::H => "H",
            Register::L => "L",
        }
    }
}

impl Register16 {
    pub const ALL: [Register16; 6] = [
        Register16::AF,
        Register16::BC,
        Register16::DE,
        Register16::HL,
        Register16::SP,
        Register16::PC,
    ];

    pub fn from_r16_bits(data: u8) -> Result<Register16, RegisterError> {
        match data {
            0b00 => Ok(Register16::BC),
            0b01 => Ok(Register16::DE),
            0b10 => Ok(Register16::HL),
            0b11 => Ok(Register16::SP),
            _ => Err(RegisterError::UnknownRegisterBits { data }),
        }
    }

    // PUSH/POP encoding: 11 selects AF instead of SP.
    pub fn from_r16_stack_bits(data: u8) -> Result<Register16, RegisterError> {
        match data {
            0b11 => Ok(Register16::AF),
            _ => Register16::from_r16_bits(data),
        }
    }

    pub fn halves(&self) -> Option<(Register, Register)> {
        match self {
            Register16::AF => Some((Register::A, Register::F)),
            Register16::BC => Some((Register::B, Register::C)),
            Register16::DE => Some((Register::D, Register::E)),
            Register16::HL => Some((Register::H, Register::L)),
            Register16::SP | Register16::PC => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Register16::AF => "AF",
            Register16::BC => "BC",
            Register16::DE => "DE",
            Register16::HL => "HL",
            Register16::SP => "SP",
            Register16::PC => "PC",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Register16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Register {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Register::ALL
            .into_iter()
            .find(|register| register.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegisterError::UnknownRegisterName { name: s.to_string() })
    }
}

impl FromStr for Register16 {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Register16::ALL
            .into_iter()
            .find(|register| register.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegisterError::UnknownRegisterName { name: s.to_string() })
    }
}
