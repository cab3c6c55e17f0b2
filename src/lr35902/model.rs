use crate::error::RegisterError;
use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum Model {
    Dmg0,
    #[default]
    Dmg,
    Mgb,
    Sgb,
    Sgb2,
    // CGB mode, not DMG compatibility mode.
    Cgb,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct BootState {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

const STACK_TOP: u16 = 0xFFFE;
const ENTRY_POINT: u16 = 0x0100;

impl Model {
    pub const ALL: [Model; 6] = [Model::Dmg0, Model::Dmg, Model::Mgb, Model::Sgb, Model::Sgb2, Model::Cgb];

    // Pan Docs, "Power Up Sequence". The DMG/MGB H and C flags depend on the
    // header checksum; the values here assume a non-zero checksum.
    pub fn boot_state(&self) -> BootState {
        let [a, f, b, c, d, e, h, l] = match self {
            Model::Dmg0 => [0x01, 0x00, 0xFF, 0x13, 0x00, 0xC1, 0x84, 0x03],
            Model::Dmg => [0x01, 0xB0, 0x00, 0x13, 0x00, 0xD8, 0x01, 0x4D],
            Model::Mgb => [0xFF, 0xB0, 0x00, 0x13, 0x00, 0xD8, 0x01, 0x4D],
            Model::Sgb => [0x01, 0x00, 0x00, 0x14, 0x00, 0x00, 0xC0, 0x60],
            Model::Sgb2 => [0xFF, 0x00, 0x00, 0x14, 0x00, 0x00, 0xC0, 0x60],
            Model::Cgb => [0x11, 0x80, 0x00, 0x00, 0xFF, 0x56, 0x00, 0x0D],
        };

        BootState {
            a,
            f,
            b,
            c,
            d,
            e,
            h,
            l,
            sp: STACK_TOP,
            pc: ENTRY_POINT,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Model::Dmg0 => "dmg0",
            Model::Dmg => "dmg",
            Model::Mgb => "mgb",
            Model::Sgb => "sgb",
            Model::Sgb2 => "sgb2",
            Model::Cgb => "cgb",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Model {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegisterError::UnknownModel { name: s.to_string() })
    }
}
