use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RegisterError {
    #[snafu(display("Unknown register bits: {:08b}", data))]
    UnknownRegisterBits { data: u8 },
    #[snafu(display("Register bits {:03b} select the (HL) memory operand, not a register", data))]
    MemoryOperand { data: u8 },
    #[snafu(display("Unknown register name: {}", name))]
    UnknownRegisterName { name: String },
    #[snafu(display("Unknown hardware model: {}", name))]
    UnknownModel { name: String },
    #[snafu(display("Failed to install logger"))]
    LoggerInit { source: log::SetLoggerError },
}
