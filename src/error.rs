use thiserror::Error;

use crate::opcode::Opcode;

/// The errors a single emulation step can surface.
///
/// Only the stack conditions are fatal, a failed decode leaves the
/// machine in a usable state.
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum ProcessError {
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("The chipset halted on '{cause}', a reset is required.")]
    Halted { cause: StackError },
}

impl ProcessError {
    /// True for the errors that leave the chipset halted.
    pub fn is_fatal(&self) -> bool {
        match self {
            ProcessError::Opcode(_) => false,
            ProcessError::Stack(_) | ProcessError::Halted { .. } => true,
        }
    }
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum RomError {
    #[error("The rom size of {size} bytes does not fit the {max} bytes of program memory.")]
    TooLarge { size: usize, max: usize },
}
