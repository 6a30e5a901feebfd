//! Opcode abstractions, functionality and constants.
use std::{convert::TryFrom, fmt};

use crate::error::OpcodeError;

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bytes
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bytes
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bytes
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bytes
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bytes
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bytes
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a single byte
const BYTE_SIZE: u16 = 0x8;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// this is an opcode extractor that will return the
    /// opcode number form any opcode
    /// - `T` is the opcode type
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    fn nnn(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a opcode subtype
    fn xyn(&self) -> (usize, usize, usize);

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// this is an opcode extractor that will return the
    /// opcode number form any opcode
    /// - `T` is the opcode type
    ///
    /// # Example
    /// ```rust
    /// # use c8::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1000);
    /// ```
    fn t(&self) -> usize {
        (self & OPCODE_MASK_F000) as usize
    }

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `T` is the opcode type
    /// - `NNN` is an address
    ///
    /// # Example
    /// ```rust
    /// # use c8::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> usize {
        (self & OPCODE_MASK_0FFF) as usize
    }

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `NN` is a constant
    ///
    /// # Example
    /// ```rust
    /// # use c8::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        let x = self.x();
        let nn = (self & OPCODE_MASK_00FF) as u8;
        (x, nn)
    }

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a opcode subtype
    /// ```rust
    /// # use c8::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, usize) {
        let (x, y) = self.xy();
        let n = (self & OPCODE_MASK_000F) as usize;
        (x, y, n)
    }

    /// this is an opcode extractor for the opcode type `TXYT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// - `Y` is a register index
    /// ```rust
    /// # use c8::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xy(), (0xE, 0xD));
    /// ```
    fn xy(&self) -> (usize, usize) {
        let x = self.x();
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        const NIBBLE: u16 = BYTE_SIZE / 2;
        let y = ((self & MASK) >> NIBBLE) as usize;
        (x, y)
    }

    /// this is an opcode extractor for the opcode type `TXTT`
    /// - `T` is the opcode type
    /// - `X` is a register index
    /// # Example
    /// ```rust
    /// # use c8::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.x(), 0xE);
    /// ```
    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> BYTE_SIZE) as usize
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
/// Represents how the program counter moves on after an
/// instruction ran.
///
/// The counter is moved past the instruction word before execution,
/// so most instructions need no additional movement.
pub enum ProgramCounterStep {
    /// Will not change the program counter any further
    None,
    /// Will move the program counter over one more instruction
    Skip,
    /// Will simply move the program counter to the given location,
    /// the location gets wrapped into the addressable range.
    Jump(usize),
    /// Will move the program counter back onto the instruction that
    /// just ran, so that it runs again on the next step.
    Stall,
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use c8::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::None, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::None
        }
    }
}

/// A fully decoded instruction word.
///
/// Each variant is a single entry of the opcode table, so that the
/// execution step is one exhaustive `match` and every operation can
/// be tested on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// - `00E0` - Display - `disp_clear()` - Clears the screen.
    Clear,
    /// - `00EE` - Flow - `return;` - Returns from a subroutine.
    Return,
    /// - `1NNN` - Flow - `goto NNN;` - Jumps to address `NNN`.
    Jump { nnn: usize },
    /// - `2NNN` - Flow - `*(0xNNN)()` - Calls subroutine at `NNN`.
    Call { nnn: usize },
    /// - `3XNN` - Cond - `if(Vx==NN)` - Skips the next instruction if `VX` equals `NN`.
    SkipEq { x: usize, nn: u8 },
    /// - `4XNN` - Cond - `if(Vx!=NN)` - Skips the next instruction if `VX` doesn't equal `NN`.
    SkipNeq { x: usize, nn: u8 },
    /// - `5XY0` - Cond - `if(Vx==Vy)` - Skips the next instruction if `VX` equals `VY`.
    SkipRegEq { x: usize, y: usize },
    /// - `6XNN` - Const - `Vx = NN` - Sets `VX` to `NN`.
    Set { x: usize, nn: u8 },
    /// - `7XNN` - Const - `Vx += NN` - Adds `NN` to `VX`. (Carry flag is not changed)
    Add { x: usize, nn: u8 },
    /// - `8XY0` - Assign - `Vx=Vy` - Sets `VX` to the value of `VY`.
    Copy { x: usize, y: usize },
    /// - `8XY1` - BitOp - `Vx=Vx|Vy` - Sets `VX` to `VX` or `VY`.
    Or { x: usize, y: usize },
    /// - `8XY2` - BitOp - `Vx=Vx&Vy` - Sets `VX` to `VX` and `VY`.
    And { x: usize, y: usize },
    /// - `8XY3` - BitOp - `Vx=Vx^Vy` - Sets `VX` to `VX` xor `VY`.
    Xor { x: usize, y: usize },
    /// - `8XY4` - Math - `Vx += Vy` - Adds `VY` to `VX`. `VF` is set to `1` when
    /// there's a carry, and to `0` when there isn't.
    AddReg { x: usize, y: usize },
    /// - `8XY5` - Math - `Vx -= Vy` - `VY` is subtracted from `VX`. `VF` is set to `0`
    /// when there's a borrow, and `1` when there isn't.
    Sub { x: usize, y: usize },
    /// - `8XY6` - BitOp - `Vx>>=1` - Stores the least significant bit of the source
    /// in `VF` and then shifts the source to the right by `1` into `VX`.
    ShiftRight { x: usize, y: usize },
    /// - `8XY7` - Math - `Vx=Vy-Vx` - Sets `VX` to `VY` minus `VX`. `VF` is set to `0`
    /// when there's a borrow, and `1` when there isn't.
    SubFrom { x: usize, y: usize },
    /// - `8XYE` - BitOp - `Vx<<=1` - Stores the most significant bit of the source
    /// in `VF` and then shifts the source to the left by `1` into `VX`.
    ShiftLeft { x: usize, y: usize },
    /// - `9XY0` - Cond - `if(Vx!=Vy)` - Skips the next instruction if `VX` doesn't equal `VY`.
    SkipRegNeq { x: usize, y: usize },
    /// - `ANNN` - MEM - `I = NNN` - Sets `I` to the address `NNN`.
    SetIndex { nnn: usize },
    /// - `BNNN` - Flow - `PC=V0+NNN` - Jumps to the address `NNN` plus `V0`.
    JumpOffset { x: usize, nnn: usize },
    /// - `CXNN` - Rand - `Vx=rand()&NN` - Sets `VX` to the result of a bitwise and
    /// operation on a random number and `NN`.
    Random { x: usize, nn: u8 },
    /// - `DXYN` - Disp - `draw(Vx,Vy,N)` - Draws a sprite at coordinate `(VX, VY)`
    /// that has a width of `8` pixels and a height of `N` pixels. `VF` is set to `1`
    /// if any screen pixels are flipped from set to unset.
    Draw { x: usize, y: usize, n: usize },
    /// - `EX9E` - KeyOp - `if(key()==Vx)` - Skips the next instruction if the key
    /// stored in `VX` is pressed.
    SkipKeyPressed { x: usize },
    /// - `EXA1` - KeyOp - `if(key()!=Vx)` - Skips the next instruction if the key
    /// stored in `VX` isn't pressed.
    SkipKeyNotPressed { x: usize },
    /// - `FX07` - Timer - `Vx = get_delay()` - Sets `VX` to the value of the delay timer.
    GetDelayTimer { x: usize },
    /// - `FX0A` - KeyOp - `Vx = get_key()` - A key press is awaited, and then stored
    /// in `VX`. The instruction reruns every step until a key is down.
    AwaitKeyPress { x: usize },
    /// - `FX15` - Timer - `delay_timer(Vx)` - Sets the delay timer to `VX`.
    SetDelayTimer { x: usize },
    /// - `FX18` - Sound - `sound_timer(Vx)` - Sets the sound timer to `VX`.
    SetSoundTimer { x: usize },
    /// - `FX1E` - MEM - `I += Vx` - Adds `VX` to `I`. `VF` is not affected.
    AddToIndex { x: usize },
    /// - `FX29` - MEM - `I=sprite_addr[Vx]` - Sets `I` to the location of the sprite
    /// for the character in `VX`.
    SetIndexToSprite { x: usize },
    /// - `FX33` - BCD - Stores the binary-coded decimal representation of `VX` at the
    /// addresses `I`, `I + 1` and `I + 2`.
    StoreBcd { x: usize },
    /// - `FX55` - MEM - `reg_dump(Vx,&I)` - Stores `V0` to `VX` (including `VX`) in
    /// memory starting at address `I`.
    StoreRegisters { x: usize },
    /// - `FX65` - MEM - `reg_load(Vx,&I)` - Fills `V0` to `VX` (including `VX`) with
    /// values from memory starting at address `I`.
    FillRegisters { x: usize },
}

#[inline]
fn err<T>(value: Opcode) -> Result<T, OpcodeError> {
    Err(OpcodeError::InvalidOpcode(value))
}

impl TryFrom<Opcode> for Instruction {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        // Shifting t here so that match can use a lookup table instead of an 'if else' chain
        const SHIFT: usize = 4 * 3;
        let res = match value.t() >> SHIFT {
            0x0 => match value {
                0x00E0 => Instruction::Clear,
                0x00EE => Instruction::Return,
                // 0NNN machine code routines predate interpreters and
                // are treated as decode failures
                _ => return err(value),
            },
            0x1 => Instruction::Jump { nnn: value.nnn() },
            0x2 => Instruction::Call { nnn: value.nnn() },
            0x3 => {
                let (x, nn) = value.xnn();
                Instruction::SkipEq { x, nn }
            }
            0x4 => {
                let (x, nn) = value.xnn();
                Instruction::SkipNeq { x, nn }
            }
            0x5 => match value.xyn() {
                (x, y, 0x0) => Instruction::SkipRegEq { x, y },
                _ => return err(value),
            },
            0x6 => {
                let (x, nn) = value.xnn();
                Instruction::Set { x, nn }
            }
            0x7 => {
                let (x, nn) = value.xnn();
                Instruction::Add { x, nn }
            }
            0x8 => {
                let (x, y, n) = value.xyn();
                match n {
                    0x0 => Instruction::Copy { x, y },
                    0x1 => Instruction::Or { x, y },
                    0x2 => Instruction::And { x, y },
                    0x3 => Instruction::Xor { x, y },
                    0x4 => Instruction::AddReg { x, y },
                    0x5 => Instruction::Sub { x, y },
                    0x6 => Instruction::ShiftRight { x, y },
                    0x7 => Instruction::SubFrom { x, y },
                    0xE => Instruction::ShiftLeft { x, y },
                    _ => return err(value),
                }
            }
            0x9 => match value.xyn() {
                (x, y, 0x0) => Instruction::SkipRegNeq { x, y },
                _ => return err(value),
            },
            0xA => Instruction::SetIndex { nnn: value.nnn() },
            0xB => Instruction::JumpOffset {
                x: value.x(),
                nnn: value.nnn(),
            },
            0xC => {
                let (x, nn) = value.xnn();
                Instruction::Random { x, nn }
            }
            0xD => {
                let (x, y, n) = value.xyn();
                Instruction::Draw { x, y, n }
            }
            0xE => {
                let (x, nn) = value.xnn();
                match nn {
                    0x9E => Instruction::SkipKeyPressed { x },
                    0xA1 => Instruction::SkipKeyNotPressed { x },
                    _ => return err(value),
                }
            }
            0xF => {
                let (x, nn) = value.xnn();
                match nn {
                    0x07 => Instruction::GetDelayTimer { x },
                    0x0A => Instruction::AwaitKeyPress { x },
                    0x15 => Instruction::SetDelayTimer { x },
                    0x18 => Instruction::SetSoundTimer { x },
                    0x1E => Instruction::AddToIndex { x },
                    0x29 => Instruction::SetIndexToSprite { x },
                    0x33 => Instruction::StoreBcd { x },
                    0x55 => Instruction::StoreRegisters { x },
                    0x65 => Instruction::FillRegisters { x },
                    _ => return err(value),
                }
            }
            _ => return err(value),
        };
        Ok(res)
    }
}

impl fmt::Display for Instruction {
    /// Writes the conventional assembler mnemonic of the instruction,
    /// mainly used by the trace logging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Clear => write!(f, "CLS"),
            Instruction::Return => write!(f, "RET"),
            Instruction::Jump { nnn } => write!(f, "JP {:#05X}", nnn),
            Instruction::Call { nnn } => write!(f, "CALL {:#05X}", nnn),
            Instruction::SkipEq { x, nn } => write!(f, "SE V{:X}, {:#04X}", x, nn),
            Instruction::SkipNeq { x, nn } => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            Instruction::SkipRegEq { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Instruction::Set { x, nn } => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Instruction::Add { x, nn } => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Instruction::Copy { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Instruction::Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            Instruction::And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Instruction::Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            Instruction::AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Instruction::Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            Instruction::ShiftRight { x, .. } => write!(f, "SHR V{:X}", x),
            Instruction::SubFrom { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Instruction::ShiftLeft { x, .. } => write!(f, "SHL V{:X}", x),
            Instruction::SkipRegNeq { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            Instruction::SetIndex { nnn } => write!(f, "LD I, {:#05X}", nnn),
            Instruction::JumpOffset { nnn, .. } => write!(f, "JP V0, {:#05X}", nnn),
            Instruction::Random { x, nn } => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Instruction::Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {:X}", x, y, n),
            Instruction::SkipKeyPressed { x } => write!(f, "SKP V{:X}", x),
            Instruction::SkipKeyNotPressed { x } => write!(f, "SKNP V{:X}", x),
            Instruction::GetDelayTimer { x } => write!(f, "LD V{:X}, DT", x),
            Instruction::AwaitKeyPress { x } => write!(f, "LD V{:X}, K", x),
            Instruction::SetDelayTimer { x } => write!(f, "LD DT, V{:X}", x),
            Instruction::SetSoundTimer { x } => write!(f, "LD ST, V{:X}", x),
            Instruction::AddToIndex { x } => write!(f, "ADD I, V{:X}", x),
            Instruction::SetIndexToSprite { x } => write!(f, "LD F, V{:X}", x),
            Instruction::StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            Instruction::StoreRegisters { x } => write!(f, "LD [I], V{:X}", x),
            Instruction::FillRegisters { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryInto;

    use super::*;

    #[test]
    fn test_tryfrom_opcode_simple() {
        let value = 0x00E0;
        let res = Ok(Instruction::Clear);
        let conv = value.try_into();
        assert_eq!(conv, res);
    }

    #[test]
    fn test_tryfrom_opcode_simple_fail() {
        let value: Opcode = 0x00E1;
        let conv: Result<Instruction, _> = value.try_into();
        assert!(conv.is_err());
    }

    #[test]
    fn test_tryfrom_opcode_multiple() {
        let tests = [
            // Zero
            (0x00E0, Ok(Instruction::Clear)),
            (0x00EE, Ok(Instruction::Return)),
            (0x00E1, Err("")),
            (0x0123, Err("")),
            // One
            (0x1919, Ok(Instruction::Jump { nnn: 0x919 })),
            // Two
            (0x2222, Ok(Instruction::Call { nnn: 0x222 })),
            // Three
            (0x3123, Ok(Instruction::SkipEq { x: 0x1, nn: 0x23 })),
            // Four
            (0x4123, Ok(Instruction::SkipNeq { x: 0x1, nn: 0x23 })),
            // Five
            (0x5120, Ok(Instruction::SkipRegEq { x: 0x1, y: 0x2 })),
            (0x5121, Err("")),
            // Six
            (0x6123, Ok(Instruction::Set { x: 0x1, nn: 0x23 })),
            // Seven
            (0x7123, Ok(Instruction::Add { x: 0x1, nn: 0x23 })),
            // Eight
            (0x8120, Ok(Instruction::Copy { x: 0x1, y: 0x2 })),
            (0x8121, Ok(Instruction::Or { x: 0x1, y: 0x2 })),
            (0x8122, Ok(Instruction::And { x: 0x1, y: 0x2 })),
            (0x8123, Ok(Instruction::Xor { x: 0x1, y: 0x2 })),
            (0x8124, Ok(Instruction::AddReg { x: 0x1, y: 0x2 })),
            (0x8125, Ok(Instruction::Sub { x: 0x1, y: 0x2 })),
            (0x8126, Ok(Instruction::ShiftRight { x: 0x1, y: 0x2 })),
            (0x8127, Ok(Instruction::SubFrom { x: 0x1, y: 0x2 })),
            (0x812E, Ok(Instruction::ShiftLeft { x: 0x1, y: 0x2 })),
            (0x8128, Err("")),
            // Nine
            (0x9120, Ok(Instruction::SkipRegNeq { x: 0x1, y: 0x2 })),
            (0x9121, Err("")),
            // A
            (0xA222, Ok(Instruction::SetIndex { nnn: 0x222 })),
            // B
            (0xB222, Ok(Instruction::JumpOffset { x: 0x2, nnn: 0x222 })),
            // C
            (0xC123, Ok(Instruction::Random { x: 0x1, nn: 0x23 })),
            // D
            (
                0xD123,
                Ok(Instruction::Draw {
                    x: 0x1,
                    y: 0x2,
                    n: 0x3,
                }),
            ),
            // E
            (0xE19E, Ok(Instruction::SkipKeyPressed { x: 0x1 })),
            (0xE1A1, Ok(Instruction::SkipKeyNotPressed { x: 0x1 })),
            (0xE111, Err("")),
            // F
            (0xF007, Ok(Instruction::GetDelayTimer { x: 0x0 })),
            (0xF00A, Ok(Instruction::AwaitKeyPress { x: 0x0 })),
            (0xF015, Ok(Instruction::SetDelayTimer { x: 0x0 })),
            (0xF018, Ok(Instruction::SetSoundTimer { x: 0x0 })),
            (0xF01E, Ok(Instruction::AddToIndex { x: 0x0 })),
            (0xF029, Ok(Instruction::SetIndexToSprite { x: 0x0 })),
            (0xF033, Ok(Instruction::StoreBcd { x: 0x0 })),
            (0xF055, Ok(Instruction::StoreRegisters { x: 0x0 })),
            (0xF065, Ok(Instruction::FillRegisters { x: 0x0 })),
            (0xF0AA, Err("")),
        ];
        for (value, res) in tests {
            let conv: Result<Instruction, _> = value.try_into();
            assert_eq!(conv, res.map_err(|_| OpcodeError::InvalidOpcode(value)));
        }
    }

    #[test]
    fn test_mnemonic_format() {
        let tests = [
            (0x00E0, "CLS"),
            (0x1EDA, "JP 0xEDA"),
            (0x2222, "CALL 0x222"),
            (0x6A02, "LD VA, 0x02"),
            (0x7A05, "ADD VA, 0x05"),
            (0x8126, "SHR V1"),
            (0x8AB7, "SUBN VA, VB"),
            (0xB220, "JP V0, 0x220"),
            (0xD125, "DRW V1, V2, 5"),
            (0xEA9E, "SKP VA"),
            (0xF10A, "LD V1, K"),
            (0xF133, "LD B, V1"),
            (0xF155, "LD [I], V1"),
            (0xF165, "LD V1, [I]"),
        ];

        for (value, expected) in tests {
            let instruction: Instruction = value.try_into().unwrap();
            assert_eq!(expected, format!("{}", instruction));
        }
    }
}
