use crate::{
    definitions::{cpu, display, memory},
    error::StackError,
    opcode::{Instruction, ProgramCounterStep},
};

use super::ChipSet;

/// the width of a sprite row in pixels
const SPRITE_WIDTH: usize = 8;

impl ChipSet {
    /// Runs a single decoded instruction against the machine state and
    /// reports how the program counter shall move on.
    ///
    /// The flag register is always written after the primary result of
    /// an instruction, so that `VF` used as an operand still observes
    /// the documented flag semantics.
    pub(super) fn execute(
        &mut self,
        instruction: Instruction,
    ) -> Result<ProgramCounterStep, StackError> {
        let step = match instruction {
            Instruction::Clear => {
                for row in self.display.iter_mut() {
                    for pixel in row.iter_mut() {
                        *pixel = false;
                    }
                }
                self.redraw = true;
                ProgramCounterStep::None
            }
            Instruction::Return => {
                // return from subroutine => pop from stack
                let pointer = self.pop_stack()?;
                ProgramCounterStep::Jump(pointer)
            }
            Instruction::Jump { nnn } => ProgramCounterStep::Jump(nnn),
            Instruction::Call { nnn } => {
                // the counter already passed the call, so it holds the
                // return location
                self.push_stack(self.program_counter)?;
                ProgramCounterStep::Jump(nnn)
            }
            Instruction::SkipEq { x, nn } => ProgramCounterStep::cond(self.registers[x] == nn),
            Instruction::SkipNeq { x, nn } => ProgramCounterStep::cond(self.registers[x] != nn),
            Instruction::SkipRegEq { x, y } => {
                ProgramCounterStep::cond(self.registers[x] == self.registers[y])
            }
            Instruction::Set { x, nn } => {
                self.registers[x] = nn;
                ProgramCounterStep::None
            }
            Instruction::Add { x, nn } => {
                // let VX overflow, but ignore carry
                self.registers[x] = self.registers[x].wrapping_add(nn);
                ProgramCounterStep::None
            }
            Instruction::Copy { x, y } => {
                self.registers[x] = self.registers[y];
                ProgramCounterStep::None
            }
            Instruction::Or { x, y } => {
                self.registers[x] |= self.registers[y];
                ProgramCounterStep::None
            }
            Instruction::And { x, y } => {
                self.registers[x] &= self.registers[y];
                ProgramCounterStep::None
            }
            Instruction::Xor { x, y } => {
                self.registers[x] ^= self.registers[y];
                ProgramCounterStep::None
            }
            Instruction::AddReg { x, y } => {
                let left = self.registers[x] as u16;
                let right = self.registers[y] as u16;
                let res = left + right;
                let carry = res & 0x0100 == 0x0100;
                self.registers[x] = res as u8;
                self.registers[cpu::register::LAST] = carry as u8;
                ProgramCounterStep::None
            }
            Instruction::Sub { x, y } => {
                // the not borrow flag reads the operands before the
                // overwrite
                let flag = (self.registers[x] >= self.registers[y]) as u8;
                self.registers[x] = self.registers[x].wrapping_sub(self.registers[y]);
                self.registers[cpu::register::LAST] = flag;
                ProgramCounterStep::None
            }
            Instruction::ShiftRight { x, y } => {
                let source = if self.quirks.shift_reads_vy {
                    self.registers[y]
                } else {
                    self.registers[x]
                };
                self.registers[x] = source >> 1;
                self.registers[cpu::register::LAST] = source & 1;
                ProgramCounterStep::None
            }
            Instruction::SubFrom { x, y } => {
                let flag = (self.registers[y] >= self.registers[x]) as u8;
                self.registers[x] = self.registers[y].wrapping_sub(self.registers[x]);
                self.registers[cpu::register::LAST] = flag;
                ProgramCounterStep::None
            }
            Instruction::ShiftLeft { x, y } => {
                const SHIFT_SIGNIFICANT: u8 = 7;
                const AND_SIGNIFICANT: u8 = 1 << SHIFT_SIGNIFICANT;
                let source = if self.quirks.shift_reads_vy {
                    self.registers[y]
                } else {
                    self.registers[x]
                };
                self.registers[x] = source << 1;
                self.registers[cpu::register::LAST] =
                    (source & AND_SIGNIFICANT) >> SHIFT_SIGNIFICANT;
                ProgramCounterStep::None
            }
            Instruction::SkipRegNeq { x, y } => {
                ProgramCounterStep::cond(self.registers[x] != self.registers[y])
            }
            Instruction::SetIndex { nnn } => {
                self.index_register = nnn;
                ProgramCounterStep::None
            }
            Instruction::JumpOffset { x, nnn } => {
                let offset = if self.quirks.jump_reads_vx {
                    self.registers[x]
                } else {
                    self.registers[0]
                };
                ProgramCounterStep::Jump(nnn + offset as usize)
            }
            Instruction::Random { x, nn } => {
                // using a fill bytes call here, as the trait RngCore
                // does not support a random u8 directly
                let mut rand: [u8; 1] = [0];
                self.rng.fill_bytes(&mut rand);
                self.registers[x] = nn & rand[0];
                ProgramCounterStep::None
            }
            Instruction::Draw { x, y, n } => {
                self.draw_sprite(x, y, n);
                ProgramCounterStep::None
            }
            Instruction::SkipKeyPressed { x } => {
                let key = (self.registers[x] & 0xF) as usize;
                ProgramCounterStep::cond(self.keypad.is_pressed(key))
            }
            Instruction::SkipKeyNotPressed { x } => {
                let key = (self.registers[x] & 0xF) as usize;
                ProgramCounterStep::cond(!self.keypad.is_pressed(key))
            }
            Instruction::GetDelayTimer { x } => {
                self.registers[x] = self.delay_timer.get_value();
                ProgramCounterStep::None
            }
            Instruction::AwaitKeyPress { x } => {
                // reruns on every step until a key is down, the
                // counter freezes on this instruction meanwhile
                match self.keypad.first_pressed() {
                    Some(key) => {
                        self.registers[x] = key as u8;
                        ProgramCounterStep::None
                    }
                    None => ProgramCounterStep::Stall,
                }
            }
            Instruction::SetDelayTimer { x } => {
                self.delay_timer.set_value(self.registers[x]);
                ProgramCounterStep::None
            }
            Instruction::SetSoundTimer { x } => {
                self.sound_timer.set_value(self.registers[x]);
                ProgramCounterStep::None
            }
            Instruction::AddToIndex { x } => {
                let xi = self.registers[x] as usize;
                self.index_register = (self.index_register + xi) & memory::MASK;
                ProgramCounterStep::None
            }
            Instruction::SetIndexToSprite { x } => {
                let val = (self.registers[x] & 0xF) as usize;
                self.index_register =
                    display::fontset::LOCATION + display::fontset::CHAR_SIZE * val;
                ProgramCounterStep::None
            }
            Instruction::StoreBcd { x } => {
                let index = self.index_register;
                let val = self.registers[x];

                self.memory[index & memory::MASK] = val / 100; // 246u8 / 100 => 2
                self.memory[(index + 1) & memory::MASK] = val / 10 % 10; // 246u8 / 10 => 24 % 10 => 4
                self.memory[(index + 2) & memory::MASK] = val % 10; // 246u8 % 10 => 6
                ProgramCounterStep::None
            }
            Instruction::StoreRegisters { x } => {
                let index = self.index_register;
                for offset in 0..=x {
                    self.memory[(index + offset) & memory::MASK] = self.registers[offset];
                }
                if self.quirks.increment_index_on_copy {
                    self.index_register = (index + x + 1) & memory::MASK;
                }
                ProgramCounterStep::None
            }
            Instruction::FillRegisters { x } => {
                let index = self.index_register;
                for offset in 0..=x {
                    self.registers[offset] = self.memory[(index + offset) & memory::MASK];
                }
                if self.quirks.increment_index_on_copy {
                    self.index_register = (index + x + 1) & memory::MASK;
                }
                ProgramCounterStep::None
            }
        };

        Ok(step)
    }

    /// Blits the `n` rows of sprite data at the index register onto the
    /// screen, coordinates wrap around both screen edges and every
    /// sprite byte is read through the memory mask.
    fn draw_sprite(&mut self, x: usize, y: usize, n: usize) {
        let coorx = self.registers[x] as usize % display::WIDTH;
        let coory = self.registers[y] as usize % display::HEIGHT;
        let index = self.index_register;

        self.registers[cpu::register::LAST] = 0;

        for row in 0..n {
            let data = self.memory[(index + row) & memory::MASK];
            let y = (coory + row) % display::HEIGHT;

            for col in 0..SPRITE_WIDTH {
                let mask = 1 << (SPRITE_WIDTH - 1 - col);
                let cpixel = (data & mask) == mask;
                if !cpixel {
                    continue;
                }

                let x = (coorx + col) % display::WIDTH;
                let spixel = self.display[y][x];

                self.display[y][x] = !spixel;

                // a pixel toggling from set to unset counts as the
                // collision
                if spixel {
                    self.registers[cpu::register::LAST] = 1;
                }
            }
        }

        self.redraw = true;
    }
}
