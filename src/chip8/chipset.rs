use std::convert::TryFrom;

use {
    crate::{
        definitions::{cpu, display, keypad, memory},
        devices::Keypad,
        error::{ProcessError, StackError},
        opcode::{Instruction, Opcode, ProgramCounterStep},
        quirks::Quirks,
        resources::Rom,
        timer::Timer,
    },
    rand::RngCore,
    tinyvec::ArrayVec,
};

/// The pixel rows of the screen, indexed as `[row][column]`.
pub type FrameBuffer = [[bool; display::WIDTH]; display::HEIGHT];

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// the rom loaded into the chipset, kept around so that a reset
    /// can restore the program region
    pub(super) rom: Rom,
    /// the last fetched opcode, all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x1FF` - Chip 8 interpreter (contains font set in emu)
    /// - `0x050-0x0A0` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: [u8; memory::SIZE],
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions; thus, it should be avoided. In an addition operation, `VF` is the carry flag,
    /// while in subtraction, it is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: usize,
    /// The program counter is a CPU register in the computer processor which has the address of the
    /// next instruction to be executed from memory.
    pub(super) program_counter: usize,
    /// The stack is only used to store return addresses when subroutines are called. The original
    /// [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes for up to
    /// `12` levels of nesting; modern implementations usually have `16`.
    pub(super) stack: ArrayVec<[usize; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    /// Counts down at 60 hertz, until it reaches 0.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    /// Counts down at 60 hertz, until it reaches 0.
    pub(super) sound_timer: Timer,
    /// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
    /// `(64 x 32)`. This can easily be implemented using an array that holds the pixel state:
    pub(super) display: FrameBuffer,
    /// set by the clear and draw instructions, so that a render loop
    /// only repaints when something changed
    pub(super) redraw: bool,
    /// Input is done with a hex keypad that has 16 keys ranging `0-F`.
    pub(super) keypad: Keypad,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
    /// the configured behavior variants, captured at construction
    pub(super) quirks: Quirks,
    /// the cause of a fatal error, while set the chipset refuses to
    /// step until it is reset
    pub(super) halt: Option<StackError>,
}

impl ChipSet {
    /// will create a new chipset object with the plain COSMAC VIP
    /// behavior
    pub fn new(rom: Rom) -> Self {
        Self::with_quirks(rom, Quirks::default())
    }

    /// will create a new chipset object with the given quirk
    /// configuration
    pub fn with_quirks(rom: Rom, quirks: Quirks) -> Self {
        log::debug!(
            "loading rom '{}' with {} bytes",
            rom.get_name(),
            rom.get_data().len()
        );

        Self {
            opcode: 0,
            memory: Self::seeded_memory(&rom),
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: ArrayVec::new(),
            delay_timer: Timer::new(0),
            sound_timer: Timer::new(0),
            display: [[false; display::WIDTH]; display::HEIGHT],
            redraw: false,
            keypad: Keypad::new(),
            rng: Box::new(rand::rngs::OsRng),
            quirks,
            halt: None,
            rom,
        }
    }

    /// builds the initial ram image, the font set lives in the
    /// reserved region and the rom data starts at the program counter
    fn seeded_memory(rom: &Rom) -> [u8; memory::SIZE] {
        let mut ram = [0; memory::SIZE];

        ram[display::fontset::LOCATION
            ..(display::fontset::LOCATION + display::fontset::FONTSET.len())]
            .copy_from_slice(&display::fontset::FONTSET);

        ram[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + rom.get_data().len())]
            .copy_from_slice(rom.get_data());

        ram
    }

    /// Will restore the state right after construction, including the
    /// program region of memory, as the store instructions might have
    /// written over it. Clears a halt.
    pub fn reset(&mut self) {
        log::debug!("resetting chipset for rom '{}'", self.rom.get_name());

        self.opcode = 0;
        self.memory = Self::seeded_memory(&self.rom);
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer = Timer::new(0);
        self.sound_timer = Timer::new(0);
        self.display = [[false; display::WIDTH]; display::HEIGHT];
        self.redraw = true;
        self.keypad.reset();
        self.halt = None;
    }

    /// will get the next opcode from memory
    pub(super) fn fetch_opcode(&self) -> Opcode {
        let pointer = self.program_counter & memory::MASK;
        Opcode::from_be_bytes([
            self.memory[pointer],
            self.memory[(pointer + 1) & memory::MASK],
        ])
    }

    /// will advance the program by a single instruction
    pub fn step(&mut self) -> Result<(), ProcessError> {
        if let Some(cause) = self.halt {
            return Err(ProcessError::Halted { cause });
        }

        self.opcode = self.fetch_opcode();
        // the counter moves over the word before dispatch, jumps
        // overwrite it afterwards
        self.program_counter = (self.program_counter + memory::opcodes::SIZE) & memory::MASK;

        let instruction = match Instruction::try_from(self.opcode) {
            Ok(instruction) => instruction,
            Err(err) => {
                // the counter already moved past the word, the
                // chipset stays usable
                log::warn!("skipping over undecodable word {:#06X}", self.opcode);
                return Err(err.into());
            }
        };

        log::trace!("{:#06X} {}", self.opcode, instruction);

        match self.execute(instruction) {
            Ok(step) => {
                self.move_counter(step);
                Ok(())
            }
            Err(cause) => {
                log::error!("halting the chipset, {}", cause);
                self.halt = Some(cause);
                Err(cause.into())
            }
        }
    }

    /// will apply the step the ran instruction asked for, every
    /// target is wrapped back into the addressable range
    pub(super) fn move_counter(&mut self, step: ProgramCounterStep) {
        self.program_counter = match step {
            ProgramCounterStep::None => self.program_counter,
            ProgramCounterStep::Skip => (self.program_counter + memory::opcodes::SIZE) & memory::MASK,
            ProgramCounterStep::Jump(pointer) => pointer & memory::MASK,
            ProgramCounterStep::Stall => {
                self.program_counter.wrapping_sub(memory::opcodes::SIZE) & memory::MASK
            }
        }
    }

    /// Moves both timers down a single tick, the embedder is expected
    /// to call this at the 60 hertz timer cadence independently of the
    /// instruction rate.
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will push the return pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: usize) -> Result<(), StackError> {
        if self.stack.len() == cpu::stack::SIZE {
            Err(StackError::Full)
        } else {
            // push to stack
            self.stack.push(pointer);
            Ok(())
        }
    }

    /// Will pop the last return pointer from the stack
    pub(super) fn pop_stack(&mut self) -> Result<usize, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }

    /// Will write the keypad data into the internal keypad representation.
    pub fn set_keys(&mut self, keys: &[bool; keypad::SIZE]) {
        self.keypad.set_keys(keys);
    }

    /// Will set the state of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keypad.set_key(key, to)
    }

    /// Will get the current state of the keypad
    pub fn get_keys(&self) -> &[bool; keypad::SIZE] {
        self.keypad.get_keys()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// True while the sound timer is above zero, so while the
    /// embedder shall play the beep tone.
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer.get_value() > 0
    }

    /// True once a fatal error stopped the machine, only a
    /// [`reset`](Self::reset) clears this state.
    pub fn is_halted(&self) -> bool {
        self.halt.is_some()
    }

    /// Will return an immutable view of the current display state
    pub fn get_display(&self) -> &FrameBuffer {
        &self.display
    }

    /// Will copy the current display state out, for embedders that
    /// hand the frame to a render thread.
    pub fn display_snapshot(&self) -> FrameBuffer {
        self.display
    }

    /// Reports if the clear or draw instruction ran since the last
    /// call, clearing the flag on the way out.
    pub fn take_draw_flag(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    /// Will return the name of the loaded rom
    pub fn get_name(&self) -> &str {
        self.rom.get_name()
    }
}
