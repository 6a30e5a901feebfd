//! The pretty print implementation for the [`ChipSet`](super::ChipSet).
//! This implementation was split up into this file for smaller file sizes and higher
//! cohesion.

use super::ChipSet;
use crate::definitions::{cpu, display};
use once_cell::sync::Lazy;
use std::fmt;

/// The length of the pretty print data
/// as a single instruction is u16 the octa
/// size will show how often the block shall
/// be repeated has to be bigger then 0
const HEX_PRINT_STEP: usize = 8;

const END_OF_LINE: char = '\n';
const INDENT_FILLAMENT: char = '\t';
const INDENT_SIZE: usize = 2;

/// Will add an indent post processing
fn indent_helper(text: &mut String, indent: usize) {
    for _ in 0..indent {
        text.push(INDENT_FILLAMENT);
    }
}

macro_rules! intsize {
    () => {
        6
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! intformat {
    () => {
        // The formatted string will be 2 symbols for the prefix (0x)
        // and 4 for the rest long.
        concat!("{:#0", intsize!(), "X}")
    };
}

const INTSIZE: usize = intsize!();

static POINTER_LEN: Lazy<usize> = Lazy::new(|| {
    // create a string that is big enough
    let mut line = String::with_capacity(20);
    // If there was an error panicing here is correct,
    // as some essential component of printing went
    // wrongly.
    pointer_print::formatter(&mut line, 0, 0).unwrap();
    line.len()
});

static INTEGER_LEN: Lazy<usize> = Lazy::new(|| {
    let mut string = String::new();
    // SAFETY: if something went wrong here panicing is correct.
    integer_print::formatter(&mut string, 0u8).unwrap();
    string.len()
});

/// calculate a line lenght (This is a bit bigger then the actual line will be)
static LENLINE: Lazy<usize> =
    Lazy::new(|| INDENT_SIZE + HEX_PRINT_STEP * (*INTEGER_LEN + 1) + 1 + *POINTER_LEN);

/// Handles all the printing of the pointer values.
mod pointer_print {
    use std::fmt::Write;

    /// will formatt the pointers according to definition
    pub(super) fn formatter(
        line: &mut String,
        from: usize,
        to: usize,
    ) -> Result<(), std::fmt::Error> {
        write!(
            line,
            concat!(intformat!(), " - ", intformat!(), " :"),
            from, to
        )
    }
}

/// Handles all the opcode prints
mod opcode_print {
    use super::{integer_print, pointer_print, Lazy, HEX_PRINT_STEP};
    use crate::{definitions::memory, opcode::Opcode};
    use std::fmt::{self, Write};

    /// The internal length of the given data
    /// as the data is stored as u8 and an opcode
    /// is u16 long
    const POINTER_INCREMENT: usize = HEX_PRINT_STEP * memory::opcodes::SIZE;
    /// The values that are used when there are at lease two rows of zeros.
    const FILLER_BASE: &str = "...";

    /// Prepares the line that will be used, in the case that there is at least two lines of only zeros.
    static ZERO_FILLER: Lazy<String> = Lazy::new(|| {
        // preparing for the 0 block fillers
        let mut formatted = String::new();
        // SAFETY: If there is an error here panicing is correct
        integer_print::formatter(&mut formatted, 0u16).unwrap();
        match HEX_PRINT_STEP {
            1 => formatted,
            2 => format!("{} {}", formatted, formatted),
            _ => {
                let lenght = formatted.len() * (HEX_PRINT_STEP - 2) + (HEX_PRINT_STEP - 1)
                    - FILLER_BASE.len();
                let filler = " ".repeat(lenght / 2);

                format!(
                    "{}{}{}{}{}",
                    formatted.clone(),
                    filler.clone(),
                    FILLER_BASE,
                    filler,
                    formatted
                )
            }
        }
    });

    /// this struct will simulate a single row of opcodes (only in this context)
    struct Row {
        from: usize,
        to: usize,
        data: [Opcode; HEX_PRINT_STEP],
        only_null: bool,
    }

    /// using the `fmt::Display` for simple printing of the data later on
    impl fmt::Display for Row {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut res = String::with_capacity(*super::LENLINE);
            pointer_print::formatter(&mut res, self.from, self.to)?;
            res.push(' ');

            if !self.only_null {
                for entry in self.data.iter() {
                    integer_print::formatter(&mut res, *entry)?;
                    res.push(' ');
                }
                if let Some(index) = res.rfind(' ') {
                    res.truncate(index);
                }
            } else {
                res.push_str(&ZERO_FILLER)
            }
            write!(f, "{}", res)
        }
    }

    /// will pretty print the content of the raw memory
    /// this functions assumes the full data to be passed
    /// as the offset is calculated from the beginning of the
    /// memory block
    pub(super) fn printer(memory: &[u8], indent: usize) -> Result<String, fmt::Error> {
        let data_last_index = memory.len() - 1;
        let mut rows: Vec<Row> = Vec::with_capacity(memory.len() / HEX_PRINT_STEP);

        for from in (0..memory.len()).step_by(POINTER_INCREMENT) {
            // precalculate the end location
            let to = (from + POINTER_INCREMENT - 1).min(data_last_index);

            let mut data = [0; HEX_PRINT_STEP];
            let mut data_index = 0;
            let mut only_null = true;

            // loop over all the opcodes u8 pairs
            for index in (from..=to).step_by(memory::opcodes::SIZE) {
                data[data_index] = Opcode::from_be_bytes([memory[index], memory[index + 1]]);

                // check if opcode is above 0, if so toggle the is null flag
                if data[data_index] > 0 {
                    only_null = false;
                }
                data_index += 1;
            }

            // create the row that shall be used later on
            let mut row = Row {
                from,
                to,
                data,
                only_null,
            };

            if only_null {
                if let Some(last_row) = rows.last() {
                    if last_row.only_null {
                        row.from = last_row.from;
                        rows.pop();
                    }
                }
            }
            rows.push(row)
        }

        // create the end structure to be used for calculations
        let mut string = String::with_capacity((*super::LENLINE + 1) * rows.len());
        for row in rows {
            super::indent_helper(&mut string, indent);
            write!(string, "{}{}", row, super::END_OF_LINE)?;
        }
        if let Some(index) = string.rfind(super::END_OF_LINE) {
            string.truncate(index);
        }
        Ok(string)
    }
}

/// handles printting of any and all of intergers.
mod integer_print {
    use super::{pointer_print, HEX_PRINT_STEP};
    use num_traits::Unsigned;
    use std::fmt::{self, Write};

    /// will format all integer types
    pub(super) fn formatter<T>(line: &mut String, data: T) -> Result<(), fmt::Error>
    where
        T: fmt::Display + fmt::UpperHex + Unsigned + Copy,
    {
        write!(line, intformat!(), data)
    }

    /// will pretty print all the integer data given
    pub(super) fn printer<T>(data: &[T], indent: usize) -> Result<String, fmt::Error>
    where
        T: fmt::Display + fmt::UpperHex + Unsigned + Copy,
    {
        let result_size = *super::LENLINE * (data.len() / HEX_PRINT_STEP);

        let mut res = String::with_capacity(result_size);
        for i in (0..data.len()).step_by(HEX_PRINT_STEP) {
            let n = (i + HEX_PRINT_STEP - 1).min(data.len() - 1);

            super::indent_helper(&mut res, indent);
            // Copy into the string
            pointer_print::formatter(&mut res, i, n)?;
            res.push(' ');

            for entry in &data[i..=n] {
                write!(res, concat!(intformat!(), " "), *entry)?;
            }

            // remove unneded whitespace and replace it with a newline
            if let Some(index) = res.rfind(' ') {
                res.truncate(index);
            }
            res.push(super::END_OF_LINE);
        }

        // Remove unneded new line
        if let Some(index) = res.rfind(super::END_OF_LINE) {
            res.truncate(index);
        }

        Ok(res)
    }
}

/// Handles all the boolean data types.
mod bool_print {
    use super::{pointer_print, Lazy, END_OF_LINE, HEX_PRINT_STEP};
    use std::fmt;

    /// the prepared true string
    static TRUE: Lazy<String> = Lazy::new(|| formatter("true"));
    /// the prepared false string
    static FALSE: Lazy<String> = Lazy::new(|| formatter("false"));

    /// a function to keep the correct format length
    fn formatter(message: &str) -> String {
        let mut string = String::with_capacity(*super::INTEGER_LEN);
        string.push_str(message);
        // Fill up the string with information
        while string.len() < *super::INTEGER_LEN {
            string.push(' ');
        }
        string
    }

    /// will pretty print all the boolean data given
    /// the offset will be calculated automatically from
    /// the data block
    pub(super) fn printer(data: &[bool], indent: usize) -> Result<String, fmt::Error> {
        let result_size = *super::LENLINE * data.len() / HEX_PRINT_STEP;

        let mut res = String::with_capacity(result_size);

        let check_type = |val: bool| if val { &*TRUE } else { &*FALSE };

        for i in (0..data.len()).step_by(HEX_PRINT_STEP) {
            let n = (i + HEX_PRINT_STEP - 1).min(data.len() - 1);
            super::indent_helper(&mut res, indent);

            pointer_print::formatter(&mut res, i, n)?;
            res.push(' ');

            for value in &data[i..n] {
                res.push_str(check_type(*value));
                res.push(' ');
            }
            // Append the last missing entry
            res.push_str(check_type(data[n]).trim_end());
            res.push(END_OF_LINE);
        }
        // Remove unneeded new line
        if let Some(index) = res.rfind(END_OF_LINE) {
            res.truncate(index);
        }

        Ok(res)
    }
}

impl ChipSet {
    /// Renders the frame buffer as a block of text, one char for every
    /// pixel, `#` for a set one and `.` for a cleared one. Rows are
    /// separated by newlines.
    pub fn display_string(&self) -> String {
        let mut res = String::with_capacity(display::RESOLUTION + display::HEIGHT);
        for (index, row) in self.display.iter().enumerate() {
            if index > 0 {
                res.push(END_OF_LINE);
            }
            for pixel in row.iter() {
                res.push(if *pixel { '#' } else { '.' });
            }
        }
        res
    }
}

impl fmt::Display for ChipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // prepare the rom name
        let name = self.rom.get_name();
        let mut nam = String::with_capacity(INDENT_SIZE + name.len());
        indent_helper(&mut nam, INDENT_SIZE);
        nam.push_str(name);

        let mem = opcode_print::printer(&self.memory, INDENT_SIZE)?;
        let reg = integer_print::printer(&self.registers, INDENT_SIZE)?;

        // handle stack specially as it needes to be filled up if empty
        let mut stack = [0; cpu::stack::SIZE];
        stack[0..self.stack.len()].copy_from_slice(&self.stack);

        let sta = integer_print::printer(&stack, INDENT_SIZE)?;
        let key = bool_print::printer(self.keypad.get_keys(), INDENT_SIZE)?;

        let mut opc = String::with_capacity(INTSIZE + INDENT_SIZE);
        indent_helper(&mut opc, INDENT_SIZE);
        integer_print::formatter(&mut opc, self.opcode)?;

        let mut prc = String::with_capacity(INTSIZE + INDENT_SIZE);
        indent_helper(&mut prc, INDENT_SIZE);
        integer_print::formatter(&mut prc, self.program_counter)?;

        let mut idx = String::with_capacity(INTSIZE + INDENT_SIZE);
        indent_helper(&mut idx, INDENT_SIZE);
        integer_print::formatter(&mut idx, self.index_register)?;

        let mut dlt = String::with_capacity(INTSIZE + INDENT_SIZE);
        indent_helper(&mut dlt, INDENT_SIZE);
        integer_print::formatter(&mut dlt, self.delay_timer.get_value())?;

        let mut sot = String::with_capacity(INTSIZE + INDENT_SIZE);
        indent_helper(&mut sot, INDENT_SIZE);
        integer_print::formatter(&mut sot, self.sound_timer.get_value())?;

        write!(
            f,
            "Chipset {{\n\
                \tProgram Name :\n{}\n\
                \tOpcode :\n{}\n\
                \tProgram Counter :\n{}\n\
                \tIndex Register :\n{}\n\
                \tDelay Timer :\n{}\n\
                \tSound Timer :\n{}\n\
                \tMemory :\n{}\n\
                \tKeypad :\n{}\n\
                \tStack :\n{}\n\
                \tRegister :\n{}\n\
                }}",
            nam, opc, prc, idx, dlt, sot, mem, key, sta, reg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests;
    use crate::definitions::keypad;

    const OUTPUT_PRINT: &'static str = "\
        Chipset {\n\
            \tProgram Name :\n\
                \t\tDEMO\n\
            \tOpcode :\n\
                \t\t0x0000\n\
            \tProgram Counter :\n\
                \t\t0x0200\n\
            \tIndex Register :\n\
                \t\t0x0000\n\
            \tDelay Timer :\n\
                \t\t0x0000\n\
            \tSound Timer :\n\
                \t\t0x0000\n\
            \tMemory :\n\
                \t\t0x0000 - 0x004F : 0x0000                    ...                    0x0000\n\
                \t\t0x0050 - 0x005F : 0xF090 0x9090 0xF020 0x6020 0x2070 0xF010 0xF080 0xF0F0\n\
                \t\t0x0060 - 0x006F : 0x10F0 0x10F0 0x9090 0xF010 0x10F0 0x80F0 0x10F0 0xF080\n\
                \t\t0x0070 - 0x007F : 0xF090 0xF0F0 0x1020 0x4040 0xF090 0xF090 0xF0F0 0x90F0\n\
                \t\t0x0080 - 0x008F : 0x10F0 0xF090 0xF090 0x90E0 0x90E0 0x90E0 0xF080 0x8080\n\
                \t\t0x0090 - 0x009F : 0xF0E0 0x9090 0x90E0 0xF080 0xF080 0xF0F0 0x80F0 0x8080\n\
                \t\t0x00A0 - 0x01FF : 0x0000                    ...                    0x0000\n\
                \t\t0x0200 - 0x020F : 0x00E0 0xA21C 0x6000 0x6100 0xD014 0xE09E 0x120A 0x7001\n\
                \t\t0x0210 - 0x021F : 0x1200 0x0000 0x0000 0x0000 0x0000 0x0000 0xF090 0x90F0\n\
                \t\t0x0220 - 0x0FFF : 0x0000                    ...                    0x0000\n\
            \tKeypad :\n\
                \t\t0x0000 - 0x0007 : false  true   false  true   false  true   false  true\n\
                \t\t0x0008 - 0x000F : false  true   false  true   false  true   false  true\n\
            \tStack :\n\
                \t\t0x0000 - 0x0007 : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
                \t\t0x0008 - 0x000F : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
            \tRegister :\n\
                \t\t0x0000 - 0x0007 : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
                \t\t0x0008 - 0x000F : 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000 0x0000\n\
        }";

    #[test]
    /// tests if the pretty print output is as expected
    /// this test is mainly for coverage purposes, as
    /// the given module takes up a multitude of lines.
    fn test_full_print() {
        let mut chip = tests::get_default_chip();
        let mut keys = [false; keypad::SIZE];

        for (index, key) in keys.iter_mut().enumerate() {
            *key = index % 2 != 0;
        }

        chip.set_keys(&keys);

        // override the chip register as they are generated randomly
        chip.registers.fill(0);

        let actual_full = format!("{}", chip);
        let actual_split = actual_full.split('\n');
        let expected = OUTPUT_PRINT.split('\n');

        for (exp, act) in expected.zip(actual_split) {
            assert_eq!(exp, act);
        }
    }
}
