use crate::{definitions::rom, error::RomError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a single rom with it's information
pub struct Rom {
    /// The rom name
    name: String,
    /// The raw content data of the rom
    /// stored as a u8 slice on the heap
    data: Box<[u8]>,
}

impl Rom {
    /// Will generate a new rom based of the given data.
    ///
    /// The data has to fit into the program region of the chipset
    /// memory, oversized data is refused before any state is touched.
    pub fn new(name: &str, data: &[u8]) -> Result<Self, RomError> {
        if data.len() > rom::MAX_SIZE {
            return Err(RomError::TooLarge {
                size: data.len(),
                max: rom::MAX_SIZE,
            });
        }

        Ok(Rom {
            name: name.to_string(),
            data: data.into(),
        })
    }

    /// Will return a slice of the internal data
    pub fn get_data(&self) -> &[u8] {
        &self.data
    }

    /// Will return the name of the rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::rom;

    #[test]
    fn test_rom_keeps_name_and_data() {
        let data = [0x00, 0xE0, 0x12, 0x00];
        let rom = Rom::new("LOOP", &data).unwrap();

        assert_eq!("LOOP", rom.get_name());
        assert_eq!(&data, rom.get_data());
    }

    #[test]
    fn test_rom_accepts_the_full_program_region() {
        let data = vec![0x55; rom::MAX_SIZE];
        assert!(Rom::new("FULL", &data).is_ok());
    }

    #[test]
    fn test_oversized_rom_is_refused() {
        let data = vec![0x55; rom::MAX_SIZE + 1];
        let res = Rom::new("TOOBIG", &data);

        assert_eq!(
            Err(RomError::TooLarge {
                size: rom::MAX_SIZE + 1,
                max: rom::MAX_SIZE,
            }),
            res
        );
    }
}
