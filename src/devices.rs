use crate::definitions::keypad;

/// Represents the internal state of the hex keypad.
///
/// Input is done with a hex keypad that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; keypad::SIZE],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad::default()
    }

    /// Will release all of the keys.
    pub fn reset(&mut self) {
        self.keys = [false; keypad::SIZE];
    }

    /// Will set the state of the given key, leaving all the
    /// others untouched.
    pub fn set_key(&mut self, key: usize, to: bool) {
        debug_assert!(key < keypad::SIZE);
        self.keys[key & (keypad::SIZE - 1)] = to;
    }

    /// Will replace the whole keypad state in one go.
    pub fn set_keys(&mut self, keys: &[bool; keypad::SIZE]) {
        self.keys.copy_from_slice(keys);
    }

    /// Checks a single key.
    pub fn is_pressed(&self, key: usize) -> bool {
        debug_assert!(key < keypad::SIZE);
        self.keys[key & (keypad::SIZE - 1)]
    }

    /// Will return the lowest key currently held down, used to
    /// resolve a key wait deterministically when multiple keys
    /// are pressed at once.
    pub fn first_pressed(&self) -> Option<usize> {
        self.keys.iter().position(|pressed| *pressed)
    }

    pub fn get_keys(&self) -> &[bool; keypad::SIZE] {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_release_single_keys() {
        let mut keypad = Keypad::new();

        keypad.set_key(0x2, true);
        keypad.set_key(0xA, true);

        assert!(keypad.is_pressed(0x2));
        assert!(keypad.is_pressed(0xA));
        assert!(!keypad.is_pressed(0x3));

        keypad.set_key(0x2, false);
        assert!(!keypad.is_pressed(0x2));
        assert!(keypad.is_pressed(0xA));
    }

    #[test]
    fn test_first_pressed_picks_lowest() {
        let mut keypad = Keypad::new();
        assert_eq!(None, keypad.first_pressed());

        keypad.set_key(0xC, true);
        keypad.set_key(0x4, true);

        assert_eq!(Some(0x4), keypad.first_pressed());
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut keypad = Keypad::new();
        let mut keys = [false; keypad::SIZE];
        keys[0x0] = true;
        keys[0xF] = true;
        keypad.set_keys(&keys);

        assert_eq!(&keys, keypad.get_keys());

        keypad.reset();
        assert_eq!(&[false; keypad::SIZE], keypad.get_keys());
    }
}
