//! The configurable behavior variants that historical interpreters
//! disagree on.

/// The quirk toggles of the chipset.
///
/// Every flag defaults to `false`, which selects the behavior of the
/// original COSMAC VIP interpreter. Later interpreters changed some
/// of these semantics and many roms depend on one side or the other,
/// so the chipset never hardwires them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// `8XY6` and `8XYE` read their source operand from `VY` instead
    /// of shifting `VX` in place.
    pub shift_reads_vy: bool,
    /// `FX55` and `FX65` leave the index register incremented by
    /// `X + 1` after the copy.
    pub increment_index_on_copy: bool,
    /// `BNNN` reads the jump offset from `VX` (with `X` being the
    /// high nibble of the address) instead of `V0`.
    pub jump_reads_vx: bool,
}

impl Quirks {
    /// The plain COSMAC VIP behavior, all toggles off.
    pub fn new() -> Self {
        Self::default()
    }
}
