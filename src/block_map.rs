use crate::error::Error;
use crate::mis_font::BLOCK_MAP;

pub const BLOCK_SIZE: usize = 4;
pub const BLOCKS_PER_SIDE: usize = 4;
pub const MODULE_COUNT: usize = 4;

/// Where one pixel row of a block is shown on the driver chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockAddress {
    /// Position in the daisy chain, 0 is the module closest to the controller.
    pub module: u8,
    /// Digit register, 0x01..=0x08.
    pub register: u8,
}

pub fn block_address(
    block_row: usize,
    block_col: usize,
    pixel_row: usize,
) -> Result<BlockAddress, Error> {
    let [module, register] = *BLOCK_MAP
        .get(block_row)
        .and_then(|cols| cols.get(block_col))
        .and_then(|rows| rows.get(pixel_row))
        .ok_or(Error::BlockOutOfRange)?;

    Ok(BlockAddress { module, register })
}

/// Shift that places a block row's 4 pixels inside its register byte.
pub const fn nibble_shift(block_col: usize) -> u8 {
    if block_col % 2 == 0 {
        4
    } else {
        0
    }
}
