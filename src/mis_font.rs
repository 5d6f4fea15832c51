// Icon bitmaps for the 8x8 matrix cells and the block map of the 16x16 panel.
//
// Every icon is a list of frames. A frame is 8 rows, one byte per row, bit 7 is the
// leftmost pixel. Icons with more than one frame are animations and are played in order.
//
pub use unformatted::{
    BLOCK_MAP, IMG_CLEAR, IMG_DUO, IMG_QING, IMG_WIFI, IMG_WU, IMG_XIAO, IMG_XIN, IMG_XUE,
    IMG_YIN, IMG_YU, IMG_YUN,
};

#[rustfmt::skip]
mod unformatted {
    /// `BLOCK_MAP[block_row][block_col][pixel_row]` is `[module, register]`.
    ///
    /// The panel is a 4x4 grid of 4x4 pixel blocks. `module` is the chain position of the
    /// 8x8 driver showing the block, `register` its digit register (0x01..=0x08).
    /// Even block columns go to the high nibble, odd ones to the low nibble.
    /// Chain: top-left 0, top-right 1, bottom-right 2, bottom-left 3.
    pub static BLOCK_MAP: [[[[u8; 2]; 4]; 4]; 4] = [
        [
            [[0, 0x01], [0, 0x02], [0, 0x03], [0, 0x04]],
            [[0, 0x01], [0, 0x02], [0, 0x03], [0, 0x04]],
            [[1, 0x01], [1, 0x02], [1, 0x03], [1, 0x04]],
            [[1, 0x01], [1, 0x02], [1, 0x03], [1, 0x04]],
        ],
        [
            [[0, 0x05], [0, 0x06], [0, 0x07], [0, 0x08]],
            [[0, 0x05], [0, 0x06], [0, 0x07], [0, 0x08]],
            [[1, 0x05], [1, 0x06], [1, 0x07], [1, 0x08]],
            [[1, 0x05], [1, 0x06], [1, 0x07], [1, 0x08]],
        ],
        [
            [[3, 0x01], [3, 0x02], [3, 0x03], [3, 0x04]],
            [[3, 0x01], [3, 0x02], [3, 0x03], [3, 0x04]],
            [[2, 0x01], [2, 0x02], [2, 0x03], [2, 0x04]],
            [[2, 0x01], [2, 0x02], [2, 0x03], [2, 0x04]],
        ],
        [
            [[3, 0x05], [3, 0x06], [3, 0x07], [3, 0x08]],
            [[3, 0x05], [3, 0x06], [3, 0x07], [3, 0x08]],
            [[2, 0x05], [2, 0x06], [2, 0x07], [2, 0x08]],
            [[2, 0x05], [2, 0x06], [2, 0x07], [2, 0x08]],
        ],
    ];

    // 晴
    pub static IMG_QING: [[u8; 8]; 2] = [
        [0b0001_1000, 0b0100_0010, 0b0011_1100, 0b1011_1101, 0b1011_1101, 0b0011_1100, 0b0100_0010, 0b0001_1000],
        [0b0000_0000, 0b0010_0100, 0b0011_1100, 0b0111_1110, 0b0111_1110, 0b0011_1100, 0b0010_0100, 0b0000_0000],
    ];

    // 阴
    pub static IMG_YIN: [[u8; 8]; 1] = [
        [0b0000_0000, 0b0011_1000, 0b0111_1100, 0b1111_1110, 0b1111_1111, 0b1111_1111, 0b0111_1110, 0b0000_0000],
    ];

    // 多云
    pub static IMG_DUO: [[u8; 8]; 2] = [
        [0b0000_0101, 0b0000_0010, 0b0011_0101, 0b0100_1000, 0b1000_0100, 0b1000_0010, 0b0111_1100, 0b0000_0000],
        [0b0000_0000, 0b0000_0111, 0b0011_0111, 0b0100_1000, 0b1000_0100, 0b1000_0010, 0b0111_1100, 0b0000_0000],
    ];

    // 云
    pub static IMG_YUN: [[u8; 8]; 1] = [
        [0b0000_0000, 0b0001_1000, 0b0010_0110, 0b0100_0001, 0b1000_0001, 0b1000_0001, 0b0111_1110, 0b0000_0000],
    ];

    // 雨
    pub static IMG_YU: [[u8; 8]; 3] = [
        [0b0001_1000, 0b0111_1110, 0b1111_1111, 0b0000_0000, 0b0100_1001, 0b0000_0000, 0b1001_0010, 0b0000_0000],
        [0b0001_1000, 0b0111_1110, 0b1111_1111, 0b0000_0000, 0b0000_0000, 0b0100_1001, 0b0000_0000, 0b1001_0010],
        [0b0001_1000, 0b0111_1110, 0b1111_1111, 0b0000_0000, 0b1001_0010, 0b0000_0000, 0b0100_1001, 0b0000_0000],
    ];

    // 雪
    pub static IMG_XUE: [[u8; 8]; 2] = [
        [0b1000_1000, 0b0000_0010, 0b0010_0000, 0b1000_0100, 0b0001_0000, 0b0100_0001, 0b0000_1000, 0b1000_0000],
        [0b1000_0000, 0b1000_1000, 0b0000_0010, 0b0010_0000, 0b1000_0100, 0b0001_0000, 0b0100_0001, 0b0000_1000],
    ];

    // 心
    pub static IMG_XIN: [[u8; 8]; 2] = [
        [0b0000_0000, 0b0110_0110, 0b1111_1111, 0b1111_1111, 0b0111_1110, 0b0011_1100, 0b0001_1000, 0b0000_0000],
        [0b0000_0000, 0b0000_0000, 0b0010_0100, 0b0111_1110, 0b0011_1100, 0b0001_1000, 0b0000_0000, 0b0000_0000],
    ];

    // 笑
    pub static IMG_XIAO: [[u8; 8]; 2] = [
        [0b0011_1100, 0b0100_0010, 0b1010_0101, 0b1000_0001, 0b1010_0101, 0b1001_1001, 0b0100_0010, 0b0011_1100],
        [0b0011_1100, 0b0100_0010, 0b1000_0001, 0b1110_0111, 0b1010_0101, 0b1001_1001, 0b0100_0010, 0b0011_1100],
    ];

    // none, low, medium, high
    pub static IMG_WIFI: [[u8; 8]; 4] = [
        [0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1000],
        [0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1000, 0b0010_0100, 0b0000_0000, 0b0001_1000],
        [0b0000_0000, 0b0000_0000, 0b0011_1100, 0b0100_0010, 0b0001_1000, 0b0010_0100, 0b0000_0000, 0b0001_1000],
        [0b0111_1110, 0b1000_0001, 0b0011_1100, 0b0100_0010, 0b0001_1000, 0b0010_0100, 0b0000_0000, 0b0001_1000],
    ];

    pub static IMG_CLEAR: [[u8; 8]; 1] = [
        [0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000],
    ];

    // 雾
    pub static IMG_WU: [[u8; 8]; 2] = [
        [0b0000_0000, 0b1110_1110, 0b0000_0000, 0b0111_0111, 0b0000_0000, 0b1101_1101, 0b0000_0000, 0b1011_1011],
        [0b0000_0000, 0b0111_0111, 0b0000_0000, 0b1011_1011, 0b0000_0000, 0b1110_1110, 0b0000_0000, 0b1101_1101],
    ];
}
