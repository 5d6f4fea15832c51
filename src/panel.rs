use core::convert::Infallible;

use embedded_graphics::{image::Image, pixelcolor::BinaryColor, prelude::*};
use heapless::Vec;
use log::{debug, trace};

use crate::block_map::{nibble_shift, BLOCKS_PER_SIDE, BLOCK_SIZE, MODULE_COUNT};
use crate::error::Error;
use crate::glyph::{frame_image, Frame, GLYPH_ROWS, GLYPH_WIDTH};
use crate::icon::Icon;
use crate::mis_font::BLOCK_MAP;

pub const PANEL_SIZE: usize = BLOCKS_PER_SIDE * BLOCK_SIZE;
pub const CELL_COUNT: usize = 4;

/// Register rows of every module, indexed by chain position then register - 1.
pub type ModuleData = [[u8; GLYPH_ROWS]; MODULE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelConfig {
    pub rotation: Rotation,
    pub inverted: bool,
}

/// One register update for the whole chain: `data[n]` goes to module `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainWrite {
    pub register: u8,
    pub data: [u8; MODULE_COUNT],
}

pub struct MatrixPanel {
    config: PanelConfig,
    rows: [u16; PANEL_SIZE],
    prev_data: Option<ModuleData>,
}

impl MatrixPanel {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            rows: [0; PANEL_SIZE],
            prev_data: None,
        }
    }

    pub fn config(&self) -> PanelConfig {
        self.config
    }

    pub fn blank(&mut self) {
        self.rows.fill(0);
    }

    /// Reads back a stored pixel in panel coordinates, after rotation.
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        if x >= PANEL_SIZE || y >= PANEL_SIZE {
            return false;
        }
        self.rows[y] & (0x8000 >> x) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        let mask = 0x8000 >> x;
        if on {
            self.rows[y] |= mask;
        } else {
            self.rows[y] &= !mask;
        }
    }

    fn rotate(&self, x: usize, y: usize) -> (usize, usize) {
        let last = PANEL_SIZE - 1;
        match self.config.rotation {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (last - y, x),
            Rotation::Deg180 => (last - x, last - y),
            Rotation::Deg270 => (y, last - x),
        }
    }

    pub fn draw_frame(&mut self, frame: &Frame, top_left: Point) {
        let raw = frame_image(frame);
        Image::new(&raw, top_left)
            .draw(self)
            .unwrap_or_else(|never| match never {});
    }

    /// Draws `icon` into one of the four 8x8 cells, replacing what was there.
    pub fn draw_icon(&mut self, icon: Icon, frame_index: usize, cell: usize) -> Result<(), Error> {
        if cell >= CELL_COUNT {
            return Err(Error::CellOutOfRange { cell });
        }

        let top_left = Point::new(
            (cell % 2) as i32 * GLYPH_WIDTH as i32,
            (cell / 2) as i32 * GLYPH_ROWS as i32,
        );
        trace!("draw {} frame {} in cell {}", icon, frame_index, cell);

        self.draw_frame(icon.frame(frame_index), top_left);
        Ok(())
    }

    pub fn encode(&self) -> ModuleData {
        let mut data: ModuleData = [[0; GLYPH_ROWS]; MODULE_COUNT];

        for (block_row, cols) in BLOCK_MAP.iter().enumerate() {
            for (block_col, block_rows) in cols.iter().enumerate() {
                let shift_out = (BLOCKS_PER_SIDE - 1 - block_col) * BLOCK_SIZE;
                for (pixel_row, [module, register]) in block_rows.iter().enumerate() {
                    let y = block_row * BLOCK_SIZE + pixel_row;
                    let nibble = ((self.rows[y] >> shift_out) & 0x0f) as u8;
                    data[*module as usize][*register as usize - 1] |=
                        nibble << nibble_shift(block_col);
                }
            }
        }

        if self.config.inverted {
            data.iter_mut().flatten().for_each(|row| *row = !*row);
        }

        data
    }

    /// Register writes needed to bring the chain up to date with the framebuffer.
    ///
    /// The first flush writes every register, later ones only those that changed.
    pub fn flush(&mut self) -> Vec<ChainWrite, GLYPH_ROWS> {
        let data = self.encode();
        let mut writes = Vec::new();

        for index in 0..GLYPH_ROWS {
            let changed = match &self.prev_data {
                Some(prev) => (0..MODULE_COUNT).any(|module| prev[module][index] != data[module][index]),
                None => true,
            };
            if !changed {
                continue;
            }

            let mut row = [0u8; MODULE_COUNT];
            for (module, value) in row.iter_mut().enumerate() {
                *value = data[module][index];
            }
            // capacity is the register count
            let _ = writes.push(ChainWrite {
                register: index as u8 + 1,
                data: row,
            });
        }

        debug!("flush: {} register writes", writes.len());
        self.prev_data = Some(data);
        writes
    }

    /// Forget what was sent so the next flush rewrites every register.
    pub fn invalidate(&mut self) {
        self.prev_data = None;
    }
}

impl Default for MatrixPanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl OriginDimensions for MatrixPanel {
    fn size(&self) -> Size {
        Size::new(PANEL_SIZE as u32, PANEL_SIZE as u32)
    }
}

impl DrawTarget for MatrixPanel {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x >= PANEL_SIZE || y >= PANEL_SIZE {
                continue;
            }

            let (x, y) = self.rotate(x, y);
            self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    use super::*;
    use crate::mis_font::{IMG_XIN, IMG_YU};

    #[test]
    fn icon_lands_in_its_cell() {
        let mut panel = MatrixPanel::default();
        panel.draw_icon(Icon::Xin, 0, 3).unwrap();

        for y in 0..GLYPH_ROWS {
            for x in 0..GLYPH_WIDTH as usize {
                let expected = IMG_XIN[0][y] & (0x80 >> x) != 0;
                assert_eq!(panel.is_lit(8 + x, 8 + y), expected);
                assert!(!panel.is_lit(x, y));
            }
        }
    }

    #[test]
    fn cell_out_of_range() {
        let mut panel = MatrixPanel::default();
        assert_eq!(
            panel.draw_icon(Icon::Qing, 0, 4),
            Err(Error::CellOutOfRange { cell: 4 })
        );
    }

    #[test]
    fn clear_icon_erases_a_cell() {
        let mut panel = MatrixPanel::default();
        panel.draw_icon(Icon::Yin, 0, 1).unwrap();
        panel.draw_icon(Icon::Clear, 0, 1).unwrap();

        assert_eq!(panel.encode(), [[0; GLYPH_ROWS]; MODULE_COUNT]);
    }

    #[test]
    fn cells_encode_to_chain_modules() {
        let mut panel = MatrixPanel::default();
        panel.draw_icon(Icon::Yu, 0, 0).unwrap();
        panel.draw_icon(Icon::Xin, 0, 1).unwrap();
        panel.draw_icon(Icon::Yu, 1, 2).unwrap();
        panel.draw_icon(Icon::Xin, 1, 3).unwrap();

        let data = panel.encode();
        assert_eq!(data[0], IMG_YU[0]);
        assert_eq!(data[1], IMG_XIN[0]);
        assert_eq!(data[2], IMG_XIN[1]);
        assert_eq!(data[3], IMG_YU[1]);
    }

    #[test]
    fn first_flush_writes_everything() {
        let mut panel = MatrixPanel::default();
        panel.draw_icon(Icon::Wifi, 3, 1).unwrap();

        let writes = panel.flush();
        assert_eq!(writes.len(), GLYPH_ROWS);
        for (index, write) in writes.iter().enumerate() {
            assert_eq!(write.register, index as u8 + 1);
            assert_eq!(write.data, [0, Icon::Wifi.frame(3)[index], 0, 0]);
        }

        assert!(panel.flush().is_empty());
    }

    #[test]
    fn flush_sends_only_changed_registers() {
        let mut panel = MatrixPanel::default();
        panel.draw_icon(Icon::Wifi, 0, 0).unwrap();
        panel.flush();

        // low level adds rows 4 and 5
        panel.draw_icon(Icon::Wifi, 1, 0).unwrap();
        let writes = panel.flush();

        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0].register, 5);
        assert_eq!(writes[1].register, 6);
        assert_eq!(writes[0].data[0], 0b0001_1000);
        assert_eq!(writes[1].data[0], 0b0010_0100);

        panel.invalidate();
        assert_eq!(panel.flush().len(), GLYPH_ROWS);
    }

    #[test]
    fn inverted_panel_flips_bits() {
        let mut panel = MatrixPanel::new(PanelConfig {
            inverted: true,
            ..Default::default()
        });
        panel.draw_icon(Icon::Xin, 0, 0).unwrap();

        let data = panel.encode();
        for (row, expected) in data[0].iter().zip(IMG_XIN[0].iter()) {
            assert_eq!(*row, !expected);
        }
        assert_eq!(data[2], [0xff; GLYPH_ROWS]);
    }

    #[test]
    fn rotation_moves_pixels() {
        let mut panel = MatrixPanel::new(PanelConfig {
            rotation: Rotation::Deg90,
            ..Default::default()
        });
        Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut panel).unwrap();
        assert!(panel.is_lit(15, 0));

        let mut panel = MatrixPanel::new(PanelConfig {
            rotation: Rotation::Deg180,
            ..Default::default()
        });
        Pixel(Point::new(1, 2), BinaryColor::On).draw(&mut panel).unwrap();
        assert!(panel.is_lit(14, 13));

        let mut panel = MatrixPanel::new(PanelConfig {
            rotation: Rotation::Deg270,
            ..Default::default()
        });
        Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut panel).unwrap();
        assert!(panel.is_lit(0, 15));
    }

    #[test]
    fn drawing_outside_is_ignored() {
        let mut panel = MatrixPanel::default();
        Rectangle::new(Point::new(-4, -4), Size::new(24, 24))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut panel)
            .unwrap();

        assert_eq!(panel.encode(), [[0xff; GLYPH_ROWS]; MODULE_COUNT]);

        panel.blank();
        assert_eq!(panel.encode(), [[0; GLYPH_ROWS]; MODULE_COUNT]);
    }
}
