use log::trace;

use crate::glyph::Frame;
use crate::icon::Icon;

pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 200;

/// Steps through an icon's frames. Time comes from the caller so any clock source works.
pub struct IconAnimation {
    icon: Icon,
    frame_index: usize,
    interval_ms: u64,
    last_draw_ms: Option<u64>,
}

impl IconAnimation {
    pub fn new(icon: Icon, interval_ms: u64) -> Self {
        Self {
            icon,
            frame_index: 0,
            interval_ms,
            last_draw_ms: None,
        }
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame(&self) -> &'static Frame {
        self.icon.frame(self.frame_index)
    }

    pub fn set_icon(&mut self, icon: Icon) {
        if self.icon == icon {
            return;
        }

        self.icon = icon;
        self.frame_index = 0;
        self.last_draw_ms = None;
    }

    /// Returns the frame to show when it changed, `None` when the display can stay as is.
    pub fn tick(&mut self, now_ms: u64) -> Option<&'static Frame> {
        let Some(last_draw_ms) = self.last_draw_ms else {
            self.last_draw_ms = Some(now_ms);
            return Some(self.frame());
        };

        if !self.icon.is_animated() || now_ms.saturating_sub(last_draw_ms) < self.interval_ms {
            return None;
        }

        self.frame_index = (self.frame_index + 1) % self.icon.frame_count();
        self.last_draw_ms = Some(now_ms);
        trace!("{} frame {}", self.icon, self.frame_index);

        Some(self.frame())
    }
}

impl Default for IconAnimation {
    fn default() -> Self {
        Self::new(Icon::Clear, DEFAULT_FRAME_INTERVAL_MS)
    }
}
