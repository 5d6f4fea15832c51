use core::fmt::Display;
use core::str::FromStr;

use crate::error::Error;
use crate::glyph::Frame;
use crate::mis_font::{
    IMG_CLEAR, IMG_DUO, IMG_QING, IMG_WIFI, IMG_WU, IMG_XIAO, IMG_XIN, IMG_XUE, IMG_YIN, IMG_YU,
    IMG_YUN,
};

/// The closed set of icons the clock can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Sunny.
    Qing,
    /// Overcast.
    Yin,
    /// Partly cloudy.
    Duo,
    Yun,
    /// Rain.
    Yu,
    /// Snow.
    Xue,
    /// Heart.
    Xin,
    /// Smile.
    Xiao,
    Wifi,
    Clear,
    /// Fog.
    Wu,
}

impl Icon {
    pub const ALL: [Icon; 11] = [
        Icon::Qing,
        Icon::Yin,
        Icon::Duo,
        Icon::Yun,
        Icon::Yu,
        Icon::Xue,
        Icon::Xin,
        Icon::Xiao,
        Icon::Wifi,
        Icon::Clear,
        Icon::Wu,
    ];

    pub fn frames(self) -> &'static [Frame] {
        match self {
            Icon::Qing => &IMG_QING,
            Icon::Yin => &IMG_YIN,
            Icon::Duo => &IMG_DUO,
            Icon::Yun => &IMG_YUN,
            Icon::Yu => &IMG_YU,
            Icon::Xue => &IMG_XUE,
            Icon::Xin => &IMG_XIN,
            Icon::Xiao => &IMG_XIAO,
            Icon::Wifi => &IMG_WIFI,
            Icon::Clear => &IMG_CLEAR,
            Icon::Wu => &IMG_WU,
        }
    }

    pub fn frame_count(self) -> usize {
        self.frames().len()
    }

    /// Frame `index`, wrapping around so callers can keep counting up.
    pub fn frame(self, index: usize) -> &'static Frame {
        let frames = self.frames();
        &frames[index % frames.len()]
    }

    pub fn is_animated(self) -> bool {
        self.frame_count() > 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            Icon::Qing => "qing",
            Icon::Yin => "yin",
            Icon::Duo => "duo",
            Icon::Yun => "yun",
            Icon::Yu => "yu",
            Icon::Xue => "xue",
            Icon::Xin => "xin",
            Icon::Xiao => "xiao",
            Icon::Wifi => "wifi",
            Icon::Clear => "clear",
            Icon::Wu => "wu",
        }
    }

    pub fn from_name(name: &str) -> Result<Icon, Error> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
            .ok_or(Error::UnknownIcon)
    }
}

impl FromStr for Icon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::from_name(s)
    }
}

impl Display for Icon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
