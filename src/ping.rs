//! Latency indicator: buckets a ping into a bar count + color and paints
//! the five-slot stair-step glyph.

use image::{Rgba, RgbaImage};

use crate::render;

pub const BAR_WIDTH: u32 = 2;
pub const BAR_SPACING: u32 = 1;
pub const BAR_HEIGHT_STEP: u32 = 2;
pub const BAR_SLOTS: u32 = 5;

/// Total footprint of the indicator.
pub const INDICATOR_WIDTH: u32 = (BAR_WIDTH + BAR_SPACING) * BAR_SLOTS - BAR_SPACING;
pub const INDICATOR_HEIGHT: u32 = BAR_HEIGHT_STEP * BAR_SLOTS;

const GOOD_THRESHOLD: i32 = 150;
const MEDIUM_THRESHOLD: i32 = 300;
const BAD_THRESHOLD: i32 = 500;

const GOOD_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
const MEDIUM_COLOR: Rgba<u8> = Rgba([255, 255, 0, 255]);
const BAD_COLOR: Rgba<u8> = Rgba([255, 85, 85, 255]);
const VERY_BAD_COLOR: Rgba<u8> = Rgba([170, 0, 0, 255]);
const UNKNOWN_COLOR: Rgba<u8> = Rgba([170, 170, 170, 255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingQuality {
    Unknown,
    Good,
    Medium,
    Bad,
    VeryBad,
}

impl PingQuality {
    /// Buckets a raw ping; anything negative means "unknown".
    pub fn for_ping(ping: i32) -> Self {
        if ping < 0 {
            Self::Unknown
        } else if ping < GOOD_THRESHOLD {
            Self::Good
        } else if ping < MEDIUM_THRESHOLD {
            Self::Medium
        } else if ping < BAD_THRESHOLD {
            Self::Bad
        } else {
            Self::VeryBad
        }
    }

    pub fn filled_bars(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Good => 5,
            Self::Medium => 4,
            Self::Bad => 3,
            Self::VeryBad => 2,
        }
    }

    pub fn color(self) -> Rgba<u8> {
        match self {
            Self::Unknown => UNKNOWN_COLOR,
            Self::Good => GOOD_COLOR,
            Self::Medium => MEDIUM_COLOR,
            Self::Bad => BAD_COLOR,
            Self::VeryBad => VERY_BAD_COLOR,
        }
    }
}

/// Paints the indicator with its top-left corner at `(x, y)`. Bars are
/// bottom-aligned and bar `i` is `i * BAR_HEIGHT_STEP` tall. Slots past
/// the filled count are painted neutral for a known ping and not at all
/// for an unknown one.
pub fn draw_indicator(img: &mut RgbaImage, ping: i32, x: i32, y: i32) {
    let quality = PingQuality::for_ping(ping);
    let filled = quality.filled_bars();

    let mut bar_x = x;
    for slot in 1..=BAR_SLOTS {
        let bar_height = slot * BAR_HEIGHT_STEP;
        let bar_y = y + (INDICATOR_HEIGHT - bar_height) as i32;
        if slot <= filled {
            render::fill_rect(img, bar_x, bar_y, BAR_WIDTH, bar_height, quality.color());
        } else if ping >= 0 {
            render::fill_rect(img, bar_x, bar_y, BAR_WIDTH, bar_height, UNKNOWN_COLOR);
        }
        bar_x += (BAR_WIDTH + BAR_SPACING) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_thresholds() {
        assert_eq!(PingQuality::for_ping(100), PingQuality::Good);
        assert_eq!(PingQuality::for_ping(250), PingQuality::Medium);
        assert_eq!(PingQuality::for_ping(450), PingQuality::Bad);
        assert_eq!(PingQuality::for_ping(999), PingQuality::VeryBad);
        assert_eq!(PingQuality::for_ping(-1), PingQuality::Unknown);
    }

    #[test]
    fn bar_counts_per_bucket() {
        assert_eq!(PingQuality::Good.filled_bars(), 5);
        assert_eq!(PingQuality::Medium.filled_bars(), 4);
        assert_eq!(PingQuality::Bad.filled_bars(), 3);
        assert_eq!(PingQuality::VeryBad.filled_bars(), 2);
        assert_eq!(PingQuality::Unknown.filled_bars(), 0);
    }

    #[test]
    fn indicator_footprint() {
        assert_eq!(INDICATOR_WIDTH, 14);
        assert_eq!(INDICATOR_HEIGHT, 10);
    }

    #[test]
    fn known_ping_paints_neutral_placeholders() {
        let mut img = RgbaImage::from_pixel(20, 12, Rgba([0, 0, 0, 0]));
        draw_indicator(&mut img, 999, 0, 0);
        // Last slot is tallest and unfilled for a very bad ping.
        let last_x = (BAR_WIDTH + BAR_SPACING) * 4;
        assert_eq!(img.get_pixel(last_x, 0), &UNKNOWN_COLOR);
        // First two slots carry the very-bad color.
        assert_eq!(
            img.get_pixel(0, (INDICATOR_HEIGHT - BAR_HEIGHT_STEP) as u32),
            &VERY_BAD_COLOR
        );
    }

    #[test]
    fn unknown_ping_paints_nothing() {
        let blank = RgbaImage::from_pixel(20, 12, Rgba([0, 0, 0, 0]));
        let mut img = blank.clone();
        draw_indicator(&mut img, -1, 0, 0);
        assert_eq!(img, blank);
    }

    #[test]
    fn bars_step_up_from_the_bottom() {
        let mut img = RgbaImage::from_pixel(20, 12, Rgba([0, 0, 0, 0]));
        draw_indicator(&mut img, 10, 0, 0);
        // Bar 1 is 2 px tall: bottom rows only.
        assert_eq!(img.get_pixel(0, 9), &GOOD_COLOR);
        assert_eq!(img.get_pixel(0, 7), &Rgba([0, 0, 0, 0]));
        // Bar 5 reaches the top of the indicator.
        let last_x = (BAR_WIDTH + BAR_SPACING) * 4;
        assert_eq!(img.get_pixel(last_x, 0), &GOOD_COLOR);
    }
}
