//! The sixteen classic chat colors, as straight RGBA.

use image::Rgba;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const DARK_BLUE: Rgba<u8> = Rgba([0, 0, 170, 255]);
pub const DARK_GREEN: Rgba<u8> = Rgba([0, 170, 0, 255]);
pub const DARK_AQUA: Rgba<u8> = Rgba([0, 170, 170, 255]);
pub const DARK_RED: Rgba<u8> = Rgba([170, 0, 0, 255]);
pub const DARK_PURPLE: Rgba<u8> = Rgba([170, 0, 170, 255]);
pub const GOLD: Rgba<u8> = Rgba([255, 170, 0, 255]);
pub const GRAY: Rgba<u8> = Rgba([170, 170, 170, 255]);
pub const DARK_GRAY: Rgba<u8> = Rgba([85, 85, 85, 255]);
pub const BLUE: Rgba<u8> = Rgba([85, 85, 255, 255]);
pub const GREEN: Rgba<u8> = Rgba([85, 255, 85, 255]);
pub const AQUA: Rgba<u8> = Rgba([85, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 85, 85, 255]);
pub const LIGHT_PURPLE: Rgba<u8> = Rgba([255, 85, 255, 255]);
pub const YELLOW: Rgba<u8> = Rgba([255, 255, 85, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
