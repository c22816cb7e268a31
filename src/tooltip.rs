//! Item tooltip rendering: a bordered box of stacked styled lines sized
//! to its content.

use image::{Rgba, RgbaImage};

use crate::error::Error;
use crate::font;
use crate::palette;
use crate::render::{self, DEFAULT_TEXT_COLOR};
use crate::text::Span;

pub const DEFAULT_PADDING: u32 = 6;
pub const DEFAULT_LINE_SPACING: u32 = 3;
/// Vertical step between stacked tooltip lines.
pub const LINE_HEIGHT: u32 = 14;
/// Tooltips never shrink below this square.
pub const MIN_CANVAS: u32 = 20;

const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([16, 0, 16, 240]);
const DEFAULT_SHADOW: Rgba<u8> = Rgba([5, 0, 5, 100]);

/// An item to describe: a machine-readable kind plus optional display
/// name, stack amount and lore lines.
#[derive(Debug, Clone)]
pub struct Item {
    kind: String,
    name: Option<Span>,
    amount: u32,
    lore: Vec<Span>,
}

impl Item {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
            amount: 1,
            lore: Vec::new(),
        }
    }

    pub fn name(mut self, name: Span) -> Self {
        self.name = Some(name);
        self
    }

    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount.max(1);
        self
    }

    pub fn lore_line(mut self, line: Span) -> Self {
        self.lore.push(line);
        self
    }

    /// The styled lines the tooltip will show: the display name (falling
    /// back to the title-cased kind), an ` xN` suffix for stacks, then
    /// the lore.
    pub fn tooltip_lines(&self) -> Vec<Span> {
        let mut name = self
            .name
            .clone()
            .unwrap_or_else(|| Span::colored(title_case(&self.kind), palette::WHITE));
        if self.amount > 1 {
            name = name.child(Span::colored(format!(" x{}", self.amount), palette::WHITE));
        }

        let mut lines = vec![name];
        lines.extend(self.lore.iter().cloned());
        lines
    }
}

fn title_case(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len());
    let mut upper_next = true;
    for c in kind.to_lowercase().chars() {
        if c == '_' || c == ' ' {
            out.push(' ');
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Box styling knobs; the 1 px border is always black.
#[derive(Debug, Clone)]
pub struct Style {
    pub padding: u32,
    pub line_spacing: u32,
    pub background: Rgba<u8>,
    pub shadow: Rgba<u8>,
    pub default_text_color: Rgba<u8>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            line_spacing: DEFAULT_LINE_SPACING,
            background: DEFAULT_BACKGROUND,
            shadow: DEFAULT_SHADOW,
            default_text_color: DEFAULT_TEXT_COLOR,
        }
    }
}

/// Lays out and paints a tooltip for `lines`. Pure: the same lines and
/// style always produce the same pixels.
pub fn render_lines(lines: &[Span], style: &Style) -> RgbaImage {
    let max_text_width = lines.iter().map(render::measure_width).max().unwrap_or(0);
    let content_height = if lines.is_empty() {
        0
    } else {
        lines.len() as u32 * LINE_HEIGHT + (lines.len() as u32 - 1) * style.line_spacing
    };

    // +2 on both axes for the 1 px border.
    let width = (max_text_width + style.padding * 2 + 2).max(MIN_CANVAS);
    let height = (content_height + style.padding * 2 + 2).max(MIN_CANVAS);

    let mut img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    render::fill_rect(&mut img, 1, 1, width - 2, height - 2, style.background);

    let border = palette::BLACK;
    render::fill_rect(&mut img, 0, 0, width, 1, border);
    render::fill_rect(&mut img, 0, height as i32 - 1, width, 1, border);
    render::fill_rect(&mut img, 0, 0, 1, height, border);
    render::fill_rect(&mut img, width as i32 - 1, 0, 1, height, border);

    let start_x = (style.padding + 1) as i32;
    let mut baseline = (style.padding + 1 + font::ASCENT) as i32;
    for line in lines {
        render::draw_span(
            &mut img,
            line,
            start_x,
            baseline,
            style.default_text_color,
            style.shadow,
        );
        baseline += (LINE_HEIGHT + style.line_spacing) as i32;
    }

    img
}

pub fn builder() -> Builder {
    Builder::default()
}

/// Configures and runs a tooltip render off the caller's thread. The
/// item is mandatory; everything else has defaults.
#[derive(Debug, Default)]
pub struct Builder {
    item: Option<Item>,
    style: Style,
}

impl Builder {
    pub fn item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.style.padding = padding;
        self
    }

    pub fn line_spacing(mut self, line_spacing: u32) -> Self {
        self.style.line_spacing = line_spacing;
        self
    }

    pub fn background_color(mut self, color: Rgba<u8>) -> Self {
        self.style.background = color;
        self
    }

    pub fn shadow_color(mut self, color: Rgba<u8>) -> Self {
        self.style.shadow = color;
        self
    }

    pub fn default_text_color(mut self, color: Rgba<u8>) -> Self {
        self.style.default_text_color = color;
        self
    }

    /// Fails fast without an item; the render itself runs on the
    /// blocking pool.
    pub async fn build(self) -> Result<RgbaImage, Error> {
        let item = self.item.ok_or(Error::MissingItem)?;
        let style = self.style;
        let lines = item.tooltip_lines();
        Ok(tokio::task::spawn_blocking(move || render_lines(&lines, &style)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_falls_back_to_title_case() {
        let lines = Item::new("diamond_pickaxe").tooltip_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].content(), "Diamond Pickaxe");
    }

    #[test]
    fn stack_amount_appends_suffix() {
        let lines = Item::new("cobblestone").amount(64).tooltip_lines();
        assert_eq!(lines[0].children().len(), 1);
        assert_eq!(lines[0].children()[0].content(), " x64");
    }

    #[test]
    fn single_items_get_no_suffix() {
        let lines = Item::new("cobblestone").tooltip_lines();
        assert!(lines[0].children().is_empty());
    }

    #[test]
    fn explicit_name_wins_over_kind() {
        let item = Item::new("netherite_sword")
            .name(Span::colored("Excalibur", palette::GOLD))
            .lore_line(Span::colored("Sharpness X", palette::GRAY));
        let lines = item.tooltip_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].content(), "Excalibur");
        assert_eq!(lines[1].content(), "Sharpness X");
    }

    #[tokio::test]
    async fn build_without_item_fails_fast() {
        let err = builder().build().await.unwrap_err();
        assert!(matches!(err, Error::MissingItem));
    }

    #[tokio::test]
    async fn build_renders_through_the_blocking_pool() {
        let img = builder()
            .item(Item::new("stick"))
            .build()
            .await
            .expect("tooltip build");
        assert!(img.width() >= MIN_CANVAS && img.height() >= MIN_CANVAS);
    }
}
