//! Player list ("tab") rendering: a header/footer plus a multi-column
//! grid of named, ping-annotated, optionally head-iconed rows.

use std::cmp::Ordering;
use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::error::Error;
use crate::font;
use crate::heads::{self, CraftheadSource, HeadSource};
use crate::palette;
use crate::ping;
use crate::render::{self, DEFAULT_TEXT_COLOR};
use crate::text::Span;

pub const DEFAULT_MAX_ROWS_PER_COLUMN: u32 = 20;
pub const DEFAULT_COLUMN_SPACING: u32 = 10;
pub const DEFAULT_PADDING: u32 = 5;
/// The grid never grows past this many columns; overflow entries are
/// simply not rendered.
pub const MAX_COLUMNS: u32 = 4;
pub const ROW_HEIGHT: u32 = 18;

const FOOTER_EXTRA_SPACING: u32 = 6;
const HEADER_FOOTER_PADDING: u32 = 4;
const NAME_PING_SPACING: u32 = 4;
const HEAD_SLOT: u32 = heads::HEAD_SIZE;
const HEAD_NAME_SPACING: u32 = 2;

const BACKGROUND: Rgba<u8> = Rgba([56, 70, 117, 255]);
const TEXT_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 80]);

/// One roster row, built by the caller before layout.
#[derive(Debug, Clone)]
pub struct PlayerEntry {
    display: Span,
    ping: i32,
    name: String,
    priority: i32,
}

impl PlayerEntry {
    /// Plain entry: the name doubles as the label, ping unknown.
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        let name = name.into();
        Self {
            display: Span::text(name.clone()),
            ping: -1,
            name,
            priority,
        }
    }

    /// Fully styled entry. `name` is the sort key and avatar lookup key;
    /// `display` is what actually gets drawn.
    pub fn styled(display: Span, ping: i32, name: impl Into<String>, priority: i32) -> Self {
        Self {
            display,
            ping,
            name: name.into(),
            priority,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ping(&self) -> i32 {
        self.ping
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn display(&self) -> &Span {
        &self.display
    }
}

/// Footer selection. The default footer counts the roster; the sentinel
/// comparison the old behavior relied on is replaced by this explicit
/// mode.
#[derive(Debug, Clone, Default)]
pub enum Footer {
    /// No footer block at all.
    None,
    /// "Players Online: N" with the rendered entry count.
    #[default]
    PlayerCount,
    /// A caller-supplied line; an empty span behaves like `None`.
    Custom(Span),
}

impl Footer {
    fn resolve(&self, count: usize) -> Option<Span> {
        match self {
            Self::None => None,
            Self::PlayerCount => Some(
                Span::colored("Players Online: ", palette::GRAY)
                    .child(Span::colored(count.to_string(), palette::WHITE)),
            ),
            Self::Custom(span) if span.is_empty() => None,
            Self::Custom(span) => Some(span.clone()),
        }
    }
}

/// Default roster ordering: priority descending, then name
/// case-insensitively ascending. Stable and total.
pub fn default_order(a: &PlayerEntry, b: &PlayerEntry) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Columns used for `entry_count` entries, capped at [`MAX_COLUMNS`].
pub fn column_count(entry_count: usize, max_rows_per_column: u32) -> u32 {
    if entry_count == 0 {
        0
    } else {
        (entry_count as u32)
            .div_ceil(max_rows_per_column.max(1))
            .min(MAX_COLUMNS)
    }
}

type Sorter = dyn Fn(&PlayerEntry, &PlayerEntry) -> Ordering + Send + Sync;

pub fn builder() -> Builder {
    Builder::default()
}

/// Configures a player list render. `build` resolves avatars first, then
/// runs the synchronous layout on the blocking pool.
pub struct Builder {
    entries: Vec<PlayerEntry>,
    header: Option<Span>,
    footer: Footer,
    max_rows_per_column: u32,
    column_spacing: u32,
    padding: u32,
    show_heads: bool,
    sorter: Option<Box<Sorter>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            header: None,
            footer: Footer::default(),
            max_rows_per_column: DEFAULT_MAX_ROWS_PER_COLUMN,
            column_spacing: DEFAULT_COLUMN_SPACING,
            padding: DEFAULT_PADDING,
            show_heads: false,
            sorter: None,
        }
    }
}

impl Builder {
    pub fn entry(mut self, entry: PlayerEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = PlayerEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn header(mut self, header: Span) -> Self {
        self.header = Some(header);
        self
    }

    pub fn footer(mut self, footer: Footer) -> Self {
        self.footer = footer;
        self
    }

    pub fn max_rows_per_column(mut self, max_rows: u32) -> Self {
        self.max_rows_per_column = max_rows.max(1);
        self
    }

    pub fn column_spacing(mut self, spacing: u32) -> Self {
        self.column_spacing = spacing;
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn show_heads(mut self, show: bool) -> Self {
        self.show_heads = show;
        self
    }

    /// Replaces the default priority/name ordering.
    pub fn sort_by(
        mut self,
        sorter: impl Fn(&PlayerEntry, &PlayerEntry) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sorter = Some(Box::new(sorter));
        self
    }

    /// Renders with the production crafthead avatar source.
    pub async fn build(self) -> Result<RgbaImage, Error> {
        let source = CraftheadSource::new();
        self.build_with(&source).await
    }

    /// Renders with a caller-supplied avatar source. Avatar fetches fan
    /// out concurrently and individual failures degrade to iconless
    /// rows.
    pub async fn build_with<S: HeadSource>(mut self, source: &S) -> Result<RgbaImage, Error> {
        match self.sorter.take() {
            Some(sorter) => self.entries.sort_by(|a, b| sorter(a, b)),
            None => self.entries.sort_by(default_order),
        }

        let heads = if self.show_heads && !self.entries.is_empty() {
            heads::fetch_all(source, self.entries.iter().map(|e| e.name.clone())).await
        } else {
            HashMap::new()
        };

        let sheet = Sheet {
            footer: self.footer.resolve(self.entries.len()),
            header: self.header.filter(|h| !h.is_empty()),
            entries: self.entries,
            max_rows_per_column: self.max_rows_per_column,
            column_spacing: self.column_spacing,
            padding: self.padding,
            show_heads: self.show_heads,
            heads,
        };
        Ok(tokio::task::spawn_blocking(move || sheet.render()).await?)
    }
}

// Everything the synchronous layout pass needs, snapshotted.
struct Sheet {
    entries: Vec<PlayerEntry>,
    header: Option<Span>,
    footer: Option<Span>,
    max_rows_per_column: u32,
    column_spacing: u32,
    padding: u32,
    show_heads: bool,
    heads: HashMap<String, RgbaImage>,
}

impl Sheet {
    fn render(&self) -> RgbaImage {
        let count = self.entries.len();
        let columns = column_count(count, self.max_rows_per_column);

        let header_height = if self.header.is_some() {
            ROW_HEIGHT + HEADER_FOOTER_PADDING * 2
        } else {
            0
        };
        let footer_height = if self.footer.is_some() {
            ROW_HEIGHT + HEADER_FOOTER_PADDING * 2
        } else {
            0
        };

        let header_width = self.header.as_ref().map_or(0, render::measure_width);
        let footer_width = self.footer.as_ref().map_or(0, render::measure_width);
        let max_header_footer_width = header_width.max(footer_width);

        let max_label_width = self
            .entries
            .iter()
            .map(|e| render::measure_width(&e.display))
            .max()
            .unwrap_or(0);

        let head_area_width = if self.show_heads {
            HEAD_SLOT + HEAD_NAME_SPACING
        } else {
            0
        };

        let column_content_width =
            head_area_width + max_label_width + NAME_PING_SPACING + ping::INDICATOR_WIDTH;
        let required_content_width = columns * column_content_width
            + columns.saturating_sub(1) * self.column_spacing;

        let image_width = required_content_width.max(max_header_footer_width) + self.padding * 2;

        // Redistribute the final content width so header/footer centering
        // lines up with the real column boundaries.
        let content_width = image_width - self.padding * 2;
        let column_width = if columns == 0 {
            content_width
        } else {
            (content_width - (columns - 1) * self.column_spacing) / columns
        };

        let rows_needed = if count == 0 {
            0
        } else {
            (count as u32).div_ceil(columns)
        };
        let rows_displayed = rows_needed.min(self.max_rows_per_column);
        let grid_height = rows_displayed * ROW_HEIGHT;
        let footer_spacing = if footer_height > 0 && grid_height > 0 {
            FOOTER_EXTRA_SPACING
        } else {
            0
        };
        let image_height =
            header_height + grid_height + footer_spacing + footer_height + self.padding * 2;

        let mut img = RgbaImage::from_pixel(image_width, image_height, BACKGROUND);

        let mut cursor_y = self.padding;
        if let Some(header) = &self.header {
            let x = self.padding + content_width.saturating_sub(header_width) / 2;
            let baseline = cursor_y + HEADER_FOOTER_PADDING + font::ASCENT;
            render::draw_span(
                &mut img,
                header,
                x as i32,
                baseline as i32,
                DEFAULT_TEXT_COLOR,
                TEXT_SHADOW,
            );
            cursor_y += header_height;
        }

        let grid_top = cursor_y;
        let mut index = 0usize;
        'columns: for col in 0..columns {
            let column_x = self.padding + col * (column_width + self.column_spacing);
            for row in 0..rows_displayed {
                let Some(entry) = self.entries.get(index) else {
                    break 'columns;
                };
                index += 1;

                let row_top = grid_top + row * ROW_HEIGHT;
                let mut draw_x = column_x;

                if self.show_heads {
                    if let Some(head) = self.heads.get(&entry.name) {
                        let head_y = row_top + (ROW_HEIGHT - HEAD_SLOT) / 2;
                        render::draw_icon(
                            &mut img,
                            head,
                            draw_x as i32,
                            head_y as i32,
                            HEAD_SLOT,
                        );
                    }
                    // The slot is reserved either way so labels line up.
                    draw_x += HEAD_SLOT + HEAD_NAME_SPACING;
                }

                render::draw_span(
                    &mut img,
                    &entry.display,
                    draw_x as i32,
                    (row_top + font::ASCENT) as i32,
                    DEFAULT_TEXT_COLOR,
                    TEXT_SHADOW,
                );

                let ping_x = column_x + column_width - ping::INDICATOR_WIDTH;
                let ping_y = row_top + (ROW_HEIGHT - ping::INDICATOR_HEIGHT) / 2;
                ping::draw_indicator(&mut img, entry.ping, ping_x as i32, ping_y as i32);
            }
        }

        if let Some(footer) = &self.footer {
            let y = grid_top + grid_height + footer_spacing;
            let x = self.padding + content_width.saturating_sub(footer_width) / 2;
            let baseline = y + HEADER_FOOTER_PADDING + font::ASCENT;
            render::draw_span(
                &mut img,
                footer,
                x as i32,
                baseline as i32,
                DEFAULT_TEXT_COLOR,
                TEXT_SHADOW,
            );
        }

        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_priority_sorts_first() {
        let vip = PlayerEntry::new("zed", 10);
        let pleb = PlayerEntry::new("aaa", 0);
        assert_eq!(default_order(&vip, &pleb), Ordering::Less);
    }

    #[test]
    fn equal_priority_sorts_case_insensitively() {
        let a = PlayerEntry::new("bob", 0);
        let b = PlayerEntry::new("Alice", 0);
        assert_eq!(default_order(&b, &a), Ordering::Less);
        assert_eq!(default_order(&a, &b), Ordering::Greater);
    }

    #[test]
    fn column_count_is_bounded() {
        assert_eq!(column_count(0, 20), 0);
        assert_eq!(column_count(1, 20), 1);
        assert_eq!(column_count(20, 20), 1);
        assert_eq!(column_count(21, 20), 2);
        assert_eq!(column_count(1000, 20), MAX_COLUMNS);
    }

    #[test]
    fn footer_player_count_resolves_to_roster_size() {
        let footer = Footer::PlayerCount.resolve(17).expect("footer");
        assert_eq!(footer.content(), "Players Online: ");
        assert_eq!(footer.children()[0].content(), "17");
    }

    #[test]
    fn empty_custom_footer_collapses() {
        assert!(Footer::Custom(Span::empty()).resolve(3).is_none());
        assert!(Footer::None.resolve(3).is_none());
    }
}
