//! YAML configuration for the demo binary: which roster and item to
//! render and where to put the PNGs.

use std::fs;
use std::path::{Path, PathBuf};

use image::Rgba;
use serde::Deserialize;

use crate::error::Error;
use crate::playerlist::{self, PlayerEntry};
use crate::text::Span;
use crate::tooltip::{self, Item};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Directory the rendered PNGs land in.
    pub output_dir: PathBuf,
    pub player_list: PlayerListConfig,
    pub tooltip: TooltipConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            player_list: PlayerListConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlayerListConfig {
    pub header: Option<String>,
    pub show_heads: bool,
    pub max_rows_per_column: u32,
    pub column_spacing: u32,
    pub padding: u32,
    pub players: Vec<PlayerSpec>,
}

impl Default for PlayerListConfig {
    fn default() -> Self {
        Self {
            header: None,
            show_heads: false,
            max_rows_per_column: playerlist::DEFAULT_MAX_ROWS_PER_COLUMN,
            column_spacing: playerlist::DEFAULT_COLUMN_SPACING,
            padding: playerlist::DEFAULT_PADDING,
            players: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlayerSpec {
    pub name: String,
    #[serde(default = "PlayerSpec::default_ping")]
    pub ping: i32,
    #[serde(default)]
    pub priority: i32,
    /// RGB label color; white when omitted.
    #[serde(default)]
    pub color: Option<[u8; 3]>,
    #[serde(default)]
    pub bold: bool,
}

impl PlayerSpec {
    const fn default_ping() -> i32 {
        -1
    }

    pub fn to_entry(&self) -> PlayerEntry {
        let mut display = Span::text(self.name.clone());
        if let Some([r, g, b]) = self.color {
            display = display.color(Rgba([r, g, b, 255]));
        }
        if self.bold {
            display = display.bold(true);
        }
        PlayerEntry::styled(display, self.ping, self.name.clone(), self.priority)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TooltipConfig {
    pub item: Option<ItemSpec>,
    pub padding: u32,
    pub line_spacing: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            item: None,
            padding: tooltip::DEFAULT_PADDING,
            line_spacing: tooltip::DEFAULT_LINE_SPACING,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ItemSpec {
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "ItemSpec::default_amount")]
    pub amount: u32,
    #[serde(default)]
    pub lore: Vec<String>,
}

impl ItemSpec {
    const fn default_amount() -> u32 {
        1
    }

    pub fn to_item(&self) -> Item {
        let mut item = Item::new(self.kind.clone()).amount(self.amount);
        if let Some(name) = &self.name {
            item = item.name(Span::text(name.clone()));
        }
        for line in &self.lore {
            item = item.lore_line(Span::colored(line.clone(), crate::palette::GRAY));
        }
        item
    }
}

/// Loads and deserializes a YAML configuration file.
pub fn from_yaml_file(path: &Path) -> Result<Configuration, Error> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

impl Configuration {
    pub fn validate(&self) -> Result<(), Error> {
        if self.player_list.max_rows_per_column == 0 {
            return Err(Error::InvalidConfig(
                "player-list.max-rows-per-column must be at least 1".into(),
            ));
        }
        if let Some(item) = &self.tooltip.item {
            if item.kind.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "tooltip.item.kind must not be empty".into(),
                ));
            }
            if item.amount == 0 {
                return Err(Error::InvalidConfig(
                    "tooltip.item.amount must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }
}
