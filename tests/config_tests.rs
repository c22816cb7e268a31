use mcrender::config::Configuration;
use std::path::PathBuf;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
output-dir: "renders"
player-list:
  header: "My Server"
  show-heads: true
  players:
    - name: Alice
      ping: 42
      priority: 10
      color: [255, 170, 0]
      bold: true
    - name: bob
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("renders"));
    assert_eq!(cfg.player_list.header.as_deref(), Some("My Server"));
    assert!(cfg.player_list.show_heads);
    assert_eq!(cfg.player_list.players.len(), 2);
    assert_eq!(cfg.player_list.players[0].ping, 42);
    assert_eq!(cfg.player_list.players[0].color, Some([255, 170, 0]));
    assert_eq!(cfg.player_list.players[1].ping, -1);
    assert_eq!(cfg.player_list.players[1].priority, 0);
}

#[test]
fn defaults_apply_when_sections_are_missing() {
    let cfg: Configuration = serde_yaml::from_str("{}").unwrap();
    assert_eq!(cfg.output_dir, PathBuf::from("out"));
    assert_eq!(cfg.player_list.max_rows_per_column, 20);
    assert_eq!(cfg.player_list.column_spacing, 10);
    assert_eq!(cfg.player_list.padding, 5);
    assert!(!cfg.player_list.show_heads);
    assert_eq!(cfg.tooltip.padding, 6);
    assert_eq!(cfg.tooltip.line_spacing, 3);
    assert!(cfg.tooltip.item.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn parse_tooltip_item() {
    let yaml = r#"
tooltip:
  padding: 8
  item:
    kind: diamond_pickaxe
    amount: 3
    lore:
      - "Efficiency V"
      - "Unbreaking III"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let item = cfg.tooltip.item.as_ref().unwrap();
    assert_eq!(item.kind, "diamond_pickaxe");
    assert_eq!(item.amount, 3);
    assert_eq!(item.lore.len(), 2);
    assert_eq!(cfg.tooltip.padding, 8);
    assert!(cfg.validate().is_ok());
}

#[test]
fn validate_rejects_zero_row_cap() {
    let yaml = r#"
player-list:
  max-rows-per-column: 0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_blank_item_kind() {
    let yaml = r#"
tooltip:
  item:
    kind: "  "
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validate().is_err());
}
