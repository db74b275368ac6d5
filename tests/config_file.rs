mod common;

use cellgate_core::config::AppConfig;
use cellgate_data::{BoolFn, GateCode, InputTap, RuleTable};
use cellgate_lib::commands::load_config;

#[test]
fn test_config_file_drives_analysis() {
    let path = std::env::temp_dir().join(format!("cellgate_config_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[grid]\nsize = 6\nseed_column = 1\n\n[taps]\noutput_columns = [1]\ninput_pattern = \"BA\"\n",
    )
    .unwrap();
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.grid.size, 6);
    assert_eq!(config.budget, AppConfig::default().budget);
    assert_eq!(config.tap_assignment().inputs.tap(1), InputTap::A);

    let analysis =
        cellgate_core::analyze(&RuleTable::uniform(GateCode::PassLeft), &config).unwrap();
    assert_eq!(analysis.cells.get(1, 0).value, Some(BoolFn::A));
    assert_eq!(analysis.cells.get(0, 0).value, Some(BoolFn::B));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let path = std::env::temp_dir().join(format!("cellgate_bad_config_{}.toml", std::process::id()));
    std::fs::write(&path, "[taps]\noutput_columns = [99]\n").unwrap();
    let result = load_config(&path);
    std::fs::remove_file(&path).unwrap();

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("outside the 64-column grid"));
}

#[test]
fn test_builder_config_matches_with_size() {
    let builder = common::CircuitBuilder::new(10).with_budget(4);
    assert_eq!(builder.config().grid.seed_column, 5);
    assert_eq!(builder.config().budget.resolution, 4);
}
