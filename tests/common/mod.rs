use assert_cmd::Command;
use std::path::Path;

pub fn ntn_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ntn").unwrap();
    cmd.env_remove("NOTION_API_KEY");
    cmd.env("NTN_CONFIG_DIR", config_dir);
    cmd
}

pub fn write_config(config_dir: &Path, contents: &serde_json::Value) {
    std::fs::write(
        config_dir.join("config.json"),
        serde_json::to_string_pretty(contents).unwrap(),
    )
    .unwrap();
}
