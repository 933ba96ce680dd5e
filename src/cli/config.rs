//! `taskman config`：打印配置文件路径和生效配置

use std::path::Path;

use crate::storage::config::{load_config_from, Config};

pub fn execute(path: &Path) {
    println!("# {}", path.display());
    let config = match load_config_from(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read config ({}), showing defaults.", e);
            Config::default()
        }
    };
    match config.to_toml() {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Failed to render config: {}", e);
            std::process::exit(1);
        }
    }
}
