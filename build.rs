use std::env;
use std::fs;

/// Settings read by `AppConfig::from_env` through `option_env!`
const CONFIG_KEYS: [&str; 5] = ["API_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL", "TOAST_DURATION_MS"];

/// `KEY=value`, `export KEY=value` and quoted values; comments and blanks give `None`
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Some((key.trim(), value))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=.env not found, API settings use their defaults (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: ignoring unknown key {}", key);
            continue;
        }
        // The build environment wins over the file
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
