use handrank_cli::config::{self, resolve, ValueSource};
use handrank_cli::formatters::CardStyle;
use handrank_cli::run;
use serial_test::serial;
use std::collections::HashMap;
use std::io::Write;

fn env_of(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&str, String> = pairs.into_iter().collect();
    move |key| map.get(key).cloned()
}

fn write_toml(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn file_values_are_tracked_as_file() {
    let file = write_toml("seed = 456\ncard_style = \"unicode\"\nbench_iterations = 12\n");
    let path = file.path().to_string_lossy().into_owned();
    let resolved = resolve(env_of(vec![(config::ENV_CONFIG, path)])).unwrap();

    assert_eq!(resolved.config.seed, Some(456));
    assert_eq!(resolved.config.card_style, CardStyle::Unicode);
    assert_eq!(resolved.config.bench_iterations, 12);
    assert_eq!(resolved.config.log_level, "warn");
    assert_eq!(resolved.sources.seed, ValueSource::File);
    assert_eq!(resolved.sources.log_level, ValueSource::Default);
}

#[test]
fn env_overrides_file() {
    let file = write_toml("seed = 456\n");
    let path = file.path().to_string_lossy().into_owned();
    let resolved = resolve(env_of(vec![
        (config::ENV_CONFIG, path),
        (config::ENV_SEED, "789".into()),
    ]))
    .unwrap();

    assert_eq!(resolved.config.seed, Some(789));
    assert_eq!(resolved.sources.seed, ValueSource::Env);
}

#[test]
fn invalid_file_values_are_rejected() {
    let file = write_toml("bench_iterations = 0\n");
    let path = file.path().to_string_lossy().into_owned();
    let err = resolve(env_of(vec![(config::ENV_CONFIG, path)])).unwrap_err();
    assert!(err.to_string().contains("bench_iterations must be >0"));

    let file = write_toml("card_style = \"emoji\"\n");
    let path = file.path().to_string_lossy().into_owned();
    assert!(matches!(
        resolve(env_of(vec![(config::ENV_CONFIG, path)])),
        Err(config::ConfigError::Parse(_))
    ));
}

struct EnvGuard(&'static [&'static str]);

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in self.0 {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }
}

const TOUCHED: &[&str] = &[
    config::ENV_CONFIG,
    config::ENV_SEED,
    config::ENV_CARD_STYLE,
];

#[test]
#[serial]
fn cfg_command_reports_process_environment() {
    let _guard = EnvGuard(TOUCHED);
    unsafe {
        std::env::remove_var(config::ENV_CONFIG);
        std::env::set_var(config::ENV_SEED, "31");
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["handrank", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["seed"]["value"], 31);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["card_style"]["source"], "default");
}

#[test]
#[serial]
fn config_seed_drives_deal_and_flag_wins() {
    let _guard = EnvGuard(TOUCHED);
    unsafe {
        std::env::set_var(config::ENV_SEED, "5");
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(run(["handrank", "deal"], &mut out, &mut err), 0);
    assert!(String::from_utf8_lossy(&out).starts_with("Seed: 5\n"));

    let mut out: Vec<u8> = Vec::new();
    assert_eq!(run(["handrank", "deal", "--seed", "6"], &mut out, &mut err), 0);
    assert!(String::from_utf8_lossy(&out).starts_with("Seed: 6\n"));
}

#[test]
#[serial]
fn unicode_card_style_changes_output() {
    let _guard = EnvGuard(TOUCHED);
    unsafe {
        std::env::set_var(config::ENV_CARD_STYLE, "unicode");
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["handrank", "eval", "Ah", "Kh", "Qh", "Jh", "Th"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("A♥"));
}

#[test]
#[serial]
fn invalid_environment_fails_every_command() {
    let _guard = EnvGuard(TOUCHED);
    unsafe {
        std::env::set_var(config::ENV_SEED, "not-a-number");
    }

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["handrank", "cfg"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).starts_with("Error: Invalid configuration: Invalid seed"));
}
