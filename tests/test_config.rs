use std::path::PathBuf;

use pavilion::config::Config;

fn temp_config_file(tag: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "pavilion-config-{}-{}.yaml",
        tag,
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_config_defaults_and_env_overrides() {
    // Env vars are process-global and tests run in parallel, so the whole
    // remove/set/remove sequence lives in one test.
    unsafe {
        std::env::remove_var("CONFIG");
        std::env::remove_var("LISTEN");
        std::env::remove_var("WEB_ROOT");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:35000");
    assert_eq!(cfg.web_root, PathBuf::from("static"));

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
        std::env::set_var("WEB_ROOT", "www");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.web_root, PathBuf::from("www"));

    unsafe {
        std::env::remove_var("LISTEN");
        std::env::remove_var("WEB_ROOT");
    }
}

#[test]
fn test_config_from_yaml_file() {
    let path = temp_config_file("full", "listen_addr: \"0.0.0.0:9000\"\nweb_root: \"www\"\n");

    let cfg = Config::from_file(&path).unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:9000");
    assert_eq!(cfg.web_root, PathBuf::from("www"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_file_missing_fields_use_defaults() {
    let path = temp_config_file("partial", "listen_addr: \"127.0.0.1:4000\"\n");

    let cfg = Config::from_file(&path).unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:4000");
    assert_eq!(cfg.web_root, PathBuf::from("static"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    let path = temp_config_file("invalid", "listen_addr: [oops");

    let result = Config::from_file(&path);
    assert!(result.is_err());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_missing_file_is_an_error() {
    let path = PathBuf::from("/nonexistent/pavilion-config.yaml");

    let result = Config::from_file(&path);
    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg = Config {
        listen_addr: "127.0.0.1:8000".to_string(),
        web_root: PathBuf::from("static"),
    };

    let copy = cfg.clone();
    assert_eq!(copy.listen_addr, cfg.listen_addr);
    assert_eq!(copy.web_root, cfg.web_root);
}
