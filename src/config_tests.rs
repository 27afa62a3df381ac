#![allow(clippy::unwrap_used)]

use figment::Jail;

use super::*;

// Everything that reads `SPENDTUI_*` runs inside a `Jail`, which serialises
// environment access and restores it afterwards.

fn load(path: Option<&Path>) -> figment::error::Result<Config> {
    Config::load_from(path).map_err(|e| format!("{e:#}").into())
}

#[test]
fn test_defaults_without_file() {
    Jail::expect_with(|_| {
        let config = load(None)?;
        assert_eq!(config, Config::default());
        assert!(config.notifications);
        assert_eq!(config.log_filter, "info");
        Ok(())
    });
}

#[test]
fn test_missing_file_is_ignored() {
    Jail::expect_with(|jail| {
        let config = load(Some(&jail.directory().join("nope.toml")))?;
        assert_eq!(config, Config::default());
        Ok(())
    });
}

#[test]
fn test_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "notifications = false\nexport_dir = \"/tmp/exports\"\nlog_filter = \"debug\"\n",
        )?;
        let config = load(Some(&jail.directory().join("config.toml")))?;
        assert!(!config.notifications);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
        assert_eq!(config.log_filter, "debug");
        assert!(config.data_dir.is_none());
        Ok(())
    });
}

#[test]
fn test_env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            "notifications = true\nexport_dir = \"/tmp/from-file\"\n",
        )?;
        jail.set_env("SPENDTUI_NOTIFICATIONS", "false");
        jail.set_env("SPENDTUI_EXPORT_DIR", "/tmp/from-env");

        let config = load(Some(&jail.directory().join("config.toml")))?;
        assert!(!config.notifications);
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/from-env"));
        Ok(())
    });
}

#[test]
fn test_env_data_dir_without_file() {
    Jail::expect_with(|jail| {
        jail.set_env("SPENDTUI_DATA_DIR", "/tmp/spendtui-data");
        let config = load(None)?;
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/spendtui-data")));
        Ok(())
    });
}

#[test]
fn test_log_env_is_not_a_config_key() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "log_filter = \"warn\"\n")?;
        jail.set_env("SPENDTUI_LOG", "trace");

        let config = load(Some(&jail.directory().join("config.toml")))?;
        assert_eq!(config.log_filter, "warn");
        assert_eq!(
            config,
            Config {
                log_filter: "warn".into(),
                ..Config::default()
            }
        );
        Ok(())
    });
}

#[test]
fn test_bad_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "notifications = [1, 2]\n")?;
        assert!(Config::load_from(Some(&jail.directory().join("config.toml"))).is_err());
        Ok(())
    });
}

#[test]
fn test_bad_env_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("SPENDTUI_NOTIFICATIONS", "sometimes");
        assert!(Config::load_from(None).is_err());
        Ok(())
    });
}

#[test]
fn test_data_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().join("a").join("b")),
        ..Config::default()
    };
    let data = config.data_dir().unwrap();
    assert!(data.is_dir());
}

#[test]
fn test_shellexpand() {
    assert_eq!(shellexpand("/abs/out.csv"), PathBuf::from("/abs/out.csv"));
    assert_eq!(shellexpand("rel.csv"), PathBuf::from("rel.csv"));
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    assert_eq!(
        shellexpand("~/out.csv"),
        PathBuf::from(&home).join("out.csv")
    );
    assert_eq!(shellexpand("~"), PathBuf::from(&home));
    assert_eq!(shellexpand("~user/x"), PathBuf::from("~user/x"));
}
