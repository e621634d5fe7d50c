use super::core::DEFAULT_CONFIG;
use super::*;
use figment::Jail;
use std::path::Path;

fn load(custom: Option<&Path>, overrides: Option<&ConfigOverrides>) -> figment::Result<DashboardConfig> {
    DashboardConfig::load(custom, overrides).map_err(|e| format!("{e:#}").into())
}

#[test]
fn test_embedded_defaults_match_default_impl() {
    let parsed: DashboardConfig = toml::from_str(DEFAULT_CONFIG).expect("default config parses");
    assert_eq!(parsed, DashboardConfig::default());
}

#[test]
fn test_config_loads_defaults() {
    Jail::expect_with(|_jail| {
        let config = load(None, None)?;
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(
            config.inputs.coverage_path(),
            Path::new("reports_input").join("coverage.xml")
        );
        assert_eq!(
            config.outputs.html_path(),
            Path::new("dashboard_output").join("quality_dashboard.html")
        );
        Ok(())
    });
}

#[test]
fn test_repo_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "qdash.toml",
            r#"
            [inputs]
            dir = "ci/reports"

            [dashboard]
            title = "Backend Quality"
            "#,
        )?;
        let config = load(None, None)?;
        assert_eq!(config.inputs.dir, Path::new("ci/reports"));
        assert_eq!(config.inputs.coverage, "coverage.xml");
        assert_eq!(config.dashboard.title, "Backend Quality");
        Ok(())
    });
}

#[test]
fn test_custom_yaml_config() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.yaml", "outputs:\n  dir: public\n  html: index.html\n")?;
        let config = load(Some(Path::new("custom.yaml")), None)?;
        assert_eq!(config.outputs.html_path(), Path::new("public").join("index.html"));
        assert_eq!(config.outputs.json, "dashboard_data.json");
        Ok(())
    });
}

#[test]
fn test_missing_custom_config_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = DashboardConfig::load(Some(Path::new("non_existent.toml")), None);
        assert!(result.is_err(), "An explicit config file must exist");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_files() {
    Jail::expect_with(|jail| {
        jail.create_file("qdash.toml", "[outputs]\ndir = \"from-file\"\n")?;
        jail.set_env("QDASH_OUTPUTS__DIR", "from-env");
        jail.set_env("QDASH_DASHBOARD__TITLE", "Env Title");
        let config = load(None, None)?;
        assert_eq!(config.outputs.dir, Path::new("from-env"));
        assert_eq!(config.dashboard.title, "Env Title");
        Ok(())
    });
}

#[test]
fn test_cli_overrides_win() {
    Jail::expect_with(|jail| {
        jail.set_env("QDASH_INPUTS__DIR", "from-env");
        let overrides = ConfigOverrides {
            input_dir: Some("from-cli".into()),
            ..Default::default()
        };
        let config = load(None, Some(&overrides))?;
        assert_eq!(config.inputs.dir, Path::new("from-cli"));
        assert_eq!(config.outputs.dir, Path::new("dashboard_output"));
        Ok(())
    });
}

#[test]
fn test_validation_rejects_colliding_outputs() {
    let mut config = DashboardConfig::default();
    config.outputs.html = config.outputs.json.clone();
    assert!(config.validate().is_err());

    let mut config = DashboardConfig::default();
    config.inputs.pylint = "  ".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("inputs.pylint"));
}

#[test]
fn test_with_dirs() {
    let config = DashboardConfig::with_dirs("in", "out");
    assert_eq!(config.inputs.flake8_path(), Path::new("in").join("flake8-report.txt"));
    assert_eq!(config.outputs.json_path(), Path::new("out").join("dashboard_data.json"));
    assert!(config.validate().is_ok());
}
