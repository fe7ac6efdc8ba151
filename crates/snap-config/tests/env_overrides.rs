use figment::Jail;
use snap_config::SnapConfig;

#[test]
fn env_overrides_toml_values() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        jail.create_dir(".snapgen")?;
        jail.create_file(
            ".snapgen/config.toml",
            "[generator]\ntest_folder_name = \"from-toml\"\n",
        )?;
        jail.set_env("SNAPGEN_GENERATOR__TEST_FOLDER_NAME", "from-env");

        let config = SnapConfig::load(None).expect("config loads");
        assert_eq!(config.generator.test_folder_name, "from-env");
        Ok(())
    });
}

#[test]
fn env_sets_runtime_binary() {
    Jail::expect_with(|jail| {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
        jail.set_env("SNAPGEN_RUNTIME__NODE_BINARY", "nodejs");

        let config = SnapConfig::load(None).expect("config loads");
        assert_eq!(config.runtime.node_binary, "nodejs");
        Ok(())
    });
}
