#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::config::loader::{
        CONFIG_ENV_VAR, ConfigError, get_config_file_path, load_config_from_path,
        save_config_to_path,
    };
    use crate::config::{Config, HorizontalInput};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    // Helper function to create a test config path
    fn create_test_config_path() -> (tempfile::TempDir, PathBuf) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("test_config.toml");
        (temp_dir, config_path)
    }

    #[test]
    fn test_load_nonexistent_config() {
        let (_temp_dir, config_path) = create_test_config_path();
        assert!(!config_path.exists());

        // Loading a non-existent config should create a default one
        let config = load_config_from_path(&config_path).expect("Failed to load default config");

        assert!(config_path.exists(), "Config file should have been created");
        assert_eq!(config.controls.horizontal, HorizontalInput::Pointer);
        assert_eq!(config.display.fps, 60);
        assert_eq!(config.assets.len(), 4);
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp_dir, config_path) = create_test_config_path();

        let mut config = Config::default();
        config.controls.horizontal = HorizontalInput::Keys;
        config.controls.move_speed = 9.0;
        config.display.fps = 30;
        config.gameplay.seed = Some(1234);

        save_config_to_path(&config, &config_path).expect("Failed to save config");
        let loaded = load_config_from_path(&config_path).expect("Failed to load config");

        assert_eq!(loaded.controls.horizontal, HorizontalInput::Keys);
        assert_eq!(loaded.controls.move_speed, 9.0);
        assert_eq!(loaded.display.fps, 30);
        assert_eq!(loaded.gameplay.seed, Some(1234));
        assert_eq!(loaded.assets, config.assets);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");

        save_config_to_path(&Config::default(), &config_path).expect("Failed to save config");
        assert!(config_path.exists());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let (_temp_dir, config_path) = create_test_config_path();
        fs::write(&config_path, "[controls]\nhorizontal = \"keys\"\n")
            .expect("Failed to write config");

        let config = load_config_from_path(&config_path).expect("Failed to load config");

        assert_eq!(config.controls.horizontal, HorizontalInput::Keys);
        assert_eq!(config.controls.move_speed, 7.0);
        assert_eq!(config.display.fps, 60);
        assert_eq!(config.gameplay.seed, None);
        assert!(config.assets.contains_key("coconut"));
    }

    #[test]
    fn test_invalid_config() {
        let (_temp_dir, config_path) = create_test_config_path();
        fs::write(&config_path, "this is not valid TOML").expect("Failed to write invalid config");

        let result = load_config_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_input_mode_rejected() {
        let (_temp_dir, config_path) = create_test_config_path();
        fs::write(&config_path, "[controls]\nhorizontal = \"joystick\"\n")
            .expect("Failed to write config");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("invalid config file"));
    }

    #[test]
    fn test_config_path_env_override() {
        let (_temp_dir, config_path) = create_test_config_path();

        // Only this test touches the variable
        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, &config_path);
        }
        let resolved = get_config_file_path();
        unsafe {
            std::env::remove_var(CONFIG_ENV_VAR);
        }

        assert_eq!(resolved, config_path);
    }
}
