#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::assets::{AssetCatalog, AssetError, SpriteSize};
    use crate::collision::Rect;
    use crate::config::{Config, SpriteConfig};

    #[test]
    fn test_default_sprites_load() {
        let config = Config::default();
        let catalog = AssetCatalog::load(&config.assets).expect("default sprites are valid");

        assert_eq!(catalog, AssetCatalog::default());
        assert_eq!(catalog.coconut, SpriteSize::new(40.0, 40.0));
    }

    #[test]
    fn test_missing_sprite() {
        let mut config = Config::default();
        config.assets.remove("coconut");

        let result = AssetCatalog::load(&config.assets);
        assert_eq!(result, Err(AssetError::Missing("coconut".to_string())));
    }

    #[test]
    fn test_invalid_sprite_size() {
        let mut config = Config::default();
        config.assets.insert(
            "basket".to_string(),
            SpriteConfig {
                width: 0.0,
                height: 80.0,
            },
        );

        let err = AssetCatalog::load(&config.assets).unwrap_err();
        assert!(matches!(err, AssetError::InvalidSize { ref name, .. } if name == "basket"));
        assert!(err.to_string().contains("basket"));
    }

    #[test]
    fn test_custom_sprite_sizes_flow_into_collision_boxes() {
        let mut config = Config::default();
        config.assets.insert(
            "basket".to_string(),
            SpriteConfig {
                width: 200.0,
                height: 50.0,
            },
        );

        let catalog = AssetCatalog::load(&config.assets).expect("valid sprites");
        let catcher = crate::components::Catcher::default();

        assert_eq!(
            catcher.basket_box(&catalog),
            Rect::new(340.0, 440.0, 200.0, 50.0)
        );
    }

    #[test]
    fn test_background_fills_matching_screen() {
        let catalog = AssetCatalog::default();
        assert_eq!(
            catalog.background_placement(),
            Rect::new(0.0, 0.0, 800.0, 600.0)
        );
    }

    #[test]
    fn test_wide_background_is_letterboxed() {
        let catalog = AssetCatalog {
            background: SpriteSize::new(1600.0, 900.0),
            ..AssetCatalog::default()
        };

        assert_eq!(
            catalog.background_placement(),
            Rect::new(0.0, 75.0, 800.0, 450.0)
        );
    }

    #[test]
    fn test_app_from_config_fails_on_missing_sprite() {
        let mut config = Config::default();
        config.assets.remove("monkey");

        assert!(matches!(
            App::from_config(&config),
            Err(AssetError::Missing(name)) if name == "monkey"
        ));
    }

    #[test]
    fn test_app_from_config_with_seed() {
        let mut config = Config::default();
        config.gameplay.seed = Some(99);

        let app = App::from_config(&config).expect("default config is valid");
        assert!(app.session().is_none());
    }
}
