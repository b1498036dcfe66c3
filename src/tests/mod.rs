pub mod assets_tests;
pub mod config_loader_tests;
pub mod difficulty_tests;
pub mod motion_tests;
pub mod spawner_tests;
