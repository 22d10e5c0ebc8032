mod mock_fs;

mod discovery_tests;
mod preset_tests;
