// src/utils/io.rs
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "passgen.env";

/// Get the application config directory. Nothing is created on disk.
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "rustpassgen", "passgen") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::debug!("Could not determine config directory");
            None
        }
    }
}

// Path of the optional per-user env file, if the platform has a config dir
pub fn get_config_file_path() -> Option<PathBuf> {
    get_app_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
