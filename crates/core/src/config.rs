//! Configuration path utilities for bikeshare.
//!
//! This module resolves the directory that holds the city dataset files,
//! expanding shell variables like `~` in paths.

/// Default directory for the city dataset CSV files
const DEFAULT_DATA_DIR: &str = "./data";

/// Resolves the dataset directory.
///
/// If a custom directory is provided, uses that directory. Otherwise, uses
/// the default dataset directory. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `data_dir_arg` - Optional custom dataset directory
///
/// # Returns
///
/// The resolved path to the dataset directory
///
/// # Examples
///
/// ```
/// use bikeshare_core::config::get_data_dir;
///
/// // Use default directory
/// let default_dir = get_data_dir(&None);
///
/// // Use custom directory
/// let custom_dir = get_data_dir(&Some("/srv/bikeshare/data".to_string()));
/// ```
pub fn get_data_dir(data_dir_arg: &Option<String>) -> String {
    let data_dir = match data_dir_arg {
        Some(data_dir) => data_dir,
        None => DEFAULT_DATA_DIR,
    };

    shellexpand::tilde(data_dir).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir_with_custom_path() {
        let custom_dir = Some("/srv/bikeshare/data".to_string());
        let result = get_data_dir(&custom_dir);
        assert_eq!(result, "/srv/bikeshare/data");
    }

    #[test]
    fn test_get_data_dir_with_none() {
        let result = get_data_dir(&None);
        assert_eq!(result, "./data");
    }

    #[test]
    fn test_get_data_dir_with_tilde() {
        let tilde_dir = Some("~/bikeshare-data".to_string());
        let result = get_data_dir(&tilde_dir);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("bikeshare-data"));
    }
}
