//! Optional RON overrides for [`ShowcaseConfig`], read once at startup.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use bevy::prelude::*;

use super::ShowcaseConfig;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MARS_SHOWCASE_CONFIG";

const CONFIG_DIR_NAME: &str = "mars-showcase";
const CONFIG_FILE_NAME: &str = "showcase.ron";

/// Errors that can occur while loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field:  &'static str,
        reason: String,
    },
}

fn config_path(env_override: Option<OsString>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    env_override
        .map(PathBuf::from)
        .or_else(|| config_dir.map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)))
}

pub fn parse(contents: &str) -> Result<ShowcaseConfig, ConfigError> {
    let config: ShowcaseConfig = ron::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// `Ok(None)` when there is no file at `path`.
pub fn load_from(path: &Path) -> Result<Option<ShowcaseConfig>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse(&contents).map(Some),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Never fails: anything wrong with the file is logged and the defaults are used.
pub fn load_or_default() -> ShowcaseConfig {
    let Some(path) = config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir()) else {
        debug!("no config directory on this platform, using defaults");
        return ShowcaseConfig::default();
    };

    match load_from(&path) {
        Ok(Some(config)) => {
            info!("loaded showcase config from {}", path.display());
            config
        },
        Ok(None) => {
            debug!("no config at {}, using defaults", path.display());
            ShowcaseConfig::default()
        },
        Err(error) => {
            warn!("ignoring {}: {error}", path.display());
            ShowcaseConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn partial_file_keeps_remaining_defaults() -> Result<(), Box<dyn Error>> {
        let config = parse("(smoothing_factor: 0.1, wheel_speed_per_frame: 0.3)")?;

        assert!((config.smoothing_factor - 0.1).abs() < f32::EPSILON);
        assert!((config.wheel_speed_per_frame - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.planet_framing, ShowcaseConfig::default().planet_framing);
        Ok(())
    }

    #[test]
    fn nested_framing_can_be_overridden() -> Result<(), Box<dyn Error>> {
        let config = parse("(planet_framing: (offset: (0.0, 30.0, 30.0), zoom_scale: 1.5))")?;

        assert_eq!(config.planet_framing.offset, Vec3::new(0.0, 30.0, 30.0));
        assert!((config.planet_framing.zoom_scale - 1.5).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn out_of_range_smoothing_is_invalid() {
        assert!(matches!(
            parse("(smoothing_factor: 1.5)"),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        assert!(matches!(parse("{{not ron"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_not_an_error() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;

        assert_eq!(load_from(&dir.path().join(CONFIG_FILE_NAME))?, None);
        Ok(())
    }

    #[test]
    fn file_on_disk_is_loaded() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "// tuned\n(gait_amplitude: 0.5)")?;

        let config = load_from(&path)?.ok_or("config not loaded")?;

        assert!((config.gait_amplitude - 0.5).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn directory_instead_of_file_is_a_read_error() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;

        assert!(matches!(load_from(dir.path()), Err(ConfigError::Read { .. })));
        Ok(())
    }

    #[test]
    fn env_override_wins_over_config_dir() {
        let chosen = config_path(
            Some(OsString::from("/tmp/custom.ron")),
            Some(PathBuf::from("/home/user/.config")),
        );
        assert_eq!(chosen, Some(PathBuf::from("/tmp/custom.ron")));

        let fallback = config_path(None, Some(PathBuf::from("/home/user/.config")));
        assert_eq!(
            fallback,
            Some(PathBuf::from("/home/user/.config/mars-showcase/showcase.ron"))
        );
        assert_eq!(config_path(None, None), None);
    }
}
