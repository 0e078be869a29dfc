use crate::animations::{AnimationRule, AnimationStyle, StyleSheet};
use crate::style::Color;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The effective configuration: file values with command line overrides applied on top.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// The id of the element the glyph cycler drives.
    pub(crate) target: String,

    /// The elements on stage, drawn top to bottom.
    pub(crate) elements: Vec<ElementConfig>,

    pub(crate) animation: AnimationConfig,

    pub(crate) render: RenderConfig,

    /// The default tracing filter.
    pub(crate) log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            elements: vec![ElementConfig { id: DEFAULT_TARGET.to_string(), ..Default::default() }],
            animation: Default::default(),
            render: Default::default(),
            log_level: "info".to_string(),
        }
    }
}

const DEFAULT_TARGET: &str = "logo";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct ElementConfig {
    pub(crate) id: String,

    #[serde(default)]
    pub(crate) text: Option<String>,

    /// The color the element starts with, before anything restyles it.
    #[serde(default)]
    pub(crate) color: Option<Color>,

    #[serde(default)]
    pub(crate) classes: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AnimationConfig {
    /// The style class that makes an element animate.
    pub(crate) class: String,

    pub(crate) style: AnimationStyle,

    /// The duration of a single iteration.
    pub(crate) duration_millis: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { class: "spin".to_string(), style: AnimationStyle::Spin, duration_millis: 1200 }
    }
}

impl AnimationConfig {
    pub(crate) fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis.max(1))
    }

    pub(crate) fn stylesheet(&self) -> StyleSheet {
        let mut sheet = StyleSheet::default();
        sheet.add_rule(AnimationRule { class: self.class.clone(), style: self.style, duration: self.duration() });
        sheet
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RenderConfig {
    pub(crate) fps: u16,

    /// The color used for elements that don't set one.
    pub(crate) foreground: Color,

    pub(crate) background: Option<Color>,

    /// Whether to draw the status line at the bottom of the screen.
    pub(crate) status: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { fps: 30, foreground: Color::new(0xd0, 0xd0, 0xd0), background: None, status: true }
    }
}

/// Overrides coming from the command line.
#[derive(Clone, Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) style: Option<AnimationStyle>,
    pub(crate) duration_millis: Option<u64>,
    pub(crate) fps: Option<u16>,
}

impl Config {
    /// Load the configuration at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::from_yaml(&contents).map_err(|e| ConfigError::Invalid(path.to_path_buf(), e))
    }

    /// Load the configuration at `path` if it exists, falling back to defaults otherwise.
    pub(crate) fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() { Self::load(path) } else { Ok(Self::default()) }
    }

    pub(crate) fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// The default configuration file path, if the platform has a config directory.
    pub(crate) fn default_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "glyphspin")?;
        Some(dirs.config_dir().join("config.yaml"))
    }

    pub(crate) fn apply(&mut self, overrides: Overrides) {
        if let Some(style) = overrides.style {
            self.animation.style = style;
        }
        if let Some(duration_millis) = overrides.duration_millis {
            self.animation.duration_millis = duration_millis;
        }
        if let Some(fps) = overrides.fps {
            self.render.fps = fps;
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Read(PathBuf, io::Error),

    #[error("invalid config file {0}: {1}")]
    Invalid(PathBuf, serde_yaml::Error),
}
