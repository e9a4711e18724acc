//! Path and font configuration.
//!
//! `Settings` is built once at startup and handed by reference to whatever
//! needs to resolve texture, font or localization paths. It can be loaded
//! from a JSON file; missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Resource folders and default fonts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root folder all other folders are relative to.
    pub root_folder: PathBuf,
    pub textures_folder: PathBuf,
    pub localization_folder: PathBuf,
    pub fonts_folder: PathBuf,
    /// Texture used for container backgrounds without an explicit texture.
    pub white_background: String,
    /// Registered default fonts, addressed by index.
    pub default_fonts: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_folder: PathBuf::from(".noMorePixels"),
            textures_folder: PathBuf::from("textures"),
            localization_folder: PathBuf::from("localization"),
            fonts_folder: PathBuf::from("fonts"),
            white_background: String::from("white.png"),
            default_fonts: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&contents)?;
        tracing::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Parse settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Path of a localization file.
    pub fn localization_path(&self, file: &str) -> PathBuf {
        self.root_folder.join(&self.localization_folder).join(file)
    }

    /// Path of a font file.
    pub fn fonts_path(&self, font: &str) -> PathBuf {
        self.root_folder.join(&self.fonts_folder).join(font)
    }

    /// Path of a texture file.
    pub fn textures_path(&self, texture: &str) -> PathBuf {
        self.root_folder.join(&self.textures_folder).join(texture)
    }

    /// Path of the plain white background texture.
    pub fn white_background(&self) -> PathBuf {
        self.textures_path(&self.white_background)
    }

    /// Register a default font and return its index.
    pub fn add_default_font(&mut self, font: impl Into<String>) -> usize {
        self.default_fonts.push(font.into());
        self.default_fonts.len() - 1
    }

    /// Full path of a registered default font.
    pub fn default_font(&self, index: usize) -> Result<PathBuf> {
        self.default_fonts
            .get(index)
            .map(|font| self.fonts_path(font))
            .ok_or(LayoutError::UnknownFont(index))
    }
}
