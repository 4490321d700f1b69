//! Configuration for layout geometry, render styling, and input limits.
//!
//! Load order: `.linkmap/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level Linkmap configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkmapConfig {
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub input: InputConfig,
}

/// Ring layout geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Ring radius R shared by every layer.
    pub radius: f64,
    /// Vertical distance H between consecutive layers: layer i sits at z = i * H.
    pub layer_spacing: f64,
}

/// Styling handed to the scene builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Radius of the sphere drawn for each page.
    pub marker_radius: f64,
    pub marker_color: String,
    pub segment_color: String,
}

/// Limits applied to input documents before a graph is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Reject documents with more records than this.
    pub max_pages: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            layer_spacing: 3.0,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            marker_radius: 0.3,
            marker_color: "#000000".to_string(),
            segment_color: "#0000ff".to_string(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(value: Option<String>, target: &mut T) {
    if let Some(v) = value
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl LinkmapConfig {
    /// Load config from `.linkmap/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".linkmap").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|var| std::env::var(var).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `LINKMAP_*` overrides read through `lookup`. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        env_override(lookup("LINKMAP_RADIUS"), &mut self.layout.radius);
        env_override(
            lookup("LINKMAP_LAYER_SPACING"),
            &mut self.layout.layer_spacing,
        );
        if let Some(n) = lookup("LINKMAP_MAX_PAGES").and_then(|v| v.parse().ok()) {
            self.input.max_pages = Some(n);
        }
    }

    /// Reject a document holding more records than `input.max_pages`.
    pub fn check_page_count(&self, count: usize) -> Result<()> {
        if let Some(max) = self.input.max_pages
            && count > max
        {
            anyhow::bail!(
                "document has {} records, above the configured limit of {}",
                count,
                max
            );
        }
        Ok(())
    }

    /// Reject geometry that would collapse or explode the layout.
    pub fn validate(&self) -> Result<()> {
        let LayoutConfig {
            radius,
            layer_spacing,
        } = self.layout;
        if !(radius.is_finite() && radius > 0.0) {
            anyhow::bail!("layout.radius must be a positive number, got {}", radius);
        }
        if !(layer_spacing.is_finite() && layer_spacing > 0.0) {
            anyhow::bail!(
                "layout.layer_spacing must be a positive number, got {}",
                layer_spacing
            );
        }
        if !(self.render.marker_radius.is_finite() && self.render.marker_radius > 0.0) {
            anyhow::bail!(
                "render.marker_radius must be a positive number, got {}",
                self.render.marker_radius
            );
        }
        Ok(())
    }
}
