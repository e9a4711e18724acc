//! CheckBox - a two-state toggle drawn from a background and a tick texture.

use std::path::PathBuf;

use crate::error::Result;
use crate::layout::SizePolicy;
use crate::primitives::Rect;

use super::{Widget, WidgetEnv};

const DEFAULT_BACKGROUND: &str = "checkbox_background.png";
const DEFAULT_TICK: &str = "checkbox_tick.png";

#[derive(Debug, Clone)]
pub struct CheckBox {
    policy: SizePolicy,
    checked: bool,
    background_texture: String,
    tick_texture: String,
    bounds: Rect,
    /// Texture paths resolved on the last resize: (background, tick).
    resolved: Option<(PathBuf, PathBuf)>,
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckBox {
    pub fn new() -> Self {
        Self {
            policy: SizePolicy::default(),
            checked: false,
            background_texture: DEFAULT_BACKGROUND.to_string(),
            tick_texture: DEFAULT_TICK.to_string(),
            bounds: Rect::ZERO,
            resolved: None,
        }
    }

    pub fn policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Texture file names under the textures folder.
    pub fn textures(mut self, background: impl Into<String>, tick: impl Into<String>) -> Self {
        self.background_texture = background.into();
        self.tick_texture = tick.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.policy.validate()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Texture to draw for the current state, once resized.
    pub fn current_texture(&self) -> Option<&PathBuf> {
        self.resolved
            .as_ref()
            .map(|(background, tick)| if self.checked { tick } else { background })
    }
}

impl Widget for CheckBox {
    fn policy(&self) -> SizePolicy {
        self.policy
    }

    fn resize(&mut self, bounds: Rect, env: &WidgetEnv<'_>) {
        self.bounds = bounds;
        self.resolved = Some((
            env.settings.textures_path(&self.background_texture),
            env.settings.textures_path(&self.tick_texture),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::text::MonospaceMeasure;

    #[test]
    fn test_toggle() {
        let mut check = CheckBox::new();
        assert!(!check.is_checked());
        assert!(check.toggle());
        assert!(!check.toggle());
        check.set_checked(true);
        assert!(check.is_checked());
    }

    #[test]
    fn test_texture_follows_state() {
        let settings = Settings::default();
        let measure = MonospaceMeasure::default();
        let env = WidgetEnv { measure: &measure, settings: &settings };

        let mut check = CheckBox::new().textures("off.png", "on.png");
        assert!(check.current_texture().is_none());

        check.resize(Rect::new(0, 0, 16, 16), &env);
        assert_eq!(check.current_texture(), Some(&settings.textures_path("off.png")));
        check.toggle();
        assert_eq!(check.current_texture(), Some(&settings.textures_path("on.png")));
    }
}
