//! Label - a text widget that sizes its font to its box.
//!
//! Without wrapping, a label picks the largest font size at which its text
//! fits the assigned box, then scales it by `font_size` (a fraction of that
//! maximum). Letter and line spacing are expressed as fractions of the font
//! size so they shrink and grow with it.
//!
//! With wrapping, the font size is simply `font_size * height`; the host is
//! responsible for breaking lines.

use std::path::PathBuf;

use crate::error::Result;
use crate::i18n::Dictionary;
use crate::layout::{Align, SizePolicy};
use crate::primitives::Rect;
use crate::settings::Settings;
use crate::text::{FitMode, FitRequest, fit_font_size};

use super::{Widget, WidgetEnv};

/// Pixel metrics computed on the last resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelMetrics {
    /// Largest font size that fits the box.
    pub max_font_size: u32,
    /// Applied font size.
    pub font_size: u32,
    /// Letter spacing at the maximum setting.
    pub max_h_spacing: u32,
    /// Line spacing at the maximum setting.
    pub max_v_spacing: u32,
    /// Applied letter spacing.
    pub h_spacing: u32,
    /// Applied line spacing.
    pub v_spacing: u32,
}

/// A text label.
#[derive(Debug, Clone)]
pub struct Label {
    policy: SizePolicy,
    /// Text as set by the caller; the dictionary key when translatable.
    key: String,
    /// Text shown: the translation of `key`, or `key` itself.
    text: String,
    translatable: bool,
    font_size: f32,
    wrap: bool,
    max_h_spacing: f32,
    max_v_spacing: f32,
    h_spacing: f32,
    v_spacing: f32,
    align: (Align, Align),
    default_font: Option<usize>,
    fit_mode: FitMode,
    typing_completion: f32,
    /// Characters revealed per second while typing.
    typing_speed: Option<f32>,
    bounds: Rect,
    font: Option<PathBuf>,
    metrics: LabelMetrics,
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl Label {
    pub fn new() -> Self {
        Self {
            policy: SizePolicy::default(),
            key: String::new(),
            text: String::new(),
            translatable: true,
            font_size: 1.0,
            wrap: false,
            max_h_spacing: 0.0,
            max_v_spacing: 0.0,
            h_spacing: 0.0,
            v_spacing: 0.0,
            align: (Align::Center, Align::Center),
            default_font: None,
            fit_mode: FitMode::default(),
            typing_completion: 1.0,
            typing_speed: None,
            bounds: Rect::ZERO,
            font: None,
            metrics: LabelMetrics::default(),
        }
    }

    /// Set the sizing policy.
    pub fn policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the text. Translatable text is looked up by this key.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Whether the text is a dictionary key (default) or literal text.
    pub fn translatable(mut self, translatable: bool) -> Self {
        self.translatable = translatable;
        self
    }

    /// Font size as a fraction of the largest size that fits, in [0, 1].
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size.clamp(0.0, 1.0);
        self
    }

    /// Let the host wrap text instead of fitting it on its lines.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Largest letter spacing, as a fraction of the font size.
    pub fn max_h_spacing(mut self, spacing: f32) -> Self {
        self.max_h_spacing = spacing.max(0.0);
        self
    }

    /// Largest line spacing, as a fraction of the font size.
    pub fn max_v_spacing(mut self, spacing: f32) -> Self {
        self.max_v_spacing = spacing.max(0.0);
        self
    }

    /// Applied letter spacing, as a fraction of the largest.
    pub fn h_spacing(mut self, spacing: f32) -> Self {
        self.h_spacing = spacing.clamp(0.0, 1.0);
        self
    }

    /// Applied line spacing, as a fraction of the largest.
    pub fn v_spacing(mut self, spacing: f32) -> Self {
        self.v_spacing = spacing.clamp(0.0, 1.0);
        self
    }

    /// Horizontal and vertical text alignment.
    pub fn align(mut self, horizontal: Align, vertical: Align) -> Self {
        self.align = (horizontal, vertical);
        self
    }

    /// Use a default font registered in the settings.
    pub fn default_font(mut self, index: usize) -> Self {
        self.default_font = Some(index);
        self
    }

    /// Font fitting precision.
    pub fn fit_mode(mut self, mode: FitMode) -> Self {
        self.fit_mode = mode;
        self
    }

    /// Reveal text over time at `chars_per_second`, starting empty.
    pub fn typing(mut self, chars_per_second: f32) -> Self {
        self.typing_speed = Some(chars_per_second.max(0.0));
        self.typing_completion = 0.0;
        self
    }

    /// Replace the text. Resets any typing animation to the start.
    ///
    /// The shown text is the raw key until the label is translated again;
    /// `Ui::set_label_text` does both.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.key = text.into();
        self.text = self.key.clone();
        if self.typing_speed.is_some() {
            self.typing_completion = 0.0;
        }
    }

    /// Set how much of the text is revealed, in [0, 1].
    pub fn set_typing_completion(&mut self, completion: f32) {
        self.typing_completion = completion.clamp(0.0, 1.0);
    }

    /// Settings-dependent checks, run when the label joins a UI.
    pub fn validate(&self, settings: &Settings) -> Result<()> {
        self.policy.validate()?;
        if let Some(index) = self.default_font {
            settings.default_font(index)?;
        }
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Full text shown once typing completes.
    pub fn display_text(&self) -> &str {
        &self.text
    }

    /// Text revealed so far.
    pub fn visible_text(&self) -> &str {
        if self.typing_completion >= 1.0 {
            return &self.text;
        }
        let total = self.text.chars().count();
        let shown = (total as f32 * self.typing_completion).round() as usize;
        match self.text.char_indices().nth(shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn typing_completion(&self) -> f32 {
        self.typing_completion
    }

    pub fn is_translatable(&self) -> bool {
        self.translatable
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrap
    }

    pub fn alignment(&self) -> (Align, Align) {
        self.align
    }

    /// Resolved font file, after a resize.
    pub fn font(&self) -> Option<&PathBuf> {
        self.font.as_ref()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn metrics(&self) -> LabelMetrics {
        self.metrics
    }

    fn compute_metrics(&self, env: &WidgetEnv<'_>) -> LabelMetrics {
        let height = self.bounds.height;

        let max_font_size = if self.wrap {
            (height as f32 * self.font_size).floor() as u32
        } else {
            let request = FitRequest {
                text: &self.text,
                bounds: self.bounds.size(),
                h_spacing: self.max_h_spacing,
                v_spacing: self.max_v_spacing,
                font: self.font.as_deref(),
            };
            fit_font_size(env.measure, &request, self.fit_mode)
        };

        let font_size = if self.wrap {
            max_font_size
        } else {
            (max_font_size as f32 * self.font_size).floor() as u32
        };

        let max_h_spacing = (max_font_size as f32 * self.max_h_spacing).floor() as u32;
        let max_v_spacing = (max_font_size as f32 * self.max_v_spacing).floor() as u32;

        LabelMetrics {
            max_font_size,
            font_size,
            max_h_spacing,
            max_v_spacing,
            h_spacing: (max_h_spacing as f32 * self.h_spacing).floor() as u32,
            v_spacing: (max_v_spacing as f32 * self.v_spacing).floor() as u32,
        }
    }
}

impl Widget for Label {
    fn policy(&self) -> SizePolicy {
        self.policy
    }

    fn resize(&mut self, bounds: Rect, env: &WidgetEnv<'_>) {
        self.bounds = bounds;
        self.font = self
            .default_font
            .and_then(|index| env.settings.default_font(index).ok());
        self.metrics = self.compute_metrics(env);
    }

    fn translate(&mut self, dictionary: Option<&Dictionary>) {
        if !self.translatable {
            return;
        }
        self.text = match dictionary {
            Some(dictionary) => dictionary.translate(&self.key).to_string(),
            None => self.key.clone(),
        };
    }

    fn tick(&mut self, dt: f32) {
        let Some(speed) = self.typing_speed else {
            return;
        };
        if self.typing_completion >= 1.0 {
            return;
        }
        let total = self.text.chars().count();
        if total == 0 {
            self.typing_completion = 1.0;
            return;
        }
        let step = dt.max(0.0) * speed / total as f32;
        self.typing_completion = (self.typing_completion + step).min(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMeasure;

    fn resized(label: Label, width: u32, height: u32) -> Label {
        let settings = Settings::default();
        let measure = MonospaceMeasure::default();
        let env = WidgetEnv { measure: &measure, settings: &settings };
        let mut label = label;
        label.resize(Rect::new(0, 0, width, height), &env);
        label
    }

    #[test]
    fn test_label_defaults() {
        let label = Label::new().text("Source string");
        assert_eq!(label.key(), "Source string");
        assert_eq!(label.display_text(), "Source string");
        assert!(label.is_translatable());
        assert!(!label.is_wrapping());
        assert_eq!(label.alignment(), (Align::Center, Align::Center));
        assert_eq!(label.visible_text(), "Source string");
    }

    #[test]
    fn test_font_size_is_clamped() {
        let label = resized(Label::new().text("Hi").font_size(3.0), 1000, 40);
        assert_eq!(label.metrics().font_size, 40);
    }

    #[test]
    fn test_fit_by_height() {
        // "Hello" at size 40 is 100px wide: height bound wins
        let label = resized(Label::new().text("Hello"), 300, 40);
        assert_eq!(label.metrics().max_font_size, 40);
        assert_eq!(label.metrics().font_size, 40);
    }

    #[test]
    fn test_fit_by_width_and_scale() {
        // 2.5 * f <= 50 -> f = 20; 0.5 of that -> 10
        let label = resized(Label::new().text("Hello").font_size(0.5), 50, 100);
        assert_eq!(label.metrics().max_font_size, 20);
        assert_eq!(label.metrics().font_size, 10);
    }

    #[test]
    fn test_spacing_metrics() {
        let label = resized(
            Label::new()
                .text("Hi")
                .max_h_spacing(0.5)
                .h_spacing(0.5)
                .max_v_spacing(0.25)
                .v_spacing(1.0),
            1000,
            40,
        );
        let m = label.metrics();
        assert_eq!(m.max_font_size, 40);
        assert_eq!(m.max_h_spacing, 20);
        assert_eq!(m.h_spacing, 10);
        assert_eq!(m.max_v_spacing, 10);
        assert_eq!(m.v_spacing, 10);
    }

    #[test]
    fn test_wrap_uses_height_fraction() {
        let label = resized(
            Label::new().text("a very long text").wrap(true).font_size(0.5),
            10,
            60,
        );
        assert_eq!(label.metrics().max_font_size, 30);
        assert_eq!(label.metrics().font_size, 30);
    }

    #[test]
    fn test_translate() {
        let dict = Dictionary::from_entries([("greeting", "Hallo")]);
        let mut label = Label::new().text("greeting");
        label.translate(Some(&dict));
        assert_eq!(label.display_text(), "Hallo");
        assert_eq!(label.key(), "greeting");

        label.translate(None);
        assert_eq!(label.display_text(), "greeting");
    }

    #[test]
    fn test_literal_text_is_not_translated() {
        let dict = Dictionary::from_entries([("greeting", "Hallo")]);
        let mut label = Label::new().text("greeting").translatable(false);
        label.translate(Some(&dict));
        assert_eq!(label.display_text(), "greeting");
    }

    #[test]
    fn test_typing_animation() {
        let mut label = Label::new().typing(2.0).text("abcd");
        assert_eq!(label.visible_text(), "");

        label.tick(0.5);
        assert_eq!(label.visible_text(), "a");
        label.tick(0.5);
        assert_eq!(label.visible_text(), "ab");
        label.tick(10.0);
        assert_eq!(label.typing_completion(), 1.0);
        assert_eq!(label.visible_text(), "abcd");
    }

    #[test]
    fn test_typing_completion_manual() {
        let mut label = Label::new().text("héllo");
        label.set_typing_completion(0.4);
        assert_eq!(label.visible_text(), "hé");
        label.set_typing_completion(-1.0);
        assert_eq!(label.visible_text(), "");
    }

    #[test]
    fn test_default_font_validation() {
        let mut settings = Settings::default();
        let label = Label::new().default_font(0);
        assert!(label.validate(&settings).is_err());

        settings.add_default_font("mono.ttf");
        assert!(label.validate(&settings).is_ok());
    }

    #[test]
    fn test_resize_resolves_font() {
        let mut settings = Settings::default();
        settings.add_default_font("mono.ttf");
        let measure = MonospaceMeasure::default();
        let env = WidgetEnv { measure: &measure, settings: &settings };

        let mut label = Label::new().text("x").default_font(0);
        label.resize(Rect::new(0, 0, 10, 10), &env);
        assert_eq!(label.font(), Some(&settings.fonts_path("mono.ttf")));
    }
}
