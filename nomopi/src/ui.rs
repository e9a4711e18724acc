//! Ui - the root holder binding a widget tree to a host surface.
//!
//! The Ui owns the widget arena, the settings and the localization state.
//! Whenever the surface size, the root widget or the active language
//! changes, it lays the root out again to cover the whole surface.

use crate::error::{LayoutError, Result};
use crate::i18n::{Dictionary, Localization};
use crate::layout::{self, LayoutWarning};
use crate::primitives::{Rect, Size};
use crate::settings::Settings;
use crate::text::{MonospaceMeasure, TextMeasure};
use crate::widget::{Widget, WidgetEnv, WidgetId, WidgetKind, WidgetTree};

pub struct Ui {
    tree: WidgetTree,
    root: Option<WidgetId>,
    surface: Size,
    settings: Settings,
    localization: Localization,
    measure: Box<dyn TextMeasure>,
    /// Warnings from the most recent layout pass.
    warnings: Vec<LayoutWarning>,
}

impl Ui {
    /// A Ui measuring text with [`MonospaceMeasure`].
    pub fn new(settings: Settings) -> Self {
        Self::with_measure(settings, MonospaceMeasure::default())
    }

    /// A Ui measuring text with a host-provided measure.
    pub fn with_measure(settings: Settings, measure: impl TextMeasure + 'static) -> Self {
        Self {
            tree: WidgetTree::new(),
            root: None,
            surface: Size::ZERO,
            settings,
            localization: Localization::new(),
            measure: Box::new(measure),
            warnings: Vec::new(),
        }
    }

    // =====================================================================
    // Tree building
    // =====================================================================

    /// Validate a widget and add it to the arena, unattached.
    ///
    /// Translatable text is resolved through the active language right away.
    pub fn insert(&mut self, widget: impl Into<WidgetKind>) -> Result<WidgetId> {
        let id = self.tree.insert(widget, &self.settings)?;
        if let Some(node) = self.tree.get_mut(id) {
            node.kind_mut()
                .as_widget_mut()
                .translate(self.localization.active());
        }
        Ok(id)
    }

    /// Append `child` to the container `parent`.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<()> {
        if self.root == Some(child) {
            return Err(LayoutError::AlreadyParented(child));
        }
        self.tree.add_child(parent, child)
    }

    /// Remove a widget and its subtree. Removing the root clears it.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        self.tree.remove(id)?;
        if self.root == Some(id) {
            tracing::info!("Root widget {} removed", id);
            self.root = None;
        }
        Ok(())
    }

    /// Make `id` the root and lay it out over the surface.
    pub fn set_root_widget(&mut self, id: WidgetId) -> Result<()> {
        let node = self.tree.node(id)?;
        if node.parent().is_some() {
            return Err(LayoutError::AlreadyParented(id));
        }
        tracing::info!("Root widget set to {} {}", node.name(), id);
        self.root = Some(id);
        self.update_layout();
        Ok(())
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Mutable access to the arena, for widget state changes.
    ///
    /// Call [`Ui::update_layout`] afterwards if the change affects geometry.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    // =====================================================================
    // Layout
    // =====================================================================

    /// Resize the host surface and lay the root out again.
    pub fn set_surface_size(&mut self, size: Size) {
        if self.surface != size {
            tracing::debug!("Surface resized to {}x{}", size.width, size.height);
        }
        self.surface = size;
        self.update_layout();
    }

    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Lay the root out over the whole surface. No-op without a root.
    pub fn update_layout(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        let env = WidgetEnv {
            measure: self.measure.as_ref(),
            settings: &self.settings,
        };
        let bounds = Rect::new(0, 0, self.surface.width, self.surface.height);
        self.warnings = layout::layout(&mut self.tree, root, bounds, &env);
    }

    /// Warnings from the most recent layout pass.
    pub fn last_warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    // =====================================================================
    // Localization
    // =====================================================================

    /// Register a dictionary for a language, merging with entries already
    /// known for it. The first language added becomes active.
    ///
    /// Widgets are re-translated when the dictionary lands in the active
    /// language.
    pub fn add_dictionary(&mut self, language: impl Into<String>, dictionary: Dictionary) {
        let language = language.into();
        self.localization.add_dictionary(language.as_str(), dictionary);
        if self.localization.language() == Some(language.as_str()) {
            self.translate();
        }
    }

    /// Load a JSON dictionary from the localization folder.
    pub fn load_dictionary(&mut self, language: impl Into<String>, file: &str) -> Result<()> {
        let dictionary = Dictionary::load(self.settings.localization_path(file))?;
        self.add_dictionary(language, dictionary);
        Ok(())
    }

    /// Replace a label's text and resolve it through the active language.
    pub fn set_label_text(&mut self, id: WidgetId, text: impl Into<String>) -> Result<()> {
        let label = self
            .tree
            .label_mut(id)
            .ok_or(LayoutError::NotALabel(id))?;
        label.set_text(text);
        label.translate(self.localization.active());
        self.update_layout();
        Ok(())
    }

    /// Switch the active language and re-translate every widget.
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        self.localization.set_language(language)?;
        tracing::info!("Language set to {}", language);
        self.translate();
        Ok(())
    }

    pub fn language(&self) -> Option<&str> {
        self.localization.language()
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    /// Re-resolve translatable text on every widget, then lay out again
    /// since font fits depend on the text.
    pub fn translate(&mut self) {
        let dictionary = self.localization.active();
        for root in self.tree.roots() {
            layout::pass::translate(&mut self.tree, root, dictionary);
        }
        self.update_layout();
    }

    // =====================================================================
    // Per frame
    // =====================================================================

    /// Advance animations under the root by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(root) = self.root {
            layout::pass::tick(&mut self.tree, root, dt);
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SizePolicy;
    use crate::widget::{Container, Label};

    #[test]
    fn test_root_covers_surface() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::vbox()).unwrap();
        ui.set_root_widget(root).unwrap();
        ui.set_surface_size(Size::new(800, 600));

        assert_eq!(ui.tree().bounds(root), Some(Rect::new(0, 0, 800, 600)));
        assert_eq!(ui.surface_size(), Size::new(800, 600));
    }

    #[test]
    fn test_update_layout_without_root_is_noop() {
        let mut ui = Ui::new(Settings::default());
        ui.set_surface_size(Size::new(100, 100));
        assert!(ui.root().is_none());
        assert!(ui.last_warnings().is_empty());
    }

    #[test]
    fn test_root_cannot_become_child() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::vbox()).unwrap();
        let other = ui.insert(Container::hbox()).unwrap();
        ui.set_root_widget(root).unwrap();

        assert!(matches!(
            ui.add_child(other, root),
            Err(LayoutError::AlreadyParented(_))
        ));
    }

    #[test]
    fn test_child_cannot_become_root() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::vbox()).unwrap();
        let child = ui.insert(Label::new()).unwrap();
        ui.add_child(root, child).unwrap();

        assert!(matches!(
            ui.set_root_widget(child),
            Err(LayoutError::AlreadyParented(_))
        ));
        assert!(matches!(
            ui.set_root_widget(WidgetId::from_index(42)),
            Err(LayoutError::UnknownWidget(_))
        ));
    }

    #[test]
    fn test_remove_root_clears_it() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::vbox()).unwrap();
        ui.set_root_widget(root).unwrap();
        ui.remove(root).unwrap();
        assert!(ui.root().is_none());
    }

    #[test]
    fn test_set_language_translates_and_relayouts() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::vbox()).unwrap();
        let label = ui.insert(Label::new().text("hello")).unwrap();
        ui.add_child(root, label).unwrap();
        ui.set_root_widget(root).unwrap();
        ui.set_surface_size(Size::new(1000, 100));

        ui.add_dictionary("en", Dictionary::from_entries([("hello", "Hello")]));
        ui.add_dictionary("de", Dictionary::from_entries([("hello", "Hallo Welt")]));
        assert_eq!(ui.language(), Some("en"));
        assert_eq!(ui.tree().label(label).unwrap().display_text(), "Hello");

        ui.set_language("de").unwrap();
        let label_state = ui.tree().label(label).unwrap();
        assert_eq!(label_state.display_text(), "Hallo Welt");
        // 10 cells * 0.5 * f <= 1000 and f <= 100
        assert_eq!(label_state.metrics().max_font_size, 100);

        assert!(ui.set_language("xx").is_err());
        assert_eq!(ui.language(), Some("de"));
    }

    #[test]
    fn test_merging_into_active_language_retranslates() {
        let mut ui = Ui::new(Settings::default());
        ui.add_dictionary("en", Dictionary::from_entries([("a", "A")]));
        let label = ui.insert(Label::new().text("b")).unwrap();
        assert_eq!(ui.tree().label(label).unwrap().display_text(), "b");

        ui.add_dictionary("en", Dictionary::from_entries([("b", "B")]));
        assert_eq!(ui.tree().label(label).unwrap().display_text(), "B");

        // Entries for an inactive language wait for set_language
        ui.add_dictionary("de", Dictionary::from_entries([("b", "Be")]));
        assert_eq!(ui.tree().label(label).unwrap().display_text(), "B");
    }

    #[test]
    fn test_set_label_text_uses_active_language() {
        let mut ui = Ui::new(Settings::default());
        ui.add_dictionary("fr", Dictionary::from_entries([("no", "non")]));
        let root = ui.insert(Container::vbox()).unwrap();
        let label = ui.insert(Label::new().text("yes")).unwrap();
        ui.add_child(root, label).unwrap();
        ui.set_root_widget(root).unwrap();

        ui.set_label_text(label, "no").unwrap();
        let state = ui.tree().label(label).unwrap();
        assert_eq!(state.key(), "no");
        assert_eq!(state.display_text(), "non");

        assert!(matches!(
            ui.set_label_text(root, "x"),
            Err(LayoutError::NotALabel(_))
        ));
    }

    #[test]
    fn test_insert_translates_with_active_language() {
        let mut ui = Ui::new(Settings::default());
        ui.add_dictionary("fr", Dictionary::from_entries([("yes", "oui")]));

        let translated = ui.insert(Label::new().text("yes")).unwrap();
        let literal = ui
            .insert(Label::new().text("yes").translatable(false))
            .unwrap();
        assert_eq!(ui.tree().label(translated).unwrap().display_text(), "oui");
        assert_eq!(ui.tree().label(literal).unwrap().display_text(), "yes");
    }

    #[test]
    fn test_load_dictionary_from_localization_folder() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            root_folder: dir.path().to_path_buf(),
            ..Settings::default()
        };
        std::fs::create_dir_all(settings.localization_path("")).unwrap();
        std::fs::write(settings.localization_path("es.json"), r#"{ "yes": "sí" }"#).unwrap();

        let mut ui = Ui::new(settings);
        let label = ui.insert(Label::new().text("yes")).unwrap();
        ui.load_dictionary("es", "es.json").unwrap();
        assert_eq!(ui.tree().label(label).unwrap().display_text(), "sí");
        assert!(ui.load_dictionary("it", "it.json").is_err());
    }

    #[test]
    fn test_clamping_warning_surfaces() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::hbox()).unwrap();
        let wide = ui
            .insert(Label::new().policy(SizePolicy::pixels(500)))
            .unwrap();
        ui.add_child(root, wide).unwrap();
        ui.set_root_widget(root).unwrap();
        ui.set_surface_size(Size::new(300, 50));

        assert_eq!(ui.last_warnings().len(), 1);
        ui.set_surface_size(Size::new(600, 50));
        assert!(ui.last_warnings().is_empty());
    }

    #[test]
    fn test_tick_advances_typing() {
        let mut ui = Ui::new(Settings::default());
        let root = ui.insert(Container::vbox()).unwrap();
        let label = ui
            .insert(Label::new().text("abcd").translatable(false).typing(2.0))
            .unwrap();
        ui.add_child(root, label).unwrap();
        ui.set_root_widget(root).unwrap();

        assert_eq!(ui.tree().label(label).unwrap().visible_text(), "");
        ui.tick(1.0);
        assert_eq!(ui.tree().label(label).unwrap().visible_text(), "ab");
        ui.tick(5.0);
        assert_eq!(ui.tree().label(label).unwrap().visible_text(), "abcd");
    }
}
