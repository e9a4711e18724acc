//! nomopi demo - builds a small scene and prints the computed layout.
//!
//! Usage: `nomopi-demo [settings.json] [WIDTHxHEIGHT]`

use anyhow::{Context, bail};
use nomopi::{
    Align, Color, Container, Label, Padding, Settings, Size, Ui, WidgetId, WidgetKind,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_SURFACE: Size = Size::new(1280, 720);

fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut settings_path = None;
    let mut surface = DEFAULT_SURFACE;
    for arg in std::env::args().skip(1) {
        match parse_size(&arg) {
            Some(size) => surface = size,
            None if settings_path.is_none() => settings_path = Some(arg),
            None => bail!("unexpected argument: {arg}"),
        }
    }

    let settings = match &settings_path {
        Some(path) => Settings::load(path).with_context(|| format!("loading settings from {path}"))?,
        None => Settings::default(),
    };

    tracing::info!("Starting nomopi demo at {}x{}", surface.width, surface.height);

    let mut ui = Ui::new(settings);
    let root = build_scene(&mut ui)?;
    ui.set_root_widget(root)?;
    ui.set_surface_size(surface);

    for warning in ui.last_warnings() {
        tracing::warn!("{} at depth {}: {}", warning.widget, warning.depth, warning.message);
    }

    print_tree(&ui, root, 0);
    Ok(())
}

/// A dark panel holding a red and a green box; the green box shows a label.
fn build_scene(ui: &mut Ui) -> anyhow::Result<WidgetId> {
    let root = ui.insert(
        Container::vbox()
            .background_color(Color::rgb8(50, 50, 50))
            .padding(Padding::all(0.05))
            .spacing(0.05),
    )?;
    let red = ui.insert(Container::vbox().background_color(Color::rgb8(255, 0, 0)))?;
    let green = ui.insert(Container::vbox().background_color(Color::rgb8(0, 255, 0)))?;
    let label = ui.insert(
        Label::new()
            .text("Source string")
            .max_h_spacing(0.15)
            .h_spacing(1.0)
            .font_size(0.9)
            .align(Align::Center, Align::Top),
    )?;

    ui.add_child(root, red)?;
    ui.add_child(root, green)?;
    ui.add_child(green, label)?;
    Ok(root)
}

fn parse_size(arg: &str) -> Option<Size> {
    let (width, height) = arg.split_once('x')?;
    Some(Size::new(width.parse().ok()?, height.parse().ok()?))
}

fn print_tree(ui: &Ui, id: WidgetId, depth: usize) {
    let Some(node) = ui.tree().get(id) else {
        return;
    };
    let b = node.bounds();
    let indent = "  ".repeat(depth);
    let detail = match node.kind() {
        WidgetKind::Label(label) => {
            let m = label.metrics();
            format!(
                " \"{}\" font {}px (max {}px), letter spacing {}px",
                label.display_text(),
                m.font_size,
                m.max_font_size,
                m.h_spacing
            )
        }
        WidgetKind::Container(c) => format!(
            " inner {}x{}, spacing {}px",
            c.inner_width(),
            c.inner_height(),
            c.frame().spacing
        ),
        _ => String::new(),
    };
    println!(
        "{indent}{} {} ({}, {}) {}x{}{detail}",
        node.name(),
        id,
        b.x,
        b.y,
        b.width,
        b.height
    );
    for child in node.children() {
        print_tree(ui, *child, depth + 1);
    }
}
