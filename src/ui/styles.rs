use std::sync::LazyLock;

use colorgrad::{Gradient, GradientBuilder, LinearGradient};
use eframe::egui::{
    Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui, Vec2,
    WidgetInfo, WidgetType,
};

use crate::ui::UI_CONFIG;

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

fn build_gradient(stops: &[&str]) -> Option<LinearGradient> {
    match GradientBuilder::new()
        .html_colors(stops)
        .build::<LinearGradient>()
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("Bad border gradient {:?}: {}", stops, e);
            None
        }
    }
}

static UP_GRADIENT: LazyLock<Option<LinearGradient>> =
    LazyLock::new(|| build_gradient(&UI_CONFIG.up_gradient));
static DOWN_GRADIENT: LazyLock<Option<LinearGradient>> =
    LazyLock::new(|| build_gradient(&UI_CONFIG.down_gradient));

fn to_egui_color(color: colorgrad::Color) -> Color32 {
    let rgba8 = color.to_rgba8();
    Color32::from_rgb(rgba8[0], rgba8[1], rgba8[2])
}

/// Green when flat or up, red when down.
pub fn change_color(pct: f64) -> Color32 {
    if pct >= 0.0 {
        UI_CONFIG.colors.up
    } else {
        UI_CONFIG.colors.down
    }
}

/// 0 below 2%, 1 from 2%, 2 from 5% (absolute move).
pub fn change_tier(pct: f64) -> usize {
    let abs = pct.abs();
    if abs >= 5.0 {
        2
    } else if abs >= 2.0 {
        1
    } else {
        0
    }
}

/// Card border: bigger moves get a deeper shade.
pub fn border_color(pct: f64) -> Color32 {
    let gradient = if pct >= 0.0 { &*UP_GRADIENT } else { &*DOWN_GRADIENT };
    match gradient {
        Some(g) => to_egui_color(g.at(change_tier(pct) as f32 / 2.0)),
        None => change_color(pct),
    }
}

pub fn border_width(pct: f64, hovered: bool) -> f32 {
    let base = UI_CONFIG.card.border_widths[change_tier(pct)];
    if hovered {
        base + UI_CONFIG.card.hover_border_boost
    } else {
        base
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, blue bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn button_text_primary(&self, text: impl Into<String>) -> RichText;
}

impl UiStyleExt for Ui {
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(8.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (UI_CONFIG.colors.card_fill_hover, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, UI_CONFIG.colors.heading)
            } else {
                (Color32::TRANSPARENT, idle_color)
            };

            if is_selected || response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(UI_CONFIG.colors.text_subdued),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text).strong());
    }

    fn button_text_primary(&self, text: impl Into<String>) -> RichText {
        RichText::new(text).strong().color(Color32::WHITE)
    }
}
