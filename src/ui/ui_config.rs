use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke, Vec2};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,

    pub card_fill: Color32,
    pub card_fill_hover: Color32,
    pub panel_card_fill: Color32,
    pub panel_card_border: Color32,

    pub up: Color32,
    pub down: Color32,
    pub accent_blue: Color32,
    pub accent_teal: Color32,
    pub accent_yellow: Color32,
    pub text_subdued: Color32,
    pub text_faint: Color32,
}

/// Card sizing for the market grid
#[derive(Clone, Copy, Default)]
pub struct CardLayout {
    pub size: Vec2,
    pub spacing: f32,
    pub sparkline_size: Vec2,
    pub padding: f32,
    /// Border widths by |change| tier: below 2%, 2-5%, 5% and over.
    pub border_widths: [f32; 3],
    /// Extra border width while hovered.
    pub hover_border_boost: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card: CardLayout,
    /// Border gradient for each direction, from a small move to a big one.
    pub up_gradient: [&'static str; 3],
    pub down_gradient: [&'static str; 3],
    pub rate_chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::from_rgb(96, 165, 250),
        central_panel: Color32::from_rgb(3, 7, 18),
        side_panel: Color32::from_rgb(17, 24, 39),

        card_fill: Color32::from_rgb(24, 31, 44),
        card_fill_hover: Color32::from_rgb(31, 41, 55),
        panel_card_fill: Color32::from_rgb(31, 41, 55),
        panel_card_border: Color32::from_rgb(55, 65, 81),

        up: Color32::from_rgb(74, 222, 128),
        down: Color32::from_rgb(248, 113, 113),
        accent_blue: Color32::from_rgb(59, 130, 246),
        accent_teal: Color32::from_rgb(45, 212, 191),
        accent_yellow: Color32::from_rgb(250, 204, 21),
        text_subdued: Color32::from_rgb(156, 163, 175),
        text_faint: Color32::from_rgb(107, 114, 128),
    },
    card: CardLayout {
        size: Vec2::new(260.0, 208.0),
        spacing: 16.0,
        sparkline_size: Vec2::new(128.0, 64.0),
        padding: 16.0,
        border_widths: [1.0, 2.0, 4.0],
        hover_border_boost: 1.0,
    },
    up_gradient: ["#86efac", "#4ade80", "#22c55e"],
    down_gradient: ["#fca5a5", "#f87171", "#ef4444"],
    rate_chart_height: 220.0,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 12),
            ..Default::default()
        }
    }

    /// Boxed section (lending panel, info tables)
    pub fn section_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::new(1.0, self.colors.panel_card_border),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }

    /// Small metric tile inside a section
    pub fn tile_frame(&self) -> Frame {
        Frame {
            fill: self.colors.panel_card_fill,
            stroke: Stroke::new(1.0, self.colors.panel_card_border),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
    }
}
