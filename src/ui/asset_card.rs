use eframe::egui::{
    Align, Color32, CornerRadius, Grid, Layout, Response, RichText, Sense, Stroke, StrokeKind, Ui,
    UiBuilder,
};
use egui_plot::{Line, Plot, PlotPoints};

use crate::domain::Asset;
use crate::ui::styles::{UiStyleExt, border_color, border_width, change_color};
use crate::ui::utils::{format_change, format_compact, format_count, format_price};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::padded_bounds;

/// What the user did to a card this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardAction {
    None,
    Flip,
    Delete,
}

/// Draw one flippable card. Clicking anywhere flips it; the back face carries the delete button.
pub(crate) fn render_asset_card(ui: &mut Ui, asset: &Asset, flipped: bool) -> CardAction {
    let layout = UI_CONFIG.card;
    let (rect, response) = ui.allocate_exact_size(layout.size, Sense::click());
    let change = asset.change_24h();
    let hovered = response.hovered();

    if ui.is_rect_visible(rect) {
        let base = if hovered {
            UI_CONFIG.colors.card_fill_hover
        } else {
            UI_CONFIG.colors.card_fill
        };
        // Faint wash of the direction colour over the card body
        let fill = blend(base, change_color(change), 0.08);
        ui.painter().rect(
            rect,
            CornerRadius::same(8),
            fill,
            Stroke::new(border_width(change, hovered), border_color(change)),
            StrokeKind::Inside,
        );
    }

    let mut action = CardAction::None;
    let mut face = ui.new_child(
        UiBuilder::new()
            .max_rect(rect.shrink(layout.padding))
            .layout(Layout::top_down(Align::Min)),
    );
    if flipped {
        if render_back(&mut face, asset) {
            action = CardAction::Delete;
        }
    } else if render_front(&mut face, asset, change).clicked() {
        // The sparkline sits on top of the card and swallows its clicks
        action = CardAction::Flip;
    }

    if action == CardAction::None && response.clicked() {
        action = CardAction::Flip;
    }
    response.on_hover_text(&UI_TEXT.tooltip_flip);
    action
}

fn blend(base: Color32, tint: Color32, amount: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * amount).round() as u8;
    Color32::from_rgb(
        mix(base.r(), tint.r()),
        mix(base.g(), tint.g()),
        mix(base.b(), tint.b()),
    )
}

/// Returns the sparkline response.
fn render_front(ui: &mut Ui, asset: &Asset, change: f64) -> Response {
    let color = change_color(change);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&asset.symbol)
                        .size(26.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent_blue),
                );
                if let Some(token) = asset.token.as_ref().filter(|t| t.verified) {
                    let hover = format!("{} {}", UI_TEXT.tooltip_verified, token.contract_address);
                    ui.label(RichText::new(&UI_TEXT.icon_verified).color(UI_CONFIG.colors.up))
                        .on_hover_text(hover);
                }
            });
            ui.label_subdued(&asset.name);
            if let Some(token) = &asset.token {
                ui.label(
                    RichText::new(token.short_address())
                        .small()
                        .color(UI_CONFIG.colors.text_faint),
                );
            }
        });
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            let arrow = if asset.is_up() {
                &UI_TEXT.icon_up
            } else {
                &UI_TEXT.icon_down
            };
            ui.label(
                RichText::new(format!("{} {:.2}%", arrow, change))
                    .size(16.0)
                    .strong()
                    .color(color),
            );
        });
    });

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        ui.horizontal(|ui| {
            let spark = sparkline(ui, asset, color);
            ui.with_layout(Layout::right_to_left(Align::Max), |ui| {
                ui.label(
                    RichText::new(format!("${}", format_price(asset.price)))
                        .size(24.0)
                        .strong()
                        .color(Color32::WHITE),
                );
            });
            spark
        })
        .inner
    })
    .inner
}

fn sparkline(ui: &mut Ui, asset: &Asset, color: Color32) -> Response {
    let size = UI_CONFIG.card.sparkline_size;
    let points: Vec<[f64; 2]> = asset
        .price_history
        .prices()
        .enumerate()
        .map(|(i, p)| [i as f64, p])
        .collect();
    let labels: Vec<String> = asset.price_history.iter().map(|p| p.time.clone()).collect();

    let mut plot = Plot::new(("sparkline", asset.id.as_str()))
        .width(size.x)
        .height(size.y)
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .label_formatter(move |_, point| {
            let time = labels
                .get(point.x.round().max(0.0) as usize)
                .map(String::as_str)
                .unwrap_or_default();
            format!("${}\n{}", format_price(point.y), time)
        });
    if let Some((lo, hi)) = padded_bounds(asset.price_history.prices(), 0.05) {
        plot = plot.include_y(lo).include_y(hi);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(Line::new("", PlotPoints::new(points)).color(color).width(2.0));
    })
    .response
}

/// Returns true when delete was clicked.
fn render_back(ui: &mut Ui, asset: &Asset) -> bool {
    let colors = &UI_CONFIG.colors;
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&asset.name)
                    .strong()
                    .color(colors.accent_teal),
            );
            ui.label_subdued(format!("({})", asset.symbol));
        });
    });

    Grid::new(("card_back", asset.id.as_str()))
        .num_columns(2)
        .spacing([8.0, 2.0])
        .show(ui, |ui| {
            ui.metric(
                &UI_TEXT.label_market_cap,
                &format!("${}", format_compact(asset.market_cap)),
                colors.accent_teal,
            );
            ui.metric(
                &UI_TEXT.label_volume,
                &format!("${}", format_compact(asset.volume_24h)),
                colors.accent_blue,
            );
            ui.end_row();

            ui.metric(
                &UI_TEXT.label_high,
                &format!("${}", format_price(asset.high_24h)),
                colors.up,
            );
            ui.metric(
                &UI_TEXT.label_low,
                &format!("${}", format_price(asset.low_24h)),
                colors.down,
            );
            ui.end_row();

            ui.metric(
                &UI_TEXT.label_total_supply,
                &format_count(asset.total_supply),
                colors.accent_yellow,
            );
            ui.end_row();

            if let Some(token) = &asset.token {
                ui.metric(
                    &UI_TEXT.label_buy_tax,
                    &format!("{}%", token.buy_tax),
                    colors.down,
                );
                ui.metric(
                    &UI_TEXT.label_sell_tax,
                    &format!("{}%", token.sell_tax),
                    colors.down,
                );
                ui.end_row();
                ui.metric(
                    &UI_TEXT.label_max_tx,
                    &format_count(token.max_tx_amount),
                    colors.accent_yellow,
                );
                ui.metric(
                    &UI_TEXT.label_max_wallet,
                    &format_count(token.max_wallet_size),
                    colors.accent_yellow,
                );
                ui.end_row();
            }

            ui.metric(
                &UI_TEXT.label_volume_change,
                &format_change(asset.volume_change_24h),
                change_color(asset.volume_change_24h),
            );
            ui.end_row();
        });

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("${}", format_price(asset.price)))
                    .size(18.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.button(RichText::new(&UI_TEXT.icon_delete).color(colors.text_subdued))
                    .on_hover_text(format!("{} {}", UI_TEXT.tooltip_delete, asset.name))
                    .clicked()
            })
            .inner
        })
        .inner
    })
    .inner
}
