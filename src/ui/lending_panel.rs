use eframe::egui::{Align, Button, ComboBox, FontId, Grid, Layout, RichText, Ui};
use egui_plot::{GridMark, Line, Plot, PlotPoints, Points};
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

use crate::app::{LendingTab, LendingView};
use crate::domain::{LendingRateHistory, LendingRateSummary, SummaryField};
use crate::engine::DashboardStore;
use crate::ui::styles::UiStyleExt;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{
    epoch_ms_to_date_string, epoch_ms_to_date_time_string, format_duration, now_timestamp_ms,
    padded_bounds,
};

/// Lending rates panel. Returns true when the user asked for a refresh.
pub(crate) fn render_lending_panel(
    ui: &mut Ui,
    store: &DashboardStore,
    view: &mut LendingView,
) -> bool {
    let mut refresh_clicked = false;

    UI_CONFIG.section_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&UI_TEXT.lending_title)
                        .size(18.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent_teal),
                );
                ui.label_subdued(&UI_TEXT.lending_subtitle);
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let loading = store.is_lending_loading();
                let text = if loading {
                    UI_TEXT.label_refreshing.as_str()
                } else {
                    UI_TEXT.button_refresh.as_str()
                };
                let label = ui.button_text_primary(text);
                if ui.add_enabled(!loading, Button::new(label)).clicked() {
                    refresh_clicked = true;
                }
            });
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for tab in LendingTab::iter() {
                if ui
                    .interactive_label(
                        &tab.to_string(),
                        view.tab == tab,
                        UI_CONFIG.colors.label,
                        FontId::proportional(14.0),
                    )
                    .clicked()
                {
                    view.tab = tab;
                }
            }
            ui.add_space(16.0);
            ComboBox::from_id_salt("lending_ccy")
                .selected_text(&view.ccy)
                .show_ui(ui, |ui| {
                    for ccy in store.currencies() {
                        let label = ccy.clone();
                        ui.selectable_value(&mut view.ccy, ccy, label);
                    }
                });
        });
        ui.add_space(8.0);

        match view.tab {
            LendingTab::Summary => match store.lending_summary(&view.ccy) {
                Some(summary) => render_summary(ui, summary),
                None => empty_note(ui, &UI_TEXT.lending_no_summary, &view.ccy),
            },
            LendingTab::History => {
                let rows = store.lending_history_for(&view.ccy);
                if rows.is_empty() {
                    empty_note(ui, &UI_TEXT.lending_no_history, &view.ccy);
                } else {
                    render_history(ui, &rows);
                }
            }
        }
    });

    refresh_clicked
}

fn empty_note(ui: &mut Ui, text: &str, ccy: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label_subdued(format!("{} {}", text, ccy));
        ui.add_space(24.0);
    });
}

/// "0.1300%" from a decimal rate string; the raw string if it does not parse.
fn percent_text(raw: &str) -> String {
    match crate::domain::rate_as_percent(raw) {
        Ok(pct) => format!("{:.4}%", pct),
        Err(_) => raw.to_string(),
    }
}

fn date_text(ts: &str, with_time: bool) -> String {
    let formatted = crate::utils::parse_epoch_ms(ts).and_then(|ms| {
        if with_time {
            epoch_ms_to_date_time_string(ms)
        } else {
            epoch_ms_to_date_string(ms)
        }
    });
    formatted.unwrap_or_else(|_| ts.to_string())
}

fn percent_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format!("{:.4}%", mark.value)
}

fn render_summary(ui: &mut Ui, summary: &LendingRateSummary) {
    let colors = &UI_CONFIG.colors;
    ui.columns(3, |cols| {
        for (col, field) in cols.iter_mut().zip(SummaryField::iter()) {
            UI_CONFIG.tile_frame().show(col, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label_subdued(field.to_string());
                let color = match field {
                    SummaryField::Average => colors.accent_blue,
                    SummaryField::Highest => colors.up,
                    SummaryField::Lowest => colors.down,
                };
                ui.label(
                    RichText::new(percent_text(summary.field(field)))
                        .size(20.0)
                        .strong()
                        .color(color),
                );
            });
        }
    });
    ui.add_space(8.0);

    // Lowest -> Average -> Highest, left to right
    let order = [SummaryField::Lowest, SummaryField::Average, SummaryField::Highest];
    let values: Vec<[f64; 2]> = order
        .iter()
        .enumerate()
        .filter_map(|(i, f)| summary.rate(*f).ok().map(|r| [i as f64, r * 100.0]))
        .collect();

    UI_CONFIG.tile_frame().show(ui, |ui| {
        ui.label_subheader(&UI_TEXT.lending_rate_comparison);
        rate_plot(ui, ("rate_comparison", summary.ccy.as_str()), values, move |x| {
            match x.round() as i64 {
                0 => "Lowest".to_string(),
                1 => "Average".to_string(),
                2 => "Highest".to_string(),
                _ => String::new(),
            }
        });
    });

    let age = summary
        .ts_ms()
        .map(|ts| format!(" ({} ago)", format_duration(now_timestamp_ms() - ts)))
        .unwrap_or_default();
    ui.label(
        RichText::new(format!(
            "{}: {}{}",
            UI_TEXT.lending_last_updated,
            date_text(&summary.ts, true),
            age
        ))
        .small()
        .color(colors.text_faint),
    );
}

fn render_history(ui: &mut Ui, rows: &[&LendingRateHistory]) {
    let dates: Vec<String> = rows.iter().map(|h| date_text(&h.ts, false)).collect();
    let values: Vec<[f64; 2]> = rows
        .iter()
        .enumerate()
        .filter_map(|(i, h)| h.rate_value().ok().map(|r| [i as f64, r * 100.0]))
        .collect();

    let ccy = rows.first().map(|h| h.ccy.as_str()).unwrap_or_default();
    let labels = dates.clone();
    rate_plot(ui, ("rate_history", ccy), values, move |x| {
        labels
            .get(x.round().max(0.0) as usize)
            .cloned()
            .unwrap_or_default()
    });
    ui.add_space(8.0);

    Grid::new(("rate_history_table", ccy))
        .striped(true)
        .num_columns(2)
        .min_col_width(120.0)
        .show(ui, |ui| {
            ui.label(RichText::new(&UI_TEXT.lending_col_date).color(UI_CONFIG.colors.accent_blue));
            ui.label(RichText::new(&UI_TEXT.lending_col_rate).color(UI_CONFIG.colors.up));
            ui.end_row();
            for (row, date) in rows.iter().zip(&dates) {
                ui.label(date);
                ui.label(RichText::new(percent_text(&row.rate)).color(UI_CONFIG.colors.up));
                ui.end_row();
            }
        });
}

/// Line with dots over integer x positions; `x_label` names each position in the hover text.
fn rate_plot(
    ui: &mut Ui,
    id: (&str, &str),
    values: Vec<[f64; 2]>,
    x_label: impl Fn(f64) -> String + 'static,
) {
    let color = UI_CONFIG.colors.accent_blue;
    let mut plot = Plot::new(id)
        .height(UI_CONFIG.rate_chart_height)
        .show_axes([false, true])
        .y_axis_formatter(percent_axis)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .label_formatter(move |_, point| format!("{}\nRate: {:.4}%", x_label(point.x), point.y));
    if let Some((lo, hi)) = padded_bounds(values.iter().map(|p| p[1]), 0.1) {
        plot = plot.include_y(lo).include_y(hi);
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new("", PlotPoints::new(values.clone()))
                .color(color)
                .width(2.0),
        );
        plot_ui.points(
            Points::new("", PlotPoints::new(values))
                .color(color)
                .radius(5.0),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_render_as_four_decimal_percent() {
        assert_eq!(percent_text("0.0013"), "0.1300%");
        assert_eq!(percent_text("bad"), "bad");
    }

    #[test]
    fn unparsable_timestamps_fall_back_to_raw() {
        assert_eq!(date_text("not-a-ts", false), "not-a-ts");
        assert_eq!(date_text("1646438400000", false).len(), 10);
    }
}
