use eframe::egui::{Grid, RichText, Ui};

use crate::config::{API_CONFIG, ApiStatus, SPX_CONTRACT};
use crate::ui::styles::UiStyleExt;
use crate::ui::{UI_CONFIG, UI_TEXT};

fn header(ui: &mut Ui, cols: [&str; 3]) {
    let colors = &UI_CONFIG.colors;
    for (text, color) in cols
        .into_iter()
        .zip([colors.up, colors.accent_blue, colors.accent_yellow])
    {
        ui.label(RichText::new(text).strong().color(color));
    }
    ui.end_row();
}

pub(crate) fn render_api_table(ui: &mut Ui) {
    let colors = &UI_CONFIG.colors;
    UI_CONFIG.section_frame().show(ui, |ui| {
        ui.label(RichText::new(&UI_TEXT.api_title).size(16.0).strong());
        ui.add_space(6.0);
        Grid::new("api_config_table")
            .striped(true)
            .num_columns(3)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                header(
                    ui,
                    [
                        &UI_TEXT.api_col_provider,
                        &UI_TEXT.api_col_status,
                        &UI_TEXT.api_col_action,
                    ],
                );
                for api in API_CONFIG {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(api.name).strong().color(colors.up))
                            .on_hover_text(api.endpoint);
                        ui.label_subdued(api.description);
                    });
                    let status_color = match api.status {
                        ApiStatus::Active => colors.up,
                        ApiStatus::Maintenance | ApiStatus::Deprecated => colors.down,
                    };
                    ui.label(RichText::new(api.status.to_string()).color(status_color));
                    ui.label(RichText::new(api.action_required()).color(colors.accent_yellow))
                        .on_hover_text(api.documentation);
                    ui.end_row();
                }
            });
    });
}

pub(crate) fn render_contract_table(ui: &mut Ui) {
    let colors = &UI_CONFIG.colors;
    UI_CONFIG.section_frame().show(ui, |ui| {
        ui.label(RichText::new(&UI_TEXT.contract_title).size(16.0).strong());
        ui.label_subdued(SPX_CONTRACT.address);
        ui.add_space(6.0);
        Grid::new("contract_table")
            .striped(true)
            .num_columns(3)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                header(
                    ui,
                    [
                        &UI_TEXT.contract_col_function,
                        &UI_TEXT.contract_col_data,
                        &UI_TEXT.contract_col_notes,
                    ],
                );
                for fact in SPX_CONTRACT.facts {
                    ui.label(RichText::new(fact.function).monospace().color(colors.up));
                    ui.label(RichText::new(fact.data).color(colors.accent_blue));
                    ui.label(RichText::new(fact.notes).color(colors.accent_yellow));
                    ui.end_row();
                }
            });
    });
}
