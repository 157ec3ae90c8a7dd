use eframe::{
    Frame,
    egui::{
        Align, Button, CentralPanel, Context, FontId, Layout, RichText, ScrollArea, TopBottomPanel,
        Ui,
    },
};
use strum::IntoEnumIterator;

use crate::{
    Cli,
    app::LendingView,
    config::DF,
    domain::AssetFilter,
    engine::{DashboardStore, StoreEvent},
    ui::{
        CardAction, UI_CONFIG, UI_TEXT, UiStyleExt, render_api_table, render_asset_card,
        render_contract_table, render_lending_panel, setup_custom_visuals,
    },
    utils::AppInstant,
};

pub struct App {
    store: DashboardStore,
    lending_view: LendingView,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut store = DashboardStore::new(args.seed, AppInstant::now());

        // Store changes are the only reason to repaint outside of input
        let ctx = cc.egui_ctx.clone();
        store.subscribe(move |event| {
            if DF.log_lifecycle && matches!(event, StoreEvent::TornDown) {
                log::info!("Dashboard store released");
            }
            ctx.request_repaint();
        });

        Self {
            store,
            lending_view: LendingView::default(),
        }
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&UI_TEXT.app_title)
                                .size(28.0)
                                .strong()
                                .color(UI_CONFIG.colors.accent_teal),
                        );
                        ui.label_subdued(&UI_TEXT.app_subtitle);
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let refreshing = self.store.is_refreshing();
                        let text = if refreshing {
                            UI_TEXT.label_refreshing.as_str()
                        } else {
                            UI_TEXT.button_refresh.as_str()
                        };
                        let label = ui.button_text_primary(text);
                        if ui.add_enabled(!refreshing, Button::new(label)).clicked() {
                            self.store.refresh(AppInstant::now());
                        }
                    });
                });
                ui.add_space(8.0);
                self.render_filter_tabs(ui);
            });
    }

    fn render_filter_tabs(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let active = self.store.active_filter();
            for filter in AssetFilter::iter() {
                if ui
                    .interactive_label(
                        &filter.to_string(),
                        filter == active,
                        UI_CONFIG.colors.label,
                        FontId::proportional(14.0),
                    )
                    .clicked()
                {
                    self.store.set_filter(filter);
                }
            }
        });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_market(ui);
                        ui.add_space(24.0);

                        section_heading(ui, &UI_TEXT.heading_lending);
                        if render_lending_panel(ui, &self.store, &mut self.lending_view) {
                            self.store.refresh_lending_rates(AppInstant::now());
                        }
                        ui.add_space(24.0);

                        section_heading(ui, &UI_TEXT.heading_technical);
                        ui.columns(2, |cols| {
                            render_api_table(&mut cols[0]);
                            render_contract_table(&mut cols[1]);
                        });
                    });
            });
    }

    fn render_market(&mut self, ui: &mut Ui) {
        section_heading(ui, &UI_TEXT.heading_market);

        let mut actions: Vec<(String, CardAction)> = Vec::new();
        let visible = self.store.visible_assets();
        if visible.is_empty() {
            ui.label_subdued(&UI_TEXT.label_empty_watchlist);
        }
        ui.horizontal_wrapped(|ui| {
            let gap = UI_CONFIG.card.spacing;
            ui.spacing_mut().item_spacing = [gap, gap].into();
            for asset in visible {
                let action = render_asset_card(ui, asset, self.store.is_flipped(&asset.id));
                if action != CardAction::None {
                    actions.push((asset.id.clone(), action));
                }
            }
        });

        // Apply after drawing so the card list is not mutated mid-frame
        for (id, action) in actions {
            match action {
                CardAction::Flip => {
                    self.store.toggle_flip(&id);
                }
                CardAction::Delete => {
                    self.store.delete_asset(&id);
                }
                CardAction::None => {}
            }
        }
    }
}

fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(20.0)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
    ui.add_space(8.0);
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = AppInstant::now();
        crate::trace_time!("Store poll", 500, {
            self.store.poll(now);
        });

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);

        // Wake up for the next tick or deferred commit even without input
        if let Some(deadline) = self.store.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(AppInstant::now()));
        }
    }
}
