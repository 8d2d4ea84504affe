//! Floating statistics window, the in-app counterpart of the `stats` command

use egui::{Grid, ProgressBar, RichText};

use crate::analytics::Statistics;
use crate::gui::constants::{STATUS_OFFLINE, TEXT_WEAK};
use crate::report;

pub fn show(ctx: &egui::Context, open: &mut bool, stats: &Statistics) {
    egui::Window::new("Campaign statistics")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .show(ctx, |ui| {
            totals(ui, stats);
            ui.separator();
            platform_bars(ui, stats);

            if !stats.recent_clicks.is_empty() {
                ui.separator();
                recent_clicks(ui, stats);
            }

            if stats.write_failures > 0 {
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "{} write failure(s) this run; counts may lag on disk",
                        stats.write_failures
                    ))
                    .color(STATUS_OFFLINE),
                );
            }
        });
}

fn totals(ui: &mut egui::Ui, stats: &Statistics) {
    Grid::new("kiosk_stats_totals")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label("Total visits");
            ui.label(stats.total_visits.to_string());
            ui.end_row();

            ui.label("Link clicks");
            ui.label(stats.total_clicks.to_string());
            ui.end_row();

            ui.label("Sessions");
            ui.label(stats.total_sessions.to_string());
            ui.end_row();

            ui.label("First visit");
            ui.label(report::local(stats.first_visit));
            ui.end_row();

            ui.label("Last visit");
            ui.label(
                stats
                    .last_visit
                    .map(report::local)
                    .unwrap_or_else(|| "never".to_string()),
            );
            ui.end_row();
        });
}

fn platform_bars(ui: &mut egui::Ui, stats: &Statistics) {
    ui.label(RichText::new("Clicks by platform").strong());
    for (platform, clicks) in stats.platform_breakdown.by_platform() {
        let share = stats.percentage(clicks);
        ui.add(
            ProgressBar::new((share / 100.0) as f32).text(format!(
                "{}  {} ({:.1}%)",
                platform.label(),
                clicks,
                share
            )),
        );
    }
}

fn recent_clicks(ui: &mut egui::Ui, stats: &Statistics) {
    ui.label(RichText::new("Recent clicks").strong());
    Grid::new("kiosk_stats_recent")
        .num_columns(3)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for click in &stats.recent_clicks {
                ui.label(click.platform.label());
                ui.label(report::local(click.timestamp));
                ui.label(
                    RichText::new(format!("..{}", report::id_tail(&click.session_id)))
                        .color(TEXT_WEAK),
                );
                ui.end_row();
            }
        });
}

