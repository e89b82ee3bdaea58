use eframe::egui;
use log::{error, info};

use expense_tracker_egui::config::AppConfig;
use expense_tracker_egui::ui::ExpenseTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Expense Tracker");

    let config = AppConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 480.0])
            .with_title("Expense Tracker 💰")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Expense Tracker",
        options,
        Box::new(move |cc| match ExpenseTrackerApp::new(cc, &config) {
            Ok(app) => {
                info!("Successfully initialized Expense Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
