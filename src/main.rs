// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::{PrimaryWindow, WindowPlugin},
    winit::{UpdateMode, WinitSettings},
};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

// For loading the icon image from disk using the image crate
use image::ImageFormat as CrateImageFormat;
use winit::window::Icon as WinitIcon;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

mod api;
mod drafts;
mod marketplace;
mod pricing;
mod session;
mod settings;
mod ui;

use api::ApiClient;
use drafts::{DraftStore, FileDraftStore, MemoryDraftStore};
use marketplace::resources::{ApiHandle, DraftRepository};
use marketplace::MarketplacePlugin;
use session::SessionPlugin;
use settings::{AppSettings, FpsSetting};
use ui::AdminUiPlugin;

const DEFAULT_API_URL: &str = "http://localhost:5225/api/v1";
const API_URL_ENV_VAR: &str = "PAWBOARD_API_URL";

#[derive(Parser, Debug)]
#[command(name = "pawboard", about = "Admin console for the pet-store marketplace")]
struct Cli {
    /// Backend base URL; overrides the PAWBOARD_API_URL environment variable.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() {
    // A .env file is honored for the backend URL.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let base_url = cli
        .api_url
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let settings = settings::io::load_settings_from_file::<AppSettings>().unwrap_or_default();

    let draft_store: Arc<dyn DraftStore> = match settings::io::app_data_dir()
        .map_err(drafts::DraftError::Io)
        .and_then(|dir| FileDraftStore::new(dir.join("drafts")))
    {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("pawboard: draft files unavailable ({e}); drafts will not survive restarts.");
            Arc::new(MemoryDraftStore::default())
        }
    };

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(settings)
        .insert_resource(ApiHandle(Arc::new(ApiClient::new(base_url))))
        .insert_resource(DraftRepository(draft_store))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pawboard Admin Console".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(bevy_framepace::FramepacePlugin)
        .add_plugins(SessionPlugin)
        .add_plugins(MarketplacePlugin)
        .add_plugins(AdminUiPlugin)
        .add_systems(Startup, set_window_icon)
        .add_systems(Update, apply_fps_setting)
        .run();
}

/// Pushes the persisted FPS cap into framepace; runs again whenever the
/// settings popup changes it.
fn apply_fps_setting(
    settings: Res<AppSettings>,
    mut framepace: ResMut<bevy_framepace::FramepaceSettings>,
) {
    if !settings.is_changed() {
        return;
    }
    framepace.limiter = match settings.fps_setting {
        FpsSetting::Thirty => bevy_framepace::Limiter::from_framerate(30.0),
        FpsSetting::Sixty => bevy_framepace::Limiter::from_framerate(60.0),
        FpsSetting::ScreenHz => bevy_framepace::Limiter::Auto,
    };
}

fn set_window_icon(
    primary_window_query: Query<Entity, With<PrimaryWindow>>,
    windows: NonSend<bevy::winit::WinitWindows>,
) {
    let Ok(primary_entity) = primary_window_query.single() else {
        warn!("Could not find single primary window to set icon.");
        return;
    };

    let Some(primary_winit_window) = windows.get_window(primary_entity) else {
        warn!("Could not get winit window for primary window entity.");
        return;
    };

    let icon_path = "assets/icon.png";
    match std::fs::read(icon_path) {
        Ok(icon_bytes) => {
            match image::load_from_memory_with_format(&icon_bytes, CrateImageFormat::Png) {
                Ok(image_data) => {
                    let image_buffer = image_data.into_rgba8();
                    let (width, height) = image_buffer.dimensions();
                    let rgba_data = image_buffer.into_raw();

                    match WinitIcon::from_rgba(rgba_data, width, height) {
                        Ok(winit_icon) => {
                            primary_winit_window.set_window_icon(Some(winit_icon));
                        }
                        Err(e) => {
                            warn!("Failed to create winit window icon: {:?}", e);
                        }
                    }
                }
                Err(e) => {
                    warn!("Failed to load image data from '{}': {}", icon_path, e);
                }
            }
        }
        Err(e) => {
            debug!("No window icon at '{}': {}", icon_path, e);
        }
    }
}
