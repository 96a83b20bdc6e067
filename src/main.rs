// This file is part of Alpha Fade.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use anyhow::bail;
use bevy::prelude::*;
use clap::Parser;

use alpha_fade::app::auto_close::AutoClosePlugin;
use alpha_fade::app::config_hot_reload::{ConfigHotReloadPlugin, ConfigReloadSettings};
use alpha_fade::app::demo::DemoPlugin;
#[cfg(feature = "debug")]
use alpha_fade::debug::FadeDebugPlugin;
use alpha_fade::{DemoConfig, FadePlugin};

#[derive(Parser, Debug)]
#[command(about = "Interactive alpha fade playground", version)]
struct Args {
    /// Config files layered in order (later wins).
    #[arg(long = "config", default_values = ["assets/config/fade.ron", "assets/config/fade.local.ron"])]
    configs: Vec<PathBuf>,
    /// Override fade.default_duration (seconds).
    #[arg(long)]
    duration: Option<f32>,
    /// Override window.autoClose (seconds, 0 disables).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.duration.is_some_and(|d| !d.is_finite() || d < 0.0) {
        bail!("--duration must be a non-negative number of seconds");
    }

    let (mut cfg, used, errors) = DemoConfig::load_layered(args.configs.iter());
    // The local override file is optional; only report read errors for files that exist.
    for e in errors.iter().filter(|e| !e.contains("read error") || !e.contains(".local.")) {
        eprintln!("config: {e}");
    }
    if let Some(d) = args.duration {
        cfg.fade.default_duration = d;
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    for w in cfg.validate() {
        eprintln!("config warning: {w}");
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ConfigReloadSettings {
            paths: args.configs.clone(),
            ..default()
        })
        .insert_resource(cfg.fade.clone())
        .insert_resource(cfg)
        .add_plugins((FadePlugin, DemoPlugin, AutoClosePlugin, ConfigHotReloadPlugin))
        .add_systems(Startup, move || {
            info!("config layers used: {:?}", used);
        })
        .add_plugins(debug_plugins)
        .run();
    Ok(())
}

#[cfg(feature = "debug")]
fn debug_plugins(app: &mut App) {
    app.add_plugins(FadeDebugPlugin);
}

#[cfg(not(feature = "debug"))]
fn debug_plugins(_app: &mut App) {}
