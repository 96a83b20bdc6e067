// This file is part of Alpha Fade.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use crate::core::config::FadeConfig;
use crate::fade::{
    FadeCommandsExt, FadeFinished, FadeGroup, FadeKind, FadeParams, FadeRegistry, FadeTargetId,
    FadeWorldExt,
};

/// Sprite + panel playground: number keys start fades, `S` stops everything.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_demo_scene, show_demo_instructions))
            .add_systems(
                Update,
                (handle_demo_input, log_finished_fades, update_status_text),
            );
    }
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct DemoEntities {
    pub sprite: Entity,
    pub panel: Entity,
    pub badge: Entity,
    pub status: Entity,
}

#[derive(Component)]
struct DemoStatusText;

fn show_demo_instructions() {
    info!(target: "demo", "=== ALPHA FADE ===");
    info!(target: "demo", "  1/2: fade sprite in/out");
    info!(target: "demo", "  3/4: fade panel in/out");
    info!(target: "demo", "  5:   fade panel badge out and back in");
    info!(target: "demo", "  S:   stop all fades   Esc: quit");
}

fn spawn_demo_scene(mut commands: Commands) {
    commands.spawn(Camera2d);

    let sprite = commands
        .spawn((
            Sprite::from_color(Color::srgba(0.95, 0.55, 0.2, 0.0), Vec2::splat(180.0)),
            Transform::from_xyz(-220.0, 0.0, 0.0),
        ))
        .id();

    let panel = commands
        .spawn((
            FadeGroup::new(1.0),
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(32.0),
                top: Val::Px(32.0),
                width: Val::Px(300.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::FlexStart,
                align_items: AlignItems::FlexStart,
                padding: UiRect::all(Val::Px(12.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.85)),
        ))
        .id();

    let mut badge = Entity::PLACEHOLDER;
    let mut status = Entity::PLACEHOLDER;
    commands.entity(panel).with_children(|p| {
        p.spawn((Text::new("Panel group"), TextColor(Color::WHITE)));
        badge = p
            .spawn((
                Node {
                    width: Val::Px(48.0),
                    height: Val::Px(48.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.3, 0.8, 0.4)),
            ))
            .id();
        status = p
            .spawn((
                DemoStatusText,
                Text::new(""),
                TextColor(Color::srgb(0.8, 0.8, 0.9)),
            ))
            .id();
    });

    commands.insert_resource(DemoEntities {
        sprite,
        panel,
        badge,
        status,
    });
}

fn handle_demo_input(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<FadeConfig>,
    entities: Option<Res<DemoEntities>>,
    mut registry: ResMut<FadeRegistry>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        ev_exit.write(AppExit::Success);
        return;
    }
    let Some(ents) = entities else { return };
    let secs = cfg.default_duration;

    if keys.just_pressed(KeyCode::Digit1) {
        commands.start_fade(ents.sprite, FadeKind::Graphic, FadeParams::fade_in(secs), None);
    }
    if keys.just_pressed(KeyCode::Digit2) {
        commands.start_fade(ents.sprite, FadeKind::Graphic, FadeParams::fade_out(secs), None);
    }
    if keys.just_pressed(KeyCode::Digit3) {
        commands.start_fade(ents.panel, FadeKind::Group, FadeParams::fade_in(secs), None);
    }
    if keys.just_pressed(KeyCode::Digit4) {
        commands.start_fade(ents.panel, FadeKind::Group, FadeParams::fade_out(secs), None);
    }
    if keys.just_pressed(KeyCode::Digit5) {
        // Chain: out, then back in from the completion callback.
        let badge = ents.badge;
        commands.start_fade(
            badge,
            FadeKind::Graphic,
            FadeParams::fade_out(secs),
            Some(Box::new(move |world: &mut World| {
                info!(target: "demo", "badge hidden; fading back in");
                if let Err(e) = world.start_fade(badge, FadeKind::Graphic, FadeParams::fade_in(secs), None) {
                    warn!(target: "demo", "badge fade-in skipped: {e}");
                }
            })),
        );
    }
    if keys.just_pressed(KeyCode::KeyS) {
        let n = registry.stop_all();
        info!(target: "demo", "stopped {n} fade(s)");
    }
}

fn log_finished_fades(mut ev_finished: EventReader<FadeFinished>) {
    for ev in ev_finished.read() {
        info!(target: "demo", "{} finished: {:?}", ev.handle.target, ev.outcome);
    }
}

fn update_status_text(
    registry: Res<FadeRegistry>,
    entities: Option<Res<DemoEntities>>,
    mut q_text: Query<&mut Text, With<DemoStatusText>>,
) {
    let Some(ents) = entities else { return };
    let Ok(mut text) = q_text.get_mut(ents.status) else { return };
    let describe = |target: FadeTargetId| match registry.task(target) {
        Some(task) => format!("{:>3.0}%", task.progress() * 100.0),
        None => "idle".to_string(),
    };
    let s = format!(
        "sprite: {}\npanel:  {}\nbadge:  {}",
        describe(FadeTargetId::graphic(ents.sprite)),
        describe(FadeTargetId::group(ents.panel)),
        describe(FadeTargetId::graphic(ents.badge)),
    );
    if text.as_str() != s {
        *text = Text::new(s);
    }
}
