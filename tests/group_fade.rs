use std::time::Duration;

use alpha_fade::fade::GroupBaseAlpha;
use alpha_fade::{
    FadeConfig, FadeFinished, FadeGroup, FadeKind, FadeOutcome, FadeParams, FadePlugin, FadeRegistry,
    FadeSet, FadeWorldExt,
};
use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

#[derive(Resource, Default)]
struct FinishedLog(Vec<FadeFinished>);

#[derive(Resource, Default)]
struct CallbackHits(u32);

fn collect_finished(mut ev: EventReader<FadeFinished>, mut log: ResMut<FinishedLog>) {
    log.0.extend(ev.read().copied());
}

fn test_app_with(cfg: FadeConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(cfg)
        .add_plugins(FadePlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<FinishedLog>()
        .init_resource::<CallbackHits>()
        .add_systems(Update, collect_finished.after(FadeSet::Advance));
    app
}

/// Panel with a group alpha and two coloured children. Runs the priming frame,
/// which also captures the children's own alpha.
fn spawn_panel(app: &mut App, group_alpha: f32) -> (Entity, Entity, Entity) {
    let icon = app
        .world_mut()
        .spawn(BackgroundColor(Color::srgba(0.2, 0.8, 0.4, 1.0)))
        .id();
    let label = app.world_mut().spawn(TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5))).id();
    let panel = app
        .world_mut()
        .spawn(FadeGroup::new(group_alpha))
        .add_children(&[icon, label])
        .id();
    app.update();
    (panel, icon, label)
}

fn bg_alpha(app: &App, e: Entity) -> f32 {
    app.world().get::<BackgroundColor>(e).unwrap().0.alpha()
}

fn run(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn group_fade_out_hides_every_child() {
    let mut app = test_app_with(FadeConfig::default());
    let (panel, icon, label) = spawn_panel(&mut app, 1.0);
    assert_eq!(bg_alpha(&app, icon), 1.0);

    app.world_mut()
        .start_fade(panel, FadeKind::Group, FadeParams::fade_out(0.5), None)
        .unwrap();
    run(&mut app, 3);
    let mid = bg_alpha(&app, icon);
    assert!(mid > 0.0 && mid < 1.0, "icon should be mid-fade, got {mid}");
    let group = app.world().get::<FadeGroup>(panel).unwrap().alpha;
    assert!((mid - group).abs() < 1e-6);
    let text = app.world().get::<TextColor>(label).unwrap().0.alpha();
    assert!((text - 0.5 * group).abs() < 1e-6);

    run(&mut app, 6);
    assert!(!app.world().is_fading(panel, FadeKind::Group));
    assert_eq!(app.world().get::<FadeGroup>(panel).unwrap().alpha, 0.0);
    assert_eq!(bg_alpha(&app, icon), 0.0);
    // Own alpha survives so a later fade-in restores the original look.
    assert_eq!(app.world().get::<GroupBaseAlpha>(label), Some(&GroupBaseAlpha(0.5)));
}

#[test]
fn graphic_fade_inside_group_keeps_group_factor() {
    let mut app = test_app_with(FadeConfig::default());
    let (_panel, icon, _label) = spawn_panel(&mut app, 0.5);
    assert!((bg_alpha(&app, icon) - 0.5).abs() < 1e-6);

    app.world_mut()
        .start_fade(icon, FadeKind::Graphic, FadeParams::fade_out(0.4), None)
        .unwrap();
    run(&mut app, 3);
    let own = app.world().get::<GroupBaseAlpha>(icon).unwrap().0;
    assert!(own > 0.0 && own < 1.0);
    assert!((bg_alpha(&app, icon) - own * 0.5).abs() < 1e-6);

    run(&mut app, 4);
    assert!(!app.world().is_fading(icon, FadeKind::Graphic));
    assert_eq!(app.world().get::<GroupBaseAlpha>(icon).unwrap().0, 0.0);
    assert_eq!(bg_alpha(&app, icon), 0.0);
}

#[test]
fn group_and_graphic_on_one_entity_are_separate_targets() {
    let mut app = test_app_with(FadeConfig::default());
    let both = app
        .world_mut()
        .spawn((FadeGroup::new(1.0), BackgroundColor(Color::WHITE)))
        .id();
    app.update();
    app.world_mut()
        .start_fade(both, FadeKind::Group, FadeParams::fade_out(1.0), None)
        .unwrap();
    app.world_mut()
        .start_fade(both, FadeKind::Graphic, FadeParams::fade_out(1.0), None)
        .unwrap();
    assert_eq!(app.world().resource::<FadeRegistry>().len(), 2);
    assert!(app.world_mut().stop_fade(both, FadeKind::Group));
    assert!(app.world().is_fading(both, FadeKind::Graphic));
}

#[test]
fn despawned_group_is_cancelled_on_next_tick() {
    let mut app = test_app_with(FadeConfig::default());
    let (panel, _icon, _label) = spawn_panel(&mut app, 1.0);
    app.world_mut()
        .start_fade(
            panel,
            FadeKind::Group,
            FadeParams::fade_out(2.0),
            Some(Box::new(|w: &mut World| w.resource_mut::<CallbackHits>().0 += 1)),
        )
        .unwrap();
    app.update();
    app.world_mut().despawn(panel);
    app.update();
    assert!(!app.world().is_fading(panel, FadeKind::Group));
    run(&mut app, 25);
    assert_eq!(app.world().resource::<CallbackHits>().0, 0);
    let log = &app.world().resource::<FinishedLog>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].outcome, FadeOutcome::TargetMissing);
}

#[test]
fn despawned_group_keeps_retrying_under_legacy_policy() {
    let cfg = FadeConfig {
        missing_target_mode: 1,
        ..Default::default()
    };
    let mut app = test_app_with(cfg);
    let (panel, _icon, _label) = spawn_panel(&mut app, 1.0);
    app.world_mut()
        .start_fade(
            panel,
            FadeKind::Group,
            FadeParams::fade_out(0.5),
            Some(Box::new(|w: &mut World| w.resource_mut::<CallbackHits>().0 += 1)),
        )
        .unwrap();
    app.update();
    app.world_mut().despawn(panel);
    run(&mut app, 3);
    assert!(
        app.world().is_fading(panel, FadeKind::Group),
        "legacy policy keeps the entry until the duration runs out"
    );
    run(&mut app, 5);
    assert!(!app.world().is_fading(panel, FadeKind::Group));
    assert_eq!(app.world().resource::<CallbackHits>().0, 1);
    let log = &app.world().resource::<FinishedLog>().0;
    assert_eq!(log.last().map(|f| f.outcome), Some(FadeOutcome::Completed));
}

#[test]
fn graphic_reparented_out_of_group_fades_its_own_colour() {
    let mut app = test_app_with(FadeConfig::default());
    let (_panel, icon, _label) = spawn_panel(&mut app, 1.0);
    assert!(app.world().get::<GroupBaseAlpha>(icon).is_some());

    app.world_mut().entity_mut(icon).remove::<ChildOf>();
    app.update();
    app.world_mut()
        .start_fade(icon, FadeKind::Graphic, FadeParams::fade_out(0.3), None)
        .unwrap();
    run(&mut app, 10);

    assert!(!app.world().is_fading(icon, FadeKind::Graphic));
    assert_eq!(bg_alpha(&app, icon), 0.0);
    assert!(app.world().get::<GroupBaseAlpha>(icon).is_none());
}

#[test]
fn fade_on_graphic_fades_once_its_group_is_removed() {
    let mut app = test_app_with(FadeConfig::default());
    let (panel, icon, _label) = spawn_panel(&mut app, 1.0);

    app.world_mut().entity_mut(panel).remove::<FadeGroup>();
    app.world_mut()
        .start_fade(icon, FadeKind::Graphic, FadeParams::fade_out(0.3), None)
        .unwrap();
    run(&mut app, 10);

    assert!(!app.world().is_fading(icon, FadeKind::Graphic));
    assert_eq!(bg_alpha(&app, icon), 0.0);
    let log = &app.world().resource::<FinishedLog>().0;
    assert_eq!(log.last().map(|f| f.outcome), Some(FadeOutcome::Completed));
}

#[test]
fn removing_a_hidden_group_shows_its_children_again() {
    let mut app = test_app_with(FadeConfig::default());
    let (panel, icon, label) = spawn_panel(&mut app, 0.0);
    assert_eq!(bg_alpha(&app, icon), 0.0);

    app.world_mut().entity_mut(panel).remove::<FadeGroup>();
    app.update();

    assert_eq!(bg_alpha(&app, icon), 1.0);
    let text = app.world().get::<TextColor>(label).unwrap().0.alpha();
    assert!((text - 0.5).abs() < 1e-6, "label should be back at its own 0.5, got {text}");
}
