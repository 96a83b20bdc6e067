use crate::core::config::DemoConfig;
use crate::fade::FadeRegistry;
use bevy::prelude::*;

/// Exit countdown. Once it runs out the app still waits for in-flight fades
/// to settle, so smoke runs always end on final alpha values.
#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<DemoConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds once fades settle");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    registry: Res<FadeRegistry>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
    mut waiting_logged: Local<bool>,
) {
    let Some(t) = timer.as_mut() else { return };
    if !t.tick(time.delta()).finished() {
        return;
    }
    if !registry.is_empty() {
        if !*waiting_logged {
            info!("AutoClose: waiting for {} fade(s) to settle", registry.len());
            *waiting_logged = true;
        }
        return;
    }
    info!("AutoClose: timer finished, requesting app exit");
    ev_exit.write(AppExit::Success);
}
