use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// What the tick does when a fading entity (or its alpha source) has gone away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingTargetPolicy {
    /// Drop the fade on the first tick that notices; no callback.
    #[default]
    Cancel,
    /// Log an error every tick and keep going until the duration runs out,
    /// then complete normally (callback included).
    KeepRetrying,
}
impl MissingTargetPolicy {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => MissingTargetPolicy::KeepRetrying,
            _ => MissingTargetPolicy::Cancel,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct FadeConfig {
    /// Seconds used by callers that do not pick their own duration.
    pub default_duration: f32,
    /// 0 = cancel, 1 = keep retrying (see [`MissingTargetPolicy`]).
    pub missing_target_mode: u32,
    /// Log every finished fade at info level instead of debug.
    pub log_transitions: bool,
}
impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            default_duration: 0.5,
            missing_target_mode: 0,
            log_transitions: false,
        }
    }
}
impl FadeConfig {
    #[inline]
    pub fn missing_target(&self) -> MissingTargetPolicy {
        MissingTargetPolicy::from_code(self.missing_target_mode)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            title: "Alpha Fade".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub fade: FadeConfig,
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                match existing {
                    Some(ev) => merge_value(ev, v),
                    None => {
                        bm.insert(k, v);
                    }
                }
            }
        }
        (b, o) => *b = o,
    }
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Deep-merges every readable file in order (later files win) and returns the
    /// config plus the paths used and any per-file errors. Missing or broken files
    /// are skipped; if nothing usable remains the defaults are returned.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<DemoConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                    (DemoConfig::default(), used, errors)
                }
            },
            None => (DemoConfig::default(), used, errors),
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        w.extend(self.fade.validate());
        w
    }
}

impl FadeConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if !self.default_duration.is_finite() || self.default_duration <= 0.0 {
            w.push(format!(
                "fade.default_duration {} must be > 0; fades using it complete instantly",
                self.default_duration
            ));
        } else if self.default_duration > 60.0 {
            w.push(format!(
                "fade.default_duration {} very long (over a minute)",
                self.default_duration
            ));
        }
        if self.missing_target_mode > 1 {
            w.push(format!(
                "fade.missing_target_mode {} unknown -> treated as 0 (cancel)",
                self.missing_target_mode
            ));
        }
        w
    }
}
