use bevy::color::Alpha;
use bevy::prelude::*;

use super::group::{FadeGroup, GroupBaseAlpha};

/// Which alpha channel of an entity a fade drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeKind {
    /// The entity's own colour: `Sprite`, `ImageNode`, `TextColor` or `BackgroundColor`.
    Graphic,
    /// The entity's [`FadeGroup`] alpha, applied to everything beneath it.
    Group,
}

/// Registry key. Identity is the entity, not the colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeTargetId {
    pub entity: Entity,
    pub kind: FadeKind,
}

impl FadeTargetId {
    pub fn graphic(entity: Entity) -> Self {
        Self { entity, kind: FadeKind::Graphic }
    }
    pub fn group(entity: Entity) -> Self {
        Self { entity, kind: FadeKind::Group }
    }
}

impl std::fmt::Display for FadeTargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({})", self.kind, self.entity)
    }
}

/// Every colour component a graphic fade can drive, in read/write priority order.
pub type GraphicColorTuple = (
    Option<&'static mut Sprite>,
    Option<&'static mut ImageNode>,
    Option<&'static mut TextColor>,
    Option<&'static mut BackgroundColor>,
);

/// Mutable view over whichever colour component an entity carries.
pub struct GraphicColors<'w> {
    pub sprite: Option<Mut<'w, Sprite>>,
    pub image: Option<Mut<'w, ImageNode>>,
    pub text: Option<Mut<'w, TextColor>>,
    pub background: Option<Mut<'w, BackgroundColor>>,
}

impl<'w> GraphicColors<'w> {
    pub fn new(
        (sprite, image, text, background): (
            Option<Mut<'w, Sprite>>,
            Option<Mut<'w, ImageNode>>,
            Option<Mut<'w, TextColor>>,
            Option<Mut<'w, BackgroundColor>>,
        ),
    ) -> Self {
        Self { sprite, image, text, background }
    }

    /// Alpha of the primary colour, `None` if the entity has no graphic.
    pub fn alpha(&self) -> Option<f32> {
        if let Some(s) = &self.sprite {
            return Some(s.color.alpha());
        }
        if let Some(i) = &self.image {
            return Some(i.color.alpha());
        }
        if let Some(t) = &self.text {
            return Some(t.0.alpha());
        }
        self.background.as_ref().map(|b| b.0.alpha())
    }

    /// Writes `alpha` into the primary colour. Returns false if there is none.
    pub fn set_alpha(&mut self, alpha: f32) -> bool {
        if let Some(s) = self.sprite.as_mut() {
            if s.color.alpha() != alpha {
                s.color.set_alpha(alpha);
            }
            return true;
        }
        if let Some(i) = self.image.as_mut() {
            if i.color.alpha() != alpha {
                i.color.set_alpha(alpha);
            }
            return true;
        }
        if let Some(t) = self.text.as_mut() {
            if t.0.alpha() != alpha {
                t.0.set_alpha(alpha);
            }
            return true;
        }
        if let Some(b) = self.background.as_mut() {
            if b.0.alpha() != alpha {
                b.0.set_alpha(alpha);
            }
            return true;
        }
        false
    }
}

/// Reads the alpha a fade of `target` would start from. Graphics living under a
/// group report their own (pre-group) alpha.
pub fn read_alpha(world: &World, target: FadeTargetId) -> Option<f32> {
    let entity = world.get_entity(target.entity).ok()?;
    match target.kind {
        FadeKind::Group => entity.get::<FadeGroup>().map(|g| g.alpha),
        FadeKind::Graphic => {
            if let Some(base) = entity.get::<GroupBaseAlpha>() {
                return Some(base.0);
            }
            if let Some(s) = entity.get::<Sprite>() {
                return Some(s.color.alpha());
            }
            if let Some(i) = entity.get::<ImageNode>() {
                return Some(i.color.alpha());
            }
            if let Some(t) = entity.get::<TextColor>() {
                return Some(t.0.alpha());
            }
            entity.get::<BackgroundColor>().map(|b| b.0.alpha())
        }
    }
}
