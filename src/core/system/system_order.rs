//! Ordering labels for the fade pipeline inside `Update`.
//! 1. Advance (tick every registered fade, write alpha)
//! 2. Propagate (push group alpha down to descendant graphics)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FadeSet {
    Advance,
    Propagate,
}
