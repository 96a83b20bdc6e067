//! Panel groups: one alpha that multiplies into every graphic beneath an entity.
use bevy::prelude::*;

use super::target::{GraphicColorTuple, GraphicColors};

/// Group-wide alpha for an entity and all of its descendants. Nested groups multiply.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FadeGroup {
    pub alpha: f32,
}

impl Default for FadeGroup {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl FadeGroup {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }
}

/// A graphic's own alpha once a group manages its displayed colour.
/// Captured from the colour the first time a group reaches the graphic.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GroupBaseAlpha(pub f32);

/// Product of every ancestor-or-self group alpha. 1.0 when no group is above `entity`.
fn inherited_group_alpha(entity: Entity, groups: &Query<&FadeGroup>, parents: &Query<&ChildOf>) -> f32 {
    let mut alpha = 1.0;
    let mut cursor = Some(entity);
    while let Some(e) = cursor {
        if let Ok(g) = groups.get(e) {
            alpha *= g.alpha.clamp(0.0, 1.0);
        }
        cursor = parents.get(e).ok().map(|p| p.parent());
    }
    alpha
}

/// True when `entity` or any of its ancestors satisfies `is_group`.
pub(crate) fn within_group(entity: Entity, is_group: impl Fn(Entity) -> bool, parents: &Query<&ChildOf>) -> bool {
    let mut cursor = Some(entity);
    while let Some(e) = cursor {
        if is_group(e) {
            return true;
        }
        cursor = parents.get(e).ok().map(|p| p.parent());
    }
    false
}

fn has_group_ancestor(entity: Entity, groups: &Query<&FadeGroup>, parents: &Query<&ChildOf>) -> bool {
    parents
        .get(entity)
        .is_ok_and(|p| within_group(p.parent(), |e| groups.contains(e), parents))
}

#[allow(clippy::too_many_arguments)]
pub fn propagate_group_alpha(
    mut commands: Commands,
    q_group_roots: Query<Entity, With<FadeGroup>>,
    q_groups: Query<&FadeGroup>,
    q_parents: Query<&ChildOf>,
    q_children: Query<&Children>,
    q_base: Query<(Entity, &GroupBaseAlpha)>,
    mut q_colors: Query<GraphicColorTuple>,
    q_changed_groups: Query<(), Changed<FadeGroup>>,
    q_changed_base: Query<(), Changed<GroupBaseAlpha>>,
    q_changed_children: Query<(), Changed<Children>>,
    q_changed_parents: Query<(), Changed<ChildOf>>,
    mut removed_groups: RemovedComponents<FadeGroup>,
    mut removed_parents: RemovedComponents<ChildOf>,
) {
    let lineage_lost = removed_groups.read().count() > 0 || removed_parents.read().count() > 0;
    if !lineage_lost
        && q_changed_groups.is_empty()
        && q_changed_base.is_empty()
        && q_changed_children.is_empty()
        && q_changed_parents.is_empty()
    {
        return;
    }

    // Graphics no longer under any group get their own alpha back.
    for (node, base) in &q_base {
        if within_group(node, |e| q_groups.contains(e), &q_parents) {
            continue;
        }
        if let Ok(item) = q_colors.get_mut(node) {
            GraphicColors::new(item).set_alpha(base.0);
        }
        commands.entity(node).remove::<GroupBaseAlpha>();
    }

    for root in &q_group_roots {
        // Nested groups are handled from their outermost ancestor group.
        if has_group_ancestor(root, &q_groups, &q_parents) {
            continue;
        }
        for node in std::iter::once(root).chain(q_children.iter_descendants(root)) {
            let Ok(item) = q_colors.get_mut(node) else { continue };
            let mut colors = GraphicColors::new(item);
            let Some(current) = colors.alpha() else { continue };
            let own = match q_base.get(node) {
                Ok((_, base)) => base.0,
                Err(_) => {
                    commands.entity(node).insert(GroupBaseAlpha(current));
                    current
                }
            };
            let shown = own * inherited_group_alpha(node, &q_groups, &q_parents);
            colors.set_alpha(shown);
        }
    }
}
