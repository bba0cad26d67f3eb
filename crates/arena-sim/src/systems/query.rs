//! Read-only views over live enemies shared by several systems.

use glam::DVec2;
use hecs::{Entity, World};

use arena_core::components::{EnemyInfo, Health};
use arena_core::enums::EnemyKind;
use arena_core::types::Position;

/// Copy of the state of one live enemy, taken at a point in the frame.
#[derive(Debug, Clone, Copy)]
pub struct EnemySample {
    pub id: u32,
    pub entity: Entity,
    pub kind: EnemyKind,
    /// Top-left corner.
    pub position: Position,
    pub size: f64,
    pub speed: f64,
    pub center: DVec2,
    pub health: f64,
}

/// Live enemies ordered by id.
pub fn live_enemies(world: &World) -> Vec<EnemySample> {
    let mut samples: Vec<EnemySample> = world
        .query::<(&EnemyInfo, &Position, &Health)>()
        .iter()
        .filter(|(_, (info, _, _))| info.alive)
        .map(|(entity, (info, pos, health))| EnemySample {
            id: info.id,
            entity,
            kind: info.kind,
            position: *pos,
            size: info.size,
            speed: info.speed,
            center: pos.box_center(info.size).to_vec(),
            health: health.current,
        })
        .collect();
    samples.sort_by_key(|s| s.id);
    samples
}

pub fn live_enemy_count(world: &World) -> usize {
    world
        .query::<&EnemyInfo>()
        .iter()
        .filter(|(_, info)| info.alive)
        .count()
}
