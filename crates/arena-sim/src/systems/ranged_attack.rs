//! Ranged enemies fire bolts at the player on a fixed interval.

use hecs::World;

use arena_ai::profiles::get_profile;
use arena_ai::targeting;
use arena_core::components::{EnemyInfo, RangedAttack};
use arena_core::constants::CONTACT_DAMAGE;
use arena_core::enums::{ProjectileOwner, WeaponKind};
use arena_core::types::{Position, Velocity};

use crate::player::Player;
use crate::world_setup::{self, ProjectileSpec};

pub fn run(world: &mut World, player: &Player, now: f64, next_projectile_id: &mut u32) {
    if player.dead {
        return;
    }
    let target = player.center().to_vec();

    let mut shots = Vec::new();
    for (_entity, (info, pos, attack)) in
        world.query_mut::<(&EnemyInfo, &Position, &mut RangedAttack)>()
    {
        if !info.alive || now < attack.next_fire_secs {
            continue;
        }
        let Some(ranged) = get_profile(info.kind).ranged else {
            continue;
        };
        attack.next_fire_secs = now + ranged.fire_interval_secs;

        let origin = pos.box_center(info.size);
        let dir = targeting::aim(origin.to_vec(), target);
        shots.push(ProjectileSpec {
            owner: ProjectileOwner::Enemy,
            weapon: WeaponKind::RangedBolt,
            origin,
            velocity: Velocity::from(dir * ranged.bolt_speed),
            max_range: ranged.bolt_range,
            damage: f64::from(CONTACT_DAMAGE),
        });
    }

    for spec in shots {
        world_setup::spawn_projectile(world, next_projectile_id, spec);
    }
}
