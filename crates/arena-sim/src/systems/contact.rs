//! Contact damage between enemies and the player hitbox.

use hecs::World;
use tracing::{debug, info};

use arena_core::collision::circle_overlap;
use arena_core::components::{ContactDebounce, EnemyInfo};
use arena_core::constants::{CONTACT_DAMAGE, CONTACT_DEBOUNCE_SECS};
use arena_core::events::SimEvent;
use arena_core::types::Position;

use crate::player::Player;

/// Apply contact damage from every overlapping enemy whose debounce has
/// elapsed. Stops as soon as the player is dead.
pub fn run(world: &mut World, player: &mut Player, now: f64, events: &mut Vec<SimEvent>) {
    let player_center = player.center();
    let player_radius = Player::hitbox_size() / 2.0;

    for (_entity, (info, pos, debounce)) in
        world.query_mut::<(&EnemyInfo, &Position, &mut ContactDebounce)>()
    {
        if player.dead {
            break;
        }
        if !info.alive {
            continue;
        }
        let center = pos.box_center(info.size);
        if !circle_overlap(player_center, player_radius, center, info.size / 2.0) {
            continue;
        }
        if let Some(last) = debounce.last_hit_secs {
            if now - last < CONTACT_DEBOUNCE_SECS {
                continue;
            }
        }
        debounce.last_hit_secs = Some(now);
        debug!(enemy = info.id, "contact");
        damage_player(player, CONTACT_DAMAGE, now, events);
    }
}

/// Route damage through the player's invincibility and death guards.
pub fn damage_player(player: &mut Player, damage: u32, now: f64, events: &mut Vec<SimEvent>) {
    let Some(outcome) = player.take_hit(damage, now) else {
        return;
    };
    events.push(SimEvent::PlayerHit {
        damage,
        lives_remaining: outcome.lives_remaining,
    });
    if outcome.died {
        info!("player lives exhausted");
    }
}
