//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! Read-only; it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::PLAYER_SIZE;
use arena_core::enums::GamePhase;
use arena_core::events::SimEvent;
use arena_core::state::*;
use arena_core::types::{Position, SimClock, Velocity};

use crate::player::Player;
use crate::roster::ScoreState;

pub struct SnapshotInput<'a> {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub round: u32,
    pub player: &'a Player,
    pub score: &'a ScoreState,
    pub pending_upgrades: Vec<Upgrade>,
    pub events: Vec<SimEvent>,
}

pub fn build_snapshot(world: &World, input: SnapshotInput<'_>) -> GameStateSnapshot {
    let now = input.clock.now();
    GameStateSnapshot {
        time: input.clock,
        phase: input.phase,
        round: input.round,
        player: build_player(input.player, now),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        effects: build_effects(world),
        pending_upgrades: input.pending_upgrades,
        events: input.events,
        score: ScoreView {
            score: input.score.score,
            kills: input.score.kills,
            level: input.score.level,
            round: input.round,
        },
    }
}

fn build_player(player: &Player, now: f64) -> PlayerView {
    PlayerView {
        position: player.position,
        size: PLAYER_SIZE,
        hitbox_origin: player.hitbox_origin(),
        hitbox_size: player.hitbox_extent(),
        facing: player.facing,
        moving: player.moving,
        alive: player.is_alive(),
        invincible: player.is_invincible(now),
        lives: player.lives,
        stats: player.stats,
        inventory: player.inventory.clone(),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyInfo, &Position, &Heading)>()
        .iter()
        .filter(|(_, (info, _, _))| info.alive)
        .map(|(_, (info, pos, heading))| EnemyView {
            id: info.id,
            kind: info.kind,
            position: *pos,
            size: info.size,
            facing_left: heading.x < 0.0,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            owner: projectile.owner,
            weapon: projectile.weapon,
            position: *pos,
            velocity: *vel,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<(&EffectToken, &Position)>()
        .iter()
        .map(|(_, (token, pos))| EffectView {
            kind: token.kind,
            position: *pos,
            facing: token.facing,
            expires_at_secs: token.expires_at_secs,
        })
        .collect()
}
