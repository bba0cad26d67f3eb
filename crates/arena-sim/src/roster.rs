//! Enemy id bookkeeping and running score.
//!
//! Enemies are addressed externally by a stable `u32` id. The roster maps
//! ids to hecs entities and remembers which ids died this round so that
//! repeated kill reports are no-ops.

use std::collections::{HashMap, HashSet};

use hecs::Entity;

#[derive(Debug, Default)]
pub struct EnemyRoster {
    /// Never reset, so ids stay unique for the life of the engine.
    next_id: u32,
    index: HashMap<u32, Entity>,
    dead: HashSet<u32>,
}

impl EnemyRoster {
    /// Hand out the next unused id.
    pub fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn register(&mut self, id: u32, entity: Entity) {
        self.index.insert(id, entity);
    }

    pub fn lookup(&self, id: u32) -> Option<Entity> {
        self.index.get(&id).copied()
    }

    pub fn is_dead(&self, id: u32) -> bool {
        self.dead.contains(&id)
    }

    /// Record a death. Returns `false` if the id was already recorded.
    pub fn mark_dead(&mut self, id: u32) -> bool {
        self.dead.insert(id)
    }

    /// Drop the id→entity mapping once the entity is despawned.
    pub fn forget(&mut self, id: u32) {
        self.index.remove(&id);
    }

    /// Discard the previous round's death records before repopulating.
    pub fn begin_round(&mut self) {
        self.dead.clear();
    }

    /// Clear everything except the id counter (new session).
    pub fn reset(&mut self) {
        self.index.clear();
        self.dead.clear();
    }

    pub fn tracked(&self) -> usize {
        self.index.len()
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub kills: u32,
    /// Level-ups granted so far.
    pub level: u32,
}
