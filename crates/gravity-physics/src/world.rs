//! The simulation world and its fixed-tick step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info};

use crate::arena::{BodyArena, pair_mut};
use crate::body::{Body, BodyId, Shape};
use crate::boundary::WorldBounds;
use crate::collision::{ImpulseResolver, overlaps};
use crate::input::TickInput;
use crate::integrate::{apply_control, integrate};
use crate::snapshot::Snapshot;
use crate::trail::TrailRecorder;

/// Horizontal margin kept free on both sides when picking a spawn x.
const SPAWN_MARGIN: f32 = 50.0;
/// Spawned bodies start with `vx` uniformly in `[-1.5, 1.5)`.
const SPAWN_SPEED_RANGE: f32 = 3.0;

/// All simulation state: the controlled body, spawned bodies, trail and RNG.
///
/// The world is mutated only through [`step`](Self::step) and the explicit
/// request methods, so a run is fully determined by its seed and the sequence
/// of inputs and requests.
#[derive(Debug, Clone)]
pub struct World {
    bounds: WorldBounds,
    player: Body,
    bodies: BodyArena,
    trail: TrailRecorder,
    resolver: ImpulseResolver,
    rng: Xoshiro256PlusPlus,
    next_id: u64,
    tick: u64,
}

impl World {
    /// Creates a world with the controlled body at its start position.
    pub fn new(bounds: WorldBounds, player_mass: f32, seed: u64) -> Self {
        Self {
            bounds,
            player: Body::controlled(player_mass),
            bodies: BodyArena::new(),
            trail: TrailRecorder::default(),
            resolver: ImpulseResolver::default(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            next_id: 1,
            tick: 0,
        }
    }

    pub fn with_resolver(mut self, resolver: ImpulseResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Advances the simulation by one tick.
    ///
    /// Every body is integrated and clamped to the world before any collision
    /// is resolved. Collisions are then resolved in place: the controlled body
    /// against each spawned body, then every spawned pair `(i, j)` with `i < j`
    /// in spawn order. Later pairs observe corrections made by earlier ones.
    pub fn step(&mut self, input: &TickInput) {
        self.integrate_all(input);
        self.resolve_collisions();
        if input.trails_enabled {
            self.trail.tick(&self.player);
        }
        self.tick += 1;

        debug_assert!(self.is_finite(), "non-finite body state after tick {}", self.tick);
    }

    fn integrate_all(&mut self, input: &TickInput) {
        let bounds = self.bounds;

        self.player.mass = input.player_mass;
        apply_control(&mut self.player, input.control, input.player_speed);
        integrate(&mut self.player, input.gravity);
        bounds.resolve(&mut self.player);

        for body in self.bodies.as_mut_slice() {
            integrate(body, input.gravity);
            bounds.resolve(body);
        }
    }

    fn resolve_collisions(&mut self) {
        let resolver = self.resolver;
        let bodies = self.bodies.as_mut_slice();

        for body in bodies.iter_mut() {
            if overlaps(&self.player, body) {
                resolver.resolve(&mut self.player, body);
            }
        }

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (a, b) = pair_mut(bodies, i, j);
                if overlaps(a, b) {
                    resolver.resolve(a, b);
                }
            }
        }
    }

    /// Spawns a body of `shape` just above the top edge at a random x.
    pub fn spawn(&mut self, shape: Shape) -> BodyId {
        let size = shape.size();
        let span = self.bounds.width - size - 2.0 * SPAWN_MARGIN;
        let r: f32 = self.rng.gen_range(0.0..1.0);
        let x = if span > 0.0 {
            SPAWN_MARGIN + r * span
        } else {
            r * (self.bounds.width - size).max(0.0)
        };
        let vx = (self.rng.gen_range(0.0f32..1.0) - 0.5) * SPAWN_SPEED_RANGE;

        self.spawn_at(shape, Vec2::new(x, -size), Vec2::new(vx, 0.0))
    }

    /// Spawns a body with an explicit position and velocity.
    pub fn spawn_at(&mut self, shape: Shape, position: Vec2, velocity: Vec2) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(Body::spawned(id, shape, position, velocity));
        debug!(id = id.0, ?shape, x = position.x, "spawned body");
        id
    }

    /// Removes one spawned body. The controlled body cannot be removed.
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        self.bodies.remove(id)
    }

    /// Removes every spawned body and returns how many there were.
    /// The trail belongs to the controlled body and is kept.
    pub fn clear(&mut self) -> usize {
        let count = self.bodies.len();
        self.bodies.clear();
        info!(count, "cleared spawned bodies");
        count
    }

    /// Puts the controlled body back at its start position, at rest, and
    /// clears the trail.
    pub fn reset_player(&mut self, mass: f32) {
        self.player = Body::controlled(mass);
        self.trail.clear();
        debug!(mass, "reset controlled body");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            bounds: self.bounds,
            player: self.player.clone(),
            bodies: self.bodies.as_slice().to_vec(),
            trail: self.trail.samples().copied().collect(),
        }
    }

    pub fn player(&self) -> &Body {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Body {
        &mut self.player
    }

    pub fn bodies(&self) -> &BodyArena {
        &self.bodies
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn trail(&self) -> &TrailRecorder {
        &self.trail
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn resolver(&self) -> ImpulseResolver {
        self.resolver
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// True if every body holds only finite numbers.
    pub fn is_finite(&self) -> bool {
        self.player.is_finite() && self.bodies.iter().all(Body::is_finite)
    }
}
