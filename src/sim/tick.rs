//! Fixed timestep simulation tick
//!
//! Steer, contain, move, then resolve eating and poisoning. Rendering is not
//! part of a tick.

use glam::DVec2;

use super::body::Body;
use super::disc::Disc;
use super::state::{GameEvent, GameState, launch_food, place_hazard};
use crate::error::SpriteError;
use crate::random::RandomSource;
use crate::settings::{BoundaryPolicy, Tuning};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in canvas coordinates
    pub pointer: DVec2,
}

impl TickInput {
    pub fn pointer(pointer: DVec2) -> Self {
        Self { pointer }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<(), SpriteError> {
    state.events.clear();
    state.time_ticks += 1;

    state.player.aim_towards(input.pointer, tuning.player_steer_speed);

    // Edge containment
    state.player.bounce();
    for food in &mut state.food {
        match tuning.food_boundary {
            BoundaryPolicy::Bounce => food.bounce(),
            BoundaryPolicy::Wrap => food.wrap(),
        }
    }

    state.player.advance(tuning.frame_ms);
    for food in &mut state.food {
        food.advance(tuning.frame_ms);
    }

    resolve_eating(state, tuning, rng)?;
    resolve_poison(state, tuning, rng)?;

    Ok(())
}

/// Replace every food blob the player fully covers, growing the player
fn resolve_eating<R: RandomSource + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<(), SpriteError> {
    for slot in 0..state.food.len() {
        if !state.player.covering(&state.food[slot]) {
            continue;
        }
        let food_size = state.food[slot].size();
        eat(&mut state.player, food_size, tuning.eat_fraction)?;
        state.eaten += 1;
        state.events.push(GameEvent::Ate {
            food_size,
            player_size: state.player.size(),
        });

        // A consumed blob is gone; its slot gets a brand new one
        state.food[slot] = launch_food(tuning, rng)?;
        log::debug!("Food slot {} respawned as {}", slot, state.food[slot]);
        state.events.push(GameEvent::FoodSpawned { slot });
    }
    Ok(())
}

/// Shrink the player for every hazard it touches, then move that hazard
fn resolve_poison<R: RandomSource + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Result<(), SpriteError> {
    for slot in 0..state.hazards.len() {
        if !state.player.touching(&state.hazards[slot]) {
            continue;
        }
        poison(&mut state.player, tuning.poison_fraction)?;
        state.events.push(GameEvent::Poisoned {
            player_size: state.player.size(),
        });

        state.hazards[slot] = place_hazard(tuning, rng)?;
        state.events.push(GameEvent::HazardMoved { slot });
    }
    Ok(())
}

/// Grow `player` by `fraction` of the eaten food's area
pub fn eat(player: &mut Disc, food_size: f64, fraction: f64) -> Result<(), SpriteError> {
    player.grow(food_size * fraction)?;
    log::info!("Yum! Now I am {:.5} big!", player.size());
    Ok(())
}

/// Shrink `player` by `fraction` of its own area
pub fn poison(player: &mut Disc, fraction: f64) -> Result<(), SpriteError> {
    player.grow(-player.size() * fraction)?;
    log::info!("Ack! I shrank to {:.5} small!", player.size());
    Ok(())
}
