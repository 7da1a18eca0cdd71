//! Game state and spawn helpers

use glam::DVec2;
use serde::Serialize;

use super::disc::Disc;
use super::star::Star;
use crate::consts::*;
use crate::error::SpriteError;
use crate::random::RandomSource;
use crate::settings::Tuning;

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// Player covered and ate a food blob
    Ate { food_size: f64, player_size: f64 },
    /// Player touched a hazard and shrank
    Poisoned { player_size: f64 },
    /// A replacement food blob entered the arena at `slot`
    FoodSpawned { slot: usize },
    /// A hazard was moved after poisoning the player
    HazardMoved { slot: usize },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub player: Disc,
    /// Bouncing food blobs, fixed number of slots
    pub food: Vec<Disc>,
    /// Passive star hazards
    pub hazards: Vec<Star>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Food eaten so far
    pub eaten: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Player at the canvas center, food and hazards at random
    pub fn new<R: RandomSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> Result<Self, SpriteError> {
        let player = Disc::new(DVec2::new(DEFAULT_X, DEFAULT_Y), tuning.player_start_radius)?
            .with_color(tuning.player_color);

        let food = (0..tuning.food_count)
            .map(|_| launch_food(tuning, rng))
            .collect::<Result<Vec<_>, _>>()?;

        let hazards = (0..tuning.hazard_count)
            .map(|_| place_hazard(tuning, rng))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "New game: {} food, {} hazards, player {}",
            food.len(),
            hazards.len(),
            player
        );

        Ok(Self {
            player,
            food,
            hazards,
            time_ticks: 0,
            eaten: 0,
            events: Vec::new(),
        })
    }

    /// State with explicit entities, no randomness involved
    pub fn with_entities(player: Disc, food: Vec<Disc>, hazards: Vec<Star>) -> Self {
        Self {
            player,
            food,
            hazards,
            time_ticks: 0,
            eaten: 0,
            events: Vec::new(),
        }
    }

    /// Debug snapshot of the whole arena
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

/// A small food blob at a random position, random hue, drifting toward a
/// random point
pub fn launch_food<R: RandomSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> Result<Disc, SpriteError> {
    let pos = rng.random_point(CANVAS_MIN, CANVAS_MAX);
    let radius = rng.uniform(tuning.food_min_radius, tuning.food_max_radius);
    let mut food = Disc::new(pos, radius)?;
    food.set_hue(rng.uniform(0.0, 1.0));
    let target = rng.random_point(CANVAS_MIN, CANVAS_MAX);
    food.aim_towards(target, tuning.food_speed);
    Ok(food)
}

/// A hazard star at a random position
pub fn place_hazard<R: RandomSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> Result<Star, SpriteError> {
    let pos = rng.random_point(CANVAS_MIN, CANVAS_MAX);
    Ok(Star::new(pos, tuning.hazard_radius, tuning.hazard_points)?.with_color(tuning.hazard_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SimRng;
    use crate::sim::body::Body;

    #[test]
    fn test_new_game_layout() {
        let tuning = Tuning::default();
        let mut rng = SimRng::new(12345);
        let state = GameState::new(&tuning, &mut rng).unwrap();

        assert_eq!(state.player.pos(), DVec2::new(0.5, 0.5));
        assert_eq!(state.player.radius(), PLAYER_START_RADIUS);
        assert_eq!(state.player.color(), tuning.player_color);
        assert_eq!(state.food.len(), FOOD_COUNT);
        assert_eq!(state.hazards.len(), HAZARD_COUNT);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_launch_food_ranges() {
        let tuning = Tuning::default();
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let food = launch_food(&tuning, &mut rng).unwrap();
            assert!((FOOD_MIN_RADIUS..FOOD_MAX_RADIUS).contains(&food.radius()));
            assert!((0.0..1.0).contains(&food.pos().x));
            assert!((0.0..1.0).contains(&food.pos().y));
            // Aimed at a point inside its own radius it moves slower
            assert!(food.speed() <= FOOD_SPEED + 1e-12);
        }
    }

    #[test]
    fn test_place_hazard() {
        let tuning = Tuning::default();
        let mut rng = SimRng::new(8);
        let hazard = place_hazard(&tuning, &mut rng).unwrap();
        assert_eq!(hazard.points(), HAZARD_POINTS);
        assert_eq!(hazard.radius(), HAZARD_RADIUS);
        assert_eq!(hazard.boundary().len(), 2 * HAZARD_POINTS as usize);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let tuning = Tuning::default();
        let a = GameState::new(&tuning, &mut SimRng::new(99)).unwrap();
        let b = GameState::new(&tuning, &mut SimRng::new(99)).unwrap();
        assert_eq!(a.food, b.food);
        assert_eq!(a.hazards, b.hazards);
    }

    #[test]
    fn test_snapshot_json() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning, &mut SimRng::new(1)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&state.snapshot_json()).unwrap();
        assert_eq!(json["food"].as_array().map(|f| f.len()), Some(FOOD_COUNT));
    }
}
