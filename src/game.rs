//! Game loop
//!
//! Ties the simulation to its collaborators. Every frame runs to completion:
//! read the pointer, tick, draw, present. Only `present` may block, which is
//! what paces the loop.

use crate::error::{GameError, SpriteError};
use crate::input::PointerSource;
use crate::random::RandomSource;
use crate::renderer::{Renderer, draw_scene};
use crate::settings::Tuning;
use crate::sim::{Body, GameState, TickInput, tick};

/// How often (in ticks) the loop reports progress at debug level
const REPORT_INTERVAL_TICKS: u64 = 250;

/// Game instance holding state and its injected collaborators
pub struct Game<Rend, P, R> {
    state: GameState,
    tuning: Tuning,
    renderer: Rend,
    pointer: P,
    rng: R,
}

impl<Rend, P, R> Game<Rend, P, R>
where
    Rend: Renderer,
    P: PointerSource,
    R: RandomSource,
{
    /// Fresh game laid out from `tuning` using `rng`
    pub fn new(tuning: Tuning, renderer: Rend, pointer: P, mut rng: R) -> Result<Self, GameError> {
        tuning.validate()?;
        let state = GameState::new(&tuning, &mut rng)?;
        log::info!(
            "Arena: {} food ({} at edges), {} hazards",
            tuning.food_count,
            tuning.food_boundary.as_str(),
            tuning.hazard_count
        );
        Self::with_state(state, tuning, renderer, pointer, rng)
    }

    /// Game resuming from an explicit state
    pub fn with_state(
        state: GameState,
        tuning: Tuning,
        renderer: Rend,
        pointer: P,
        rng: R,
    ) -> Result<Self, GameError> {
        tuning.validate()?;
        Ok(Self {
            state,
            tuning,
            renderer,
            pointer,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn renderer(&self) -> &Rend {
        &self.renderer
    }

    /// Run one complete frame
    pub fn frame(&mut self) -> Result<(), SpriteError> {
        let input = TickInput::pointer(self.pointer.pointer_position(&self.state));
        tick(&mut self.state, &input, &self.tuning, &mut self.rng)?;

        draw_scene(&mut self.renderer, &self.state, self.tuning.background);
        self.renderer.present(self.tuning.frame_ms);

        if self.state.time_ticks % REPORT_INTERVAL_TICKS == 0 {
            log::debug!(
                "tick {}: player size {:.5}, eaten {}",
                self.state.time_ticks,
                self.state.player.size(),
                self.state.eaten
            );
        }
        Ok(())
    }

    /// Run exactly `frames` frames
    pub fn run_frames(&mut self, frames: u64) -> Result<(), SpriteError> {
        for _ in 0..frames {
            self.frame()?;
        }
        Ok(())
    }

    /// Run until the process is stopped
    pub fn run(&mut self) -> Result<(), SpriteError> {
        log::info!("Game loop running at {} ms per frame", self.tuning.frame_ms);
        loop {
            self.frame()?;
        }
    }

    /// Tear the game apart, e.g. to inspect the renderer after a run
    pub fn into_parts(self) -> (GameState, Rend, P, R) {
        (self.state, self.renderer, self.pointer, self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::input::{Autopilot, FixedPointer};
    use crate::random::SimRng;
    use crate::renderer::{CommandRecorder, DrawCommand};
    use crate::error::ConfigError;
    use crate::sim::{Disc, Star};
    use glam::DVec2;

    #[test]
    fn test_frame_ticks_and_presents() {
        let tuning = Tuning::default();
        let mut game = Game::new(
            tuning.clone(),
            CommandRecorder::new(),
            FixedPointer(DVec2::new(0.5, 0.5)),
            SimRng::new(12345),
        )
        .unwrap();

        game.run_frames(3).unwrap();

        assert_eq!(game.state().time_ticks, 3);
        assert_eq!(game.renderer().frames(), 3);
        assert_eq!(game.renderer().presented_ms(), 3 * tuning.frame_ms as u64);

        let frame = game.renderer().last_frame();
        assert_eq!(frame[0], DrawCommand::Clear(tuning.background));
        // clear + food + hazards + player
        assert_eq!(frame.len(), 1 + tuning.food_count + tuning.hazard_count + 1);
        assert!(matches!(frame.last(), Some(DrawCommand::Disc { color, .. }) if *color == Color::RED));
    }

    #[test]
    fn test_player_eats_food_under_pointer() {
        let tuning = Tuning {
            hazard_count: 0,
            ..Tuning::default()
        };
        let player = Disc::new(DVec2::new(0.5, 0.5), 0.07).unwrap();
        let food = Disc::new(DVec2::new(0.52, 0.5), 0.03).unwrap();
        let start = player.size();
        let state = GameState::with_entities(player, vec![food], Vec::new());
        let mut game = Game::with_state(
            state,
            tuning,
            CommandRecorder::new(),
            FixedPointer(DVec2::new(0.5, 0.5)),
            SimRng::new(1),
        )
        .unwrap();

        game.frame().unwrap();

        assert_eq!(game.state().eaten, 1);
        assert!(game.state().player.size() > start);
    }

    #[test]
    fn test_invalid_tuning_is_rejected_up_front() {
        let tuning = Tuning {
            poison_fraction: 1.0,
            ..Tuning::default()
        };
        let built = Game::new(
            tuning.clone(),
            CommandRecorder::new(),
            FixedPointer(DVec2::new(0.5, 0.5)),
            SimRng::new(3),
        );
        assert!(matches!(
            built,
            Err(GameError::Config(ConfigError::Invalid { name: "poison_fraction", .. }))
        ));

        let player = Disc::new(DVec2::new(0.5, 0.5), 0.07).unwrap();
        let hazard = Star::new(DVec2::new(0.55, 0.5), 0.05, 7).unwrap();
        let state = GameState::with_entities(player, Vec::new(), vec![hazard]);
        let resumed = Game::with_state(
            state,
            tuning,
            CommandRecorder::new(),
            FixedPointer(DVec2::new(0.5, 0.5)),
            SimRng::new(3),
        );
        assert!(matches!(resumed, Err(GameError::Config(_))));
    }

    #[test]
    fn test_autopilot_grows_player() {
        let tuning = Tuning {
            hazard_count: 0,
            ..Tuning::default()
        };
        let mut game = Game::new(
            tuning,
            CommandRecorder::new(),
            Autopilot::default(),
            SimRng::new(2024),
        )
        .unwrap();
        let start = game.state().player.size();

        // 60 simulated seconds
        game.run_frames(3000).unwrap();

        let (state, renderer, _, _) = game.into_parts();
        assert!(state.eaten > 0);
        assert!(state.player.size() > start);
        assert_eq!(renderer.frames(), 3000);
        assert!(state.player.radius() > 0.0);
    }
}
