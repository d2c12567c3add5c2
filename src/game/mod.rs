//! The game facade: state, card tables and a presentation sink behind a
//! single input entry point.

mod builder;
mod input;

pub use builder::GameBuilder;
pub use input::InputEvent;

use tracing::debug;

use crate::cards::CardRegistry;
use crate::core::{GameResult, GameState, PlayError};
use crate::effects::EffectRegistry;
use crate::presentation::{PresentationSink, Presenter, RecordingSink};

/// A running game.
pub struct Game<S: PresentationSink = RecordingSink> {
    state: GameState,
    cards: CardRegistry,
    effects: EffectRegistry,
    sink: S,
}

impl<S: PresentationSink> Game<S> {
    /// Feed one input event.
    ///
    /// Rejections are logged and, when meant for the player, shown as a
    /// notification. The error is returned for callers that care; the
    /// state is unchanged either way.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), PlayError> {
        let Self {
            state,
            cards,
            effects,
            sink,
        } = self;
        let mut out = Presenter::new(sink, state.config.pacing, state.config.delays);

        let result = input::apply(state, &mut out, cards, effects, event);
        if let Err(err) = &result {
            debug!(?event, error = %err, "input rejected");
            if err.is_user_visible() {
                out.notify(err.to_string());
            }
        }
        result
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for scenario setup.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
