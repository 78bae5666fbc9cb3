//! State: a music player whose reaction to each button depends on its mode.

use std::fmt;

use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerState::Stopped => "stopped",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
        };
        f.write_str(name)
    }
}

/// Outcome of a button press. `from == to` when the request was a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: PlayerState,
    pub to: PlayerState,
    pub message: &'static str,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Play,
    Pause,
    Stop,
}

/// Transition table. Anything not listed keeps the current state.
fn next(state: PlayerState, action: Action) -> (PlayerState, &'static str) {
    use Action::*;
    use PlayerState::*;
    match (state, action) {
        (Stopped, Play) => (Playing, "Starting playback."),
        (Stopped, Pause) => (Stopped, "The player is stopped and cannot be paused."),
        (Stopped, Stop) => (Stopped, "The player is already stopped."),
        (Playing, Play) => (Playing, "The player is already playing music."),
        (Playing, Pause) => (Paused, "Pausing playback."),
        (Playing, Stop) => (Stopped, "Stopping playback."),
        (Paused, Play) => (Playing, "Resuming playback."),
        (Paused, Pause) => (Paused, "The player is already paused."),
        (Paused, Stop) => (Stopped, "Stopping playback."),
    }
}

#[derive(Debug, Clone, Default)]
pub struct MusicPlayer {
    state: PlayerState,
}

impl MusicPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Force a state, bypassing the transition table.
    pub fn set_state(&mut self, state: PlayerState) {
        self.state = state;
    }

    pub fn play(&mut self) -> Transition {
        self.apply(Action::Play)
    }

    pub fn pause(&mut self) -> Transition {
        self.apply(Action::Pause)
    }

    pub fn stop(&mut self) -> Transition {
        self.apply(Action::Stop)
    }

    fn apply(&mut self, action: Action) -> Transition {
        let from = self.state;
        let (to, message) = next(from, action);
        self.state = to;
        debug!(?action, %from, %to, "player transition");
        Transition { from, to, message }
    }
}
