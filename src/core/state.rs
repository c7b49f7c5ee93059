//! Playback state machine.
//!
//! `transition` is the single place that decides what an event does in a
//! given state; the controller only carries out the returned action.

use super::input::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
    Terminated,
}

/// Input to the state machine for one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The source had no frame to give while running.
    EndOfSource,
    Key(Command),
    /// The poll returned without a key.
    Idle,
    /// Ctrl-C or the window was closed.
    Interrupted,
}

/// Side effect the controller performs before entering the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    StepBack,
    StepForward,
    SaveFrame,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: PlaybackState,
}

impl Transition {
    fn stay(state: PlaybackState) -> Self {
        Self {
            action: Action::None,
            next: state,
        }
    }

    fn to(action: Action, next: PlaybackState) -> Self {
        Self { action, next }
    }

    fn terminate() -> Self {
        Self::to(Action::Shutdown, PlaybackState::Terminated)
    }

    /// Landing in `Running` means the controller advances one frame and throttles.
    pub fn advances(&self) -> bool {
        self.next == PlaybackState::Running
    }
}

pub fn transition(state: PlaybackState, event: Event, index: u64) -> Transition {
    use PlaybackState::*;

    match (state, event) {
        (Terminated, _) => Transition::stay(Terminated),

        (_, Event::Interrupted) => Transition::terminate(),
        (_, Event::Key(Command::Quit)) => Transition::terminate(),

        (Running, Event::EndOfSource) => Transition::terminate(),
        (Running, Event::Key(Command::TogglePause)) => Transition::stay(Paused),
        (Running, _) => Transition::stay(Running),

        (Paused, Event::Key(Command::TogglePause)) => Transition::stay(Running),
        (Paused, Event::Key(Command::StepBack)) if index > 0 => {
            Transition::to(Action::StepBack, Paused)
        }
        (Paused, Event::Key(Command::StepForward)) => Transition::to(Action::StepForward, Paused),
        (Paused, Event::Key(Command::SaveFrame)) => Transition::to(Action::SaveFrame, Paused),
        (Paused, _) => Transition::stay(Paused),
    }
}
