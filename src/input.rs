//! Normalized input events coming from the host toolkit.

use std::collections::VecDeque;

use crate::math::Point2;

/// A discrete button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Reset,
    Undo,
    ToggleAngles,
    ToggleSides,
    ToggleGrid,
    LoadExample,
    /// Switches between internal and external angle reporting.
    ToggleAngleMode,
}

/// A single input event in canvas coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed: add a vertex or grab an existing one.
    PointerDown(Point2),
    /// Pointer moved while pressed.
    PointerMove(Point2),
    /// Pointer released.
    PointerUp(Point2),
    Command(Command),
    /// The canvas was laid out or resized.
    Resize { width: f64, height: f64 },
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        Self::Command(command)
    }
}

/// A producer of input events, implemented by the toolkit binding.
pub trait InputSource {
    /// Returns the next event, or `None` when the source is exhausted.
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// Replays a fixed list of events in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the end of the script.
    #[must_use]
    pub fn then(mut self, event: impl Into<InputEvent>) -> Self {
        self.events.push_back(event.into());
        self
    }

    /// Appends a tap: pointer down followed by pointer up at the same spot.
    #[must_use]
    pub fn tap(self, x: f64, y: f64) -> Self {
        let p = Point2::new(x, y);
        self.then(InputEvent::PointerDown(p))
            .then(InputEvent::PointerUp(p))
    }

    /// Appends a drag from `from` to `to` through one intermediate move.
    #[must_use]
    pub fn drag(self, from: Point2, to: Point2) -> Self {
        self.then(InputEvent::PointerDown(from))
            .then(InputEvent::PointerMove(nalgebra::center(&from, &to)))
            .then(InputEvent::PointerMove(to))
            .then(InputEvent::PointerUp(to))
    }

    /// Number of events left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl From<Vec<InputEvent>> for ScriptedInput {
    fn from(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}
