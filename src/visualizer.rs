//! Glue between an input source, a [`Session`] and a [`Renderer`].

use tracing::{debug, info};

use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::render::Renderer;
use crate::session::Session;

/// Drives one session: applies events and renders whenever a handler asks for it.
#[derive(Debug)]
pub struct Visualizer<R: Renderer> {
    session: Session,
    renderer: R,
    frames: usize,
}

impl<R: Renderer> Visualizer<R> {
    /// Creates a visualizer with a fresh default session.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::with_session(Session::new(), renderer)
    }

    /// Creates a visualizer around an existing session.
    #[must_use]
    pub fn with_session(session: Session, renderer: R) -> Self {
        Self {
            session,
            renderer,
            frames: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Renders the current state unconditionally (e.g. the initial frame).
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn redraw(&mut self) -> Result<R::Output> {
        let output = self.renderer.render(&self.session.frame())?;
        self.frames += 1;
        Ok(output)
    }

    /// Applies `event`, rendering a frame if the session requested a redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Option<R::Output>> {
        if !self.session.handle(event) {
            debug!(?event, "event ignored");
            return Ok(None);
        }
        self.redraw().map(Some)
    }

    /// Drains `source`, returning the last rendered frame, if any.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first renderer error.
    pub fn run<S: InputSource>(&mut self, source: &mut S) -> Result<Option<R::Output>> {
        let mut last = None;
        let mut events = 0_usize;
        while let Some(event) = source.next_event() {
            events += 1;
            if let Some(output) = self.dispatch(event)? {
                last = Some(output);
            }
        }
        info!(events, frames = self.frames, "input source drained");
        Ok(last)
    }

    /// Consumes the visualizer, returning the session and renderer.
    #[must_use]
    pub fn into_parts(self) -> (Session, R) {
        (self.session, self.renderer)
    }
}
