//! Slider lifecycle: construction, one-shot render, timer control, hover
//! pause/resume, and teardown.

use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use crate::config::{SliderConfig, SliderOptions};
use crate::cursor::{Cursor, Step};
use crate::error::Error;
use crate::events::{PointerEvent, Tick};
use crate::surface::{NodeId, Surface};
use crate::timer::{TimerHandle, TimerService};
use crate::view::{self, ViewHandle};

/// An autoplaying slider bound to a rendering surface and a timer
/// service.
///
/// All operations are synchronous; ticks are delivered over a channel and
/// applied from [`Slider::pump`] (or by the embedding calling
/// [`Slider::advance`] itself), so advances and pointer events interleave
/// only between transitions, never mid-transition.
pub struct Slider<S: Surface, T: TimerService> {
    config: SliderConfig,
    surface: S,
    timer: T,
    cursor: Cursor,
    view: Option<ViewHandle>,
    schedule: Option<TimerHandle>,
    rendered: bool,
}

impl<S: Surface, T: TimerService> Slider<S, T> {
    /// Validate `options` and construct a slider.
    ///
    /// No surface mutation happens here; a failed construction leaves the
    /// surface untouched.
    pub fn new(options: SliderOptions, surface: S, timer: T) -> Result<Self, Error> {
        let config = options.validated()?;
        let cursor = Cursor::new(config.slides.len(), config.looping);
        Ok(Self {
            config,
            surface,
            timer,
            cursor,
            view: None,
            schedule: None,
            rendered: false,
        })
    }

    /// Build the view and start auto-advancing.
    pub fn init(&mut self) -> Result<(), Error> {
        self.render()?;
        self.start();
        Ok(())
    }

    /// Materialize the view. Runs at most once per instance; repeat calls
    /// fail with [`Error::AlreadyRendered`] without touching the surface.
    pub fn render(&mut self) -> Result<(), Error> {
        if self.rendered {
            return Err(Error::AlreadyRendered);
        }
        let view = view::build(&mut self.surface, &self.config)?;
        info!(
            slides = self.config.slides.len(),
            root = %self.config.root,
            "slider view built"
        );
        self.rendered = true;
        self.view = Some(view);
        Ok(())
    }

    /// Begin auto-advance. A running schedule is left alone; the single
    /// optional handle is what prevents duplicate timers.
    pub fn start(&mut self) {
        if self.view.is_none() {
            warn!("start requested without a rendered view; ignoring");
            return;
        }
        if self.schedule.is_some() {
            return;
        }
        debug!(
            delay = %humantime::format_duration(self.config.delay),
            "slider started"
        );
        self.schedule = Some(self.timer.schedule(self.config.delay));
    }

    /// Cancel auto-advance. Idempotent; dropping the handle cancels the
    /// underlying schedule.
    pub fn stop(&mut self) {
        if self.schedule.take().is_some() {
            debug!("slider stopped");
        }
    }

    /// Apply one `advance` per pending tick. Returns how many were
    /// applied.
    pub fn pump(&mut self) -> Result<usize, Error> {
        let mut applied = 0;
        while self
            .schedule
            .as_ref()
            .is_some_and(|schedule| schedule.try_tick().is_some())
        {
            self.advance()?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Cloned tick receiver, present while auto-advance is running, for
    /// embeddings that drive the slider from their own select loop.
    pub fn ticks(&self) -> Option<Receiver<Tick>> {
        self.schedule.as_ref().map(TimerHandle::ticks)
    }

    /// Advance to the next slide. On the last slide this wraps when
    /// looping; otherwise the slider stops and stays on the last slide
    /// permanently. A no-op once the view is gone.
    pub fn advance(&mut self) -> Result<(), Error> {
        let Some(view) = &self.view else {
            return Ok(());
        };
        match self.cursor.advance() {
            Step::Moved(position) => {
                view::apply_offset(&mut self.surface, view, position, self.config.width)?;
                debug!(position, "advanced");
            }
            Step::Halted => {
                debug!(position = self.cursor.position(), "reached the final slide");
                self.stop();
            }
        }
        Ok(())
    }

    /// Step back to the previous slide; a no-op on the first slide. Never
    /// scheduled by the timer.
    pub fn retreat(&mut self) -> Result<(), Error> {
        let Some(view) = &self.view else {
            return Ok(());
        };
        if let Step::Moved(position) = self.cursor.retreat() {
            view::apply_offset(&mut self.surface, view, position, self.config.width)?;
            debug!(position, "retreated");
        }
        Ok(())
    }

    /// Pointer events reported by the surface. Hovering the container
    /// pauses auto-advance; leaving resumes it. Events on other nodes are
    /// ignored.
    pub fn handle_pointer(&mut self, node: NodeId, event: PointerEvent) {
        let Some(view) = &self.view else {
            return;
        };
        if node != view.container {
            return;
        }
        match event {
            PointerEvent::Enter => self.stop(),
            PointerEvent::Leave => self.start(),
        }
    }

    /// Tear the slider down: cancel the timer, strip the container's
    /// listeners, remove the mount subtree. Terminal; the instance cannot
    /// be revived and further lifecycle calls are no-ops.
    pub fn destroy(&mut self) -> Result<(), Error> {
        self.stop();
        if let Some(view) = self.view.take() {
            self.surface.strip_listeners(view.container)?;
            self.surface.remove(view.mount)?;
            debug!("slider destroyed");
        }
        Ok(())
    }

    /// Index of the active slide.
    pub fn active_slide_index(&self) -> usize {
        self.cursor.position()
    }

    /// Whether the auto-advance timer is currently running.
    pub fn is_running(&self) -> bool {
        self.schedule.is_some()
    }

    /// The container node, once rendered. Exposed for hosts that route
    /// pointer events and for integration tests.
    pub fn container(&self) -> Option<NodeId> {
        self.view.as_ref().map(|view| view.container)
    }

    /// The panel nodes in slide order, once rendered.
    pub fn panels(&self) -> Option<&[NodeId]> {
        self.view.as_ref().map(|view| view.panels.as_slice())
    }

    /// The rendering surface, for inspection.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
