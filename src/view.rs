//! One-shot view construction and the per-tick transform update.
//!
//! Panels are laid out in a single row inside a container wider than the
//! mount; advancing shifts the container left by one slide width.

use crate::config::SliderConfig;
use crate::error::Error;
use crate::events::PointerEvent;
use crate::slide::{Slide, background_image};
use crate::surface::{NodeId, Surface};

const CONTAINER_CLASS: &str = "slider__container";
const SLIDE_CLASS: &str = "slider__slide";

/// Node ids of the constructed subtree, owned by the slider.
#[derive(Debug)]
pub(crate) struct ViewHandle {
    pub(crate) mount: NodeId,
    pub(crate) container: NodeId,
    pub(crate) panels: Vec<NodeId>,
}

pub(crate) fn build<S: Surface>(
    surface: &mut S,
    config: &SliderConfig,
) -> Result<ViewHandle, Error> {
    let mount = surface.query(&config.root)?;
    surface.set_style(mount, "width", &format!("{}px", config.width))?;

    let row_width = u64::from(config.width) * config.slides.len() as u64;
    let container = surface.create_element("div");
    surface.set_attribute(container, "class", CONTAINER_CLASS)?;
    surface.set_style(container, "height", &format!("{}px", config.height))?;
    surface.set_style(container, "width", &format!("{row_width}px"))?;
    surface.listen(container, PointerEvent::Enter)?;
    surface.listen(container, PointerEvent::Leave)?;

    let mut panels = Vec::with_capacity(config.slides.len());
    for slide in &config.slides {
        let panel = surface.create_element("div");
        surface.set_attribute(panel, "class", SLIDE_CLASS)?;
        match slide {
            Slide::Markup { markup } => {
                surface.insert_markup(panel, markup)?;
            }
            Slide::TextBackground { text, background } => {
                surface.insert_text(panel, text)?;
                surface.set_style(
                    panel,
                    "background",
                    &format!("{} center no-repeat", background_image(background)),
                )?;
                surface.set_style(panel, "background-size", "cover")?;
            }
        }
        surface.append_child(container, panel)?;
        panels.push(panel);
    }

    surface.insert_first(mount, container)?;
    Ok(ViewHandle {
        mount,
        container,
        panels,
    })
}

/// The only visual mutation per tick: shift the panel row so the active
/// slide sits inside the mount.
pub(crate) fn apply_offset<S: Surface>(
    surface: &mut S,
    view: &ViewHandle,
    position: usize,
    width: u32,
) -> Result<(), Error> {
    let offset = position as u64 * u64::from(width);
    surface.set_style(view.container, "transform", &format!("translateX(-{offset}px)"))?;
    Ok(())
}
