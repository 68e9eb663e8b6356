use auto_carousel::config::SliderOptions;
use auto_carousel::events::PointerEvent;
use auto_carousel::slide::Slide;
use auto_carousel::slider::Slider;
use auto_carousel::surface::NodeId;
use auto_carousel::surface::memory::MemorySurface;
use auto_carousel::timer::ManualTimer;

fn built_with(slides: Vec<Slide>) -> (Slider<MemorySurface, ManualTimer>, NodeId) {
    let mut surface = MemorySurface::new();
    let mount = surface.mount("#slider", "div");
    let options = SliderOptions {
        root: Some("#slider".to_owned()),
        slides: Some(slides),
        ..SliderOptions::default()
    };
    let mut slider = Slider::new(options, surface, ManualTimer::new()).unwrap();
    slider.render().unwrap();
    (slider, mount)
}

fn color_slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide::text(format!("SLIDE {i}"), "#2e7d32"))
        .collect()
}

#[test]
fn container_is_sized_for_a_single_row_of_panels() {
    let (slider, _mount) = built_with(color_slides(3));
    let surface = slider.surface();
    let container = slider.container().unwrap();

    assert_eq!(
        surface.attribute(container, "class"),
        Some("slider__container")
    );
    assert_eq!(surface.style(container, "height"), Some("400px"));
    // three slides at the default 750px width
    assert_eq!(surface.style(container, "width"), Some("2250px"));
}

#[test]
fn mount_gets_the_configured_width_and_the_container_as_first_child() {
    let (slider, mount) = built_with(color_slides(2));
    let surface = slider.surface();
    let container = slider.container().unwrap();

    assert_eq!(surface.style(mount, "width"), Some("750px"));
    assert_eq!(surface.children(mount), [container]);
}

#[test]
fn panels_are_created_in_slide_order() {
    let (slider, _mount) = built_with(color_slides(3));
    let surface = slider.surface();
    let container = slider.container().unwrap();
    let panels = slider.panels().unwrap();

    assert_eq!(surface.children(container), panels);
    for (i, &panel) in panels.iter().enumerate() {
        assert_eq!(surface.attribute(panel, "class"), Some("slider__slide"));
        assert_eq!(surface.text(panel), Some(format!("SLIDE {i}").as_str()));
    }
}

#[test]
fn hover_listeners_are_registered_on_the_container() {
    let (slider, _mount) = built_with(color_slides(2));
    let surface = slider.surface();
    let container = slider.container().unwrap();

    assert_eq!(
        surface.listeners(container),
        [PointerEvent::Enter, PointerEvent::Leave]
    );
}

#[test]
fn markup_is_inserted_verbatim() {
    let fragment = r#"<div style="background: red"><span>SLIDE FROM MARKUP</span></div>"#;
    let (slider, _mount) = built_with(vec![Slide::markup(fragment)]);
    let surface = slider.surface();
    let panel = slider.panels().unwrap()[0];

    assert_eq!(surface.markup(panel), Some(fragment));
    assert_eq!(surface.text(panel), None);
}

#[test]
fn color_backgrounds_are_used_directly() {
    let (slider, _mount) = built_with(vec![Slide::text("RED", "#ff0000")]);
    let surface = slider.surface();
    let panel = slider.panels().unwrap()[0];

    assert_eq!(
        surface.style(panel, "background"),
        Some("#ff0000 center no-repeat")
    );
    assert_eq!(surface.style(panel, "background-size"), Some("cover"));
}

#[test]
fn url_backgrounds_are_wrapped() {
    let (slider, _mount) = built_with(vec![Slide::text("IMAGE", "https://x/y.png")]);
    let surface = slider.surface();
    let panel = slider.panels().unwrap()[0];

    assert_eq!(
        surface.style(panel, "background"),
        Some("url(https://x/y.png) center no-repeat")
    );
}

#[test]
fn no_transform_is_applied_before_the_first_transition() {
    let (slider, _mount) = built_with(color_slides(3));
    let container = slider.container().unwrap();
    assert_eq!(slider.surface().style(container, "transform"), None);
}

#[test]
fn two_advances_shift_the_row_by_two_slide_widths() {
    let (mut slider, _mount) = built_with(color_slides(3));
    slider.advance().unwrap();
    slider.advance().unwrap();

    let container = slider.container().unwrap();
    assert_eq!(
        slider.surface().style(container, "transform"),
        Some("translateX(-1500px)")
    );
}

#[test]
fn wrapping_back_resets_the_offset_to_zero() {
    let (mut slider, _mount) = built_with(color_slides(2));
    slider.advance().unwrap();
    slider.advance().unwrap();

    let container = slider.container().unwrap();
    assert_eq!(
        slider.surface().style(container, "transform"),
        Some("translateX(-0px)")
    );
}

#[test]
fn retreat_shifts_the_row_back() {
    let (mut slider, _mount) = built_with(color_slides(4));
    slider.advance().unwrap();
    slider.advance().unwrap();
    slider.retreat().unwrap();

    let container = slider.container().unwrap();
    assert_eq!(
        slider.surface().style(container, "transform"),
        Some("translateX(-750px)")
    );
}
