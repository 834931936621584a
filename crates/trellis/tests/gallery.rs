//! The bundled examples build, lay out and draw.

use std::cell::RefCell;
use std::rc::Rc;

use trellis::gallery::{Example, HEIGHT, WIDTH};
use trellis::prelude::*;

#[test]
fn test_every_example_builds_and_draws() {
    for example in Example::ALL {
        let mut menu = example.build().unwrap();
        menu.update(&[]);
        assert!(menu.is_enabled(), "{example} disabled after first update");

        let mut surface = DrawList::new(Size::new(WIDTH, HEIGHT)).unwrap();
        menu.draw(&mut surface).unwrap();
        assert_eq!(surface.frame_count(), 1);
        assert!(!surface.commands().is_empty(), "{example} drew nothing");
    }
}

#[test]
fn test_example_names_round_trip() {
    for example in Example::ALL {
        assert_eq!(example.name().parse::<Example>().unwrap(), example);
    }
    assert!(matches!(
        "slider".parse::<Example>(),
        Err(ConfigurationError::UnknownExample(name)) if name == "slider"
    ));
}

#[test]
fn test_button_example_submenu_and_exit() {
    let mut menu = Example::Button.build().unwrap();
    menu.update(&[]);
    assert_eq!(menu.widget(menu.selected().unwrap()).unwrap().title(), "About");

    menu.update(&[InputEvent::KeyDown(Key::Enter)]);
    assert_eq!(menu.current().title(), "About");

    menu.update(&[InputEvent::KeyDown(Key::Escape)]);
    assert_eq!(menu.current().title(), menu.title());

    menu.update(&[InputEvent::KeyDown(Key::Down), InputEvent::KeyDown(Key::Enter)]);
    assert!(menu.exit_requested());
}

#[test]
fn test_url_example_uses_injected_opener() {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let sink = opened.clone();
    let mut menu = Example::Url
        .builder()
        .url_opener(move |url: &str| {
            sink.borrow_mut().push(url.to_string());
            Ok(())
        })
        .build()
        .unwrap();
    Example::Url.populate(&mut menu).unwrap();

    menu.update(&[InputEvent::KeyDown(Key::Down), InputEvent::KeyDown(Key::Enter)]);
    assert_eq!(*opened.borrow(), vec!["https://github.com/trellis-ui/trellis".to_string()]);
}

#[test]
fn test_scripted_mainloop_runs_gallery() {
    let mut menu = Example::ToggleSwitch.builder().rng_seed(3).build().unwrap();
    Example::ToggleSwitch.populate(&mut menu).unwrap();
    let mut surface = DrawList::new(Size::new(WIDTH, HEIGHT)).unwrap();
    let mut input = ScriptedInput::new([
        vec![InputEvent::KeyDown(Key::Down)],
        vec![InputEvent::KeyDown(Key::Enter)],
        vec![InputEvent::KeyDown(Key::Escape)],
    ]);

    menu.mainloop(&mut surface, &mut input).unwrap();
    // Escape closes the example's menu; the closing frame is still drawn
    assert!(!menu.is_enabled());
    assert_eq!(surface.frame_count(), 3);
}

fn random_selector_color(seed: u64) -> (Color, Color) {
    let mut menu = Example::Selector.builder().rng_seed(seed).build().unwrap();
    Example::Selector.populate(&mut menu).unwrap();
    menu.update(&[InputEvent::KeyDown(Key::Down)]);
    let id = menu.selected().unwrap();
    assert_eq!(menu.widget(id).unwrap().title(), "Current color:\t");

    let right = InputEvent::KeyDown(Key::Right);
    menu.update(&[right.clone(), right.clone(), right]);
    let before = menu.widget(id).unwrap().base().font().selected_color;

    menu.update(&[InputEvent::KeyDown(Key::Enter)]);
    let widget = menu.widget(id).unwrap();
    assert_eq!(widget.as_selector().unwrap().index(), 3);
    let after = widget.base().font().selected_color;
    assert_eq!(after, widget.selection_effect().color());
    (before, after)
}

#[test]
fn test_selector_example_random_recolor() {
    let (before, after) = random_selector_color(11);
    assert_ne!(before, after);
    assert_eq!(random_selector_color(11), (before, after));
}
