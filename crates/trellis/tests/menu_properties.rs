//! Behavioral properties of menus driven through their public input API.

use std::cell::RefCell;
use std::rc::Rc;

use trellis::prelude::*;

fn menu() -> Menu {
    MenuBuilder::new(400.0, 300.0).rng_seed(42).build().unwrap()
}

fn key(key: Key) -> InputEvent {
    InputEvent::KeyDown(key)
}

/// Shared log of values seen by a callback.
fn recorder() -> (Rc<RefCell<Vec<Value>>>, impl FnMut(&Value, &[Value], &mut CallbackContext<'_>) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |value: &Value, _: &[Value], _: &mut CallbackContext<'_>| {
        sink.borrow_mut().push(value.clone())
    })
}

// =========================================================================
// Packing
// =========================================================================

#[test]
fn test_frame_extent_is_sum_of_children_and_margins() {
    let mut menu = menu();
    let frame = menu.add().frame_v(FrameConfig::new()).unwrap();
    let margins = [(0.0, 4.0), (0.0, 0.0), (3.0, 10.0)];
    let mut children = Vec::new();
    for (i, margin) in margins.into_iter().enumerate() {
        let id = menu.add().button(format!("Button {i}"), ButtonConfig::new()).unwrap();
        menu.pack(frame, id, Alignment::Start, margin).unwrap();
        children.push(id);
    }
    menu.update(&[]);

    let expected: f32 = children
        .iter()
        .map(|id| {
            let w = menu.widget(*id).unwrap();
            w.rect().height() + w.base().margin().y
        })
        .sum();
    let widget = menu.widget(frame).unwrap();
    assert!((widget.rect().height() - expected).abs() < 1e-3);
    assert!(!widget.as_frame().unwrap().scroll().is_scrollable());

    // Children are stacked without overlap, each advanced by its margin
    let first = menu.widget(children[0]).unwrap().rect();
    let second = menu.widget(children[1]).unwrap().rect();
    assert!((second.top() - (first.bottom() + 4.0)).abs() < 1e-3);
}

#[test]
fn test_fixed_frame_scroll_offset_is_clamped() {
    let mut menu = menu();
    let frame = menu
        .add()
        .frame_v(FrameConfig::new().with_size(300.0, 60.0))
        .unwrap();
    for i in 0..8 {
        let id = menu.add().button(format!("Row {i}"), ButtonConfig::new()).unwrap();
        menu.pack(frame, id, Alignment::Start, (0.0, 2.0)).unwrap();
    }
    menu.update(&[]);

    let scroll = *menu.widget(frame).unwrap().as_frame().unwrap().scroll();
    assert!(scroll.scrolls_vertically());
    let max = scroll.content().height - scroll.view().height;
    assert!(max > 0.0);

    menu.scroll_frame_to(frame, 0.0, 10_000.0).unwrap();
    menu.update(&[]);
    let offset = menu.widget(frame).unwrap().as_frame().unwrap().scroll().offset();
    assert!((offset.y - max).abs() < 1e-3);

    menu.scroll_frame_to(frame, 0.0, -50.0).unwrap();
    menu.update(&[]);
    let offset = menu.widget(frame).unwrap().as_frame().unwrap().scroll().offset();
    assert_eq!(offset.y, 0.0);
}

#[test]
fn test_layout_only_remeasures_dirty_path() {
    let mut menu = menu();
    let toggle = menu.add().toggle_switch("Sound", ToggleConfig::new()).unwrap();
    for i in 0..4 {
        menu.add().button(format!("B{i}"), ButtonConfig::new()).unwrap();
    }
    menu.update(&[]);
    assert!(!menu.update(&[]));

    menu.select(toggle, false).unwrap();
    menu.update(&[key(Key::Enter)]);
    // The toggle and the root frame above it
    assert_eq!(menu.layout_stats().unwrap().measured, 2);
}

// =========================================================================
// Selection
// =========================================================================

#[test]
fn test_k_navigations_return_to_start() {
    let mut menu = menu();
    let mut selectable = Vec::new();
    selectable.push(menu.add().button("One", ButtonConfig::new()).unwrap());
    menu.add().label("Not selectable", LabelConfig::new()).unwrap();
    let hidden = menu.add().button("Hidden", ButtonConfig::new()).unwrap();
    menu.hide(hidden).unwrap();
    selectable.push(menu.add().toggle_switch("Two", ToggleConfig::new()).unwrap());
    let frame = menu.add().frame_h(FrameConfig::new()).unwrap();
    let nested = menu.add().button("Three", ButtonConfig::new()).unwrap();
    menu.pack(frame, nested, Alignment::Center, (0.0, 0.0)).unwrap();
    selectable.push(nested);

    assert_eq!(menu.selection_order(), selectable);
    for start in selectable.clone() {
        menu.select(start, false).unwrap();
        let mut visited = Vec::new();
        for _ in 0..selectable.len() {
            menu.update(&[key(Key::Down)]);
            visited.push(menu.selected().unwrap());
        }
        assert_eq!(menu.selected(), Some(start));
        assert!(!visited.contains(&hidden));
    }
}

// =========================================================================
// Dropdown
// =========================================================================

fn abc(menu: &mut Menu) -> (WidgetId, Rc<RefCell<Vec<Value>>>) {
    let (log, callback) = recorder();
    let id = menu
        .add()
        .dropselect(
            "Pick",
            DropSelectConfig::new()
                .with_items([("A", Value::from("a")), ("B", Value::from("b")), ("C", Value::from("c"))])
                .on_change(callback),
        )
        .unwrap();
    menu.select(id, false).unwrap();
    (id, log)
}

#[test]
fn test_dropdown_commit_after_two_moves() {
    let mut menu = menu();
    let (id, log) = abc(&mut menu);

    menu.update(&[key(Key::Enter), key(Key::Down), key(Key::Down), key(Key::Enter)]);

    let drop = menu.widget(id).unwrap().as_drop_select().unwrap();
    assert!(!drop.is_open());
    assert_eq!(drop.index(), Some(2));
    let log = log.borrow();
    assert_eq!(log.len(), 1);
    let choice = log[0].as_choice().unwrap();
    assert_eq!((choice.label.as_str(), choice.index), ("C", 2));
    assert_eq!(*choice.value, Value::from("c"));
}

#[test]
fn test_dropdown_cancel_keeps_committed_index() {
    let mut menu = menu();
    let (id, log) = abc(&mut menu);
    menu.update(&[key(Key::Enter), key(Key::Down), key(Key::Enter)]);
    assert_eq!(menu.widget(id).unwrap().as_drop_select().unwrap().index(), Some(1));

    menu.update(&[key(Key::Enter), key(Key::Down), key(Key::Escape)]);
    let drop = menu.widget(id).unwrap().as_drop_select().unwrap();
    assert!(!drop.is_open());
    assert_eq!(drop.index(), Some(1));
    assert_eq!(log.borrow().len(), 1);
    // Escape closed the list and nothing else: the menu is still open
    assert!(menu.is_enabled());
}

// =========================================================================
// Toggle
// =========================================================================

#[test]
fn test_toggle_pair_restores_value() {
    let mut menu = menu();
    let (log, callback) = recorder();
    let id = menu
        .add()
        .toggle_switch("Music", ToggleConfig::new().with_default(true).on_change(callback))
        .unwrap();
    menu.select(id, false).unwrap();

    menu.update(&[key(Key::Enter)]);
    menu.update(&[key(Key::Enter)]);

    assert_eq!(menu.widget(id).unwrap().value(), Value::Bool(true));
    assert_eq!(*log.borrow(), vec![Value::Bool(false), Value::Bool(true)]);
}

// =========================================================================
// Text entry
// =========================================================================

#[test]
fn test_numeric_entry_rejects_letters() {
    let mut menu = menu();
    let (log, callback) = recorder();
    let id = menu
        .add()
        .text_input(
            "Age: ",
            TextInputConfig::new()
                .with_input_type(InputType::Integer)
                .with_default(12)
                .on_change(callback),
        )
        .unwrap();
    menu.select(id, false).unwrap();

    let before = {
        let input = menu.widget(id).unwrap().as_text_input().unwrap();
        (input.text().to_string(), input.cursor())
    };
    menu.update(&[InputEvent::Text("x".into())]);
    let input = menu.widget(id).unwrap().as_text_input().unwrap();
    assert_eq!((input.text().to_string(), input.cursor()), before);
    assert!(log.borrow().is_empty());

    menu.update(&[InputEvent::Text("3".into())]);
    assert_eq!(menu.widget(id).unwrap().value(), Value::Int(123));
    assert_eq!(*log.borrow(), vec![Value::Int(123)]);
}

// =========================================================================
// Color cycle
// =========================================================================

fn color_cycle(seed: u64) -> (Vec<Rgb>, usize) {
    let mut menu = MenuBuilder::new(400.0, 300.0).rng_seed(seed).build().unwrap();
    let colors = Rc::new(RefCell::new(Vec::new()));
    let sink = colors.clone();
    let id = menu
        .add()
        .selector(
            "Color: ",
            SelectorConfig::new()
                .with_items(trellis::gallery::color_items())
                .with_args([Value::from("background")])
                .on_return(move |value, args, cx| {
                    assert_eq!(args, &[Value::from("background")]);
                    let mut color = value.as_choice().unwrap().value.as_color().unwrap();
                    if color.is_unset() {
                        color = cx.random_rgb();
                    }
                    sink.borrow_mut().push(color);
                }),
        )
        .unwrap();
    menu.select(id, false).unwrap();

    menu.update(&[key(Key::Right), key(Key::Right), key(Key::Right)]);
    let index = menu.widget(id).unwrap().as_selector().unwrap().index();
    menu.update(&[key(Key::Enter)]);
    let seen = colors.borrow().clone();
    (seen, index)
}

#[test]
fn test_random_choice_yields_real_color() {
    let (colors, index) = color_cycle(7);
    assert_eq!(index, 3);
    assert_eq!(colors.len(), 1);
    let color = colors[0];
    assert_ne!(color, Rgb::UNSET);
    assert!(color.is_valid());
}

#[test]
fn test_random_choice_is_deterministic_per_seed() {
    assert_eq!(color_cycle(11).0, color_cycle(11).0);
}
