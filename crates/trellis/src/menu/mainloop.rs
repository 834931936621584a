//! Driving a menu frame by frame.

use std::collections::VecDeque;

use trellis_render::{RenderResult, Surface};

use super::Menu;
use crate::widget::InputEvent;

/// Supplies one frame of input events at a time.
///
/// Backends implement this over their event queue; `None` means the event
/// source is exhausted and the loop should stop.
pub trait InputSource {
    fn next_frame(&mut self) -> Option<Vec<InputEvent>>;
}

impl<F> InputSource for F
where
    F: FnMut() -> Option<Vec<InputEvent>>,
{
    fn next_frame(&mut self) -> Option<Vec<InputEvent>> {
        self()
    }
}

/// Replays a fixed list of frames. Useful in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames not yet replayed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_frame(&mut self) -> Option<Vec<InputEvent>> {
        self.frames.pop_front()
    }
}

impl Menu {
    /// Run the menu until it is closed, exit is requested or `input` runs
    /// dry.
    ///
    /// Each iteration processes one frame of events and then draws. Only
    /// drawing can fail.
    pub fn mainloop(
        &mut self,
        surface: &mut dyn Surface,
        input: &mut dyn InputSource,
    ) -> RenderResult<()> {
        tracing::info!(target: "trellis::menu", title = %self.title(), "mainloop started");
        let mut frames = 0usize;
        while self.is_enabled() && !self.exit_requested() {
            let Some(events) = input.next_frame() else {
                break;
            };
            self.update(&events);
            self.draw(surface)?;
            frames += 1;
        }
        tracing::info!(
            target: "trellis::menu",
            title = %self.title(),
            frames,
            closed = !self.is_enabled(),
            exit = self.exit_requested(),
            "mainloop stopped"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{ButtonConfig, MenuBuilder, OnClose};
    use crate::widget::{Key, MenuAction};
    use trellis_render::{DrawList, Size};

    #[test]
    fn test_stops_when_input_runs_out() {
        let mut menu = MenuBuilder::new(200.0, 200.0).build().unwrap();
        let mut surface = DrawList::new(Size::new(200.0, 200.0)).unwrap();
        let mut input = ScriptedInput::new(vec![vec![], vec![]]);
        menu.mainloop(&mut surface, &mut input).unwrap();
        assert_eq!(surface.frame_count(), 2);
        assert!(menu.is_enabled());
    }

    #[test]
    fn test_escape_closes_with_close_policy() {
        let mut menu = MenuBuilder::new(200.0, 200.0)
            .on_close(OnClose::Close)
            .build()
            .unwrap();
        let mut surface = DrawList::new(Size::new(200.0, 200.0)).unwrap();
        let mut input = ScriptedInput::new(vec![vec![InputEvent::KeyDown(Key::Escape)], vec![], vec![]]);
        menu.mainloop(&mut surface, &mut input).unwrap();
        assert!(!menu.is_enabled());
        assert_eq!(input.remaining(), 2);
    }

    #[test]
    fn test_exit_button_stops_loop() {
        let mut menu = MenuBuilder::new(200.0, 200.0).build().unwrap();
        menu.add()
            .button("Quit", ButtonConfig::new().with_action(MenuAction::Exit))
            .unwrap();
        let mut surface = DrawList::new(Size::new(200.0, 200.0)).unwrap();
        let mut frames = vec![
            vec![InputEvent::KeyDown(Key::Down), InputEvent::KeyDown(Key::Enter)],
            vec![],
        ]
        .into_iter();
        let mut input = move || frames.next();
        menu.mainloop(&mut surface, &mut input).unwrap();
        assert!(menu.exit_requested());
        assert_eq!(surface.frame_count(), 1);
    }

    #[test]
    fn test_reenabled_menu_runs_after_exit() {
        let mut menu = MenuBuilder::new(200.0, 200.0).build().unwrap();
        menu.add()
            .button("Quit", ButtonConfig::new().with_action(MenuAction::Exit))
            .unwrap();
        menu.update(&[InputEvent::KeyDown(Key::Down), InputEvent::KeyDown(Key::Enter)]);
        assert!(menu.exit_requested());

        menu.enable();
        assert!(!menu.exit_requested());
        let mut surface = DrawList::new(Size::new(200.0, 200.0)).unwrap();
        let mut input = ScriptedInput::new(vec![vec![], vec![]]);
        menu.mainloop(&mut surface, &mut input).unwrap();
        assert_eq!(surface.frame_count(), 2);
    }

    #[test]
    fn test_quit_event_closes() {
        let mut menu = MenuBuilder::new(200.0, 200.0).build().unwrap();
        assert!(menu.update(&[InputEvent::Quit]));
        assert!(!menu.is_enabled());
        assert!(!menu.update(&[InputEvent::KeyDown(Key::Down)]));
    }
}
