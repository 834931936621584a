//! Drawing surfaces.
//!
//! A [`Surface`] is the external immediate-mode drawing target. The engine
//! only ever submits [`DrawCommand`]s; rasterization belongs to the backend.
//! [`DrawList`] is a recording surface used for headless runs and tests.

use crate::command::DrawCommand;
use crate::error::{RenderError, RenderResult};
use crate::types::{Rect, Size};

/// An immediate-mode drawing target.
pub trait Surface {
    /// Logical size of the drawable area.
    fn size(&self) -> Size;

    /// Execute one draw command.
    fn submit(&mut self, command: &DrawCommand) -> RenderResult<()>;

    /// Begin a new frame. The default does nothing.
    fn begin_frame(&mut self) -> RenderResult<()> {
        Ok(())
    }

    /// Finish the current frame. The default does nothing.
    fn end_frame(&mut self) -> RenderResult<()> {
        Ok(())
    }
}

/// A surface that records every command it receives.
///
/// Clip commands are validated so that unbalanced push/pop pairs surface as
/// errors during tests.
#[derive(Debug, Clone)]
pub struct DrawList {
    size: Size,
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
    frames: usize,
}

impl DrawList {
    /// Create a recording surface of the given size.
    pub fn new(size: Size) -> RenderResult<Self> {
        if size.is_empty() {
            return Err(RenderError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            commands: Vec::new(),
            clip_stack: Vec::new(),
            frames: 0,
        })
    }

    /// Commands recorded since the last frame began.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every text string drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::text)
    }

    /// Whether some text command draws exactly `text`.
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }

    /// Number of frames begun on this surface.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// The clip currently in effect.
    pub fn current_clip(&self) -> Rect {
        self.clip_stack
            .last()
            .copied()
            .unwrap_or(Rect::from_origin_size(Default::default(), self.size))
    }
}

impl Surface for DrawList {
    fn size(&self) -> Size {
        self.size
    }

    fn submit(&mut self, command: &DrawCommand) -> RenderResult<()> {
        match command {
            DrawCommand::PushClip(rect) => {
                let clip = self.current_clip().intersect(rect).unwrap_or(Rect::ZERO);
                self.clip_stack.push(clip);
            }
            DrawCommand::PopClip => {
                self.clip_stack.pop().ok_or(RenderError::ClipUnderflow)?;
            }
            _ => {}
        }
        self.commands.push(command.clone());
        Ok(())
    }

    fn begin_frame(&mut self) -> RenderResult<()> {
        self.commands.clear();
        self.clip_stack.clear();
        self.frames += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> RenderResult<()> {
        if !self.clip_stack.is_empty() {
            tracing::warn!(
                target: "trellis::render",
                depth = self.clip_stack.len(),
                "frame ended with clips still pushed"
            );
        }
        tracing::trace!(
            target: "trellis::render",
            frame = self.frames,
            commands = self.commands.len(),
            "frame recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::types::{Color, Point};

    #[test]
    fn test_draw_list_records_commands() {
        let mut list = DrawList::new(Size::new(100.0, 100.0)).unwrap();
        list.begin_frame().unwrap();
        list.submit(&DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            color: Color::RED,
        })
        .unwrap();
        list.submit(&DrawCommand::Text {
            text: "Play".into(),
            origin: Point::ZERO,
            font: Font::default(),
            color: Color::WHITE,
        })
        .unwrap();

        assert_eq!(list.commands().len(), 2);
        assert!(list.contains_text("Play"));
        assert_eq!(list.frame_count(), 1);
    }

    #[test]
    fn test_clip_stack() {
        let mut list = DrawList::new(Size::new(100.0, 100.0)).unwrap();
        list.submit(&DrawCommand::PushClip(Rect::new(50.0, 50.0, 100.0, 100.0)))
            .unwrap();
        assert_eq!(list.current_clip(), Rect::new(50.0, 50.0, 50.0, 50.0));
        list.submit(&DrawCommand::PopClip).unwrap();
        assert!(matches!(
            list.submit(&DrawCommand::PopClip),
            Err(RenderError::ClipUnderflow)
        ));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(DrawList::new(Size::new(0.0, 10.0)).is_err());
    }
}
