use std::fmt;

use pixelpad_engine::input::Key;

/// Single-contact drag behavior.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Tool {
    #[default]
    Draw,
    Eraser,
    Move,
    Rotation,
    Zoom,
}

impl Tool {
    pub const ALL: [Tool; 5] = [Tool::Draw, Tool::Eraser, Tool::Move, Tool::Rotation, Tool::Zoom];

    /// Keyboard shortcut: D, E, M, R, Z.
    pub fn from_key(key: Key) -> Option<Tool> {
        match key {
            Key::Letter('d') => Some(Tool::Draw),
            Key::Letter('e') => Some(Tool::Eraser),
            Key::Letter('m') => Some(Tool::Move),
            Key::Letter('r') => Some(Tool::Rotation),
            Key::Letter('z') => Some(Tool::Zoom),
            _ => None,
        }
    }

    /// Draw and Eraser mutate the grid; the rest only move the view.
    pub fn paints(self) -> bool {
        matches!(self, Tool::Draw | Tool::Eraser)
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Draw => "Draw",
            Tool::Eraser => "Eraser",
            Tool::Move => "Move",
            Tool::Rotation => "Rotation",
            Tool::Zoom => "Zoom",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
