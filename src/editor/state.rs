use std::fmt;

/// Whether map clicks currently add points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing,
}

impl EditorState {
    pub fn is_drawing(self) -> bool {
        self == EditorState::Drawing
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorState::Idle => write!(f, "idle"),
            EditorState::Drawing => write!(f, "drawing"),
        }
    }
}
