/// How leftover horizontal space on a line is distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    /// Stretch the gaps between items so a full line spans the available
    /// width. Single-item lines and the last line keep `Start` placement.
    Justify,
}

/// A size constraint handed to [`crate::FlowLayout::measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The container is exactly this size.
    Exact(i32),
    /// The container may grow up to this size.
    AtMost(i32),
}

impl Constraint {
    pub const fn size(&self) -> i32 {
        match self {
            Self::Exact(n) | Self::AtMost(n) => *n,
        }
    }

    /// The reported size for a dimension whose content measured `content`.
    pub fn resolve(&self, content: i32) -> i32 {
        match self {
            Self::Exact(n) => *n,
            Self::AtMost(_) => content,
        }
    }
}

/// Visual variant a host should draw a tag with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Visual {
    #[default]
    Default,
    Pressed,
    Selected,
}
