use super::Visual;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    /// Raise perceptual lightness by `amount` (0.0..=1.0).
    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch();
        Self::Oklch {
            l: (l + amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    /// Lower perceptual lightness by `amount` (0.0..=1.0).
    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    fn to_oklch(self) -> (f32, f32, f32) {
        use palette::{IntoColor, Oklch, Srgb};

        match self {
            Self::Oklch { l, c, h } => (l, c, h),
            Self::Rgb { r, g, b } => {
                let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

/// A colour per visual state. Unset states fall back to the default colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateColors {
    pub default: Color,
    pub pressed: Option<Color>,
    pub selected: Option<Color>,
}

impl StateColors {
    pub const fn new(default: Color) -> Self {
        Self {
            default,
            pressed: None,
            selected: None,
        }
    }

    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = Some(color);
        self
    }

    pub fn selected(mut self, color: Color) -> Self {
        self.selected = Some(color);
        self
    }

    pub fn get(&self, visual: Visual) -> Color {
        match visual {
            Visual::Default => self.default,
            Visual::Pressed => self.pressed.unwrap_or(self.default),
            Visual::Selected => self.selected.unwrap_or(self.default),
        }
    }

    pub fn resolve(&self, visual: Visual) -> Rgb {
        self.get(visual).to_rgb()
    }
}
