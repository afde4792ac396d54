//! Piece colors and per-color data storage.
//!
//! ## Color
//!
//! The two sides of a game. An empty cell is `Option<Color>::None`, so there
//! is no "no color" variant to guard against.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for reserves and scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
///
/// Red moves first unless the configuration says otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Both colors, Red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Slot index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    /// Wire code of a cell's occupant: 0 = empty, 1 = Red, 2 = Blue.
    #[must_use]
    pub const fn code(cell: Option<Color>) -> u8 {
        match cell {
            None => 0,
            Some(Color::Red) => 1,
            Some(Color::Blue) => 2,
        }
    }

    /// Decode a wire code. Returns `Err(code)` for anything other than 0, 1 or 2.
    pub const fn from_code(code: u8) -> Result<Option<Color>, u8> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Color::Red)),
            2 => Ok(Some(Color::Blue)),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use mill3d::core::{Color, ColorMap};
///
/// let mut reserve: ColorMap<u32> = ColorMap::with_value(23);
/// reserve[Color::Blue] -= 1;
///
/// assert_eq!(reserve[Color::Red], 23);
/// assert_eq!(reserve[Color::Blue], 22);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Overwrite a color's data.
    pub fn set(&mut self, color: Color, value: T) {
        self.data[color.index()] = value;
    }

    /// Iterate over (Color, &T) pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
