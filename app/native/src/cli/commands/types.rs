//! Shared types for CLI commands.

use std::str::FromStr;

use crate::modules::windows::Viewport;

/// A viewport size given as `WIDTHxHEIGHT`, e.g. `1280x720`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize(Viewport);

impl ViewportSize {
    /// The parsed viewport.
    #[must_use]
    pub const fn viewport(self) -> Viewport { self.0 }
}

impl FromStr for ViewportSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid viewport '{s}'. Expected WIDTHxHEIGHT, e.g. 1280x720.");

        let (width, height) = s.to_lowercase().split_once('x').map_or_else(
            || Err(invalid()),
            |(w, h)| {
                let width = w.trim().parse::<i32>().map_err(|_| invalid())?;
                let height = h.trim().parse::<i32>().map_err(|_| invalid())?;
                Ok((width, height))
            },
        )?;

        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        Ok(Self(Viewport::new(width, height)))
    }
}

impl std::fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0.width, self.0.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_size_from_str() {
        let size: ViewportSize = "1280x720".parse().unwrap();
        assert_eq!(size.viewport(), Viewport::new(1280, 720));
    }

    #[test]
    fn test_viewport_size_case_insensitive() {
        let size: ViewportSize = "800X600".parse().unwrap();
        assert_eq!(size.viewport(), Viewport::new(800, 600));
    }

    #[test]
    fn test_viewport_size_invalid() {
        assert!("1280".parse::<ViewportSize>().is_err());
        assert!("axb".parse::<ViewportSize>().is_err());
        assert!("0x720".parse::<ViewportSize>().is_err());
    }

    #[test]
    fn test_viewport_size_display() {
        let size: ViewportSize = "1024x768".parse().unwrap();
        assert_eq!(size.to_string(), "1024x768");
    }
}
