//! Error taxonomy for a layout run.
//!
//! Every failure is raised synchronously to the caller of
//! [`crate::layout::layout`]. A seat shortfall is *not* an error; it is
//! reported through [`crate::layout::LayoutResult::seats_drawn`].

/// Errors that can occur while computing a parliament layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The padded 2:1 drawing region is empty or negative.
    InvalidArea { width: f64, height: f64 },
    /// Party list or seat counts cannot produce a layout.
    InvalidInput(String),
    /// Tuning ratios produced a degenerate radius.
    GeometryError(String),
}

impl LayoutError {
    pub(crate) fn input(message: impl Into<String>) -> Self {
        LayoutError::InvalidInput(message.into())
    }

    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        LayoutError::GeometryError(message.into())
    }
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidArea { width, height } => {
                write!(
                    f,
                    "Invalid drawing area: resolved region is {}×{}",
                    width, height
                )
            }
            LayoutError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            LayoutError::GeometryError(msg) => write!(f, "Geometry error: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_dimensions() {
        let err = LayoutError::InvalidArea {
            width: -4.0,
            height: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid drawing area: resolved region is -4×10"
        );
    }

    #[test]
    fn constructors_wrap_messages() {
        assert_eq!(
            LayoutError::input("no parties"),
            LayoutError::InvalidInput("no parties".to_string())
        );
        assert!(LayoutError::geometry("bad ratio")
            .to_string()
            .starts_with("Geometry error"));
    }
}
