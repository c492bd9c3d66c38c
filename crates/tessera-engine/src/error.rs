use std::fmt;

/// A projection parameter set that would produce non-finite matrix entries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ProjectionError {
    /// `near` must be positive and strictly less than `far`.
    ClipPlanes { near: f32, far: f32 },
    /// Vertical field of view must lie in `(0, π)` radians.
    FieldOfView(f32),
    /// Aspect ratio must be positive and finite.
    AspectRatio(f32),
    /// Orthographic box has zero extent on some axis.
    EmptyVolume,
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClipPlanes { near, far } => {
                write!(f, "invalid clip planes: near = {near}, far = {far}")
            }
            Self::FieldOfView(fov) => write!(f, "field of view {fov} rad is outside (0, pi)"),
            Self::AspectRatio(aspect) => write!(f, "invalid aspect ratio {aspect}"),
            Self::EmptyVolume => f.write_str("orthographic volume has zero extent"),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// Failure while assembling a frame's matrices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameError {
    /// The camera placement is singular (zero scale), so it has no view matrix.
    DegenerateCamera,
    InvalidProjection(ProjectionError),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateCamera => f.write_str("camera transform is singular; no view matrix"),
            Self::InvalidProjection(e) => write!(f, "invalid projection: {e}"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidProjection(e) => Some(e),
            Self::DegenerateCamera => None,
        }
    }
}

impl From<ProjectionError> for FrameError {
    fn from(e: ProjectionError) -> Self {
        Self::InvalidProjection(e)
    }
}
