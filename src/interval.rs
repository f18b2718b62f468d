use crate::prelude::*;

/// Controls whether the end-points of a range count as inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum DateInterval {
    /// Neither end-point is included
    Open,
    /// The earlier end-point is included
    ClosedLeft,
    /// The later end-point is included
    ClosedRight,
    /// Both end-points are included
    #[default]
    Closed,
}

impl DateInterval {
    /// Tests `value` against the bounds. The bounds may be given in either order.
    pub fn contains(self, value: i32, bound1: i32, bound2: i32) -> bool {
        let start = bound1.min(bound2);
        let end = bound1.max(bound2);
        match self {
            Self::Open => start < value && value < end,
            Self::ClosedLeft => start <= value && value < end,
            Self::ClosedRight => start < value && value <= end,
            Self::Closed => start <= value && value <= end,
        }
    }
}
