use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A voter's stated preference for a menu: 1st, 2nd, or 3rd choice.
///
/// Ranks convert to points as `points = 4 - rank`, so a first choice is
/// worth 3 points and a third choice 1 point. The enum is closed: an
/// out-of-range rank is unrepresentable once decoded, which is what keeps
/// the aggregation total-points arithmetic total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    First = 1,
    Second = 2,
    Third = 3,
}

impl Rank {
    /// Points awarded for this rank (3, 2, or 1).
    pub fn points(&self) -> u32 {
        4 - *self as u32
    }

    /// The rank that awards the given points. Inverse of [`Rank::points`].
    pub fn from_points(points: i64) -> Result<Self, TypeError> {
        match points {
            3 => Ok(Self::First),
            2 => Ok(Self::Second),
            1 => Ok(Self::Third),
            other => Err(TypeError::InvalidPoints(other)),
        }
    }

    /// Numeric rank value (1, 2, or 3).
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// All ranks in preference order.
    pub fn all() -> [Rank; 3] {
        [Self::First, Self::Second, Self::Third]
    }
}

impl TryFrom<u8> for Rank {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(TypeError::InvalidRank(i64::from(other))),
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "1st"),
            Self::Second => write!(f, "2nd"),
            Self::Third => write!(f, "3rd"),
        }
    }
}
