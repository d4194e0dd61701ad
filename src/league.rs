use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One of the two sides. `First` plays crosses and moves first, `Second` plays noughts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum League {
    First,
    Second,
}

impl League {
    pub const BOTH: [League; 2] = [League::First, League::Second];

    pub fn other(self) -> League {
        match self {
            League::First => League::Second,
            League::Second => League::First,
        }
    }

    pub fn is_first(self) -> bool {
        self == League::First
    }

    pub fn to_char(self) -> char {
        match self {
            League::First => 'X',
            League::Second => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<League> {
        match c {
            'X' => Some(League::First),
            'O' => Some(League::Second),
            _ => None,
        }
    }

    /// `1` if `self` is `pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: League) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

impl Display for League {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
