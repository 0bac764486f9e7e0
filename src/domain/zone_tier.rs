use serde::{Deserialize, Serialize};
use std::fmt;

/// The five bands around the HPR trend, highest first.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ZoneTier {
    ExtremeResistance, // Above the strong resistance line
    StrongResistance,  // Between upper normal and strong resistance
    NormalRange,
    StrongSupport,     // Between strong support and lower normal
    ExtremeSupport,    // At or below the strong support line
}

impl ZoneTier {
    /// Position in the highest-first ordering, handy for indexing count arrays
    pub fn index(self) -> usize {
        match self {
            ZoneTier::ExtremeResistance => 0,
            ZoneTier::StrongResistance => 1,
            ZoneTier::NormalRange => 2,
            ZoneTier::StrongSupport => 3,
            ZoneTier::ExtremeSupport => 4,
        }
    }

    pub const COUNT: usize = 5;
}

impl fmt::Display for ZoneTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZoneTier::ExtremeResistance => write!(f, "Extreme Resistance"),
            ZoneTier::StrongResistance => write!(f, "Strong Resistance"),
            ZoneTier::NormalRange => write!(f, "Normal Range"),
            ZoneTier::StrongSupport => write!(f, "Strong Support"),
            ZoneTier::ExtremeSupport => write!(f, "Extreme Support"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn index_follows_iteration_order() {
        for (expected, tier) in ZoneTier::iter().enumerate() {
            assert_eq!(tier.index(), expected);
        }
        assert_eq!(ZoneTier::iter().count(), ZoneTier::COUNT);
    }
}
