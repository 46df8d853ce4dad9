use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// An investable company. The numeric identifier of each company doubles as
/// its total card supply for a round (see [`Company::supply`]), so the six
/// companies together contribute 45 cards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Company {
    Otter,
    Badger,
    Falcon,
    Iguana,
    Panda,
    Walrus,
}

impl Company {
    /// Canonical iteration order (ascending identifier). Majority and scoring
    /// passes always walk companies in this order so results are reproducible.
    pub const ALL: [Company; 6] = [
        Company::Otter,
        Company::Badger,
        Company::Falcon,
        Company::Iguana,
        Company::Panda,
        Company::Walrus,
    ];

    pub const fn id(self) -> u8 {
        match self {
            Company::Otter => 5,
            Company::Badger => 6,
            Company::Falcon => 7,
            Company::Iguana => 8,
            Company::Panda => 9,
            Company::Walrus => 10,
        }
    }

    /// Cards this company contributes to a round's deck. Kept as an explicit
    /// table rather than derived from `id` so the domain set can change
    /// without silently breaking the deck size.
    pub const fn supply(self) -> usize {
        match self {
            Company::Otter => 5,
            Company::Badger => 6,
            Company::Falcon => 7,
            Company::Iguana => 8,
            Company::Panda => 9,
            Company::Walrus => 10,
        }
    }
}

/// One card is one unit of exactly one company.
pub type Card = Company;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supply_matches_identifier() {
        for company in Company::ALL {
            assert_eq!(company.supply(), company.id() as usize);
        }
    }

    #[test]
    fn total_supply_is_45() {
        let total: usize = Company::ALL.iter().map(|c| c.supply()).sum();
        assert_eq!(total, 45);
    }

    #[test]
    fn canonical_order_is_ascending() {
        let ids: Vec<u8> = Company::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec![5, 6, 7, 8, 9, 10]);
    }
}
