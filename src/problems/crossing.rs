//! Farmer, cabbage, goat and wolf crossing a river.
//!
//! The farmer's boat fits him and one more item. Left without the farmer, the
//! goat eats the cabbage and the wolf eats the goat.

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

use crate::config::StateSpace;
use crate::space::Space;
use crate::space::State;
use crate::space::Transition;

/// Header naming the columns of a displayed `CrossingState`.
pub const HEADER: &str = "FCGW";

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum Bank {
    #[default]
    #[display("1")]
    Near,
    #[display("2")]
    Far,
}

impl Bank {
    #[inline(always)]
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Near => Bank::Far,
            Bank::Far => Bank::Near,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Item {
    #[display("cabbage")]
    Cabbage,
    #[display("goat")]
    Goat,
    #[display("wolf")]
    Wolf,
}

impl Item {
    pub const ALL: [Item; 3] = [Item::Cabbage, Item::Goat, Item::Wolf];
}

/// Where everyone is. Displays as `FCGW` digits, `1` for the near bank and `2`
/// for the far one.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
#[display("{farmer}{cabbage}{goat}{wolf}")]
pub struct CrossingState {
    pub farmer: Bank,
    pub cabbage: Bank,
    pub goat: Bank,
    pub wolf: Bank,
}
impl State for CrossingState {}

impl CrossingState {
    pub fn all_on(bank: Bank) -> Self {
        Self {
            farmer: bank,
            cabbage: bank,
            goat: bank,
            wolf: bank,
        }
    }

    pub fn bank_of(&self, item: Item) -> Bank {
        match item {
            Item::Cabbage => self.cabbage,
            Item::Goat => self.goat,
            Item::Wolf => self.wolf,
        }
    }
    fn bank_of_mut(&mut self, item: Item) -> &mut Bank {
        match item {
            Item::Cabbage => &mut self.cabbage,
            Item::Goat => &mut self.goat,
            Item::Wolf => &mut self.wolf,
        }
    }

    /// Whether nobody gets eaten.
    pub fn is_safe(&self) -> bool {
        self.goat == self.farmer || (self.goat != self.cabbage && self.goat != self.wolf)
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::all_on(Bank::Far)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrossingStateParseError {
    #[error("Expected 4 banks, found {0}")]
    WrongLength(usize),
    #[error("Invalid bank '{found}' at column {column}, expected '1' or '2'")]
    InvalidBank { column: usize, found: char },
}

impl FromStr for CrossingState {
    type Err = CrossingStateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let length = s.chars().count();
        if length != HEADER.len() {
            return Err(CrossingStateParseError::WrongLength(length));
        }

        let mut banks = [Bank::Near; 4];
        for (column, ch) in s.chars().enumerate() {
            banks[column] = match ch {
                '1' => Bank::Near,
                '2' => Bank::Far,
                found => return Err(CrossingStateParseError::InvalidBank { column, found }),
            };
        }

        let [farmer, cabbage, goat, wolf] = banks;
        Ok(CrossingState {
            farmer,
            cabbage,
            goat,
            wolf,
        })
    }
}

/// A boat trip.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Cross {
    #[display("farmer crosses alone")]
    Alone,
    #[display("farmer crosses with the {_0}")]
    With(Item),
}

impl Transition<CrossingState> for Cross {
    #[inline(always)]
    fn apply(&self, s: &mut CrossingState) {
        if let Cross::With(item) = *self {
            debug_assert_eq!(s.bank_of(item), s.farmer);
            let bank = s.bank_of_mut(item);
            *bank = bank.opposite();
        }
        s.farmer = s.farmer.opposite();
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct CrossingSpace;

impl Space<CrossingState> for CrossingSpace {
    type Transition = Cross;

    fn transitions(&self, s: &CrossingState) -> Vec<Cross> {
        let mut moves = Vec::with_capacity(1 + Item::ALL.len());
        moves.push(Cross::Alone);
        moves.extend(
            Item::ALL
                .into_iter()
                .filter(|item| s.bank_of(*item) == s.farmer)
                .map(Cross::With),
        );
        moves
    }

    #[inline(always)]
    fn valid(&self, s: &CrossingState) -> bool {
        s.is_safe()
    }
}

/// Everyone on the far bank.
pub fn goal(s: &CrossingState) -> bool {
    s.is_goal()
}

/// The puzzle, starting with everyone on the near bank.
pub fn state_space() -> StateSpace<CrossingSpace, CrossingState> {
    StateSpace::new(CrossingState::all_on(Bank::Near), CrossingSpace)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::SearchOrder;

    fn state(s: &str) -> CrossingState {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_display() {
        let s = state("2121");
        assert_eq!(s.farmer, Bank::Far);
        assert_eq!(s.cabbage, Bank::Near);
        assert_eq!(s.goat, Bank::Far);
        assert_eq!(s.wolf, Bank::Near);
        assert_eq!(s.to_string(), "2121");
        assert_eq!(CrossingState::default().to_string(), "1111");

        assert_eq!(
            "121".parse::<CrossingState>(),
            Err(CrossingStateParseError::WrongLength(3))
        );
        assert_eq!(
            "12x1".parse::<CrossingState>(),
            Err(CrossingStateParseError::InvalidBank {
                column: 2,
                found: 'x'
            })
        );
        assert_eq!(
            CrossingStateParseError::InvalidBank {
                column: 2,
                found: 'x'
            }
            .to_string(),
            "Invalid bank 'x' at column 2, expected '1' or '2'"
        );
    }

    #[test]
    fn safety() {
        assert!(state("1111").is_safe());
        assert!(state("2222").is_safe());
        // Goat and cabbage on the near bank, farmer away.
        assert!(!state("2112").is_safe());
        // Goat and wolf on the far bank, farmer away.
        assert!(!state("1122").is_safe());
        // Cabbage and wolf get along.
        assert!(state("2121").is_safe());
    }

    #[test]
    fn moves_take_items_from_the_farmers_bank() {
        let space = CrossingSpace;
        let s = state("2121");
        assert_eq!(
            space.transitions(&s),
            vec![Cross::Alone, Cross::With(Item::Goat)]
        );
        assert_eq!(space.apply(&s, &Cross::With(Item::Goat)), state("1111"));
        assert_eq!(space.apply(&s, &Cross::Alone), state("1121"));
        assert_eq!(
            Cross::With(Item::Wolf).to_string(),
            "farmer crosses with the wolf"
        );
    }

    #[test]
    fn shortest_solution_takes_seven_trips() {
        let space = state_space();
        let paths = space.check(goal, SearchOrder::BreadthFirst);

        let first = paths.first().unwrap();
        assert_eq!(first.len(), 7);
        assert_eq!(*first.start(), state("1111"));
        assert_eq!(*first.end(), state("2222"));
        // The goat goes first, whatever comes next.
        assert_eq!(first.states()[1], state("2121"));

        for p in &paths {
            assert!(p.iter().all(CrossingState::is_safe));
            assert!(space.space().valid_path(p));
        }
    }
}
