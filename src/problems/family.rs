//! Japanese family river crossing.
//!
//! A mother, a father, two daughters, two sons, a policeman and a prisoner
//! must cross a river on a two-seat raft:
//! - Children cannot sail without an adult, and the prisoner does not count as
//!   one.
//! - Without the policeman around, the prisoner hurts any family member.
//! - The father scolds the daughters when the mother is not around, and the
//!   mother scolds the sons when the father is not around.
//!
//! The rules on the prisoner and the children only apply while the raft is
//! sailing, the family rules apply everywhere (on board included).

use derive_more::Display;

use crate::config::CostStateSpace;
use crate::space::Cost;
use crate::space::CostSpace;
use crate::space::Space;
use crate::space::State;
use crate::space::Transition;

/// Header naming the columns of a displayed `FamilyState`.
pub const HEADER: &str = "Boat,     Mothr,Fathr,Daug1,Daug2,Son1, Son2, Polic,Prisn";

const BOAT_CAPACITY: u16 = 2;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Person {
    #[display("mother")]
    Mother = 0,
    #[display("father")]
    Father = 1,
    #[display("daughter 1")]
    Daughter1 = 2,
    #[display("daughter 2")]
    Daughter2 = 3,
    #[display("son 1")]
    Son1 = 4,
    #[display("son 2")]
    Son2 = 5,
    #[display("policeman")]
    Policeman = 6,
    #[display("prisoner")]
    Prisoner = 7,
}

impl Person {
    pub const ALL: [Person; 8] = [
        Person::Mother,
        Person::Father,
        Person::Daughter1,
        Person::Daughter2,
        Person::Son1,
        Person::Son2,
        Person::Policeman,
        Person::Prisoner,
    ];
    pub const CHILDREN: [Person; 4] = [
        Person::Daughter1,
        Person::Daughter2,
        Person::Son1,
        Person::Son2,
    ];
    pub const FAMILY: [Person; 6] = [
        Person::Mother,
        Person::Father,
        Person::Daughter1,
        Person::Daughter2,
        Person::Son1,
        Person::Son2,
    ];
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Shore {
    #[display("shore 1")]
    Shore1,
    #[display("shore 2")]
    Shore2,
}

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum PersonPos {
    #[default]
    #[display("{{sh1}}")]
    Shore1,
    #[display("{{~~~}}")]
    Onboard,
    #[display("{{SH2}}")]
    Shore2,
}

impl From<Shore> for PersonPos {
    fn from(shore: Shore) -> Self {
        match shore {
            Shore::Shore1 => PersonPos::Shore1,
            Shore::Shore2 => PersonPos::Shore2,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum BoatPos {
    #[default]
    #[display("sh1")]
    Shore1,
    #[display("trv")]
    Travel,
    #[display("SH2")]
    Shore2,
}

impl BoatPos {
    /// The shore the boat is moored at, if any.
    pub fn shore(self) -> Option<Shore> {
        match self {
            BoatPos::Shore1 => Some(Shore::Shore1),
            BoatPos::Travel => None,
            BoatPos::Shore2 => Some(Shore::Shore2),
        }
    }
}

impl From<Shore> for BoatPos {
    fn from(shore: Shore) -> Self {
        match shore {
            Shore::Shore1 => BoatPos::Shore1,
            Shore::Shore2 => BoatPos::Shore2,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("{{{pos},{passengers},{capacity}}}")]
pub struct Boat {
    pub pos: BoatPos,
    pub capacity: u16,
    pub passengers: u16,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            pos: BoatPos::Shore1,
            capacity: BOAT_CAPACITY,
            passengers: 0,
        }
    }
}

/// Why a state breaks the rules.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Violation {
    #[display("boat overload")]
    BoatOverload,
    #[display("{_0} sails without an adult")]
    ChildUnattended(Person),
    #[display("prisoner with family")]
    PrisonerWithFamily,
    #[display("prisoner sails alone")]
    PrisonerAlone,
    #[display("{_0} with father")]
    DaughterWithFather(Person),
    #[display("{_0} with mother")]
    SonWithMother(Person),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FamilyState {
    pub boat: Boat,
    pub persons: [PersonPos; 8],
}
impl State for FamilyState {}

impl FamilyState {
    #[inline(always)]
    pub fn pos(&self, p: Person) -> PersonPos {
        self.persons[p as usize]
    }
    #[inline(always)]
    fn set_pos(&mut self, p: Person, pos: PersonPos) {
        self.persons[p as usize] = pos;
    }

    pub fn is_goal(&self) -> bool {
        self.persons.iter().all(|p| *p == PersonPos::Shore2)
    }

    /// The first rule this state breaks, if any.
    pub fn violation(&self) -> Option<Violation> {
        if self.boat.passengers > self.boat.capacity {
            return Some(Violation::BoatOverload);
        }

        if self.boat.pos == BoatPos::Travel {
            let onboard = |p: &Person| self.pos(*p) == PersonPos::Onboard;

            if let Some(child) = Person::CHILDREN.iter().find(|c| onboard(*c)) {
                let unfit_company = Person::CHILDREN
                    .iter()
                    .chain(std::iter::once(&Person::Prisoner))
                    .filter(|p| *p != child)
                    .any(onboard);
                if self.boat.passengers == 1 || unfit_company {
                    return Some(Violation::ChildUnattended(*child));
                }
            }

            let prisoner = self.pos(Person::Prisoner);
            if prisoner != self.pos(Person::Policeman)
                && Person::FAMILY.iter().any(|p| self.pos(*p) == prisoner)
            {
                return Some(Violation::PrisonerWithFamily);
            }
            if prisoner == PersonPos::Onboard && self.boat.passengers < 2 {
                return Some(Violation::PrisonerAlone);
            }
        }

        let (mother, father) = (self.pos(Person::Mother), self.pos(Person::Father));
        for daughter in [Person::Daughter1, Person::Daughter2] {
            let at = self.pos(daughter);
            if at == father && at != mother {
                return Some(Violation::DaughterWithFather(daughter));
            }
        }
        for son in [Person::Son1, Person::Son2] {
            let at = self.pos(son);
            if at == mother && at != father {
                return Some(Violation::SonWithMother(son));
            }
        }

        None
    }
}

impl std::fmt::Display for FamilyState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.boat)?;
        for p in self.persons {
            write!(f, ",{p}")?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum FamilyMove {
    #[display("depart")]
    Depart,
    #[display("arrive at {_0}")]
    Arrive(Shore),
    #[display("{_0} boards")]
    Board(Person),
    #[display("{_0} disembarks")]
    Disembark(Person),
}

impl Transition<FamilyState> for FamilyMove {
    fn apply(&self, s: &mut FamilyState) {
        match *self {
            FamilyMove::Depart => s.boat.pos = BoatPos::Travel,
            FamilyMove::Arrive(shore) => {
                s.boat.pos = shore.into();
                s.boat.passengers = 0;
                for p in s.persons.iter_mut().filter(|p| **p == PersonPos::Onboard) {
                    *p = shore.into();
                }
            }
            FamilyMove::Board(p) => {
                s.set_pos(p, PersonPos::Onboard);
                s.boat.passengers += 1;
            }
            FamilyMove::Disembark(p) => {
                debug_assert!(s.boat.passengers > 0);
                if let Some(shore) = s.boat.pos.shore() {
                    s.set_pos(p, shore.into());
                    s.boat.passengers -= 1;
                }
            }
        }
    }
}

/// `depth` counts transitions, `noise` grows while the boys wait on shore 1.
///
/// Ordered by depth first, then noise.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("depth {depth}, noise {noise}")]
pub struct FamilyCost {
    pub depth: usize,
    pub noise: usize,
}
impl Cost for FamilyCost {}

/// How successors are charged, expressing a preference among solutions.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum CostProfile {
    /// One unit of depth per transition.
    #[default]
    #[display("depth")]
    Depth,
    /// Son 1 is noisier while waiting on shore 1 than son 2.
    #[display("son1-first")]
    Son1First,
    /// Son 2 is noisier while waiting on shore 1 than son 1.
    #[display("son2-first")]
    Son2First,
}

impl CostProfile {
    pub const ALL: [CostProfile; 3] = [
        CostProfile::Depth,
        CostProfile::Son1First,
        CostProfile::Son2First,
    ];

    pub fn combine(&self, s: &FamilyState, parent_cost: &FamilyCost) -> FamilyCost {
        let waiting = |p: Person| s.pos(p) == PersonPos::Shore1;
        let noise = |son1: usize, son2: usize| {
            parent_cost.noise
                + if waiting(Person::Son1) { son1 } else { 0 }
                + if waiting(Person::Son2) { son2 } else { 0 }
        };

        match self {
            CostProfile::Depth => FamilyCost {
                depth: parent_cost.depth + 1,
                noise: parent_cost.noise,
            },
            CostProfile::Son1First => FamilyCost {
                depth: parent_cost.depth,
                noise: noise(2, 1),
            },
            CostProfile::Son2First => FamilyCost {
                depth: parent_cost.depth,
                noise: noise(1, 2),
            },
        }
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FamilySpace {
    profile: CostProfile,
}

impl FamilySpace {
    pub fn new(profile: CostProfile) -> Self {
        Self { profile }
    }
    pub fn profile(&self) -> CostProfile {
        self.profile
    }
}

impl Space<FamilyState> for FamilySpace {
    type Transition = FamilyMove;

    fn transitions(&self, s: &FamilyState) -> Vec<FamilyMove> {
        let mut moves = vec![];
        match s.boat.pos.shore() {
            Some(_) if s.boat.passengers > 0 => moves.push(FamilyMove::Depart),
            Some(_) => {}
            None => {
                moves.push(FamilyMove::Arrive(Shore::Shore1));
                moves.push(FamilyMove::Arrive(Shore::Shore2));
            }
        }

        let Some(shore) = s.boat.pos.shore() else {
            return moves;
        };
        let moored_at = PersonPos::from(shore);
        for p in Person::ALL {
            let at = s.pos(p);
            if at == moored_at {
                moves.push(FamilyMove::Board(p));
            } else if at == PersonPos::Onboard {
                moves.push(FamilyMove::Disembark(p));
            }
        }
        moves
    }

    fn valid(&self, s: &FamilyState) -> bool {
        match s.violation() {
            Some(v) => {
                log::trace!("{s}: {v}");
                false
            }
            None => true,
        }
    }
}

impl CostSpace<FamilyState, FamilyCost> for FamilySpace {
    #[inline(always)]
    fn combine(&self, candidate: &FamilyState, parent_cost: &FamilyCost) -> FamilyCost {
        self.profile.combine(candidate, parent_cost)
    }
}

/// Everyone on shore 2.
pub fn goal(s: &FamilyState) -> bool {
    s.is_goal()
}

/// The puzzle, starting with everyone on shore 1, charged as per `profile`.
pub fn state_space(profile: CostProfile) -> CostStateSpace<FamilySpace, FamilyState, FamilyCost> {
    CostStateSpace::new(
        FamilyState::default(),
        FamilyCost::default(),
        FamilySpace::new(profile),
    )
}
