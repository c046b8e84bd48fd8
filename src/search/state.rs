//! The search state. A [`WorldState`] is a complete snapshot of everything
//! that changes while the fleet operates: where each taxi is, how much fuel
//! it has, how many passengers it carries, and the status of every passenger.
//! Equality and hashing over these fields define node identity in the search
//! graph; there is no separate visited-set bookkeeping.
//!
//! States are never mutated in place. The transition function clones the
//! current state and updates the copy, so states can be shared freely.

use crate::search::Coord;
use smallvec::SmallVec;

/// Index of a taxi in the problem's taxi table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaxiId(pub usize);

/// Index of a passenger in the problem's passenger table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassengerId(pub usize);

/// The mutable slice of a taxi; its fixed attributes (name, capacity, max
/// fuel) live on the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaxiState {
    pub location: Coord,
    pub fuel: u32,
    /// Number of passengers currently aboard. Kept explicit so capacity
    /// checks do not scan the passenger table.
    pub load: u32,
}

/// Where a passenger is in its journey. The only mutable passenger field;
/// origin and destination are fixed on the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassengerStatus {
    /// Still waiting at the origin cell.
    Waiting,
    /// Riding the given taxi.
    Aboard(TaxiId),
    /// Dropped off at the destination. Terminal.
    Delivered,
}

/// A complete, hashable snapshot of the world.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorldState {
    pub taxis: SmallVec<[TaxiState; 2]>,
    pub passengers: SmallVec<[PassengerStatus; 4]>,
}

impl WorldState {
    pub fn new(
        taxis: SmallVec<[TaxiState; 2]>,
        passengers: SmallVec<[PassengerStatus; 4]>,
    ) -> Self {
        Self { taxis, passengers }
    }

    pub fn taxi(&self, id: TaxiId) -> &TaxiState {
        &self.taxis[id.0]
    }

    pub fn passenger_status(&self, id: PassengerId) -> PassengerStatus {
        self.passengers[id.0]
    }

    pub fn num_taxis(&self) -> usize {
        self.taxis.len()
    }

    /// Passengers still waiting at their origin.
    pub fn num_unpicked(&self) -> usize {
        self.passengers
            .iter()
            .filter(|s| matches!(s, PassengerStatus::Waiting))
            .count()
    }

    /// Passengers riding some taxi.
    pub fn num_aboard(&self) -> usize {
        self.passengers
            .iter()
            .filter(|s| matches!(s, PassengerStatus::Aboard(_)))
            .count()
    }

    /// Passengers not yet at their destination, waiting or aboard.
    pub fn num_undelivered(&self) -> usize {
        self.passengers
            .iter()
            .filter(|s| !matches!(s, PassengerStatus::Delivered))
            .count()
    }

    /// True iff every passenger has been delivered.
    pub fn all_delivered(&self) -> bool {
        self.passengers
            .iter()
            .all(|s| matches!(s, PassengerStatus::Delivered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use std::collections::HashSet;

    fn state() -> WorldState {
        WorldState::new(
            smallvec![
                TaxiState {
                    location: Coord::new(0, 0),
                    fuel: 3,
                    load: 1,
                },
                TaxiState {
                    location: Coord::new(2, 1),
                    fuel: 0,
                    load: 0,
                },
            ],
            smallvec![
                PassengerStatus::Aboard(TaxiId(0)),
                PassengerStatus::Waiting,
                PassengerStatus::Delivered,
            ],
        )
    }

    #[test]
    fn status_counts() {
        let state = state();
        assert_eq!(state.num_unpicked(), 1);
        assert_eq!(state.num_aboard(), 1);
        assert_eq!(state.num_undelivered(), 2);
        assert!(!state.all_delivered());
    }

    #[test]
    fn equal_states_hash_identically() {
        let mut set = HashSet::new();
        set.insert(state());
        assert!(set.contains(&state()));
    }

    #[test]
    fn fuel_difference_separates_states() {
        let a = state();
        let mut b = state();
        b.taxis[0].fuel -= 1;
        assert_ne!(a, b);
    }

    #[test]
    fn passenger_status_separates_states() {
        let a = state();
        let mut b = state();
        b.passengers[1] = PassengerStatus::Aboard(TaxiId(1));
        assert_ne!(a, b);
    }
}
