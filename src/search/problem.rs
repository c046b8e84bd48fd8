//! The typed search problem. A [`TaxiProblem`] owns everything that never
//! changes while searching (the grid and the fixed taxi and passenger
//! attributes) plus the initial [`WorldState`]. It is the full surface a
//! search engine consumes: initial state, goal test and successor generation.

use crate::search::{
    generator, transition, Cell, Coord, GridMap, Instance, JointAction, PassengerId,
    PassengerStatus, TaxiId, TaxiState, WorldState,
};
use smallvec::SmallVec;
use std::collections::HashMap;
use thiserror::Error;

/// An instance that is inconsistent with itself. Raised at construction and
/// never repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInstance {
    #[error("the map has no cells")]
    EmptyMap,
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol '{symbol}' at {pos}")]
    UnknownCellSymbol { symbol: char, pos: Coord },
    #[error("'{name}' is placed at {pos}, outside the {rows}x{cols} map")]
    OutOfBounds {
        name: String,
        pos: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("'{name}' is placed on the wall at {pos}")]
    OnWall { name: String, pos: Coord },
    #[error("taxis '{first}' and '{second}' both start at {pos}")]
    DuplicateTaxiLocation {
        first: String,
        second: String,
        pos: Coord,
    },
}

/// The fixed attributes of a taxi. The mutable ones live in
/// [`crate::search::TaxiState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxiData {
    pub name: String,
    pub capacity: u32,
    /// Tank size; a refuel fills back up to this. Matches the starting fuel.
    pub max_fuel: u32,
}

/// The fixed attributes of a passenger. Only the status changes across
/// states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerData {
    pub name: String,
    pub origin: Coord,
    pub destination: Coord,
}

#[derive(Debug, Clone)]
pub struct TaxiProblem {
    grid: GridMap,
    taxis: Vec<TaxiData>,
    passengers: Vec<PassengerData>,
    initial_state: WorldState,
}

impl TaxiProblem {
    /// Validate an instance and build the problem. Taxis and passengers are
    /// indexed in sorted-name order.
    pub fn new(instance: &Instance) -> Result<Self, MalformedInstance> {
        let grid = Self::build_grid(&instance.map)?;

        let mut taxis = Vec::with_capacity(instance.taxis.len());
        let mut taxi_states = SmallVec::new();
        let mut start_cells: HashMap<Coord, &str> = HashMap::new();
        for (name, spec) in &instance.taxis {
            let location = Coord::new(spec.location.0, spec.location.1);
            Self::check_placement(&grid, name, location)?;
            if let Some(first) = start_cells.insert(location, name) {
                return Err(MalformedInstance::DuplicateTaxiLocation {
                    first: first.to_string(),
                    second: name.clone(),
                    pos: location,
                });
            }
            taxis.push(TaxiData {
                name: name.clone(),
                capacity: spec.capacity,
                max_fuel: spec.fuel,
            });
            taxi_states.push(TaxiState {
                location,
                fuel: spec.fuel,
                load: 0,
            });
        }

        let mut passengers = Vec::with_capacity(instance.passengers.len());
        let mut passenger_states = SmallVec::new();
        for (name, spec) in &instance.passengers {
            let origin = Coord::new(spec.location.0, spec.location.1);
            let destination = Coord::new(spec.destination.0, spec.destination.1);
            Self::check_placement(&grid, name, origin)?;
            Self::check_placement(&grid, name, destination)?;
            passengers.push(PassengerData {
                name: name.clone(),
                origin,
                destination,
            });
            passenger_states.push(PassengerStatus::Waiting);
        }

        Ok(Self {
            grid,
            taxis,
            passengers,
            initial_state: WorldState::new(taxi_states, passenger_states),
        })
    }

    fn build_grid(map: &[Vec<char>]) -> Result<GridMap, MalformedInstance> {
        if map.is_empty() || map[0].is_empty() {
            return Err(MalformedInstance::EmptyMap);
        }
        let rows = map.len();
        let cols = map[0].len();
        let mut cells = Vec::with_capacity(rows * cols);
        for (row, symbols) in map.iter().enumerate() {
            if symbols.len() != cols {
                return Err(MalformedInstance::RaggedMap {
                    row,
                    expected: cols,
                    found: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                cells.push(match symbol {
                    'P' => Cell::Free,
                    'I' => Cell::Wall,
                    'G' => Cell::GasStation,
                    _ => {
                        return Err(MalformedInstance::UnknownCellSymbol {
                            symbol,
                            pos: Coord::new(row, col),
                        })
                    }
                });
            }
        }
        Ok(GridMap::new(rows, cols, cells))
    }

    fn check_placement(grid: &GridMap, name: &str, pos: Coord) -> Result<(), MalformedInstance> {
        match grid.cell(pos) {
            None => Err(MalformedInstance::OutOfBounds {
                name: name.to_string(),
                pos,
                rows: grid.rows(),
                cols: grid.cols(),
            }),
            Some(Cell::Wall) => Err(MalformedInstance::OnWall {
                name: name.to_string(),
                pos,
            }),
            Some(_) => Ok(()),
        }
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn num_taxis(&self) -> usize {
        self.taxis.len()
    }

    pub fn num_passengers(&self) -> usize {
        self.passengers.len()
    }

    pub fn taxi(&self, id: TaxiId) -> &TaxiData {
        &self.taxis[id.0]
    }

    pub fn passenger(&self, id: PassengerId) -> &PassengerData {
        &self.passengers[id.0]
    }

    pub fn taxi_ids(&self) -> impl Iterator<Item = TaxiId> {
        (0..self.taxis.len()).map(TaxiId)
    }

    pub fn passenger_ids(&self) -> impl Iterator<Item = PassengerId> {
        (0..self.passengers.len()).map(PassengerId)
    }

    pub fn initial_state(&self) -> &WorldState {
        &self.initial_state
    }

    /// The goal test: every passenger delivered.
    pub fn is_goal(&self, state: &WorldState) -> bool {
        state.all_delivered()
    }

    /// Where a passenger currently is: waiting passengers sit at their
    /// origin, aboard passengers ride their taxi, delivered passengers are at
    /// their destination.
    pub fn passenger_location(&self, state: &WorldState, id: PassengerId) -> Coord {
        match state.passenger_status(id) {
            PassengerStatus::Waiting => self.passenger(id).origin,
            PassengerStatus::Aboard(taxi) => state.taxi(taxi).location,
            PassengerStatus::Delivered => self.passenger(id).destination,
        }
    }

    /// All legal transitions out of `state`: one entry per legal joint
    /// action, with the successor state and the unit step cost.
    pub fn successors(&self, state: &WorldState) -> Vec<(JointAction, WorldState, u32)> {
        generator::joint_actions(self, state)
            .into_iter()
            .map(|action| {
                let (next, cost) = transition::apply_joint_action(self, state, &action);
                (action, next, cost)
            })
            .collect()
    }
}
