use serde::{Deserialize, Serialize};

use crate::animals::{AnimalGroup, IntakeRates, ReproType, Ruminant};
use crate::pasturing::{GrazingInputs, PaddockId};

/// Ordered registry of animal groups. Slots are addressed from outside
/// by 1-based index, where 0 is reserved for "every slot".
pub struct RaisingDomain<G: AnimalGroup = Ruminant> {
    pub slots: Vec<Slot<G>>,
}

impl<G: AnimalGroup> Default for RaisingDomain<G> {
    fn default() -> Self {
        Self { slots: vec![] }
    }
}

pub const MOTHER: usize = 0;
pub const YOUNG: usize = 1;

pub struct Slot<G: AnimalGroup> {
    pub group: G,
    pub paddock: PaddockId,
    pub tag: i32,
    pub priority: i32,
    pub states: [G::State; 2],
    pub rdp_factors: [f64; 2],
    /// one entry per forage of the occupied paddock
    pub init_inputs: Vec<GrazingInputs>,
    pub step_inputs: Vec<GrazingInputs>,
    pub paddock_inputs: GrazingInputs,
    pub rates: [IntakeRates; 2],
}

impl<G: AnimalGroup> Slot<G> {
    pub fn new(group: G, paddock: PaddockId, tag: i32, priority: i32) -> Self {
        Self {
            group,
            paddock,
            tag,
            priority,
            states: Default::default(),
            rdp_factors: [1.0; 2],
            init_inputs: vec![],
            step_inputs: vec![],
            paddock_inputs: GrazingInputs::default(),
            rates: Default::default(),
        }
    }

    pub fn is_draftable(&self) -> bool {
        self.priority > 0
    }

    /// Mothers plus their unweaned young.
    pub fn head_count(&self) -> usize {
        self.group.no_animals() + self.group.young().map(G::no_animals).unwrap_or(0)
    }
}

/// Describes a group in events without exposing its internals.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct GroupSummary {
    pub number: usize,
    pub repro: ReproType,
    pub live_weight: f64,
    pub young: usize,
}

impl GroupSummary {
    pub fn of<G: AnimalGroup>(group: &G) -> Self {
        Self {
            number: group.no_animals(),
            repro: group.repro(),
            live_weight: group.live_weight(),
            young: group.young().map(G::no_animals).unwrap_or(0),
        }
    }
}

#[derive(Debug, bincode::Encode, bincode::Decode)]
pub enum Raising {
    GroupAdded {
        index: usize,
        paddock: PaddockId,
        tag: i32,
        group: GroupSummary,
    },
    GroupRemoved {
        index: usize,
    },
    GroupChanged {
        index: usize,
        group: GroupSummary,
    },
    GroupMoved {
        index: usize,
        paddock: PaddockId,
    },
    TagChanged {
        index: usize,
        tag: i32,
    },
    PriorityChanged {
        index: usize,
        priority: i32,
    },
    GroupsMerged {
        count: usize,
    },
    GroupsSorted {
        count: usize,
    },
    AnimalsSold {
        index: usize,
        number: usize,
    },
    FleeceShorn {
        index: usize,
        adults: f64,
        young: f64,
    },
    JoiningStarted {
        index: usize,
        mate: String,
        days: u32,
    },
    YoungCastrated {
        index: usize,
        number: usize,
    },
    YoungWeaned {
        index: usize,
        number: usize,
    },
    LactationEnded {
        index: usize,
        number: usize,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub enum RaisingError {
    SlotNotFound { index: usize },
}
