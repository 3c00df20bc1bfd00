use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Producer,
    Consumer,
}

/// What the workers report as they run. Consumer lines are tab-indented
/// so the two columns can be told apart in the interleaved output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    RoundStart { role: Role, round: usize },
    Transfer { role: Role, index: usize, value: f64 },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Event::RoundStart { role: Role::Producer, round } => {
                write!(f, "producer round {round}")
            }
            Event::RoundStart { role: Role::Consumer, round } => {
                write!(f, "\t\tconsumer round {round}")
            }
            Event::Transfer { role: Role::Producer, index, value } => {
                write!(f, "slot {index} produced {value}")
            }
            Event::Transfer { role: Role::Consumer, index, value } => {
                write!(f, "\t\tslot {index} consumed {value}")
            }
        }
    }
}
