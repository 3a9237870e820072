use crate::error::{InvalidInput, Result};
use crate::Track;

/// Initial sweep direction for SCAN and C-SCAN.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Where a sweep turns around (SCAN) or wraps (C-SCAN).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Turn at the last pending request; no disk edge is visited.
    #[default]
    LastRequest,
    /// Run to the physical edge of a disk with `disk_size` tracks.
    DiskEdge { disk_size: Track },
}

impl Boundary {
    /// The edge a sweep moving in `direction` runs into, if edges are modelled.
    pub fn edge(self, direction: Direction) -> Option<Track> {
        match self {
            Boundary::LastRequest => None,
            Boundary::DiskEdge { disk_size } => Some(match direction {
                Direction::Up => disk_size.saturating_sub(1),
                Direction::Down => 0,
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub direction: Direction,
    pub boundary: Boundary,
}

impl SweepConfig {
    /// Checks that the head and every request fit on the configured disk.
    pub fn validate(&self, head: Track, requests: &[Track]) -> Result<()> {
        let disk_size = match self.boundary {
            Boundary::LastRequest => return Ok(()),
            Boundary::DiskEdge { disk_size: 0 } => return Err(InvalidInput::ZeroDiskSize.into()),
            Boundary::DiskEdge { disk_size } => disk_size,
        };
        match std::iter::once(&head)
            .chain(requests)
            .find(|&&track| track >= disk_size)
        {
            Some(&track) => Err(InvalidInput::TrackOutOfRange { track, disk_size }.into()),
            None => Ok(()),
        }
    }
}
