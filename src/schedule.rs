use std::fmt;

use crate::Track;

/// One head movement of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The head moves to a pending request and services it.
    Service(Track),
    /// The head runs to a disk edge without servicing anything.
    Pass(Track),
}

impl Stop {
    pub fn track(&self) -> Track {
        match *self {
            Stop::Service(track) | Stop::Pass(track) => track,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Stop::Pass(_))
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stop::Service(track) => write!(f, "{}", track),
            Stop::Pass(track) => write!(f, "({})", track),
        }
    }
}

/// The walk a scheduler produced for one batch, starting at `head`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) head: Track,
    pub(crate) stops: Vec<Stop>,
    pub(crate) seek_time: u64,
}

impl Schedule {
    pub fn head(&self) -> Track {
        self.head
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Total head movement over the whole walk.
    pub fn seek_time(&self) -> u64 {
        self.seek_time
    }

    /// Every position the head occupies, starting with the head itself.
    pub fn order(&self) -> Vec<Track> {
        std::iter::once(self.head)
            .chain(self.stops.iter().map(Stop::track))
            .collect()
    }

    /// Requests in the order they were serviced, edge passes left out.
    pub fn serviced(&self) -> Vec<Track> {
        self.stops
            .iter()
            .filter(|stop| !stop.is_pass())
            .map(Stop::track)
            .collect()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for stop in &self.stops {
            write!(f, " -> {}", stop)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_schedule() -> Schedule {
        Schedule {
            head: 50,
            stops: vec![Stop::Service(62), Stop::Pass(199), Stop::Service(34)],
            seek_time: 12 + 137 + 165,
        }
    }

    #[test]
    fn test_order_starts_with_head() {
        let schedule = make_schedule();
        assert_eq!(schedule.order(), vec![50, 62, 199, 34]);
        assert_eq!(schedule.serviced(), vec![62, 34]);
    }

    #[test]
    fn test_display_marks_passes() {
        assert_eq!(make_schedule().to_string(), "50 -> 62 -> (199) -> 34");

        let empty = Schedule {
            head: 7,
            stops: Vec::new(),
            seek_time: 0,
        };
        assert_eq!(empty.to_string(), "7");
    }
}
