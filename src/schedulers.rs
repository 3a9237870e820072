use std::cmp::Reverse;
use std::collections::VecDeque;
use std::fmt;

use crate::config::{Boundary, Direction, SweepConfig};
use crate::error::Result;
use crate::schedule::{Schedule, Stop};
use crate::trace::{q_trace, v_trace};
use crate::Track;

/// A queue of pending track requests that hands out the next head stop.
pub trait DiskScheduler {
    fn add(&mut self, track: Track);
    fn next(&mut self, track_head: Track) -> Option<Stop>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sstf,
    Scan,
    CScan,
}

impl Algorithm {
    /// Parses a menu choice (`1`-`4`) or an algorithm name.
    pub fn from_choice(choice: &str) -> Option<Algorithm> {
        match choice.trim().to_ascii_uppercase().as_str() {
            "1" | "FCFS" => Some(Algorithm::Fcfs),
            "2" | "SSTF" => Some(Algorithm::Sstf),
            "3" | "SCAN" => Some(Algorithm::Scan),
            "4" | "C-SCAN" | "CSCAN" => Some(Algorithm::CScan),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
        }
    }

    // Callers go through `schedule`, which checks `sweep` against the batch first.
    pub(crate) fn build(&self, sweep: &SweepConfig) -> Box<dyn DiskScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs::default()),
            Algorithm::Sstf => Box::new(Sstf::default()),
            Algorithm::Scan => Box::new(Scan::new(sweep)),
            Algorithm::CScan => Box::new(CScan::new(sweep)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Default)]
pub struct Fcfs {
    queue: VecDeque<Track>,
}

impl DiskScheduler for Fcfs {
    fn add(&mut self, track: Track) {
        self.queue.push_back(track);
    }

    fn next(&mut self, _: Track) -> Option<Stop> {
        self.queue.pop_front().map(Stop::Service)
    }
}

#[derive(Default)]
pub struct Sstf {
    queue: VecDeque<Track>,
}

impl DiskScheduler for Sstf {
    fn add(&mut self, track: Track) {
        self.queue.push_back(track);
    }

    fn next(&mut self, track_head: Track) -> Option<Stop> {
        let mut queue_string = String::new();

        // closest request wins; on a tie the one queued first stays ahead,
        // since removal keeps the remaining requests in input order
        let mut min_distance = Track::MAX;
        let mut min_distance_index = 0;
        for (i, track) in self.queue.iter().enumerate() {
            let distance = track_head.abs_diff(*track);
            if distance < min_distance || i == 0 {
                min_distance = distance;
                min_distance_index = i;
            }
            queue_string.push_str(&format!("{}:{} ", track, distance));
        }
        if !self.queue.is_empty() {
            q_trace!(
                "\tGet: ({}) --> {}",
                queue_string.trim_end(),
                self.queue[min_distance_index]
            );
        }

        self.queue.remove(min_distance_index).map(Stop::Service)
    }
}

// Index of the closest pending track at or beyond the head in `direction`.
fn nearest_ahead(pending: &[Track], track_head: Track, direction: Direction) -> Option<usize> {
    let ahead = pending.iter().enumerate();
    match direction {
        Direction::Up => ahead
            .filter(|&(_, &track)| track >= track_head)
            .min_by_key(|&(_, &track)| track)
            .map(|(i, _)| i),
        Direction::Down => ahead
            .filter(|&(_, &track)| track <= track_head)
            .min_by_key(|&(_, &track)| Reverse(track))
            .map(|(i, _)| i),
    }
}

// Index of the pending track a wrap in `direction` starts from.
fn far_end(pending: &[Track], direction: Direction) -> Option<usize> {
    let tracks = pending.iter().enumerate();
    match direction {
        Direction::Up => tracks.min_by_key(|&(_, &track)| track).map(|(i, _)| i),
        Direction::Down => tracks
            .min_by_key(|&(_, &track)| Reverse(track))
            .map(|(i, _)| i),
    }
}

pub struct Scan {
    pending: Vec<Track>,
    direction: Direction,
    boundary: Boundary,
    added: usize,
    turned: bool,
}

impl Scan {
    pub(crate) fn new(sweep: &SweepConfig) -> Self {
        Scan {
            pending: Vec::new(),
            direction: sweep.direction,
            boundary: sweep.boundary,
            added: 0,
            turned: false,
        }
    }
}

impl DiskScheduler for Scan {
    fn add(&mut self, track: Track) {
        self.pending.push(track);
        self.added += 1;
    }

    fn next(&mut self, track_head: Track) -> Option<Stop> {
        loop {
            if let Some(i) = nearest_ahead(&self.pending, track_head, self.direction) {
                return Some(Stop::Service(self.pending.remove(i)));
            }
            if self.turned || self.added == 0 {
                return None;
            }

            // nothing left in this direction: reverse, running to the edge first if modelled
            self.turned = true;
            let edge = self.boundary.edge(self.direction);
            self.direction = self.direction.reversed();
            match edge {
                Some(edge) if edge != track_head => return Some(Stop::Pass(edge)),
                _ => {}
            }
        }
    }
}

pub struct CScan {
    pending: Vec<Track>,
    direction: Direction,
    boundary: Boundary,
    detour: VecDeque<Stop>,
    added: usize,
    wrapped: bool,
}

impl CScan {
    pub(crate) fn new(sweep: &SweepConfig) -> Self {
        CScan {
            pending: Vec::new(),
            direction: sweep.direction,
            boundary: sweep.boundary,
            detour: VecDeque::new(),
            added: 0,
            wrapped: false,
        }
    }
}

impl DiskScheduler for CScan {
    fn add(&mut self, track: Track) {
        self.pending.push(track);
        self.added += 1;
    }

    fn next(&mut self, track_head: Track) -> Option<Stop> {
        if let Some(stop) = self.detour.pop_front() {
            return Some(stop);
        }
        if let Some(i) = nearest_ahead(&self.pending, track_head, self.direction) {
            return Some(Stop::Service(self.pending.remove(i)));
        }
        if self.wrapped || self.added == 0 {
            return None;
        }

        self.wrapped = true;
        match (
            self.boundary.edge(self.direction),
            self.boundary.edge(self.direction.reversed()),
        ) {
            (Some(near), Some(far)) => {
                // run out to the near edge, then jump back to the far one
                let mut position = track_head;
                for edge in [near, far] {
                    if edge != position {
                        self.detour.push_back(Stop::Pass(edge));
                        position = edge;
                    }
                }
                self.detour.pop_front()
            }
            // the jump lands directly on the far-end pending request
            _ => far_end(&self.pending, self.direction)
                .map(|i| Stop::Service(self.pending.remove(i))),
        }
    }
}

/// Feeds `requests` to `scheduler` and walks the head from `head` until the
/// queue runs dry.
pub(crate) fn run(scheduler: &mut dyn DiskScheduler, head: Track, requests: &[Track]) -> Schedule {
    for &track in requests {
        scheduler.add(track);
    }

    let mut track_head = head;
    let mut stops = Vec::with_capacity(requests.len());
    let mut seek_time: u64 = 0;
    while let Some(stop) = scheduler.next(track_head) {
        let distance = u64::from(track_head.abs_diff(stop.track()));
        v_trace!(
            "{:5}: {:5} -> {:5} {:5}{}",
            stops.len(),
            track_head,
            stop.track(),
            distance,
            if stop.is_pass() { " pass" } else { "" }
        );
        seek_time += distance;
        track_head = stop.track();
        stops.push(stop);
    }

    Schedule {
        head,
        stops,
        seek_time,
    }
}

/// Runs `algorithm` over its own copy of `requests` under `sweep`.
pub fn schedule(
    algorithm: Algorithm,
    head: Track,
    requests: &[Track],
    sweep: &SweepConfig,
) -> Result<Schedule> {
    sweep.validate(head, requests)?;
    let mut scheduler = algorithm.build(sweep);
    Ok(run(scheduler.as_mut(), head, requests))
}

pub fn fcfs(head: Track, requests: &[Track]) -> Schedule {
    run(&mut Fcfs::default(), head, requests)
}

pub fn sstf(head: Track, requests: &[Track]) -> Schedule {
    run(&mut Sstf::default(), head, requests)
}

pub fn scan(head: Track, requests: &[Track]) -> Schedule {
    run(&mut Scan::new(&SweepConfig::default()), head, requests)
}

pub fn cscan(head: Track, requests: &[Track]) -> Schedule {
    run(&mut CScan::new(&SweepConfig::default()), head, requests)
}
