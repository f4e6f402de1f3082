//! Human-readable reporter.
//!
//! ```text
//! Simulation started at 2023-11-14 22:13:20
//! Timestamp: 2023-11-14 22:13:20
//! Customers waiting to join Lanes: 3
//! C1 joined Regular 1.
//! C2 joined Self Service.
//! C3 could not join Regular 1.
//! C2 has completed checkout and left Self Service.
//! Regular 1 --> Open (1 customers): C1 (12 items)
//! Regular 2 --> Closed
//! ...
//! ```

use std::io::{self, Stdout, Write};

use checkout_core::{SimClock, Tick};
use checkout_lane::{Customer, LaneKind, LaneSnapshot};
use checkout_sim::CheckoutObserver;

/// Render one lane as `"<Lane> --> <Status> (<n> customers): C<id> (<items> items), ..."`.
///
/// Empty lanes show only the name and status.
pub fn format_lane_line(lane: &LaneSnapshot) -> String {
    let mut line = format!("{} --> {}", lane.kind, lane.status);
    if !lane.customers.is_empty() {
        let occupants: Vec<String> = lane
            .customers
            .iter()
            .map(|(id, items)| format!("{id} ({items} items)"))
            .collect();
        line.push_str(&format!(" ({} customers): {}", lane.occupancy(), occupants.join(", ")));
    }
    line
}

/// A [`CheckoutObserver`] that prints events and lane status as text.
///
/// Write failures are kept (first one only) and returned by
/// [`take_error`][Self::take_error]; later writes are skipped.
pub struct TextReporter<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl TextReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}") {
            self.last_error = Some(e);
        }
    }

    fn status_block(&mut self, lanes: &[LaneSnapshot]) {
        for lane in lanes {
            self.line(&format_lane_line(lane));
        }
        self.line("");
        if let Err(e) = self.out.flush() {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> CheckoutObserver for TextReporter<W> {
    fn on_sim_start(&mut self, clock: &SimClock) {
        self.line(&format!("Simulation started at {}", clock.timestamp()));
    }

    fn on_interval_start(&mut self, _index: u64, clock: &SimClock, arrivals: u32) {
        self.line(&format!("Timestamp: {}", clock.timestamp()));
        self.line(&format!("Customers waiting to join Lanes: {arrivals}"));
    }

    fn on_join(&mut self, _tick: Tick, customer: &Customer, lane: LaneKind) {
        self.line(&format!("{} joined {lane}.", customer.id));
    }

    fn on_drop(&mut self, _tick: Tick, customer: &Customer, target: LaneKind) {
        self.line(&format!("{} could not join {target}.", customer.id));
    }

    fn on_depart(&mut self, _tick: Tick, customer: &Customer, lane: LaneKind) {
        self.line(&format!("{} has completed checkout and left {lane}.", customer.id));
    }

    fn on_report(&mut self, _tick: Tick, lanes: &[LaneSnapshot]) {
        self.status_block(lanes);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, lanes: &[LaneSnapshot]) {
        self.status_block(lanes);
    }
}
