//! Shared test infrastructure for pas-pad integration tests
//!
//! All mocks share one simulated millisecond clock. Delays advance it,
//! button lines read their level at the current time, and the LED and
//! serial link record what they were given and when.

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use palette::Srgb;
use pas_pad::{ControlLoop, CycleReport, InputSampler, PadState, RgbLed, Transport};

// ============================================================================
// Simulated Clock
// ============================================================================

#[derive(Clone, Default)]
pub struct SimClock(Rc<Cell<u32>>);

impl SimClock {
    pub fn now(&self) -> u32 {
        self.0.get()
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get() + ms);
    }
}

// ============================================================================
// Mock Button Line
// ============================================================================

/// Button line scripted as level changes over simulated time.
///
/// Lines rest high (pull-up); `press` and `release` append changes.
pub struct TimelinePin {
    clock: SimClock,
    changes: Vec<(u32, bool)>,
    reads: Rc<Cell<u32>>,
}

impl TimelinePin {
    pub fn idle(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            changes: Vec::new(),
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// Line goes low at `at_ms`.
    pub fn press(mut self, at_ms: u32) -> Self {
        self.changes.push((at_ms, false));
        self
    }

    /// Line goes high at `at_ms`.
    pub fn release(mut self, at_ms: u32) -> Self {
        self.changes.push((at_ms, true));
        self
    }

    /// Full press-and-release.
    pub fn click(self, down_ms: u32, up_ms: u32) -> Self {
        self.press(down_ms).release(up_ms)
    }

    pub fn reads(&self) -> Rc<Cell<u32>> {
        self.reads.clone()
    }

    fn level_at(&self, t: u32) -> bool {
        self.changes
            .iter()
            .filter(|(at, _)| *at <= t)
            .max_by_key(|(at, _)| *at)
            .map(|&(_, level)| level)
            .unwrap_or(true)
    }
}

impl ErrorType for TimelinePin {
    type Error = Infallible;
}

impl InputPin for TimelinePin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.level_at(self.clock.now()))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that advances the simulated clock and logs every call (ms).
#[derive(Clone)]
pub struct SimDelay {
    clock: SimClock,
    log: Rc<RefCell<Vec<u32>>>,
}

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn log(&self) -> Vec<u32> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(ms);
        self.clock.advance(ms);
    }
}

// ============================================================================
// Mock LED
// ============================================================================

/// LED that records every colour it is given.
#[derive(Clone, Default)]
pub struct MockLed {
    history: Rc<RefCell<Vec<Srgb<u8>>>>,
}

impl MockLed {
    pub fn history(&self) -> Vec<Srgb<u8>> {
        self.history.borrow().clone()
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: Srgb<u8>) {
        self.history.borrow_mut().push(color);
    }
}

// ============================================================================
// Mock Serial Link
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDown;

/// Serial link that records each write with its timestamp.
#[derive(Clone)]
pub struct MockLink {
    clock: SimClock,
    writes: Rc<RefCell<Vec<(u32, Vec<u8>)>>>,
    fail: Rc<Cell<bool>>,
}

impl MockLink {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            writes: Rc::new(RefCell::new(Vec::new())),
            fail: Rc::new(Cell::new(false)),
        }
    }

    /// Make every following write fail (still recorded as attempted).
    pub fn set_failing(&self, fail: bool) {
        self.fail.set(fail);
    }

    pub fn packets(&self) -> Vec<Vec<u8>> {
        self.writes.borrow().iter().map(|(_, b)| b.clone()).collect()
    }

    pub fn timestamps(&self) -> Vec<u32> {
        self.writes.borrow().iter().map(|(t, _)| *t).collect()
    }
}

impl Transport for MockLink {
    type Error = LinkDown;

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LinkDown> {
        self.writes
            .borrow_mut()
            .push((self.clock.now(), data.to_vec()));
        if self.fail.get() {
            Err(LinkDown)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Harness
// ============================================================================

pub type TestPad = ControlLoop<TimelinePin, MockLed, MockLink, SimDelay>;

/// A pad wired to mocks, plus handles to inspect them.
pub struct Bench {
    pub clock: SimClock,
    pub pad: TestPad,
    pub state: PadState,
    pub led: MockLed,
    pub link: MockLink,
    pub delay: SimDelay,
}

impl Bench {
    pub fn new(clock: SimClock, up: TimelinePin, down: TimelinePin, power: TimelinePin) -> Self {
        let led = MockLed::default();
        let link = MockLink::new(&clock);
        let delay = SimDelay::new(&clock);
        let pad = ControlLoop::new(
            InputSampler::new(up, down, power),
            led.clone(),
            link.clone(),
            delay.clone(),
        );
        let state = pad.initial_state();
        Self {
            clock,
            pad,
            state,
            led,
            link,
            delay,
        }
    }

    /// One cycle, then 1 ms of idle polling time.
    pub fn step(&mut self) -> CycleReport {
        let report = self.pad.cycle(&mut self.state);
        self.clock.advance(1);
        report
    }

    /// Cycle until the clock reaches `until_ms`, collecting every report.
    pub fn run_until(&mut self, until_ms: u32) -> Vec<CycleReport> {
        let mut reports = Vec::new();
        while self.clock.now() < until_ms {
            reports.push(self.step());
        }
        reports
    }
}

/// Bench whose buttons all rest for the whole run.
pub fn quiet_bench() -> Bench {
    let clock = SimClock::default();
    let up = TimelinePin::idle(&clock);
    let down = TimelinePin::idle(&clock);
    let power = TimelinePin::idle(&clock);
    Bench::new(clock, up, down, power)
}
