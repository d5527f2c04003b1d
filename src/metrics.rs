//! This module provides a way to measure emulation throughput
//!

use std::time::Duration;
use std::time::Instant;

use log::debug;

use crate::types::Cycles;

// Shortest time a measure can take, avoids dividing by zero on very short runs
const MIN_RECORDED_TIME: Duration = Duration::from_micros(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub recorded_time: Duration,
    pub cycles: Cycles,
    pub cycles_per_second: u64,
}

pub struct Collector {
    record_start: Instant,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            record_start: Instant::now(),
        }
    }

    /// Build metrics for `cycles` executed since the collector was created
    /// or last collected, and start a new measure
    pub fn collect(&mut self, cycles: Cycles) -> Metrics {
        let recorded_time = self.record_start.elapsed();
        let metrics = Self::compute(cycles, recorded_time);
        debug!("Collected metrics: {metrics:?}");

        self.record_start = Instant::now();
        metrics
    }

    fn compute(cycles: Cycles, recorded_time: Duration) -> Metrics {
        let micros = recorded_time.max(MIN_RECORDED_TIME).as_micros();
        let cycles_per_second = (cycles as u128) * 1_000_000 / micros;

        Metrics {
            recorded_time,
            cycles,
            cycles_per_second: cycles_per_second as u64,
        }
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}
