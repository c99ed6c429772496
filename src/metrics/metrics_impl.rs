use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsReset, MruMetricsReadRecorder, MruMetricsRecorder,
};

#[derive(Debug, Default)]
pub struct MruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,
    pub clears: u64,
    pub promotions: u64,
    pub promotions_at_root: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl CoreMetricsRecorder for MruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }
    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl MruMetricsRecorder for MruMetrics {
    fn record_promotion(&mut self) {
        self.promotions += 1;
    }
    fn record_promotion_at_root(&mut self) {
        self.promotions_at_root += 1;
    }
}

impl MruMetricsReadRecorder for MruMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }
    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

impl MetricsReset for MruMetrics {
    fn reset_metrics(&mut self) {
        *self = Self::default();
    }
}
