use super::scene::PartRef;
use fnv::FnvHashMap;

/// Short-lived "just struck" markers on parts.
///
/// Each entry is only an expiry timestamp; re-triggering a part overwrites
/// it (last write wins) and expired entries are dropped by [`Highlights::prune`]
/// on the frame tick. No timers are held.
#[derive(Clone, Debug, Default)]
pub struct Highlights {
    until: FnvHashMap<PartRef, f64>,
    started: FnvHashMap<PartRef, f64>,
    duration_sec: f64,
}

impl Highlights {
    pub fn new(duration_sec: f64) -> Self {
        Self {
            until: FnvHashMap::default(),
            started: FnvHashMap::default(),
            duration_sec: duration_sec.max(0.0),
        }
    }

    pub fn trigger(&mut self, part: PartRef, now_sec: f64) {
        self.until.insert(part, now_sec + self.duration_sec);
        self.started.insert(part, now_sec);
    }

    pub fn is_active(&self, part: PartRef, now_sec: f64) -> bool {
        self.until.get(&part).is_some_and(|&u| now_sec < u)
    }

    pub fn active_until(&self, part: PartRef) -> Option<f64> {
        self.until.get(&part).copied()
    }

    /// 1.0 right after a trigger, fading linearly to 0.0 at expiry.
    pub fn level(&self, part: PartRef, now_sec: f64) -> f32 {
        match (self.until.get(&part), self.started.get(&part)) {
            (Some(&until), Some(&start)) if now_sec < until => {
                let span = (until - start).max(1e-6);
                ((until - now_sec) / span).clamp(0.0, 1.0) as f32
            }
            _ => 0.0,
        }
    }

    pub fn prune(&mut self, now_sec: f64) {
        self.until.retain(|_, u| now_sec < *u);
        let until = &self.until;
        self.started.retain(|p, _| until.contains_key(p));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.until.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.until.is_empty()
    }
}
