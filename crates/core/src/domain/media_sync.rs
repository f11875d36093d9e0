/// Playback surface of one media element. Durations are in seconds and are
/// unknown (`None`) until the element has reported its metadata.
pub trait Transport {
    fn duration(&self) -> Option<f64>;
    fn position(&self) -> f64;
    fn seek(&mut self, secs: f64);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
}

/// Outcome of one per-frame synchronization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncFrame {
    /// Master playback position as a percentage of master duration, for the
    /// visual progress indicator.
    pub progress_percent: f64,
    /// Whether the loop performed a seamless reset (master reached its end,
    /// all elements rewound and resumed).
    pub looped: bool,
    /// Whether another frame should be scheduled. False once the reference
    /// element is paused, so no per-frame callback leaks.
    pub schedule_next: bool,
}

/// Keeps N media elements in lockstep against the shortest-duration master.
///
/// The elements are assumed to start in sync; the master is selected exactly
/// once, after every element has reported metadata.
pub struct SyncGroup<T: Transport> {
    elements: Vec<T>,
    master: Option<usize>,
}

impl<T: Transport> SyncGroup<T> {
    pub fn new(elements: Vec<T>) -> Self {
        let mut group = SyncGroup {
            elements,
            master: None,
        };
        group.try_select_master();
        group
    }

    pub fn master_index(&self) -> Option<usize> {
        self.master
    }

    /// Called whenever an element reports loaded metadata. Selection happens
    /// on the call that completes the set and is never repeated.
    pub fn metadata_loaded(&mut self) {
        if self.master.is_none() {
            self.try_select_master();
        }
    }

    fn try_select_master(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        let mut shortest: Option<(usize, f64)> = None;
        for (idx, element) in self.elements.iter().enumerate() {
            let Some(duration) = element.duration() else {
                return;
            };
            match shortest {
                Some((_, best)) if duration >= best => {}
                _ => shortest = Some((idx, duration)),
            }
        }
        self.master = shortest.map(|(idx, _)| idx);
    }

    /// One synchronization step. Reads the master timeline, updates progress,
    /// and resets every element to zero and resumes them all once the master
    /// reaches its own end, so elements of differing length never drift.
    pub fn tick(&mut self) -> Option<SyncFrame> {
        let master_idx = self.master?;
        let duration = self.elements[master_idx].duration()?;
        if duration <= 0.0 {
            return None;
        }
        let position = self.elements[master_idx].position();
        let mut progress_percent = (position / duration) * 100.0;
        let mut looped = false;
        if position >= duration {
            for element in &mut self.elements {
                element.seek(0.0);
                element.play();
            }
            progress_percent = 0.0;
            looped = true;
        }
        let schedule_next = !self.elements[0].is_paused();
        Some(SyncFrame {
            progress_percent,
            looped,
            schedule_next,
        })
    }

    /// Plays or pauses every element together. Returns true when the group
    /// is now playing.
    pub fn toggle_play(&mut self) -> bool {
        let was_paused = self
            .elements
            .first()
            .map(|element| element.is_paused())
            .unwrap_or(true);
        for element in &mut self.elements {
            if was_paused {
                element.play();
            } else {
                element.pause();
            }
        }
        was_paused
    }

    /// Seeks every element to `fraction` of the master duration. The master
    /// is the normalization basis regardless of which element runs longest.
    pub fn scrub(&mut self, fraction: f64) {
        let Some(master_idx) = self.master else {
            return;
        };
        let Some(duration) = self.elements[master_idx].duration() else {
            return;
        };
        let target = fraction.clamp(0.0, 1.0) * duration;
        for element in &mut self.elements {
            element.seek(target);
        }
    }
}

/// Clamp for the image comparison slider: the divider position in pixels,
/// bounded to the wrapper width.
pub fn clamp_divider(position: f64, width: f64) -> f64 {
    position.clamp(0.0, width.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::{SyncGroup, Transport, clamp_divider};

    struct FakeVideo {
        duration: Option<f64>,
        position: f64,
        paused: bool,
    }

    impl FakeVideo {
        fn new(duration: Option<f64>) -> Self {
            FakeVideo {
                duration,
                position: 0.0,
                paused: true,
            }
        }
    }

    impl Transport for FakeVideo {
        fn duration(&self) -> Option<f64> {
            self.duration
        }
        fn position(&self) -> f64 {
            self.position
        }
        fn seek(&mut self, secs: f64) {
            self.position = secs;
        }
        fn play(&mut self) {
            self.paused = false;
        }
        fn pause(&mut self) {
            self.paused = true;
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
    }

    #[test]
    fn master_is_shortest_duration() {
        let group = SyncGroup::new(vec![
            FakeVideo::new(Some(15.0)),
            FakeVideo::new(Some(10.0)),
        ]);
        assert_eq!(group.master_index(), Some(1));
    }

    #[test]
    fn master_selection_waits_for_all_metadata() {
        let mut group = SyncGroup::new(vec![FakeVideo::new(Some(15.0)), FakeVideo::new(None)]);
        assert_eq!(group.master_index(), None);
        group.elements[1].duration = Some(10.0);
        group.metadata_loaded();
        assert_eq!(group.master_index(), Some(1));
    }

    #[test]
    fn master_end_resets_and_resumes_all() {
        let mut group = SyncGroup::new(vec![
            FakeVideo::new(Some(10.0)),
            FakeVideo::new(Some(15.0)),
        ]);
        group.toggle_play();
        group.elements[0].position = 10.0;
        group.elements[1].position = 6.67;
        let frame = group.tick().unwrap();
        assert!(frame.looped);
        assert_eq!(group.elements[0].position, 0.0);
        assert_eq!(group.elements[1].position, 0.0);
        assert!(!group.elements[0].is_paused());
        assert!(!group.elements[1].is_paused());
        assert!(frame.schedule_next);
    }

    #[test]
    fn frame_loop_stops_once_paused() {
        let mut group = SyncGroup::new(vec![FakeVideo::new(Some(10.0))]);
        group.toggle_play();
        group.elements[0].position = 5.0;
        let frame = group.tick().unwrap();
        assert_eq!(frame.progress_percent, 50.0);
        assert!(frame.schedule_next);
        group.toggle_play();
        let frame = group.tick().unwrap();
        assert!(!frame.schedule_next);
    }

    #[test]
    fn scrub_uses_master_duration_for_all() {
        let mut group = SyncGroup::new(vec![
            FakeVideo::new(Some(10.0)),
            FakeVideo::new(Some(15.0)),
        ]);
        group.scrub(0.5);
        assert_eq!(group.elements[0].position, 5.0);
        assert_eq!(group.elements[1].position, 5.0);
        group.scrub(2.0);
        assert_eq!(group.elements[1].position, 10.0);
    }

    #[test]
    fn divider_clamps_to_wrapper() {
        assert_eq!(clamp_divider(-4.0, 300.0), 0.0);
        assert_eq!(clamp_divider(120.0, 300.0), 120.0);
        assert_eq!(clamp_divider(350.0, 300.0), 300.0);
    }
}
