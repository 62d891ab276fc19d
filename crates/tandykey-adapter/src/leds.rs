use crate::AdapterConfig;

/// Status indicators; nothing downstream depends on them.
///
/// The activity LED is lit for the duration of each transmitted byte. The
/// heartbeat LED toggles on a tick divider: a half-second period with caps
/// lock off, twice that rate with it on, so the lock state is visible at a
/// glance.
#[derive(Debug)]
pub struct StatusLeds {
    heartbeat: bool,
    activity: bool,
    divider: u32,
    slow_reload: u32,
    fast_reload: u32,
}

impl StatusLeds {
    pub fn new(config: &AdapterConfig) -> Self {
        // At 4x baud ticks, 2*baud ticks are half a second.
        let slow_reload = config.baud * 2 - 1;
        let fast_reload = config.baud - 1;
        Self {
            heartbeat: false,
            activity: false,
            divider: slow_reload,
            slow_reload,
            fast_reload,
        }
    }

    pub fn heartbeat(&self) -> bool {
        self.heartbeat
    }

    pub fn activity(&self) -> bool {
        self.activity
    }

    pub(crate) fn set_activity(&mut self, on: bool) {
        self.activity = on;
    }

    /// Advances the heartbeat divider by one transmit tick.
    pub(crate) fn tick(&mut self, caps_lock: bool) {
        if self.divider == 0 {
            self.heartbeat = !self.heartbeat;
            self.divider = if caps_lock {
                self.fast_reload
            } else {
                self.slow_reload
            };
        } else {
            self.divider -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heartbeat_toggles_every_two_baud_ticks_with_caps_off() {
        let config = AdapterConfig { baud: 8 };
        let mut leds = StatusLeds::new(&config);
        for _ in 0..16 {
            assert!(!leds.heartbeat());
            leds.tick(false);
        }
        assert!(leds.heartbeat());
        for _ in 0..16 {
            leds.tick(false);
        }
        assert!(!leds.heartbeat());
    }

    #[test]
    fn heartbeat_runs_twice_as_fast_with_caps_on() {
        let config = AdapterConfig { baud: 8 };
        let mut leds = StatusLeds::new(&config);
        // The divider starts at the slow reload; the rate change takes
        // effect at the first toggle.
        for _ in 0..16 {
            leds.tick(true);
        }
        assert!(leds.heartbeat());
        for _ in 0..8 {
            leds.tick(true);
        }
        assert!(!leds.heartbeat());
    }
}
