// Pending countdowns for the touch surface. Dropping a Timeout cancels it.
use gloo::timers::callback::Timeout;

#[derive(Default)]
pub struct Timers {
    pick: Option<Timeout>,
    release: Option<Timeout>,
}

impl Timers {
    /// Replaces (and so cancels) any pending pick countdown.
    pub fn arm_pick(&mut self, t: Timeout) {
        self.pick = Some(t);
    }

    pub fn disarm_pick(&mut self) {
        self.pick = None;
    }

    pub fn arm_release(&mut self, t: Timeout) {
        self.release = Some(t);
    }

    pub fn clear(&mut self) {
        self.pick = None;
        self.release = None;
    }
}
