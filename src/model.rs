//! Core data model for Player Turn.
//! The `Board` tracks every finger on the surface and decides, when the
//! countdown fires, which single finger gets the turn. It never touches the
//! DOM; the view feeds it samples and carries out the returned `Effect`s.

use std::collections::BTreeMap;

/// Browser touch identifier. The mouse is tracked as a pseudo-touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub i32);

impl PointerId {
    /// Browsers hand out non-negative touch identifiers, so -1 never collides.
    pub const MOUSE: PointerId = PointerId(-1);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glow {
    Red,
    Amber,
    Yellow,
    Green,
    Cyan,
    Blue,
    Indigo,
    Pink,
}

impl Glow {
    pub const ALL: [Glow; 8] = [
        Glow::Red,
        Glow::Amber,
        Glow::Yellow,
        Glow::Green,
        Glow::Cyan,
        Glow::Blue,
        Glow::Indigo,
        Glow::Pink,
    ];

    /// Bright shade, used for the gradient start and the ripple rings.
    pub fn base_rgb(self) -> (u8, u8, u8) {
        match self {
            Glow::Red => (239, 68, 68),
            Glow::Amber => (245, 158, 11),
            Glow::Yellow => (234, 179, 8),
            Glow::Green => (34, 197, 94),
            Glow::Cyan => (6, 182, 212),
            Glow::Blue => (59, 130, 246),
            Glow::Indigo => (99, 102, 241),
            Glow::Pink => (236, 72, 153),
        }
    }

    /// Darker shade for the gradient end.
    pub fn deep_rgb(self) -> (u8, u8, u8) {
        match self {
            Glow::Red => (220, 38, 38),
            Glow::Amber => (217, 119, 6),
            Glow::Yellow => (202, 138, 4),
            Glow::Green => (22, 163, 74),
            Glow::Cyan => (8, 145, 178),
            Glow::Blue => (37, 99, 235),
            Glow::Indigo => (79, 70, 229),
            Glow::Pink => (219, 39, 119),
        }
    }

    pub fn rgba(self, alpha: f64) -> String {
        let (r, g, b) = self.base_rgb();
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }

    pub fn gradient(self) -> String {
        let (r0, g0, b0) = self.base_rgb();
        let (r1, g1, b1) = self.deep_rgb();
        format!("linear-gradient(to right, rgb({r0}, {g0}, {b0}), rgb({r1}, {g1}, {b1}))")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    /// Position relative to the top-left corner of the tracking surface.
    pub x: f64,
    pub y: f64,
    pub glow: Glow,
}

/// One changed touch, still in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub id: PointerId,
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Accepting touches.
    Open,
    /// A finger has been chosen; input is ignored until release.
    Revealing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Touch,
    Chosen,
}

/// Side effects the view must carry out after a board transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the pick countdown, cancelling any pending one.
    ArmPick,
    /// Cancel the pick countdown.
    DisarmPick,
    /// Start the timer that ends the reveal.
    ArmRelease,
    Play(Cue),
}

/// Uniform random index source.
pub trait Dice {
    /// Returns an index in `0..n`. `n` is never zero.
    fn below(&mut self, n: usize) -> usize;
}

/// `Math.random()` backed dice for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsDice;

impl Dice for JsDice {
    fn below(&mut self, n: usize) -> usize {
        let i = (js_sys::Math::random() * n as f64).floor() as usize;
        i.min(n - 1)
    }
}

/// Picks a palette entry no current point uses, or any entry once all eight are taken.
pub fn unique_glow<'a>(
    points: impl IntoIterator<Item = &'a TouchPoint>,
    dice: &mut impl Dice,
) -> Glow {
    let used: Vec<Glow> = points.into_iter().map(|p| p.glow).collect();
    let available: Vec<Glow> = Glow::ALL
        .iter()
        .copied()
        .filter(|g| !used.contains(g))
        .collect();
    if available.is_empty() {
        Glow::ALL[dice.below(Glow::ALL.len())]
    } else {
        available[dice.below(available.len())]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    points: BTreeMap<PointerId, TouchPoint>,
    /// Bumped each time the countdown is armed; keys the progress bar.
    round: u32,
    phase: Phase,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            points: BTreeMap::new(),
            round: 0,
            phase: Phase::Open,
        }
    }
}

impl Board {
    pub fn points(&self) -> impl Iterator<Item = &TouchPoint> {
        self.points.values()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The finger that won the last pick, while it is being shown.
    pub fn chosen(&self) -> Option<PointerId> {
        match self.phase {
            Phase::Revealing => self.points.keys().next().copied(),
            Phase::Open => None,
        }
    }

    pub fn show_progress(&self) -> bool {
        self.round > 0 && !self.points.is_empty()
    }

    /// New fingers down. `origin` is the surface's top-left in client coordinates.
    pub fn press(
        &mut self,
        samples: &[TouchSample],
        origin: (f64, f64),
        dice: &mut impl Dice,
    ) -> Vec<Effect> {
        if self.phase == Phase::Revealing || samples.is_empty() {
            return Vec::new();
        }
        for s in samples {
            let glow = unique_glow(self.points.values(), dice);
            self.points.insert(
                s.id,
                TouchPoint {
                    id: s.id,
                    x: s.client_x - origin.0,
                    y: s.client_y - origin.1,
                    glow,
                },
            );
        }
        self.round = self.round.saturating_add(1);
        vec![Effect::ArmPick, Effect::Play(Cue::Touch)]
    }

    /// Fingers moved. Unknown ids are ignored.
    pub fn drag(&mut self, samples: &[TouchSample], origin: (f64, f64)) {
        if self.phase == Phase::Revealing {
            return;
        }
        for s in samples {
            if let Some(p) = self.points.get_mut(&s.id) {
                p.x = s.client_x - origin.0;
                p.y = s.client_y - origin.1;
            }
        }
    }

    /// Fingers lifted or cancelled.
    pub fn lift(&mut self, samples: &[TouchSample]) -> Vec<Effect> {
        if self.phase == Phase::Revealing {
            return Vec::new();
        }
        for s in samples {
            self.points.remove(&s.id);
        }
        if self.points.is_empty() {
            vec![Effect::DisarmPick]
        } else {
            Vec::new()
        }
    }

    /// Countdown elapsed: keep one random finger and start the reveal.
    pub fn pick(&mut self, dice: &mut impl Dice) -> Vec<Effect> {
        if self.phase == Phase::Revealing || self.points.is_empty() {
            return Vec::new();
        }
        if self.points.len() > 1 {
            let winner = dice.below(self.points.len());
            let keep = self.points.keys().nth(winner).copied();
            self.points.retain(|id, _| Some(*id) == keep);
        }
        self.round = 0;
        self.phase = Phase::Revealing;
        vec![Effect::Play(Cue::Chosen), Effect::ArmRelease]
    }

    /// Reveal over: wipe the surface and accept input again.
    pub fn release(&mut self) {
        self.points.clear();
        self.phase = Phase::Open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays scripted rolls, clamped into range.
    struct Scripted(VecDeque<usize>);

    impl Scripted {
        fn new(rolls: &[usize]) -> Self {
            Self(rolls.iter().copied().collect())
        }
    }

    impl Dice for Scripted {
        fn below(&mut self, n: usize) -> usize {
            self.0.pop_front().unwrap_or(0).min(n - 1)
        }
    }

    fn sample(id: i32, x: f64, y: f64) -> TouchSample {
        TouchSample {
            id: PointerId(id),
            client_x: x,
            client_y: y,
        }
    }

    #[test]
    fn press_offsets_by_origin_and_arms_countdown() {
        let mut board = Board::default();
        let fx = board.press(&[sample(3, 110.0, 60.0)], (10.0, 20.0), &mut Scripted::new(&[]));
        assert_eq!(fx, vec![Effect::ArmPick, Effect::Play(Cue::Touch)]);
        let p = board.points().next().unwrap();
        assert_eq!((p.x, p.y), (100.0, 40.0));
        assert_eq!(board.round(), 1);
        assert!(board.show_progress());
    }

    #[test]
    fn press_without_samples_changes_nothing() {
        let mut board = Board::default();
        assert!(board.press(&[], (0.0, 0.0), &mut Scripted::new(&[])).is_empty());
        assert_eq!(board.round(), 0);
        assert!(board.is_empty());
        assert!(!board.show_progress());
    }

    #[test]
    fn repress_replaces_existing_point() {
        let mut board = Board::default();
        let mut dice = Scripted::new(&[]);
        board.press(&[sample(1, 10.0, 10.0)], (0.0, 0.0), &mut dice);
        board.press(&[sample(1, 40.0, 50.0)], (0.0, 0.0), &mut dice);
        assert_eq!(board.len(), 1);
        let p = board.points().next().unwrap();
        assert_eq!((p.x, p.y), (40.0, 50.0));
        // The old entry still counts as used when the new glow is drawn.
        assert_eq!(p.glow, Glow::Amber);
        assert_eq!(board.round(), 2);
    }

    #[test]
    fn every_press_starts_a_new_round() {
        let mut board = Board::default();
        let mut dice = Scripted::new(&[]);
        board.press(&[sample(0, 0.0, 0.0)], (0.0, 0.0), &mut dice);
        board.press(&[sample(1, 5.0, 5.0), sample(2, 9.0, 9.0)], (0.0, 0.0), &mut dice);
        assert_eq!(board.round(), 2);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn glows_stay_distinct_within_one_event() {
        let mut board = Board::default();
        let samples: Vec<_> = (0..8).map(|i| sample(i, 0.0, 0.0)).collect();
        board.press(&samples, (0.0, 0.0), &mut Scripted::new(&[]));
        let glows: Vec<_> = board.points().map(|p| p.glow).collect();
        assert!(Glow::ALL.iter().all(|g| glows.iter().filter(|x| *x == g).count() == 1));
    }

    #[test]
    fn unique_glow_skips_used_colors() {
        let used = [
            TouchPoint { id: PointerId(0), x: 0.0, y: 0.0, glow: Glow::Red },
            TouchPoint { id: PointerId(1), x: 0.0, y: 0.0, glow: Glow::Amber },
        ];
        assert_eq!(unique_glow(&used, &mut Scripted::new(&[0])), Glow::Yellow);
        assert_eq!(unique_glow(&used, &mut Scripted::new(&[5])), Glow::Pink);
    }

    #[test]
    fn unique_glow_falls_back_to_full_palette() {
        let used: Vec<_> = Glow::ALL
            .iter()
            .enumerate()
            .map(|(i, g)| TouchPoint { id: PointerId(i as i32), x: 0.0, y: 0.0, glow: *g })
            .collect();
        assert_eq!(unique_glow(&used, &mut Scripted::new(&[2])), Glow::Yellow);
    }

    #[test]
    fn drag_moves_known_points_only() {
        let mut board = Board::default();
        board.press(&[sample(1, 10.0, 10.0)], (0.0, 0.0), &mut Scripted::new(&[]));
        board.drag(&[sample(1, 30.0, 40.0), sample(9, 1.0, 1.0)], (10.0, 10.0));
        assert_eq!(board.len(), 1);
        let p = board.points().next().unwrap();
        assert_eq!((p.x, p.y), (20.0, 30.0));
    }

    #[test]
    fn lifting_last_finger_disarms() {
        let mut board = Board::default();
        let mut dice = Scripted::new(&[]);
        board.press(&[sample(1, 0.0, 0.0), sample(2, 0.0, 0.0)], (0.0, 0.0), &mut dice);
        assert!(board.lift(&[sample(1, 0.0, 0.0)]).is_empty());
        assert_eq!(board.lift(&[sample(2, 0.0, 0.0)]), vec![Effect::DisarmPick]);
        assert!(!board.show_progress());
    }

    #[test]
    fn pick_keeps_exactly_one() {
        let mut board = Board::default();
        let samples: Vec<_> = (10..14).map(|i| sample(i, 0.0, 0.0)).collect();
        board.press(&samples, (0.0, 0.0), &mut Scripted::new(&[]));
        let fx = board.pick(&mut Scripted::new(&[2]));
        assert_eq!(fx, vec![Effect::Play(Cue::Chosen), Effect::ArmRelease]);
        assert_eq!(board.len(), 1);
        assert_eq!(board.chosen(), Some(PointerId(12)));
        assert_eq!(board.phase(), Phase::Revealing);
        assert_eq!(board.round(), 0);
        assert!(!board.show_progress());
    }

    #[test]
    fn single_finger_is_chosen() {
        let mut board = Board::default();
        board.press(&[sample(4, 0.0, 0.0)], (0.0, 0.0), &mut Scripted::new(&[]));
        board.pick(&mut Scripted::new(&[]));
        assert_eq!(board.chosen(), Some(PointerId(4)));
    }

    #[test]
    fn pick_on_empty_board_does_nothing() {
        let mut board = Board::default();
        assert!(board.pick(&mut Scripted::new(&[])).is_empty());
        assert_eq!(board.phase(), Phase::Open);
    }

    #[test]
    fn input_is_frozen_while_revealing() {
        let mut board = Board::default();
        let mut dice = Scripted::new(&[]);
        board.press(&[sample(1, 0.0, 0.0), sample(2, 0.0, 0.0)], (0.0, 0.0), &mut dice);
        board.pick(&mut Scripted::new(&[0]));
        let frozen = board.clone();
        assert!(board.press(&[sample(3, 0.0, 0.0)], (0.0, 0.0), &mut dice).is_empty());
        board.drag(&[sample(1, 50.0, 50.0)], (0.0, 0.0));
        assert!(board.lift(&[sample(1, 0.0, 0.0)]).is_empty());
        assert!(board.pick(&mut dice).is_empty());
        assert_eq!(board, frozen);
    }

    #[test]
    fn release_clears_and_reopens() {
        let mut board = Board::default();
        let mut dice = Scripted::new(&[]);
        board.press(&[sample(1, 0.0, 0.0)], (0.0, 0.0), &mut dice);
        board.pick(&mut dice);
        board.release();
        assert!(board.is_empty());
        assert_eq!(board.phase(), Phase::Open);
        assert_eq!(board.chosen(), None);
        assert_eq!(board.press(&[sample(7, 0.0, 0.0)], (0.0, 0.0), &mut dice).len(), 2);
    }

    #[test]
    fn glow_colors_render_as_css() {
        assert_eq!(Glow::Red.rgba(0.3), "rgba(239, 68, 68, 0.3)");
        assert_eq!(
            Glow::Blue.gradient(),
            "linear-gradient(to right, rgb(59, 130, 246), rgb(37, 99, 235))"
        );
    }
}
