use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::{glow_marker::GlowMarker, progress_bar::ProgressBar};
use crate::config::GameConfig;
use crate::model::{Board, Effect, JsDice};
use crate::sound;
use crate::state::{changed_samples, mouse_sample, surface_origin, Timers};

#[derive(Properties, PartialEq, Clone)]
pub struct TouchGlowProps {
    /// Extra inline style for the surface (size, layout).
    #[prop_or_default]
    pub style: String,
    #[prop_or_default]
    pub children: Html,
}

/// Shared handles the DOM listeners and timers use to drive the board.
#[derive(Clone)]
struct Driver {
    board: Rc<RefCell<Board>>,
    timers: Rc<RefCell<Timers>>,
    config: Rc<RefCell<GameConfig>>,
    redraw: UseForceUpdateHandle,
}

impl Driver {
    fn run(&self, effects: Vec<Effect>) {
        for fx in effects {
            match fx {
                Effect::ArmPick => {
                    let ms = self.config.borrow().pick_delay_ms;
                    let d = self.clone();
                    self.timers
                        .borrow_mut()
                        .arm_pick(Timeout::new(ms, move || d.on_pick()));
                }
                Effect::DisarmPick => self.timers.borrow_mut().disarm_pick(),
                Effect::ArmRelease => {
                    let ms = self.config.borrow().reveal_ms;
                    let d = self.clone();
                    self.timers
                        .borrow_mut()
                        .arm_release(Timeout::new(ms, move || d.on_release()));
                }
                Effect::Play(cue) => {
                    if self.config.borrow().sound {
                        sound::play(cue);
                    }
                }
            }
        }
        self.redraw.force_update();
    }

    fn on_pick(&self) {
        let fx = {
            let mut board = self.board.borrow_mut();
            let before = board.len();
            let fx = board.pick(&mut JsDice);
            if let Some(id) = board.chosen() {
                log::info!("picked pointer {} out of {}", id.0, before);
            }
            fx
        };
        self.run(fx);
    }

    fn on_release(&self) {
        // Leave the fired timeout in `timers`: it owns the running closure.
        self.board.borrow_mut().release();
        log::debug!("reveal over, surface cleared");
        self.redraw.force_update();
    }

    fn install(&self, surface: &HtmlElement) -> Vec<EventListener> {
        let opts = EventListenerOptions::enable_prevent_default();
        let mut listeners = Vec::with_capacity(8);

        let press = {
            let d = self.clone();
            let surface = surface.clone();
            move |e: &Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else {
                    return;
                };
                e.prevent_default();
                let samples = changed_samples(e);
                let fx = d
                    .board
                    .borrow_mut()
                    .press(&samples, surface_origin(&surface), &mut JsDice);
                d.run(fx);
            }
        };
        listeners.push(EventListener::new_with_options(
            surface, "touchstart", opts, press,
        ));

        let drag = {
            let d = self.clone();
            let surface = surface.clone();
            move |e: &Event| {
                let Some(e) = e.dyn_ref::<TouchEvent>() else {
                    return;
                };
                e.prevent_default();
                let samples = changed_samples(e);
                d.board
                    .borrow_mut()
                    .drag(&samples, surface_origin(&surface));
                d.redraw.force_update();
            }
        };
        listeners.push(EventListener::new_with_options(
            surface, "touchmove", opts, drag,
        ));

        // A cancelled touch counts as lifted.
        for kind in ["touchend", "touchcancel"] {
            let d = self.clone();
            listeners.push(EventListener::new_with_options(
                surface,
                kind,
                opts,
                move |e: &Event| {
                    let Some(e) = e.dyn_ref::<TouchEvent>() else {
                        return;
                    };
                    e.prevent_default();
                    let fx = d.board.borrow_mut().lift(&changed_samples(e));
                    d.run(fx);
                },
            ));
        }

        // Mouse acts as one extra finger while the primary button is held.
        let mouse_down = {
            let d = self.clone();
            let surface = surface.clone();
            move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if e.button() != 0 {
                    return;
                }
                e.prevent_default();
                let fx = d.board.borrow_mut().press(
                    &[mouse_sample(e)],
                    surface_origin(&surface),
                    &mut JsDice,
                );
                d.run(fx);
            }
        };
        listeners.push(EventListener::new_with_options(
            surface, "mousedown", opts, mouse_down,
        ));

        let mouse_move = {
            let d = self.clone();
            let surface = surface.clone();
            move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut board = d.board.borrow_mut();
                if board.is_empty() {
                    return;
                }
                board.drag(&[mouse_sample(e)], surface_origin(&surface));
                drop(board);
                d.redraw.force_update();
            }
        };
        listeners.push(EventListener::new(surface, "mousemove", mouse_move));

        if let Some(window) = web_sys::window() {
            let d = self.clone();
            listeners.push(EventListener::new(&window, "mouseup", move |e: &Event| {
                let Some(e) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if e.button() != 0 {
                    return;
                }
                let fx = d.board.borrow_mut().lift(&[mouse_sample(e)]);
                d.run(fx);
            }));
        }
        listeners
    }
}

#[function_component(TouchGlow)]
pub fn touch_glow(props: &TouchGlowProps) -> Html {
    let config = use_context::<GameConfig>().unwrap_or_default();
    let surface_ref = use_node_ref();
    let board = use_mut_ref(Board::default);
    let timers = use_mut_ref(Timers::default);
    // Listeners outlive renders; they read the latest config through this cell.
    let config_ref = use_mut_ref(|| config.clone());
    let redraw = use_force_update();

    if *config_ref.borrow() != config {
        *config_ref.borrow_mut() = config.clone();
    }

    {
        let surface_ref = surface_ref.clone();
        let driver = Driver {
            board: board.clone(),
            timers: timers.clone(),
            config: config_ref.clone(),
            redraw,
        };
        use_effect_with((), move |_| {
            let listeners = match surface_ref.cast::<HtmlElement>() {
                Some(surface) => driver.install(&surface),
                None => {
                    log::warn!("touch surface not mounted; input disabled");
                    Vec::new()
                }
            };
            move || {
                drop(listeners);
                // Timers hold the driver; clearing them breaks the cycle.
                driver.timers.borrow_mut().clear();
            }
        });
    }

    let board = board.borrow();
    let chosen = board.chosen();
    html! {
        <div
            ref={surface_ref}
            style={format!("position:relative; overflow:hidden; touch-action:none; user-select:none; -webkit-user-select:none; {}", props.style)}
        >
            { props.children.clone() }
            if board.show_progress() {
                <ProgressBar key={board.round().to_string()} duration_ms={config.pick_delay_ms} />
            }
            { for board.points().map(|p| html! {
                <GlowMarker key={p.id.0.to_string()} point={*p} chosen={chosen == Some(p.id)} />
            }) }
        </div>
    }
}
