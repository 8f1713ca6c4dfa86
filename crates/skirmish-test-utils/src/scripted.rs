//! Scripted battlefield engine double.

use std::cell::RefCell;
use std::rc::Rc;

use skirmish_core::engine::{Battlefield, TankDescriptor};
use skirmish_core::state::TankState;

#[derive(Default)]
struct ScriptState {
    built: bool,
    started: bool,
    added_tanks: Vec<String>,
    tank_list: Vec<TankState>,
    quality: f64,
}

/// A battlefield whose tick data is scripted by the test.
///
/// Records `build_simulation` / `add_tank` / `start` calls so tests can
/// assert the controller's setup sequence, and serves whatever tank list
/// and quality level the test installs with [`script_tick`](Self::script_tick).
///
/// Clones share state: keep one clone in the test while the controller
/// owns the other, and script ticks between events.
#[derive(Clone, Default)]
pub struct ScriptedBattlefield {
    state: Rc<RefCell<ScriptState>>,
}

impl ScriptedBattlefield {
    pub fn new() -> Self {
        let scripted = Self::default();
        scripted.state.borrow_mut().quality = 1.0;
        scripted
    }

    /// Install the tank list and quality the next reads will observe.
    pub fn script_tick(&self, tank_list: Vec<TankState>, quality: f64) {
        let mut state = self.state.borrow_mut();
        state.tank_list = tank_list;
        state.quality = quality;
    }

    pub fn built(&self) -> bool {
        self.state.borrow().built
    }

    pub fn started(&self) -> bool {
        self.state.borrow().started
    }

    /// Registered tank names, in call order.
    pub fn added_tanks(&self) -> Vec<String> {
        self.state.borrow().added_tanks.clone()
    }
}

impl Battlefield for ScriptedBattlefield {
    fn build_simulation(&mut self) {
        self.state.borrow_mut().built = true;
    }

    fn add_tank(&mut self, descriptor: &TankDescriptor) {
        self.state
            .borrow_mut()
            .added_tanks
            .push(descriptor.name.clone());
    }

    fn start(&mut self) {
        self.state.borrow_mut().started = true;
    }

    fn tank_list(&self) -> Vec<TankState> {
        self.state.borrow().tank_list.clone()
    }

    fn actual_renderer_quality(&self) -> f64 {
        self.state.borrow().quality
    }
}
