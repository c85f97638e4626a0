use std::cell::RefCell;
use std::rc::Rc;

use crate::model::LngLat;

pub type MarkerId = u64;

pub trait MapHost {
    fn create_marker(&mut self, position: LngLat) -> MarkerId;
    fn remove_marker(&mut self, marker: MarkerId);
}

// Owns the zero-or-one marker for a control. `remove` then `create`
// run back to back inside the session transition that triggered them,
// so the host never observes two live markers for one control.
pub struct MarkerController {
    host: Box<dyn MapHost>,
    active: Option<(MarkerId, LngLat)>,
}

impl MarkerController {
    pub fn new(host: Box<dyn MapHost>) -> Self {
        Self { host, active: None }
    }

    pub fn replace(&mut self, position: LngLat) {
        self.remove();
        let id = self.host.create_marker(position);
        self.active = Some((id, position));
    }

    pub fn remove(&mut self) {
        if let Some((id, _)) = self.active.take() {
            self.host.remove_marker(id);
        }
    }

    pub fn is_placed(&self) -> bool {
        self.active.is_some()
    }

    pub fn position(&self) -> Option<LngLat> {
        self.active.map(|(_, position)| position)
    }
}

impl Drop for MarkerController {
    fn drop(&mut self) {
        self.remove();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerOp {
    Created(MarkerId, LngLat),
    Removed(MarkerId),
}

// Test double with a shared op log, so assertions can keep a handle
// after the host is boxed into a controller.
#[derive(Clone, Default)]
pub struct RecordingMapHost {
    state: Rc<RefCell<RecordingState>>,
}

#[derive(Default)]
struct RecordingState {
    next_id: MarkerId,
    ops: Vec<MarkerOp>,
}

impl RecordingMapHost {
    pub fn ops(&self) -> Vec<MarkerOp> {
        self.state.borrow().ops.clone()
    }

    pub fn live_markers(&self) -> usize {
        let state = self.state.borrow();
        let created = state
            .ops
            .iter()
            .filter(|op| matches!(op, MarkerOp::Created(..)))
            .count();
        let removed = state
            .ops
            .iter()
            .filter(|op| matches!(op, MarkerOp::Removed(_)))
            .count();
        created - removed
    }
}

impl MapHost for RecordingMapHost {
    fn create_marker(&mut self, position: LngLat) -> MarkerId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.ops.push(MarkerOp::Created(id, position));
        id
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.state.borrow_mut().ops.push(MarkerOp::Removed(marker));
    }
}

// Host for the interactive runtime: no real map, just status lines.
#[derive(Default)]
pub struct LoggingMapHost {
    next_id: MarkerId,
}

impl MapHost for LoggingMapHost {
    fn create_marker(&mut self, position: LngLat) -> MarkerId {
        self.next_id += 1;
        println!(
            "[geofind-core] marker {} placed at {},{}",
            self.next_id, position.lng, position.lat
        );
        self.next_id
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        println!("[geofind-core] marker {marker} removed");
    }
}
