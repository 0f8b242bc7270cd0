//! Hover/drag arbitration
//!
//! The arbiter owns every interactive object in z-order (index 0 is the
//! front) and decides once per tick which single object is hovered and which
//! single object holds the drag lock.
//!
//! Per object the phases are `Idle -> Hovered -> Dragging -> Hovered/Idle`.
//! Hover goes to the front-most object under the pointer. A drag starts only
//! on the hovered object while the primary button is down and the lock is
//! free (or already ours), so two objects can never drag at once.

use glam::Vec2;

use super::pointer::PointerState;

/// Stable handle to an object owned by the arbiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// What the arbiter should do after `on_drag_start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    /// Move the object to the front of the z-order
    Focus,
    /// Leave the z-order alone
    InPlace,
}

/// Capabilities the arbiter needs from an object
pub trait Interactive {
    /// World position
    fn pos(&self) -> Vec2;

    /// Whether a world-space point hits this object
    fn contains_point(&self, point: Vec2) -> bool;

    fn update(&mut self, _dt: f32) {}

    fn on_drag_start(&mut self) -> DragStart {
        DragStart::InPlace
    }

    fn on_drag_end(&mut self) {}

    /// Called every dragging tick with the pointer-tracked position
    fn on_drag_move(&mut self, _new_pos: Vec2) {}
}

/// Coarse per-object phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    Idle,
    Hovered,
    Dragging,
}

/// Per-object interaction flags
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    pub hovered: bool,
    pub dragging: bool,
    /// `pos - pointer` captured at drag start (zero when not dragging)
    pub drag_start_offset: Vec2,
}

impl InteractionState {
    pub fn phase(&self) -> InteractionPhase {
        if self.dragging {
            InteractionPhase::Dragging
        } else if self.hovered {
            InteractionPhase::Hovered
        } else {
            InteractionPhase::Idle
        }
    }
}

/// Notable transitions from one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    HoverChanged {
        from: Option<ObjectId>,
        to: Option<ObjectId>,
    },
    DragStarted {
        id: ObjectId,
        grab_offset: Vec2,
    },
    DragEnded {
        id: ObjectId,
    },
    Focused {
        id: ObjectId,
    },
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: ObjectId,
    state: InteractionState,
    object: T,
}

#[derive(Debug, Clone)]
pub struct InteractionArbiter<T> {
    /// Front-to-back z-order
    entries: Vec<Entry<T>>,
    hovered: Option<ObjectId>,
    drag_lock: Option<ObjectId>,
    next_id: u32,
}

impl<T> Default for InteractionArbiter<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            hovered: None,
            drag_lock: None,
            next_id: 1,
        }
    }
}

impl<T: Interactive> InteractionArbiter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object behind everything already present
    pub fn insert(&mut self, object: T) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            state: InteractionState::default(),
            object,
        });
        id
    }

    /// Remove an object, dropping any hover or drag role it held
    pub fn remove(&mut self, id: ObjectId) -> Option<T> {
        let index = self.index_of(id)?;
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.drag_lock == Some(id) {
            self.drag_lock = None;
        }
        Some(self.entries.remove(index).object)
    }

    /// Drop all objects and arbitration state
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hovered = None;
        self.drag_lock = None;
    }

    /// Move an object to the front of the z-order
    pub fn focus(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if index > 0 {
            let entry = self.entries.remove(index);
            self.entries.insert(0, entry);
        }
        true
    }

    /// Run one arbitration pass over all objects, front to back
    pub fn update(&mut self, pointer: &PointerState, dt: f32) -> Vec<InteractionEvent> {
        let mut events = Vec::new();
        let previous_hover = self.hovered.take();
        let mut focus_request = None;

        for entry in &mut self.entries {
            entry.object.update(dt);

            let is_over = entry.object.contains_point(pointer.position);
            let claimed = is_over && self.hovered.is_none();
            if claimed {
                self.hovered = Some(entry.id);
            }
            entry.state.hovered = claimed;

            let wants_drag = claimed
                && pointer.button_down
                && self.drag_lock.is_none_or(|holder| holder == entry.id);

            match (entry.state.dragging, wants_drag) {
                (false, true) => {
                    self.drag_lock = Some(entry.id);
                    let grab_offset = entry.object.pos() - pointer.position;
                    entry.state.dragging = true;
                    entry.state.drag_start_offset = grab_offset;
                    if entry.object.on_drag_start() == DragStart::Focus {
                        focus_request = Some(entry.id);
                    }
                    events.push(InteractionEvent::DragStarted {
                        id: entry.id,
                        grab_offset,
                    });
                }
                (true, false) => {
                    entry.state.dragging = false;
                    entry.state.drag_start_offset = Vec2::ZERO;
                    if self.drag_lock == Some(entry.id) {
                        self.drag_lock = None;
                    }
                    entry.object.on_drag_end();
                    events.push(InteractionEvent::DragEnded { id: entry.id });
                }
                _ => {}
            }

            if entry.state.dragging {
                entry
                    .object
                    .on_drag_move(entry.state.drag_start_offset + pointer.position);
            }
        }

        // Reordering waits until the pass is done so every object is visited once
        if let Some(id) = focus_request {
            if self.focus(id) {
                events.push(InteractionEvent::Focused { id });
            }
        }

        if previous_hover != self.hovered {
            events.push(InteractionEvent::HoverChanged {
                from: previous_hover,
                to: self.hovered,
            });
        }

        for event in &events {
            log::debug!("{event:?}");
        }
        events
    }

    /// Object currently under the pointer (front-most)
    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    /// Object holding the drag lock
    pub fn drag_locked(&self) -> Option<ObjectId> {
        self.drag_lock
    }

    pub fn get(&self, id: ObjectId) -> Option<&T> {
        self.entry(id).map(|e| &e.object)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut T> {
        let index = self.index_of(id)?;
        Some(&mut self.entries[index].object)
    }

    pub fn state(&self, id: ObjectId) -> Option<InteractionState> {
        self.entry(id).map(|e| e.state)
    }

    /// Position in the z-order (0 = front)
    pub fn z_index(&self, id: ObjectId) -> Option<usize> {
        self.index_of(id)
    }

    /// Hit-test precedence order
    pub fn front_to_back(&self) -> impl DoubleEndedIterator<Item = (ObjectId, &T)> {
        self.entries.iter().map(|e| (e.id, &e.object))
    }

    /// Draw order
    pub fn back_to_front(&self) -> impl Iterator<Item = (ObjectId, &T)> {
        self.front_to_back().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: ObjectId) -> Option<&Entry<T>> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}
