//! Pointer input and hover/drag arbitration
//!
//! Single-threaded and tick driven: event handlers write the latest pointer
//! state, the frame loop hands it to the arbiter once per tick.

pub mod arbiter;
pub mod pointer;

pub use arbiter::{
    DragStart, Interactive, InteractionArbiter, InteractionEvent, InteractionPhase,
    InteractionState, ObjectId,
};
pub use pointer::{PointerButton, PointerState};
