//! Shared queue that button actions push viewer commands into.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use panorama_core::commands::ViewerCommand;

/// Cloneable handle to the viewer's command queue.
///
/// Button actions capture a clone and push from inside the button system;
/// the simulation drains the queue once all systems have run.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue(Arc<Mutex<VecDeque<ViewerCommand>>>);

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: ViewerCommand) {
        self.0.lock().push_back(command);
    }

    /// Take every queued command, oldest first.
    pub fn drain(&self) -> Vec<ViewerCommand> {
        self.0.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}
