//! Deferred command execution.

use std::collections::VecDeque;

/// An executable unit of work.
pub trait Command {
    /// Executes the command.
    fn execute(&mut self);
}

/// Any `FnMut()` closure is a valid command.
impl<F> Command for F
where
    F: FnMut(),
{
    fn execute(&mut self) {
        self();
    }
}

/// Queues commands for later execution in FIFO order.
///
/// The queue is itself a [`Command`], so queues compose.
#[derive(Default)]
pub struct CommandQueue {
    /// Pending commands, oldest first.
    commands: VecDeque<Box<dyn Command>>,
}

impl CommandQueue {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a command for the next execution pass.
    pub fn enqueue(&mut self, command: impl Command + 'static) {
        self.commands.push_back(Box::new(command));
    }

    /// Executes and removes all queued commands, oldest first.
    pub fn execute_all(&mut self) {
        while let Some(mut command) = self.commands.pop_front() {
            command.execute();
        }
    }

    /// Number of queued commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for CommandQueue {
    fn execute(&mut self) {
        self.execute_all();
    }
}
