//! Delayed actions owned by the call that scheduled them.
//!
//! The browser layer turns each task into a `setTimeout`; keeping the list as
//! data lets callers inspect ordering and cancel the group as a whole.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask<A> {
    /// Delay from the moment the schedule is started.
    pub delay_ms: u32,
    pub action: A,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule<A> {
    tasks: Vec<ScheduledTask<A>>,
}

impl<A> Default for Schedule<A> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<A> Schedule<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delay_ms: u32, action: A) {
        self.tasks.push(ScheduledTask { delay_ms, action });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTask<A>> {
        self.tasks.iter()
    }
}

impl<A> IntoIterator for Schedule<A> {
    type Item = ScheduledTask<A>;
    type IntoIter = std::vec::IntoIter<ScheduledTask<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}
