use crate::events::execution_started::ExecutionStartedEvent;

/// Observer notified right before a GraphQL execution starts resolving.
///
/// Listeners only get a shared reference, the event can't be altered on its way
/// to the next listener. Implementations must not block, they run inline with
/// the execution.
pub trait ExecutionStartedListener: Send + Sync {
    fn on_execution_started(&self, event: &ExecutionStartedEvent<'_>);
}

impl<F> ExecutionStartedListener for F
where
    F: Fn(&ExecutionStartedEvent<'_>) + Send + Sync,
{
    #[inline]
    fn on_execution_started(&self, event: &ExecutionStartedEvent<'_>) {
        self(event)
    }
}

pub type ExecutionStartedListenerBoxed = Box<dyn ExecutionStartedListener>;

/// Boxes a closure as a listener.
pub fn from_fn<F>(listener: F) -> ExecutionStartedListenerBoxed
where
    F: Fn(&ExecutionStartedEvent<'_>) + Send + Sync + 'static,
{
    Box::new(listener)
}
