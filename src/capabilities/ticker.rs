//! Shell-driven repeating clock.
//!
//! The core never owns a timer; it asks the shell to open a tick stream and
//! to close it again. Each subscription carries a fresh id so a tick that
//! arrives after cancellation can be recognized as stale and dropped.

use crux_core::capability::{Capability, CapabilityContext, Operation};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of one clock subscription.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerId(pub String);

impl TickerId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for TickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerOperation {
    /// Open a repeating tick stream with the given period.
    Start { id: TickerId, period_ms: u64 },
    /// Close the stream. The shell must emit no further ticks for this id.
    Cancel { id: TickerId },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerOutput {
    Tick,
}

impl Operation for TickerOperation {
    type Output = TickerOutput;
}

pub struct Ticker<E> {
    context: CapabilityContext<TickerOperation, E>,
}

impl<Ev> Capability<Ev> for Ticker<Ev> {
    type Operation = TickerOperation;
    type MappedSelf<MappedEv> = Ticker<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Ticker::new(self.context.map_event(f))
    }
}

impl<E> Ticker<E>
where
    E: Send + 'static,
{
    pub fn new(context: CapabilityContext<TickerOperation, E>) -> Self {
        Self { context }
    }

    /// Open a tick stream; `on_tick` turns each pulse into an app event
    /// tagged with the subscription id.
    pub fn start<F>(&self, id: TickerId, period_ms: u64, on_tick: F)
    where
        F: Fn(TickerId) -> E + Send + Sync + 'static,
    {
        let context = self.context.clone();
        self.context.spawn(async move {
            let mut ticks = context.stream_from_shell(TickerOperation::Start {
                id: id.clone(),
                period_ms,
            });
            while let Some(TickerOutput::Tick) = ticks.next().await {
                context.update_app(on_tick(id.clone()));
            }
        });
    }

    /// Fire-and-forget close. Any ticks already in flight carry a stale id
    /// and are dropped by the app layer.
    pub fn cancel(&self, id: TickerId) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(TickerOperation::Cancel { id }).await;
        });
    }
}
