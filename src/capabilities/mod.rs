mod ticker;

pub use self::ticker::{Ticker, TickerId, TickerOperation, TickerOutput};

// We use Crux's built-in Render capability directly because it provides
// all necessary functionality for triggering view updates.
pub use crux_core::render::Render;

use crux_core::capability::ProtoContext;
use crux_core::render::RenderOperation;
use crux_core::Request;

use crate::app::App;
use crate::event::Event;

pub type AppRender = Render<Event>;
pub type AppTicker = Ticker<Event>;

pub struct Capabilities {
    pub render: AppRender,
    pub ticker: AppTicker,
}

// The Effect derive does not accept aliased capability fields, so the
// effect enum and its wiring are written out.
pub enum Effect {
    Render(Request<RenderOperation>),
    Ticker(Request<TickerOperation>),
}

impl crux_core::WithContext<App, Effect> for Capabilities {
    fn new_with_context(context: ProtoContext<Effect, Event>) -> Capabilities {
        Capabilities {
            render: Render::new(context.specialize(Effect::Render)),
            ticker: Ticker::new(context.specialize(Effect::Ticker)),
        }
    }
}
