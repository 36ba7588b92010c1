use bevy::prelude::*;
use scene_layout::prelude::{EventSink, LayoutEvent};

/// Bevy message containing the originating layout request entity and the underlying [`LayoutEvent`].
#[derive(Message, Debug, Clone)]
pub struct LayoutMessage {
    pub request_entity: Entity,
    pub event: LayoutEvent,
}

/// Event sink that buffers events tagged with the request entity until they are written as messages.
pub struct MessageSink {
    pub request: Entity,
    pub buffered: Vec<LayoutMessage>,
}

impl MessageSink {
    pub fn new(request: Entity) -> Self {
        Self {
            request,
            buffered: Vec::new(),
        }
    }
}

impl EventSink for MessageSink {
    #[inline]
    fn send(&mut self, event: LayoutEvent) {
        self.buffered.push(LayoutMessage {
            request_entity: self.request,
            event,
        });
    }
}
