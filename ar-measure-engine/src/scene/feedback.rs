use bevy::prelude::*;

use crate::rpc::web_rpc::WebRpcInterface;

/// Confirmation feedback strength. Placements get the light tier on every
/// successful tap; a produced measurement additionally gets the strong
/// completion tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Placement,
    Completion,
}

impl FeedbackTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placement => "placement",
            Self::Completion => "completion",
        }
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct FeedbackEvent {
    pub tier: FeedbackTier,
}

/// Forward feedback events to the embedding frontend, which owns the
/// haptic actuator.
pub fn forward_feedback_events(
    mut events: EventReader<FeedbackEvent>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        rpc_interface.send_notification(
            "haptic_feedback",
            serde_json::json!({ "tier": event.tier.as_str() }),
        );
    }
}
