use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

categorical! {
    HookAction {
        Connect => "connect",
        Join => "join",
        Save => "save",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: Uuid,
    pub action: HookAction,
    pub target_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}
