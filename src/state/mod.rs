use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::store::ReminderStore;
use crate::types::ConversationState;

pub struct BotState {
    pub store: ReminderStore,
    pub conversations: Mutex<HashMap<i64, ConversationState>>,
    pub admin_id: i64,
}

impl BotState {
    pub fn new(store: ReminderStore, admin_id: i64) -> Self {
        Self {
            store,
            conversations: Mutex::new(HashMap::new()),
            admin_id,
        }
    }

    pub async fn conversation(&self, user_id: i64) -> ConversationState {
        let conversations = self.conversations.lock().await;
        conversations
            .get(&user_id)
            .cloned()
            .unwrap_or(ConversationState::Idle)
    }

    /// Idle users are simply absent from the map, so finished flows do not
    /// leave entries behind.
    pub async fn set_conversation(&self, user_id: i64, next: ConversationState) {
        let mut conversations = self.conversations.lock().await;
        if next == ConversationState::Idle {
            conversations.remove(&user_id);
        } else {
            conversations.insert(user_id, next);
        }
    }
}
