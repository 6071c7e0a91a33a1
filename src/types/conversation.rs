use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Per-user step marker for the multi-turn input flows. Ephemeral: lives in
/// `BotState` and is lost on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    AwaitingReminderDateTime,
    /// Date/time captured; the reminder text is the next message. The
    /// timezone travels with the captured value so the pair stays consistent
    /// even if the user changes their preference mid-flow.
    AwaitingReminderText { remind_at: NaiveDateTime, tz: Tz },
    AwaitingTimezone,
}
