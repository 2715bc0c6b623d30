//! # Application State
//!
//! Shared state for the whole client, held behind `Arc<RwLock<AppState>>`.
//!
//! State is data-only: handlers and the event handler mutate it, background
//! tasks read the token out of it, and a rendering layer (not part of this
//! crate) reads whatever slice the current screen needs. Locks are held
//! briefly for single reads or writes, never across an await.

use std::sync::Arc;

use shared::{Group, LoginToken, Message, MessageReply, RecvMsgResponse, User, Uuid};

use crate::core::service::ApiService;

/// The screens the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    SignIn,
    SignUp,
    Home,
    SendMsg,
    DraftMsg,
    RecvMsg,
    AddGroup,
    CreateGroup,
    ViewGroup,
}

impl Screen {
    /// Header text for the screen. Empty where the screen draws its own.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "🏠",
            Screen::DraftMsg => "✍️✉️",
            Screen::CreateGroup => "➕👥",
            _ => "",
        }
    }

    /// Whether the screen is reachable only with a live session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Splash | Screen::SignIn | Screen::SignUp)
    }
}

/// History-tracking screen navigation.
///
/// `goto` records where you came from; `back` returns there. Only screen
/// identifiers are stored — per-screen inputs like the group being drafted
/// to live on [`AppState`] instead, so backing out of a screen and
/// re-entering it always starts from current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    current: Screen,
    history: Vec<Screen>,
}

impl NavStack {
    pub fn new() -> Self {
        Self {
            current: Screen::Splash,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Move to `screen`, remembering the current one.
    pub fn goto(&mut self, screen: Screen) {
        self.history.push(self.current);
        self.current = screen;
    }

    /// Return to the previous screen. No-op when there is no history.
    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    /// Forget all history, staying on the current screen.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Jump to `screen` without recording history (logout, session restore).
    pub fn replace(&mut self, screen: Screen) {
        self.current = screen;
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

/// What a drafted message is addressed to.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftTarget {
    Group(Group),
    Friend(User),
}

impl DraftTarget {
    pub fn uuid(&self) -> Uuid {
        match self {
            DraftTarget::Group(group) => group.uuid,
            DraftTarget::Friend(user) => user.uuid,
        }
    }
}

/// The receive queue, partitioned for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inbox {
    /// Messages from other users awaiting an emoji reply.
    pub to_acknowledge: Vec<Message>,
    /// Replies this user has sent.
    pub sent_replies: Vec<MessageReply>,
    /// Replies other users sent to this user's messages.
    pub received_replies: Vec<MessageReply>,
}

impl Inbox {
    /// Partition a receive response relative to `me`.
    ///
    /// Null collections on the wire become empty partitions. Messages this
    /// user sent themselves never land in `to_acknowledge`.
    pub fn partition(response: RecvMsgResponse, me: &User) -> Self {
        let to_acknowledge = response
            .new_messages
            .unwrap_or_default()
            .into_iter()
            .filter(|msg| {
                msg.source
                    .as_ref()
                    .map(|source| source.uuid != me.uuid)
                    .unwrap_or(true)
            })
            .collect();

        let replies = response.new_replies.unwrap_or_default();
        let sent_replies = replies
            .iter()
            .filter(|reply| reply.from.uuid == me.uuid)
            .cloned()
            .collect();
        let received_replies = replies
            .into_iter()
            .filter(|reply| {
                reply
                    .message
                    .as_ref()
                    .and_then(|msg| msg.source.as_ref())
                    .map(|source| source.uuid == me.uuid)
                    .unwrap_or(false)
            })
            .collect();

        Self {
            to_acknowledge,
            sent_replies,
            received_replies,
        }
    }
}

/// Shared application state.
pub struct AppState {
    pub nav: NavStack,

    /// Live session, if any. Expired tokens are never stored here.
    pub session: Option<LoginToken>,
    /// The signed-in user, from the login/signup response.
    pub user: Option<User>,

    // Last-fetched snapshots; replaced wholesale by the refresh cycle.
    pub friends: Vec<User>,
    pub all_groups: Vec<Group>,
    pub joined_groups: Vec<Group>,
    pub not_joined_groups: Vec<Group>,
    pub inbox: Inbox,
    pub recommendations: Vec<String>,

    // Per-screen inputs, deliberately outside the nav stack.
    pub draft_target: Option<DraftTarget>,
    pub viewing_group: Option<Group>,

    /// Pending user-facing notifications as `(level, message)` pairs.
    pub notifications: Vec<(String, String)>,
    /// Inline error on the sign-in/sign-up form.
    pub auth_error: Option<String>,
    /// Inline error on the draft screen.
    pub draft_error: Option<String>,

    /// Device push notification token, when the platform has provided one.
    pub device_token: Option<String>,

    /// Backend API handle for handlers and tasks.
    pub api: Option<Arc<dyn ApiService>>,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            nav: NavStack::new(),
            session: None,
            user: None,
            friends: Vec::new(),
            all_groups: Vec::new(),
            joined_groups: Vec::new(),
            not_joined_groups: Vec::new(),
            inbox: Inbox::default(),
            recommendations: Vec::new(),
            draft_target: None,
            viewing_group: None,
            notifications: Vec::new(),
            auth_error: None,
            draft_error: None,
            device_token: None,
            api: Some(api),
        }
    }

    /// Whether a live, unexpired session is present.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .map(|token| !token.expired())
            .unwrap_or(false)
    }

    /// Queue a user-facing error notification.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications
            .push(("error".to_string(), message.into()));
    }

    /// Queue a user-facing info notification.
    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.notifications.push(("info".to_string(), message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goto_then_back_returns() {
        let mut nav = NavStack::new();
        assert_eq!(nav.current(), Screen::Splash);

        nav.goto(Screen::SignIn);
        nav.goto(Screen::Home);
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.depth(), 2);

        nav.back();
        assert_eq!(nav.current(), Screen::SignIn);
        nav.back();
        assert_eq!(nav.current(), Screen::Splash);
    }

    #[test]
    fn test_back_on_empty_history_is_noop() {
        let mut nav = NavStack::new();
        nav.back();
        assert_eq!(nav.current(), Screen::Splash);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn test_clear_keeps_current_screen() {
        let mut nav = NavStack::new();
        nav.goto(Screen::Home);
        nav.goto(Screen::SendMsg);
        nav.clear();

        assert_eq!(nav.current(), Screen::SendMsg);
        assert_eq!(nav.depth(), 0);
        // After a clear, back has nowhere to go.
        nav.back();
        assert_eq!(nav.current(), Screen::SendMsg);
    }

    #[test]
    fn test_replace_does_not_record_history() {
        let mut nav = NavStack::new();
        nav.goto(Screen::Home);
        nav.replace(Screen::Splash);
        assert_eq!(nav.current(), Screen::Splash);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_screen_auth_requirements() {
        assert!(!Screen::Splash.requires_auth());
        assert!(!Screen::SignIn.requires_auth());
        assert!(!Screen::SignUp.requires_auth());
        assert!(Screen::Home.requires_auth());
        assert!(Screen::DraftMsg.requires_auth());
        assert!(Screen::ViewGroup.requires_auth());
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(Screen::Home.title(), "🏠");
        assert_eq!(Screen::DraftMsg.title(), "✍️✉️");
        assert_eq!(Screen::CreateGroup.title(), "➕👥");
        assert_eq!(Screen::Splash.title(), "");
    }

    fn user(uuid: u64) -> User {
        User {
            uuid: Uuid(uuid),
            name: format!("user-{uuid}"),
            email: format!("{uuid}@x.edu"),
        }
    }

    fn message_from(source: Option<User>) -> Message {
        Message {
            uuid: Uuid(99),
            sent_to: String::new(),
            group: shared::INVALID_UUID,
            emojis: "🍕🌮🍣".to_string(),
            source,
            location: String::new(),
            sent_at: 1_650_000_000,
            ttl: 86_400,
            local_time: 12.0,
        }
    }

    fn reply(from: User, original_sender: Option<User>) -> MessageReply {
        MessageReply {
            message: Some(message_from(original_sender)),
            group: shared::INVALID_UUID,
            original_content: "🍕🌮🍣".to_string(),
            reply: "😍😍😍".to_string(),
            from,
            sent_at: 1_650_000_100,
        }
    }

    #[test]
    fn test_partition_null_collections_are_empty() {
        let inbox = Inbox::partition(RecvMsgResponse::default(), &user(1));
        assert!(inbox.to_acknowledge.is_empty());
        assert!(inbox.sent_replies.is_empty());
        assert!(inbox.received_replies.is_empty());
    }

    #[test]
    fn test_partition_drops_own_messages() {
        let me = user(1);
        let response = RecvMsgResponse {
            new_messages: Some(vec![
                message_from(Some(me.clone())),
                message_from(Some(user(2))),
                message_from(None),
            ]),
            new_replies: None,
        };

        let inbox = Inbox::partition(response, &me);
        // Own message dropped; unknown-source message kept.
        assert_eq!(inbox.to_acknowledge.len(), 2);
    }

    #[test]
    fn test_partition_splits_replies_by_direction() {
        let me = user(1);
        let mine_to_other = reply(me.clone(), Some(user(2)));
        let other_to_mine = reply(user(2), Some(me.clone()));
        let unrelated = reply(user(2), Some(user(3)));

        let response = RecvMsgResponse {
            new_messages: None,
            new_replies: Some(vec![mine_to_other, other_to_mine, unrelated]),
        };

        let inbox = Inbox::partition(response, &me);
        assert_eq!(inbox.sent_replies.len(), 1);
        assert_eq!(inbox.sent_replies[0].from.uuid, me.uuid);
        assert_eq!(inbox.received_replies.len(), 1);
        assert_eq!(inbox.received_replies[0].from.uuid, Uuid(2));
    }
}
