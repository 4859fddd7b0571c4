use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::telegram::objects::{Message, ParseMode, Update, User};
use crate::transport::ChatId;

/// Timeout for every call that does not long-poll.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Telegram bot API method.
pub trait Method: Serialize + Sync {
    /// Method name.
    const NAME: &'static str;

    type Response: DeserializeOwned + Send;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }
}

/// A simple method for testing your bot's authentication token.
///
/// See also: <https://core.telegram.org/bots/api#getme>.
#[derive(Serialize)]
#[must_use]
pub struct GetMe {}

impl Method for GetMe {
    const NAME: &'static str = "getMe";

    type Response = User;
}

/// [Update][1] types that the client wants to listen to.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Copy, Clone, Serialize)]
pub enum AllowedUpdate {
    #[serde(rename = "message")]
    Message,
}

/// Use this method to receive incoming updates using long polling.
///
/// Returns an `Array` of `Update` objects.
#[derive(Serialize)]
#[must_use]
pub struct GetUpdates {
    /// Identifier of the first update to be returned.
    ///
    /// A negative offset returns updates from the end of the queue and forgets all earlier ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Timeout in seconds for long polling.
    ///
    /// Defaults to 0, i.e. usual short polling.
    #[serde(rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<AllowedUpdate>>,
}

impl Method for GetUpdates {
    const NAME: &'static str = "getUpdates";

    type Response = Vec<Update>;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT + Duration::from_secs(self.timeout_secs.unwrap_or_default())
    }
}

/// [Send a message][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmessage
#[derive(Serialize)]
#[must_use]
pub struct SendMessage<'a> {
    pub chat_id: ChatId,
    pub text: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

impl Method for SendMessage<'_> {
    const NAME: &'static str = "sendMessage";
    type Response = Message;
}

/// [Edit the text][1] of a message sent by the bot.
///
/// [1]: https://core.telegram.org/bots/api#editmessagetext
#[derive(Serialize)]
#[must_use]
pub struct EditMessageText<'a> {
    pub chat_id: ChatId,
    pub message_id: i64,
    pub text: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

impl Method for EditMessageText<'_> {
    const NAME: &'static str = "editMessageText";
    type Response = Message;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_updates_timeout_covers_long_poll() {
        let method = GetUpdates {
            offset: Some(7),
            timeout_secs: Some(30),
            allowed_updates: None,
        };
        assert_eq!(method.timeout(), Duration::from_secs(40));
    }

    #[test]
    fn test_get_updates_serialization() {
        let method = GetUpdates {
            offset: Some(-1),
            timeout_secs: None,
            allowed_updates: Some(vec![AllowedUpdate::Message]),
        };
        assert_eq!(
            serde_json::to_string(&method).unwrap(),
            r#"{"offset":-1,"allowed_updates":["message"]}"#
        );
    }

    #[test]
    fn test_edit_message_serialization() {
        let method = EditMessageText {
            chat_id: 1001,
            message_id: 55,
            text: "*done*",
            parse_mode: Some(ParseMode::Markdown),
        };
        assert_eq!(
            serde_json::to_string(&method).unwrap(),
            r#"{"chat_id":1001,"message_id":55,"text":"*done*","parse_mode":"Markdown"}"#
        );
    }

    #[test]
    fn test_get_me_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&GetMe {}).unwrap(), "{}");
    }
}
