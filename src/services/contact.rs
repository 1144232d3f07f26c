use std::fmt;
use std::str::FromStr;

use leptos::logging::debug_warn;
use thiserror::Error;

use crate::services::host::Navigator;

pub const CHAT_URI: &str = "https://wa.me/6598346866";
pub const MAIL_URI: &str = "mailto:Leonard.koo.automateworkflows@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("unknown contact channel: {0:?}")]
    UnknownChannel(String),
}

/// Where a contact request is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// WhatsApp chat, opened in a new tab.
    Chat,
    /// Mail client, via the current tab.
    Mail,
}

impl Channel {
    pub fn uri(&self) -> &'static str {
        match self {
            Channel::Chat => CHAT_URI,
            Channel::Mail => MAIL_URI,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Chat => "chat",
            Channel::Mail => "mail",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(Channel::Chat),
            "mail" => Ok(Channel::Mail),
            other => Err(ContactError::UnknownChannel(other.to_string())),
        }
    }
}

/// Sends the user to `channel`. Host failures are logged and dropped; the
/// browser shows its own error if it has one.
pub fn dispatch<N: Navigator + ?Sized>(navigator: &N, channel: Channel) {
    let result = match channel {
        Channel::Chat => navigator.open_in_new_context(channel.uri()),
        Channel::Mail => navigator.navigate(channel.uri()),
    };
    if let Err(err) = result {
        debug_warn!("contact via {channel} failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CONTACT_EMAIL;
    use crate::services::host::HostError;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Open(String),
        Navigate(String),
    }

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<Call>>,
        fail: bool,
    }

    impl Navigator for RecordingNavigator {
        fn open_in_new_context(&self, uri: &str) -> Result<(), HostError> {
            self.calls.borrow_mut().push(Call::Open(uri.to_string()));
            if self.fail {
                return Err(HostError::PopupBlocked);
            }
            Ok(())
        }

        fn navigate(&self, uri: &str) -> Result<(), HostError> {
            self.calls.borrow_mut().push(Call::Navigate(uri.to_string()));
            if self.fail {
                return Err(HostError::NoWindow);
            }
            Ok(())
        }
    }

    #[test]
    fn chat_opens_whatsapp_in_new_context() {
        let nav = RecordingNavigator::default();
        dispatch(&nav, Channel::Chat);
        assert_eq!(
            *nav.calls.borrow(),
            vec![Call::Open("https://wa.me/6598346866".into())]
        );
    }

    #[test]
    fn mail_navigates_to_mailto() {
        let nav = RecordingNavigator::default();
        dispatch(&nav, Channel::Mail);
        assert_eq!(
            *nav.calls.borrow(),
            vec![Call::Navigate(
                "mailto:Leonard.koo.automateworkflows@gmail.com".into()
            )]
        );
    }

    #[test]
    fn host_failure_is_swallowed() {
        let nav = RecordingNavigator {
            fail: true,
            ..Default::default()
        };
        dispatch(&nav, Channel::Chat);
        dispatch(&nav, Channel::Mail);
        assert_eq!(nav.calls.borrow().len(), 2);
    }

    #[test]
    fn channel_parsing() {
        assert_eq!("chat".parse::<Channel>(), Ok(Channel::Chat));
        assert_eq!("mail".parse::<Channel>(), Ok(Channel::Mail));
        assert_eq!(
            "whatsapp".parse::<Channel>(),
            Err(ContactError::UnknownChannel("whatsapp".into()))
        );
        assert!("".parse::<Channel>().is_err());
    }

    #[test]
    fn mail_uri_targets_the_listed_address() {
        assert_eq!(MAIL_URI.strip_prefix("mailto:"), Some(CONTACT_EMAIL));
    }
}
