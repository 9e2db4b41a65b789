//! Command-string tokenizing and handler lookup.
//!
//! Splits a leading `/command[@mention]` token from a message and resolves a
//! registered handler by command name. Invocation is left to the caller;
//! this module only decides *which* handler a message addresses.

use std::collections::HashMap;

/// A parsed `/command` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall<'a> {
    /// Leading token including the slash, e.g. `/start`.
    pub command: &'a str,
    /// Bot username after `@`, when the command was addressed explicitly.
    pub mention: Option<&'a str>,
    /// Whitespace-separated arguments after the command token.
    pub args: Vec<&'a str>,
}

/// Parse `text` as a command invocation. Returns `None` unless the text
/// starts with `/`.
pub fn parse(text: &str) -> Option<CommandCall<'_>> {
    if !text.starts_with('/') {
        return None;
    }
    let (token, rest) = match text.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest),
        None => (text, ""),
    };
    let (command, mention) = split_command(token);
    Some(CommandCall {
        command,
        mention,
        args: split_args(rest),
    })
}

/// Split `/command@bot` into the command and the optional mention.
fn split_command(token: &str) -> (&str, Option<&str>) {
    match token.split_once('@') {
        Some((command, mention)) => (command, Some(mention)),
        None => (token, None),
    }
}

/// Tokenize the remainder on whitespace.
fn split_args(rest: &str) -> Vec<&str> {
    rest.split_whitespace().collect()
}

/// Handler registry keyed by command name, generic over the handler type so
/// callers can store closures, `Arc`'d async fns, or plain enums.
pub struct Commands<H> {
    username: String,
    handlers: HashMap<String, H>,
}

impl<H> Commands<H> {
    /// `username` is the bot's own username, used to ignore commands
    /// explicitly addressed to other bots.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for `command` (including the leading slash).
    pub fn add(&mut self, command: impl Into<String>, handler: H) {
        self.handlers.insert(command.into(), handler);
    }

    /// Resolve the handler `text` addresses, if any. Commands mentioning a
    /// different bot are not ours to handle.
    pub fn lookup<'a>(&self, text: &'a str) -> Option<(&H, CommandCall<'a>)> {
        let call = parse(text)?;
        if let Some(mention) = call.mention {
            if mention != self.username {
                return None;
            }
        }
        let handler = self.handlers.get(call.command)?;
        Some((handler, call))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_without_mention() {
        assert_eq!(split_command("/command"), ("/command", None));
    }

    #[test]
    fn split_command_with_mention() {
        assert_eq!(split_command("/command@bot"), ("/command", Some("bot")));
    }

    #[test]
    fn split_args_cases() {
        assert_eq!(split_args(""), Vec::<&str>::new());
        assert_eq!(split_args("    "), Vec::<&str>::new());
        assert_eq!(split_args(" a  b   "), vec!["a", "b"]);
    }

    #[test]
    fn parse_plain_text_is_not_a_command() {
        assert_eq!(parse("hello"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn parse_command_with_args() {
        let call = parse("/greet@mybot Alice  Bob").unwrap();
        assert_eq!(call.command, "/greet");
        assert_eq!(call.mention, Some("mybot"));
        assert_eq!(call.args, vec!["Alice", "Bob"]);
    }

    #[test]
    fn parse_bare_command() {
        let call = parse("/start").unwrap();
        assert_eq!(call.command, "/start");
        assert_eq!(call.mention, None);
        assert!(call.args.is_empty());
    }

    #[test]
    fn lookup_respects_mentions() {
        let mut commands = Commands::new("mybot");
        commands.add("/start", 1);

        assert!(commands.lookup("/start").is_some());
        assert!(commands.lookup("/start@mybot").is_some());
        // Addressed to a different bot.
        assert!(commands.lookup("/start@otherbot").is_none());
        // Not registered.
        assert!(commands.lookup("/stop").is_none());
        // Not a command at all.
        assert!(commands.lookup("start").is_none());
    }

    #[test]
    fn lookup_returns_handler_and_args() {
        let mut commands = Commands::new("mybot");
        commands.add("/echo", "echo-handler");

        let (handler, call) = commands.lookup("/echo one two").unwrap();
        assert_eq!(*handler, "echo-handler");
        assert_eq!(call.args, vec!["one", "two"]);
    }
}
