use crate::domain::types::MalformedInvocation;

pub fn config_loaded(user: &str, prefix: &str) -> String {
    format!("Loaded configuration for user: {user} (prefix {prefix:?})")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn commands_registered(count: usize, names: &[&str]) -> String {
    format!("Registered {count} commands: {}", names.join(", "))
}

pub const NO_COMMANDS: &str = "No commands registered; every addressed message will be rejected";

pub fn help_missing(prefix: &str, help: &str) -> String {
    format!("`{prefix}{help}` is not registered but unknown-command replies point to it")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn join_invite_fail(room: &str, err: &str) -> String {
    format!("Failed to join room {room} after invite: {err}")
}

pub fn malformed_invocation(kind: MalformedInvocation, content: &str) -> String {
    match kind {
        MalformedInvocation::NoArguments => {
            format!("extracting arguments: Failed to extract arguments from message: {content:?}")
        }
        MalformedInvocation::UnparsableCommand => {
            format!("Failed to extract the command from the message: {content:?}")
        }
    }
}

pub fn unknown_command(prefix: &str, command: &str) -> String {
    format!("called \"{prefix}{command}\": command \"{command}\" is not defined or not registered")
}

pub fn reaction_failed(err: &str) -> String {
    format!("Failed to attach reaction: {err}")
}

pub fn reply_failed(err: &str) -> String {
    format!("Failed to send reply: {err}")
}
