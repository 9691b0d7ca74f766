//! # Help Text
//!
//! Displayed to the user via the `help` command.

pub fn main(prefix: &str) -> String {
    format!(
        concat!(
            "**🤖 CS Bot Help**\n",
            "Use: `{p}command` _args_\n",
            "\n",
            "**⚡ Commands**\n",
            "* `{p}help`: Show this message\n",
        ),
        p = prefix
    )
}
