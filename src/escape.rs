//! Escaping for Ex command arguments.
//!
//! Commands like `:e` and `:!` split their argument on whitespace, so a file
//! named `a b` has to be written `a\ b`:
//!
//! ```vim
//! :!touch a\ b   " creates 'a b'
//! :e a\ b        " ':e a b' would not work
//! ```

/// Escape spaces, double quotes and single quotes with a backslash.
///
/// Nothing else is touched; in particular existing backslashes are kept as-is.
pub fn escape_for_command(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if matches!(ch, ' ' | '"' | '\'') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
