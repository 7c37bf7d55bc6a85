use crate::consts::{ANNOUNCE_TEXT, SAYS_SEPARATOR};

// Outgoing payload construction. Everything the client puts on the wire is
// built here so the attribution format lives in exactly one place.

// The attribution prefix prepended to every outgoing line.
pub(crate) fn says_prefix(name: &str) -> String {
    format!("{name}{SAYS_SEPARATOR}")
}

// Builds the payload for one line of operator input. The composed string is
// trimmed as a whole, matching the send-side convention: trailing newline and
// surrounding whitespace are stripped, interior whitespace is preserved.
pub(crate) fn outgoing(name: &str, line: &str) -> String {
    format!("{}{line}", says_prefix(name)).trim().to_string()
}

// The first payload of every session, sent once right after connecting.
pub(crate) fn announcement(name: &str) -> String {
    format!("{}{ANNOUNCE_TEXT}", says_prefix(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outgoing_prefixes_name() {
        assert_eq!(outgoing("Alice", "hello"), "Alice says: hello");
    }

    #[test]
    fn outgoing_strips_trailing_whitespace() {
        assert_eq!(outgoing("Alice", "hello  \n"), "Alice says: hello");
    }

    #[test]
    fn outgoing_keeps_interior_whitespace() {
        assert_eq!(outgoing("Alice", "  spaced  out"), "Alice says:   spaced  out");
    }

    #[test]
    fn outgoing_empty_line_sends_bare_prefix() {
        assert_eq!(outgoing("Alice", ""), "Alice says:");
    }

    #[test]
    fn announcement_payload() {
        assert_eq!(announcement("Alice"), "Alice says: connected");
    }
}
