pub(crate) type Port = u16;

pub(crate) const DEFAULT_SERVER: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: Port = 12345;

// Wire literals. The separator sits between the display name and the line
// content; the announcement is the first payload of every session.
pub(crate) const SAYS_SEPARATOR: &str = " says: ";
pub(crate) const ANNOUNCE_TEXT: &str = "connected";

// Operator-facing notice on either closure path (probe failure or zero-byte
// read). Must stay distinguishable from the fault messages.
pub(crate) const SERVER_CLOSED_NOTICE: &str = "Server Closed";
