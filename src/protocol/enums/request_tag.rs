/// First part of every request cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTag {
    /// Announce many hashes at once. Payload: array of integers.
    Store,
    /// Announce one hash. Payload: integer.
    Create,
    /// Withdraw one hash. Payload: integer.
    Delete,
    /// Look up the holders of one hash. Payload: integer. Answered.
    Query,
    /// Anything else; its payload frame is skipped.
    Unknown(String),
}
