use crate::protocol::enums::request_tag::RequestTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingRequestTag,
    Dispatching(RequestTag),
    Closed,
}
