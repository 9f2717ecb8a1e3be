use std::fmt;
use crate::protocol::enums::request_tag::RequestTag;

impl RequestTag {
    pub fn parse(tag: &str) -> RequestTag
    {
        match tag {
            "store" => RequestTag::Store,
            "create" => RequestTag::Create,
            "delete" => RequestTag::Delete,
            "query" => RequestTag::Query,
            _ => RequestTag::Unknown(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str
    {
        match self {
            RequestTag::Store => "store",
            RequestTag::Create => "create",
            RequestTag::Delete => "delete",
            RequestTag::Query => "query",
            RequestTag::Unknown(tag) => tag.as_str(),
        }
    }

    pub fn is_known(&self) -> bool
    {
        !matches!(self, RequestTag::Unknown(_))
    }
}

impl From<&str> for RequestTag {
    fn from(tag: &str) -> Self {
        RequestTag::parse(tag)
    }
}

impl fmt::Display for RequestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
