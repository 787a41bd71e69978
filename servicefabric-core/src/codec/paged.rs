//! Generic wrapper for paged list responses.

use super::object::{
    read_field, read_object, skip_unknown_property, write_field, write_object,
    write_optional_field, JsonObject,
};
use super::traits::DtoType;
use super::{JsonDecode, JsonEncode, JsonRead, JsonWrite};
use crate::error::Result;

const CONTINUATION_TOKEN: &str = "ContinuationToken";
const ITEMS: &str = "Items";

/// One page of a list result: the items plus the token for the next page.
///
/// Property names are matched exactly, like every other object.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    /// Token to pass back for the next page; absent or empty on the last page.
    pub continuation_token: Option<String>,
    /// Items on this page.
    pub items: Vec<T>,
}

impl<T> PagedList<T> {
    /// Creates a page.
    pub fn new(items: Vec<T>, continuation_token: Option<String>) -> Self {
        Self {
            continuation_token,
            items,
        }
    }

    /// Returns `true` if the server has more results.
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Returns the number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the page and returns its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            continuation_token: None,
            items: Vec::new(),
        }
    }
}

impl<T> DtoType for PagedList<T> {
    const TYPE_NAME: &'static str = "PagedList";
}

impl<T: JsonDecode + JsonEncode> JsonObject for PagedList<T> {
    fn read_fields(reader: &mut dyn JsonRead) -> Result<Self> {
        let mut page = Self::default();
        while let Some(name) = reader.next_property()? {
            match name.as_str() {
                CONTINUATION_TOKEN => page.continuation_token = JsonDecode::decode(reader)?,
                ITEMS => page.items = read_field(reader)?.unwrap_or_default(),
                _ => skip_unknown_property(reader, Self::TYPE_NAME, &name)?,
            }
        }
        Ok(page)
    }

    fn write_fields(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        write_optional_field(writer, CONTINUATION_TOKEN, &self.continuation_token)?;
        write_field(writer, ITEMS, &self.items)
    }
}

impl<T: JsonDecode + JsonEncode> JsonDecode for PagedList<T> {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        read_object(reader)
    }
}

impl<T: JsonDecode + JsonEncode> JsonEncode for PagedList<T> {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        write_object(self, writer)
    }
}
