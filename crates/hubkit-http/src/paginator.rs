//! Cursor-following pagination.

use hubkit_core::{ListOptions, Page, ResourceType, Result, Transport};
use tracing::warn;

use crate::resources::ResourceClient;

/// Walks the pages of a list call.
///
/// The first request uses the caller's options as-is; each following request
/// carries the `after` cursor from the previous page verbatim. Iteration ends
/// as soon as a page arrives without a next cursor, or with the same cursor
/// that was just sent.
pub struct Paginator<'a, T> {
    client: &'a ResourceClient<T>,
    resource: &'a ResourceType,
    options: ListOptions,
    pages_fetched: usize,
    done: bool,
}

impl<'a, T: Transport> Paginator<'a, T> {
    pub(crate) fn new(
        client: &'a ResourceClient<T>,
        resource: &'a ResourceType,
        options: ListOptions,
    ) -> Self {
        Self {
            client,
            resource,
            options,
            pages_fetched: 0,
            done: false,
        }
    }

    /// Fetch the next page, or `None` once the last page has been returned.
    pub async fn next_page(&mut self) -> Result<Option<Page>> {
        if self.done {
            return Ok(None);
        }

        let page = self.client.list(self.resource, &self.options).await?;
        self.pages_fetched += 1;

        match page.next_cursor() {
            Some(after) if self.options.after.as_deref() == Some(after) => {
                warn!(after, "Server repeated the cursor it was sent; stopping");
                self.done = true;
            }
            Some(after) => self.options.after = Some(after.to_string()),
            None => self.done = true,
        }

        Ok(Some(page))
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Cursor the next request will send, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.options.after.as_deref()
    }
}
