//! Storage back end: the file pager and its page cache.

pub mod pager;
