//! File pager with a direct-mapped in-memory page cache.
//!
//! The database file is addressed in fixed 4096-byte pages. A page lives in
//! cache slot `page_number % CACHE_PAGES`; a conflicting resident page is
//! evicted (written back first if dirty) before the requested page is read
//! from disk. Reads hand out owned page copies; mutations go back through
//! [`Pager::write_page`], which writes through to disk.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

/// Size of a database page in bytes.
pub const PAGE_SIZE: usize = 4096;

/// Number of slots in the page cache.
pub const CACHE_PAGES: usize = 100;

/// Errors that can occur in pager operations.
#[derive(Debug, Error)]
pub enum PagerError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Page {page} out of bounds (file has {pages} pages)")]
  PageOutOfBounds { page: u32, pages: u32 },
}

/// An owned copy of one database page.
#[derive(Debug, Clone)]
pub struct Page {
  pub number: u32,
  pub dirty: bool,
  pub data: Vec<u8>,
}

impl Page {
  fn new(number: u32, data: Vec<u8>) -> Self {
    Self {
      number,
      dirty: false,
      data,
    }
  }
}

/// State of one cache slot.
#[derive(Debug, Clone, Copy, Default)]
struct CacheSlot {
  page_number: u32,
  dirty: bool,
  valid: bool,
}

/// Pager over a single database file.
#[derive(Debug)]
pub struct Pager {
  file: File,
  cache: Vec<u8>,
  slots: Vec<CacheSlot>,
  page_count: u32,
  cache_hits: u64,
}

impl Pager {
  /// Open an existing database file read/write.
  ///
  /// The page count is derived from the file length, rounding a trailing
  /// partial page up.
  pub fn open(path: &Path) -> Result<Self, PagerError> {
    let file = OpenOptions::new().read(true).write(true).open(path)?;
    let file_size = file.metadata()?.len();
    let page_count = file_size.div_ceil(PAGE_SIZE as u64) as u32;
    debug!(path = %path.display(), pages = page_count, "opened database file");

    Ok(Self {
      file,
      cache: vec![0u8; PAGE_SIZE * CACHE_PAGES],
      slots: vec![CacheSlot::default(); CACHE_PAGES],
      page_count,
      cache_hits: 0,
    })
  }

  /// Number of pages in the file
  pub fn page_count(&self) -> u32 {
    self.page_count
  }

  /// Number of reads served from the cache
  pub fn cache_hits(&self) -> u64 {
    self.cache_hits
  }

  /// Fetch a page, via the cache.
  ///
  /// Returns an owned clean copy of the page data; mutations are applied by
  /// marking the copy dirty and passing it to [`Pager::write_page`].
  pub fn get_page(&mut self, page_number: u32) -> Result<Page, PagerError> {
    if page_number >= self.page_count {
      return Err(PagerError::PageOutOfBounds {
        page: page_number,
        pages: self.page_count,
      });
    }

    let index = page_number as usize % CACHE_PAGES;
    if self.slots[index].valid && self.slots[index].page_number != page_number {
      self.evict_slot(index)?;
    }

    if self.slots[index].valid {
      self.cache_hits += 1;
    } else {
      self.read_into_slot(page_number, index)?;
      self.slots[index] = CacheSlot {
        page_number,
        dirty: false,
        valid: true,
      };
    }

    let data = self.slot_data(index).to_vec();
    Ok(Page::new(page_number, data))
  }

  /// Write a dirty page through the cache to disk.
  ///
  /// Clean pages are ignored. The page's cache slot is updated and marked
  /// clean, then the data is written at the page's file offset.
  pub fn write_page(&mut self, page: &Page) -> Result<(), PagerError> {
    if !page.dirty {
      return Ok(());
    }

    let index = page.number as usize % CACHE_PAGES;
    let start = index * PAGE_SIZE;
    let len = page.data.len().min(PAGE_SIZE);
    self.cache[start..start + len].copy_from_slice(&page.data[..len]);
    self.slots[index] = CacheSlot {
      page_number: page.number,
      dirty: false,
      valid: true,
    };

    self.file.seek(SeekFrom::Start(page.number as u64 * PAGE_SIZE as u64))?;
    self.file.write_all(&self.cache[start..start + PAGE_SIZE])?;
    Ok(())
  }

  /// Flush a page's cache slot to disk and sync the file.
  ///
  /// Out-of-range page numbers are ignored.
  pub fn flush(&mut self, page_number: u32) -> Result<(), PagerError> {
    if page_number >= self.page_count {
      return Ok(());
    }

    let index = page_number as usize % CACHE_PAGES;
    self.write_slot(index, page_number)?;
    self.slots[index].dirty = false;
    self.file.flush()?;
    Ok(())
  }

  /// Write back a dirty resident page and invalidate its slot.
  fn evict_slot(&mut self, index: usize) -> Result<(), PagerError> {
    let slot = self.slots[index];
    if slot.valid && slot.dirty {
      debug!(page = slot.page_number, "evicting dirty page");
      self.write_slot(index, slot.page_number)?;
    }
    self.slots[index].valid = false;
    self.slots[index].dirty = false;
    Ok(())
  }

  fn read_into_slot(&mut self, page_number: u32, index: usize) -> Result<(), PagerError> {
    let start = index * PAGE_SIZE;
    self.cache[start..start + PAGE_SIZE].fill(0);

    self.file.seek(SeekFrom::Start(page_number as u64 * PAGE_SIZE as u64))?;
    // A trailing partial page reads short; the slot stays zero-padded.
    let mut filled = 0;
    loop {
      let read = self.file.read(&mut self.cache[start + filled..start + PAGE_SIZE])?;
      if read == 0 {
        break;
      }
      filled += read;
      if filled == PAGE_SIZE {
        break;
      }
    }
    Ok(())
  }

  fn write_slot(&mut self, index: usize, page_number: u32) -> Result<(), PagerError> {
    let start = index * PAGE_SIZE;
    self.file.seek(SeekFrom::Start(page_number as u64 * PAGE_SIZE as u64))?;
    self.file.write_all(&self.cache[start..start + PAGE_SIZE])?;
    Ok(())
  }

  fn slot_data(&self, index: usize) -> &[u8] {
    let start = index * PAGE_SIZE;
    &self.cache[start..start + PAGE_SIZE]
  }
}
