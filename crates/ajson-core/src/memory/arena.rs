//! Reusable bump arena backing parser allocations
//!
//! Parsing a document performs many small allocations: one per decoded
//! string, one per container backing slice. Routing them through a single
//! pre-sized region amortizes allocator traffic and keeps a whole tree in one
//! contiguous block. There is no per-object deallocation; `clear` resets the
//! cursor in O(1), which is correct because every substructure of a parsed
//! document shares one lifetime.
//!
//! `clear` takes `&mut self`, so an [`ArenaValue`](crate::value::ArenaValue)
//! still borrowing the arena makes the reset a compile error rather than a
//! use-after-clear hazard.

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// Strictest alignment the arena serves; covers every type the parser stores
const MAX_ALIGN: usize = 16;

/// Fixed-capacity bump allocator with bulk reset
#[derive(Debug)]
pub struct Arena {
    base: NonNull<u8>,
    capacity: usize,
    used: Cell<usize>,
    allocations: Cell<u64>,
}

/// Snapshot of arena usage counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaStats {
    /// Bytes handed out since the last clear, including alignment padding
    pub used_bytes: usize,
    /// Total capacity fixed at construction
    pub capacity_bytes: usize,
    /// Allocations served since the last clear
    pub allocations: u64,
}

impl Arena {
    /// Create an arena with the given fixed byte capacity.
    ///
    /// Fails with `InvalidConfiguration` when `capacity_bytes` is zero.
    pub fn with_capacity(capacity_bytes: usize) -> Result<Self> {
        if capacity_bytes == 0 {
            return Err(Error::invalid_configuration(
                "arena capacity must be greater than zero",
            ));
        }
        let layout = Layout::from_size_align(capacity_bytes, MAX_ALIGN)
            .map_err(|_| Error::invalid_configuration("arena capacity too large"))?;

        // SAFETY: layout has non-zero size, checked above.
        let raw = unsafe { alloc::alloc(layout) };
        let base = NonNull::new(raw).unwrap_or_else(|| alloc::handle_alloc_error(layout));

        Ok(Self {
            base,
            capacity: capacity_bytes,
            used: Cell::new(0),
            allocations: Cell::new(0),
        })
    }

    /// Hand out a zeroed region of `size` bytes aligned to `align`.
    ///
    /// Advances the internal cursor; fails with `ArenaExhausted` when the
    /// remaining capacity cannot satisfy the request. No partial allocation
    /// takes place on failure. `align` must be a power of two no larger than
    /// 16, else the call fails with `InvalidConfiguration`.
    pub fn alloc(&self, size: usize, align: usize) -> Result<NonNull<u8>> {
        if !align.is_power_of_two() || align > MAX_ALIGN {
            return Err(Error::invalid_configuration(format!(
                "unsupported allocation alignment: {align}"
            )));
        }

        let used = self.used.get();
        let offset = match used.checked_add(align - 1) {
            Some(bumped) => bumped & !(align - 1),
            None => {
                return Err(Error::ArenaExhausted {
                    requested: size,
                    remaining: self.capacity - used,
                });
            }
        };
        let end = offset.checked_add(size).filter(|&end| end <= self.capacity);
        let Some(end) = end else {
            return Err(Error::ArenaExhausted {
                requested: size,
                remaining: self.capacity - used,
            });
        };

        // SAFETY: offset..end lies inside the region allocated in
        // `with_capacity`, and the cursor discipline means no live reference
        // overlaps it.
        let ptr = unsafe {
            let ptr = self.base.as_ptr().add(offset);
            ptr.write_bytes(0, size);
            NonNull::new_unchecked(ptr)
        };

        self.used.set(end);
        self.allocations.set(self.allocations.get() + 1);
        Ok(ptr)
    }

    /// Copy `text` into the arena and return it with the arena's lifetime
    pub fn alloc_str<'a>(&'a self, text: &str) -> Result<&'a str> {
        if text.is_empty() {
            return Ok("");
        }
        let ptr = self.alloc(text.len(), 1)?;
        // SAFETY: the region is fresh, non-overlapping with `text`, and
        // exactly `text.len()` bytes; the bytes copied are valid UTF-8.
        unsafe {
            ptr.as_ptr()
                .copy_from_nonoverlapping(text.as_ptr(), text.len());
            let slice = std::slice::from_raw_parts(ptr.as_ptr(), text.len());
            Ok(std::str::from_utf8_unchecked(slice))
        }
    }

    /// Copy a slice of `Copy` values into the arena
    pub fn alloc_slice_copy<'a, T: Copy>(&'a self, values: &[T]) -> Result<&'a [T]> {
        if values.is_empty() {
            return Ok(&[]);
        }
        let layout = Layout::array::<T>(values.len())
            .map_err(|_| Error::invalid_configuration("slice allocation too large"))?;
        let ptr = self.alloc(layout.size(), layout.align())?.cast::<T>();
        // SAFETY: the region is fresh, correctly aligned for T and sized for
        // `values.len()` elements; T: Copy so a byte copy is a valid value.
        unsafe {
            ptr.as_ptr()
                .copy_from_nonoverlapping(values.as_ptr(), values.len());
            Ok(std::slice::from_raw_parts(ptr.as_ptr(), values.len()))
        }
    }

    /// Reset the cursor to zero, invalidating every previous allocation.
    ///
    /// Memory is neither zeroed nor unmapped. Taking `&mut self` means any
    /// value still borrowing the arena must be dropped first; the borrow
    /// checker enforces the reuse contract.
    pub fn clear(&mut self) {
        tracing::debug!(
            used_bytes = self.used.get(),
            allocations = self.allocations.get(),
            "arena cleared"
        );
        self.used.set(0);
        self.allocations.set(0);
    }

    /// Bytes handed out since construction or the last clear
    pub fn used_bytes(&self) -> usize {
        self.used.get()
    }

    /// Fixed capacity chosen at construction
    pub fn capacity_bytes(&self) -> usize {
        self.capacity
    }

    /// Bytes still available before exhaustion
    pub fn remaining_bytes(&self) -> usize {
        self.capacity - self.used.get()
    }

    /// Snapshot of the usage counters
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            used_bytes: self.used.get(),
            capacity_bytes: self.capacity,
            allocations: self.allocations.get(),
        }
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        // SAFETY: base/capacity describe the exact layout allocated in
        // `with_capacity`, and it is released exactly once.
        unsafe {
            let layout = Layout::from_size_align_unchecked(self.capacity, MAX_ALIGN);
            alloc::dealloc(self.base.as_ptr(), layout);
        }
    }
}

// SAFETY: the arena exclusively owns its region; moving it across threads is
// fine. The `Cell` cursor keeps it !Sync, matching the sequential-use
// contract.
unsafe impl Send for Arena {}
