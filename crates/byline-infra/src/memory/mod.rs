//! In-memory repositories - used as fallback when no database is configured.
//!
//! Same contract as the SeaORM repositories: sequential ids starting at 1,
//! storage-owned timestamps and a unique author name. Data is lost on process
//! restart.

mod author;
mod post;

pub use author::InMemoryAuthorRepository;
pub use post::InMemoryPostRepository;

use std::collections::BTreeMap;

/// Rows keyed by id plus the next id to hand out.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests;
