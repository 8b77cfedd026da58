use std::{
    num::NonZeroU64,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique identifier attached to every [`InputItem`][crate::InputItem].
///
/// Ids are how callers associate placements in a pack result back to their
/// own objects; Packtree never holds onto anything else from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(NonZeroU64);

impl Id {
    pub(crate) fn new() -> Self {
        let value = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        Id(NonZeroU64::new(value).unwrap())
    }
}
