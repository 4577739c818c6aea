use crate::models::Id;

/// Per-collection id counter. The first id handed out is 1 and ids are
/// never reused.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: Id,
}

impl IdAllocator {
    pub fn next(&mut self) -> Id {
        self.last += 1;
        self.last
    }
}
