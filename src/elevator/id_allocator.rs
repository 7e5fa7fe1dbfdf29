/**
 * Hands out elevator ids in creation order.
 *
 * Ids only ever grow, so elevators of a rebuilt building never reuse the ids of the
 * building they replace as long as both were built from the same allocator.
 */
#[derive(Debug, Default)]
pub struct ElevatorIdAllocator {
    next_id: usize,
}

impl ElevatorIdAllocator {
    pub fn new() -> ElevatorIdAllocator {
        ElevatorIdAllocator { next_id: 0 }
    }

    pub fn allocate(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next call to `allocate` will return.
    pub fn peek(&self) -> usize {
        self.next_id
    }
}
