use std::{cell::UnsafeCell, iter::repeat_with};

use crate::primitives::Semaphore;

/// Fixed-capacity slot array shared between one producer and one
/// consumer. `fillable` counts slots the producer may claim, `drainable`
/// slots the consumer may claim; a slot cell is touched only between the
/// matching acquire and release.
#[derive(Debug)]
pub struct Store {
    cells: Vec<UnsafeCell<f64>>,
    fillable: Semaphore,
    drainable: Semaphore,
}

impl Store {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: repeat_with(|| UnsafeCell::new(0.0)).take(capacity).collect(),
            fillable: Semaphore::new(capacity as u32),
            drainable: Semaphore::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Blocks until a slot is free to fill, then claims it.
    pub fn acquire_fillable(&self) {
        self.fillable.wait();
    }

    pub fn release_fillable(&self) {
        self.fillable.post();
    }

    /// Blocks until a slot is ready to drain, then claims it.
    pub fn acquire_drainable(&self) {
        self.drainable.wait();
    }

    pub fn release_drainable(&self) {
        self.drainable.post();
    }

    pub unsafe fn write(&self, index: usize, value: f64) {
        *self.cells[index].get() = value;
    }

    pub unsafe fn read(&self, index: usize) -> f64 {
        *self.cells[index].get()
    }
}

// A claimed index is touched by exactly one side at a time; the
// semaphore pair rules out concurrent access to the same cell.
unsafe impl Sync for Store {}

#[cfg(test)]
mod test {
    use std::{thread, time::Duration};

    use super::Store;

    #[test]
    fn starts_zeroed_with_all_slots_fillable() {
        let store = Store::new(4);
        assert_eq!(store.capacity(), 4);
        assert_eq!(store.fillable.value(), 4);
        assert_eq!(store.drainable.value(), 0);
        for index in 0..store.capacity() {
            assert_eq!(unsafe { store.read(index) }, 0.0);
        }
    }

    #[test]
    fn claims_move_counts_between_the_pair() {
        let store = Store::new(2);

        store.acquire_fillable();
        unsafe { store.write(0, 5.0) };
        store.release_drainable();
        assert_eq!(store.fillable.value(), 1);
        assert_eq!(store.drainable.value(), 1);

        store.acquire_drainable();
        assert_eq!(unsafe { store.read(0) }, 5.0);
        store.release_fillable();
        assert_eq!(store.fillable.value(), 2);
        assert_eq!(store.drainable.value(), 0);
    }

    #[test]
    fn drain_blocks_until_a_slot_is_filled() {
        let store = Store::new(1);
        let (tx, rx) = crossbeam_channel::bounded(1);

        thread::scope(|s| {
            s.spawn(|| {
                store.acquire_drainable();
                tx.send(unsafe { store.read(0) }).unwrap();
            });

            assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

            store.acquire_fillable();
            unsafe { store.write(0, 9.0) };
            store.release_drainable();
            assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 9.0);
        });
    }

    #[test]
    fn fill_blocks_while_every_slot_is_claimed() {
        let store = Store::new(1);
        store.acquire_fillable();

        let (tx, rx) = crossbeam_channel::bounded(1);
        thread::scope(|s| {
            s.spawn(|| {
                store.acquire_fillable();
                tx.send(()).unwrap();
            });

            assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());

            store.release_fillable();
            assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
        });
    }

    #[test]
    fn counters_stay_bounded_under_load() {
        const CAPACITY: usize = 4;
        const ROUNDS: usize = 400;

        let store = Store::new(CAPACITY);
        thread::scope(|s| {
            s.spawn(|| {
                let mut value = 0.0;
                for _ in 0..ROUNDS {
                    for index in 0..CAPACITY {
                        store.acquire_fillable();
                        value += 1.0;
                        unsafe { store.write(index, value) };
                        store.release_drainable();
                    }
                }
            });
            s.spawn(|| {
                let mut expected = 0.0;
                for _ in 0..ROUNDS {
                    for index in 0..CAPACITY {
                        store.acquire_drainable();
                        expected += 1.0;
                        assert_eq!(unsafe { store.read(index) }, expected);
                        store.release_fillable();
                    }
                }
            });

            // The two counts cannot be read as one snapshot, so only the
            // per-counter bounds are checked while the workers run.
            let bounds = 0..=CAPACITY as i32;
            for _ in 0..200 {
                assert!(bounds.contains(&store.fillable.value()));
                assert!(bounds.contains(&store.drainable.value()));
                thread::yield_now();
            }
        });

        assert_eq!(store.fillable.value(), CAPACITY as i32);
        assert_eq!(store.drainable.value(), 0);
    }
}
