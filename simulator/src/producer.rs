use std::thread;

use rand::Rng;
use shared::Store;

use crate::delay::DelayRange;
use crate::event::{Event, Role};

/// Fills every slot in order once per round, writing a counter that
/// keeps increasing across rounds (first value 1).
pub fn produce(
    store: &Store,
    rounds: usize,
    delay: DelayRange,
    rng: &mut impl Rng,
    mut emit: impl FnMut(Event),
) {
    let mut value = 0u64;
    for round in 0..rounds {
        emit(Event::RoundStart { role: Role::Producer, round });
        for index in 0..store.capacity() {
            store.acquire_fillable();
            thread::sleep(delay.sample(rng));
            value += 1;
            // Safety: the fillable claim makes `index` exclusively ours
            // until release_drainable.
            unsafe { store.write(index, value as f64) };
            emit(Event::Transfer { role: Role::Producer, index, value: value as f64 });
            store.release_drainable();
        }
    }
}
