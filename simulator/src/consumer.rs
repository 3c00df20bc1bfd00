use std::thread;

use rand::Rng;
use shared::Store;

use crate::delay::DelayRange;
use crate::event::{Event, Role};

/// Drains every slot in order once per round.
pub fn consume(
    store: &Store,
    rounds: usize,
    delay: DelayRange,
    rng: &mut impl Rng,
    mut emit: impl FnMut(Event),
) {
    for round in 0..rounds {
        emit(Event::RoundStart { role: Role::Consumer, round });
        for index in 0..store.capacity() {
            store.acquire_drainable();
            // Safety: the drainable claim makes `index` exclusively ours
            // until release_fillable.
            let value = unsafe { store.read(index) };
            thread::sleep(delay.sample(rng));
            emit(Event::Transfer { role: Role::Consumer, index, value });
            store.release_fillable();
        }
    }
}
