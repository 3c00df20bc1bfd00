mod semaphore;

pub use semaphore::*;
