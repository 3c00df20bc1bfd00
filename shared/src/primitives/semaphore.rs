use std::{cell::UnsafeCell, mem::MaybeUninit};

use libc::{c_int, sem_destroy, sem_getvalue, sem_init, sem_post, sem_t, sem_wait};

#[derive(Debug)]
pub struct Semaphore {
    inner: UnsafeCell<MaybeUninit<sem_t>>,
}

impl Semaphore {
    pub fn new(value: u32) -> Self {
        let inner = UnsafeCell::new(MaybeUninit::uninit());
        // pshared = 0: only ever shared between threads of this process.
        if unsafe { sem_init((*inner.get()).as_mut_ptr(), 0, value) } != 0 {
            panic!("failed to initialize semaphore");
        }
        Self { inner }
    }

    pub fn wait(&self) {
        if unsafe { sem_wait((*self.inner.get()).as_mut_ptr()) } != 0 {
            panic!("failed to wait for semaphore");
        }
    }

    pub fn post(&self) {
        if unsafe { sem_post((*self.inner.get()).as_mut_ptr()) } != 0 {
            panic!("failed to post semaphore");
        }
    }

    pub fn value(&self) -> c_int {
        let mut value: c_int = 0;
        if unsafe { sem_getvalue((*self.inner.get()).as_mut_ptr(), &mut value) } != 0 {
            panic!("failed to read semaphore value");
        }
        value
    }
}

unsafe impl Send for Semaphore {}
unsafe impl Sync for Semaphore {}

impl Drop for Semaphore {
    fn drop(&mut self) {
        if unsafe { sem_destroy((*self.inner.get()).as_mut_ptr()) } != 0 {
            panic!("failed to destroy semaphore");
        }
    }
}
