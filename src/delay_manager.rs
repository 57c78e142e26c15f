use log::{debug, info};
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Something that can block the current thread for a while.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Real sleeper backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// `base` plus a random fraction of a second in `[0, 1)`.
pub fn jittered(base: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    base + Duration::from_secs_f64(rng.gen::<f64>())
}

pub fn retry_delay<S: Sleeper + ?Sized>(sleeper: &S, base: Duration) {
    let delay = jittered(base);
    info!("Waiting {:.2} seconds before retrying...", delay.as_secs_f64());
    sleeper.sleep(delay);
}

pub fn politeness_delay<S: Sleeper + ?Sized>(sleeper: &S, base: Duration) {
    let delay = jittered(base);
    debug!("Waiting {:.2} seconds (Politeness Delay)...", delay.as_secs_f64());
    sleeper.sleep(delay);
}
