//! Helpers shared by unit tests

use std::thread;
use std::time::{Duration, Instant};

/// Poll `check` until it returns true or five seconds pass
pub fn wait_until(mut check: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if check() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}
