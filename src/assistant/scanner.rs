use std::time::Duration;

use rand::Rng;

const MIN_CODE: u64 = 1_000_000_000_000;
const MAX_CODE: u64 = 9_999_999_999_999;

/// Pretends to read a barcode: waits for the configured delay, then yields a random
/// 13-digit code.
#[derive(Clone, Debug)]
pub struct SimulatedScanner {
    delay: Duration,
}

impl SimulatedScanner {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn scan(&self) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let code = rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE);
        code.to_string()
    }
}
