/// Driver clock in milliseconds. Sampled when an action executes, not
/// when it was scheduled, so target expiry tracks real elapsed time.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}
