/// Wall-clock source, in milliseconds since the Unix epoch (UTC).
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;
}
