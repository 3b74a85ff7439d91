pub mod place_refresh {
    /// Nightly, outside peak traffic
    pub const CRON_EXPRESSION: &str = "0 30 4 * * *";
    /// Place details older than this are considered stale
    pub const STALE_AFTER_HOURS: i64 = 24 * 7;
    /// Max places refreshed per run, bounding mapping API usage
    pub const BATCH_LIMIT: u64 = 50;
}
