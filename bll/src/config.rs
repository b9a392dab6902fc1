//! Resting place for [Config] & friends


/// Configuration to dictate the tunable behaviors of the Business Logic Layer.\
/// The defaults are "fail-fast": any problem in the event feed aborts the processing.
pub struct Config {

    /// Log::warn! of any problems that were skipped during log processing.\
    /// Only meaningful if either [Self::stop_on_feed_errors] or [Self::stop_on_event_model_violations] are set to false,
    /// as, otherwise, the problems are propagated to the caller.
    pub log_issues: bool,

    /// If false, skip any event data feed errors -- such as IO errors or malformed log lines.\
    /// If true, causes the error to propagate and the processor to stop.
    pub stop_on_feed_errors: bool,

    /// If false, skip any events violating the event model -- such as `Kill`s out of a started game or naming unknown players.\
    /// If true, causes the error to propagate and the processor to stop.
    pub stop_on_event_model_violations: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: false,
            stop_on_feed_errors: true,
            stop_on_event_model_violations: true,
        }
    }
}
