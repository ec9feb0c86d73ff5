/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Progress intended for whoever is running a sweep is sent as a [dispatch](crate::driver::Dispatch), not a log.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [generator](crate::generator)
    pub const GENERATION: &str = "generation";

    /// Logs related to the [network builder](crate::network)
    pub const NETWORK: &str = "network";

    /// Logs related to [tables](crate::table), e.g. files opened, rotated, and closed
    pub const TABLE: &str = "table";

    /// Logs related to [sweeps](crate::driver::Driver::sweep)
    pub const SWEEP: &str = "sweep";

    /// Logs related to [traces](crate::driver::Driver::trace)
    pub const TRACE: &str = "trace";
}
