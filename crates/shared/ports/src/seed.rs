/// Port for random seed provisioning
///
/// Every generator in the simulation is built from a seed handed out by a
/// `SeedSource`. This allows the runner to use:
/// - OS entropy for real demonstrations
/// - A fixed seed for deterministic tests
/// - A derived sequence for independent per-worker streams
pub trait SeedSource: Send + Sync {
    /// Hand out the next seed
    fn next_seed(&self) -> u64;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "SeedSource"
    }
}
