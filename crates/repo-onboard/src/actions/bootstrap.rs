/// Startup sequence actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Application started: detect the session and start forwarding form
    /// snapshots
    Start,
}
