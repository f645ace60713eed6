use thiserror::Error;

// Error type for the containment simulation.
#[derive(Error, Debug, Clone)]
pub enum ContainmentError {
    /// The adversary reached a gateway-adjacent position with no severable
    /// edge left to cut; escape can no longer be prevented.
    #[error("adversary breached containment at gateway {gateway}")]
    Breached { gateway: String },
}
