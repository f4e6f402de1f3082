use checkout_core::CoreError;
use checkout_lane::LaneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("lane setup error: {0}")]
    Lane(#[from] LaneError),

    #[error("simulation already stopped after {0} intervals")]
    AlreadyStopped(u64),
}

pub type SimResult<T> = Result<T, SimError>;
