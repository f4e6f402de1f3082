use thiserror::Error;

use crate::LaneKind;

#[derive(Debug, Error)]
pub enum LaneError {
    /// A lane name that is neither `Self Service` nor `Regular <n>`.
    #[error("malformed lane name {0:?}: expected \"Regular <n>\" or \"Self Service\"")]
    MalformedLaneName(String),

    #[error("no lane named {0} in this store")]
    UnknownLane(LaneKind),

    #[error("{0} regular lanes requested, at most {max} are supported", max = u8::MAX)]
    TooManyRegularLanes(usize),
}

pub type LaneResult<T> = Result<T, LaneError>;
