use thiserror::Error;

use fraglen_core::errors::DistributionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KdeError {
    #[error("kernel bandwidth is zero: every observation has the same value")]
    ZeroBandwidth,

    #[error(transparent)]
    Distribution(#[from] DistributionError),
}
