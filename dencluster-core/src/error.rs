//! Error types for the dencluster core library.
//!
//! Every fallible surface reports one of the enums below. Each enum carries a
//! companion code type with stable, machine-readable identifiers so callers
//! can log or match on failures without depending on message wording.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::index::PointHandle;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::ClusterLabel`] state transitions.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LabelError {
    /// Advancing past `last` would collide with a reserved sentinel value.
    #[error("ran out of cluster identifiers after {last}; use a wider label type")]
    IdentifierExhausted {
        /// The last regular identifier that was handed out.
        last: u64,
    },
    /// The label was neither unclassified, noise, nor regular.
    #[error("label {raw} is not unclassified, noise, or a regular cluster")]
    InvariantViolation {
        /// Raw value carried by the offending label.
        raw: u64,
    },
}

define_error_codes! {
    /// Stable codes describing [`LabelError`] variants.
    enum LabelErrorCode for LabelError {
        /// Cluster identifier space exhausted.
        IdentifierExhausted => IdentifierExhausted { .. } => "LABEL_IDENTIFIER_EXHAUSTED",
        /// Label escaped its three legal categories.
        InvariantViolation => InvariantViolation { .. } => "LABEL_INVARIANT_VIOLATION",
    }
}

/// An error produced by [`crate::SpatialIndex`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum IndexError {
    /// The handle does not refer to a record held by the index.
    #[error("handle {handle} does not refer to an indexed point")]
    UnknownHandle {
        /// The handle that failed to resolve.
        handle: PointHandle,
    },
}

define_error_codes! {
    /// Stable codes describing [`IndexError`] variants.
    enum IndexErrorCode for IndexError {
        /// The handle does not refer to a record held by the index.
        UnknownHandle => UnknownHandle { .. } => "INDEX_UNKNOWN_HANDLE",
    }
}

/// An error produced while constructing a [`crate::Point`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PointError {
    /// A coordinate was NaN or infinite.
    #[error("coordinate on axis {axis} is not finite")]
    NonFinite {
        /// Zero-based axis of the offending coordinate.
        axis: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PointError`] variants.
    enum PointErrorCode for PointError {
        /// A coordinate was NaN or infinite.
        NonFinite => NonFinite { .. } => "POINT_NON_FINITE",
    }
}

/// Error type produced when configuring or running [`crate::Dbscan`] and the
/// k-distance estimator.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClusteringError {
    /// The neighbourhood radius must be finite and strictly positive.
    #[error("eps must be finite and greater than zero (got {eps})")]
    InvalidEps {
        /// The rejected radius, widened to `f64`.
        eps: f64,
    },
    /// `min_pts` must be at least one.
    #[error("min_pts must be at least 1 (got {got})")]
    InvalidMinPts {
        /// The rejected value.
        got: usize,
    },
    /// The k-distance estimator needs `k >= 1`.
    #[error("k must be at least 1 (got {got})")]
    InvalidK {
        /// The rejected value.
        got: usize,
    },
    /// A neighbourhood query did not return its own query point exactly once.
    #[error(
        "index `{index}` returned the query point {handle} {found} times; expected exactly once"
    )]
    SelfPointMissing {
        /// Name of the index that answered the query.
        index: Arc<str>,
        /// The query point.
        handle: PointHandle,
        /// How many entries matched the query point by identity.
        found: usize,
    },
    /// The cluster identifier space ran out mid-run.
    #[error("index `{index}` needs more clusters than the label type allows (last id {last})")]
    IdentifierExhausted {
        /// Name of the index being clustered.
        index: Arc<str>,
        /// The last identifier that was assigned.
        last: u64,
    },
    /// The index holds too few points for the requested `k`.
    #[error("index `{index}` has {points} points but k = {k} needs at least k + 1")]
    InsufficientNeighbors {
        /// Name of the index being measured.
        index: Arc<str>,
        /// Requested neighbour rank.
        k: usize,
        /// Number of points available.
        points: usize,
    },
    /// A label was found outside its legal categories.
    #[error("label {raw} is outside its legal categories")]
    InvariantViolation {
        /// Raw value carried by the offending label.
        raw: u64,
    },
    /// A [`crate::SpatialIndex`] operation failed during the run.
    #[error("index `{index}` failed: {error}")]
    Index {
        /// Name of the index that produced the error.
        index: Arc<str>,
        #[source]
        /// Underlying index error.
        error: IndexError,
    },
}

define_error_codes! {
    /// Stable codes describing [`ClusteringError`] variants.
    enum ClusteringErrorCode for ClusteringError {
        /// The neighbourhood radius must be finite and strictly positive.
        InvalidEps => InvalidEps { .. } => "DENCLUSTER_INVALID_EPS",
        /// `min_pts` must be at least one.
        InvalidMinPts => InvalidMinPts { .. } => "DENCLUSTER_INVALID_MIN_PTS",
        /// The k-distance estimator needs `k >= 1`.
        InvalidK => InvalidK { .. } => "DENCLUSTER_INVALID_K",
        /// A neighbourhood query did not return its own query point exactly once.
        SelfPointMissing => SelfPointMissing { .. } => "DENCLUSTER_SELF_POINT_MISSING",
        /// The cluster identifier space ran out mid-run.
        IdentifierExhausted => IdentifierExhausted { .. } => "DENCLUSTER_IDENTIFIER_EXHAUSTED",
        /// The index holds too few points for the requested `k`.
        InsufficientNeighbors => InsufficientNeighbors { .. } => "DENCLUSTER_INSUFFICIENT_NEIGHBORS",
        /// A label was found outside its legal categories.
        InvariantViolation => InvariantViolation { .. } => "DENCLUSTER_INVARIANT_VIOLATION",
        /// A spatial index operation failed during the run.
        IndexFailure => Index { .. } => "DENCLUSTER_INDEX_FAILURE",
    }
}

impl ClusteringError {
    /// Retrieve the inner [`IndexErrorCode`] when the error originated in a
    /// [`crate::SpatialIndex`].
    #[must_use]
    pub const fn index_code(&self) -> Option<IndexErrorCode> {
        match self {
            Self::Index { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn from_index(name: &str, error: IndexError) -> Self {
        Self::Index {
            index: Arc::from(name),
            error,
        }
    }

    pub(crate) fn from_label(name: &str, error: LabelError) -> Self {
        match error {
            LabelError::IdentifierExhausted { last } => Self::IdentifierExhausted {
                index: Arc::from(name),
                last,
            },
            LabelError::InvariantViolation { raw } => Self::InvariantViolation { raw },
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ClusteringError>;
