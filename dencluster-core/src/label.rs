//! Cluster identity state machine.
//!
//! A [`ClusterLabel`] wraps an unsigned integer and reserves the two largest
//! values of its range as sentinels: `MAX` means the point has not been
//! visited yet and `MAX - 1` marks it as noise. Every other value, starting at
//! `MIN`, is a regular cluster identifier.

use core::{fmt, hash::Hash};

use crate::error::LabelError;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types usable as the raw storage of a [`ClusterLabel`].
///
/// The trait is sealed; it is implemented for `u8`, `u16`, `u32`, `u64`, and
/// `usize`. Narrower widths keep records small but run out of identifiers
/// sooner.
pub trait LabelWidth:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + sealed::Sealed
{
    /// Raw value reserved for points that have not been visited.
    const UNCLASSIFIED: Self;
    /// Raw value reserved for noise points.
    const NOISE: Self;
    /// Raw value of the first regular cluster.
    const CLUSTER0: Self;

    /// Returns `self + 1`, or `None` on integer overflow.
    fn checked_next(self) -> Option<Self>;

    /// Widens the raw value for diagnostics.
    fn widen(self) -> u64;
}

macro_rules! impl_label_width {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl LabelWidth for $ty {
                const UNCLASSIFIED: Self = <$ty>::MAX;
                const NOISE: Self = <$ty>::MAX - 1;
                const CLUSTER0: Self = <$ty>::MIN;

                #[inline]
                fn checked_next(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn widen(self) -> u64 {
                    u64::try_from(self).unwrap_or(u64::MAX)
                }
            }
        )+
    };
}

impl_label_width!(u8, u16, u32, u64, usize);

/// Category a [`ClusterLabel`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind<T> {
    /// Not yet visited by the current run.
    Unclassified,
    /// Visited, but not density-reachable from any core point so far.
    Noise,
    /// Member of the cluster with this identifier.
    Regular(T),
}

/// Cluster membership of a single point.
///
/// Ordering and equality follow the raw integer, so noise and unclassified
/// labels sort after every regular identifier.
///
/// # Examples
/// ```
/// use dencluster_core::ClusterLabel;
///
/// let first = ClusterLabel::<u16>::default().next_valid_cluster_id()?;
/// assert_eq!(first, ClusterLabel::CLUSTER0);
/// assert_eq!(first.next_valid_cluster_id()?.to_text()?, "1");
/// assert_eq!(ClusterLabel::<u16>::NOISE.to_string(), "Noise");
/// # Ok::<(), dencluster_core::LabelError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterLabel<T: LabelWidth = u32>(T);

impl<T: LabelWidth> ClusterLabel<T> {
    /// Label carried by points that have not been visited.
    pub const UNCLASSIFIED: Self = Self(T::UNCLASSIFIED);
    /// Label carried by noise points.
    pub const NOISE: Self = Self(T::NOISE);
    /// The first regular cluster.
    pub const CLUSTER0: Self = Self(T::CLUSTER0);

    /// Wraps a raw value without validation.
    ///
    /// Passing a sentinel value yields the corresponding sentinel label.
    #[must_use]
    pub const fn from_raw(raw: T) -> Self {
        Self(raw)
    }

    /// Builds the label for cluster `raw`.
    ///
    /// Identical to [`Self::from_raw`]; reads better at call sites that name
    /// regular clusters.
    #[must_use]
    pub const fn cluster(raw: T) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn raw(self) -> T {
        self.0
    }

    /// Returns whether the point has not been visited.
    #[must_use]
    pub fn is_unclassified(self) -> bool {
        self.0 == T::UNCLASSIFIED
    }

    /// Returns whether the point is noise.
    #[must_use]
    pub fn is_noise(self) -> bool {
        self.0 == T::NOISE
    }

    /// Returns whether the label names a real cluster.
    #[must_use]
    pub fn is_regular(self) -> bool {
        !self.is_unclassified() && !self.is_noise()
    }

    /// Returns the category of this label.
    #[must_use]
    pub fn kind(self) -> LabelKind<T> {
        if self.is_unclassified() {
            LabelKind::Unclassified
        } else if self.is_noise() {
            LabelKind::Noise
        } else {
            LabelKind::Regular(self.0)
        }
    }

    /// Returns the identifier that follows this one.
    ///
    /// Sentinel labels restart at [`Self::CLUSTER0`].
    ///
    /// # Errors
    /// Returns [`LabelError::IdentifierExhausted`] when the successor would
    /// collide with a sentinel.
    pub fn next_valid_cluster_id(self) -> Result<Self, LabelError> {
        if !self.is_regular() {
            return Ok(Self::CLUSTER0);
        }
        match self.0.checked_next().map(Self) {
            Some(candidate) if candidate.is_regular() => Ok(candidate),
            _ => Err(LabelError::IdentifierExhausted {
                last: self.0.widen(),
            }),
        }
    }

    /// Renders the label as `Unclassified`, `Noise`, or the decimal id.
    ///
    /// # Errors
    /// Returns [`LabelError::InvariantViolation`] if the label falls outside
    /// all three categories.
    pub fn to_text(self) -> Result<String, LabelError> {
        if self.is_noise() {
            Ok("Noise".to_owned())
        } else if self.is_unclassified() {
            Ok("Unclassified".to_owned())
        } else if self.is_regular() {
            Ok(self.0.to_string())
        } else {
            Err(LabelError::InvariantViolation {
                raw: self.0.widen(),
            })
        }
    }
}

impl<T: LabelWidth> Default for ClusterLabel<T> {
    fn default() -> Self {
        Self::UNCLASSIFIED
    }
}

impl<T: LabelWidth> fmt::Display for ClusterLabel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            LabelKind::Unclassified => f.write_str("Unclassified"),
            LabelKind::Noise => f.write_str("Noise"),
            LabelKind::Regular(raw) => fmt::Display::fmt(&raw, f),
        }
    }
}
