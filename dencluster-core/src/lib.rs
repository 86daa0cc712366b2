//! Dencluster core library.
//!
//! Density-based clustering (DBSCAN) over any [`SpatialIndex`], plus the
//! k-distance estimator used to choose its radius.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod dbscan;
mod distance;
mod error;
mod index;
mod kdist;
mod label;
mod neighbors;
mod point;
mod summary;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DbscanBuilder, default_min_pts},
    dbscan::{Dbscan, cluster},
    distance::{euclidean_distance, squared_euclidean_distance},
    error::{
        ClusteringError, ClusteringErrorCode, IndexError, IndexErrorCode, LabelError,
        LabelErrorCode, PointError, PointErrorCode, Result,
    },
    index::{LabelOf, LinearIndex, PointHandle, ScalarOf, SpatialIndex},
    kdist::{sorted_k_distances, sorted_k_distances_default},
    label::{ClusterLabel, LabelKind, LabelWidth},
    neighbors::{Neighborhood, QueryStrategy, neighborhood},
    point::{Labelled, Point, Spatial},
    summary::{LabelCounts, for_each_point},
};
