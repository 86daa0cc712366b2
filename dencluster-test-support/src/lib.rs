//! Shared test utilities used across dencluster crates.

pub mod ci {
    //! Helpers that read CI tuning knobs.
    pub mod proptest_profile;
}
pub mod recording;
