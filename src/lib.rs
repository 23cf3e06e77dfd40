//! scc-boundary - Boundary drawing and WKT polygon helpers for the stair crusher club map editors

pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod geometry;
pub mod replay;

pub use domain::{BoundaryData, BoundaryPoint};
pub use error::{BoundaryError, WktError};
