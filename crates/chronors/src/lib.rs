//! # chronors - Time-Aware Tensors
//!
//! This is the **meta crate**: it re-exports [`chronors_core`] and owns the
//! process-level setup, namely engine capability negotiation ([`init`]) and
//! the tracing subscriber ([`tracing_support`]).
//!
//! ## Quick Start
//!
//! ```
//! use chronors::prelude::*;
//!
//! init(EngineConfig::from_env())?;
//!
//! // two channels, 5 time steps, time last
//! let x = timetensor(
//!     vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 2.0, 4.0, 6.0, 8.0, 10.0],
//!     &[2, 5],
//!     TimeDim::Last,
//! )?;
//! assert_eq!(x.time_len(), 5);
//!
//! let mean = tmean(&x, ReduceOptions::default())?;
//! assert_eq!(mean.to_vec(), vec![3.0, 6.0]);
//!
//! let d = diff(&x, DiffOptions::default())?;
//! assert_eq!(d.shape(), &[2, 4]);
//! # Ok::<(), TimeTensorError>(())
//! ```
//!
//! ## Components
//!
//! ### Core types ([`core`])
//!
//! [`BaseTensor`](core::BaseTensor), [`TimeTensor`](core::TimeTensor),
//! [`DataTensor`](core::DataTensor) and the element type taxonomy.
//!
//! ### Operations ([`ops`])
//!
//! Creation, structural, reduction and series operations over time tensors.
//!
//! ## Features
//!
//! - `tracing` (default): install a `tracing-subscriber` via [`tracing_support::init_tracing`]
//! - `serde`: serialization of metadata and option types

pub mod engine;
pub mod tracing_support;

pub use chronors_core as core;
pub use chronors_core::ops;

pub use engine::{
    engine_info, engine_version, init, negotiate, negotiate_with, Capability, EngineConfig,
    EngineInfo, MIN_ENGINE_VERSION,
};

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```
    //! use chronors::prelude::*;
    //!
    //! let x = from_vec(vec![1.0f32, 2.0, 3.0]);
    //! assert_eq!(x.time_dim(), 0);
    //! ```

    pub use crate::engine::{init, EngineConfig};

    pub use chronors_core::{
        AcfOptions, AxisMeta, BaseTensor, Correction, DType, DataIndexer, DataTensor,
        DiffBoundary, DiffOptions, Element, FloatElement, ReduceOptions, Reduced, TimeDim,
        TimeTensor, TimeTensorError,
    };

    pub use chronors_core::ops::{
        acf, arange, autocovariance, cat, cor, cov, diff, from_vec, full, index_select,
        linspace, ones, rand, randn, stack, tcat, timetensor, tindex_select, tmean, tstd, tvar,
        zeros,
    };
}
