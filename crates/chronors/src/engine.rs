//! Capability negotiation with the numeric array engine.
//!
//! Before the first tensor operation, [`init`](crate::init) verifies that the
//! engine is recent enough and that every operation family the library relies
//! on actually works, by running a tiny probe for each. A failure is reported
//! once, up front, as [`TimeTensorError::EngineUnavailable`] instead of deep
//! inside an unrelated operation.
//!
//! # Environment Variables
//!
//! - `CHRONORS_SKIP_ENGINE_CHECK`: `1`, `true` or `yes` skips the probes
//!   (the version check still runs)

use std::fmt;
use std::sync::OnceLock;

use chronors_core::ops::{empty_strided, from_vec, rand_with, tcat, tmean, zeros};
use chronors_core::{ReduceOptions, Result, TimeDim, TimeTensorError};
use scirs2_core::random::{rngs::StdRng, SeedableRng};

/// Oldest engine release the library is tested against.
pub const MIN_ENGINE_VERSION: &str = "0.1.0";

/// Release of the engine this build is linked against.
pub fn engine_version() -> String {
    scirs2_core::_version().to_string()
}

/// An operation family the library needs from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Owned n-d buffer allocation
    Allocation,
    /// Joining buffers along an axis
    Concatenate,
    /// Folding one axis into a value
    AxisReduction,
    /// Strided reinterpretation of a buffer
    StridedView,
    /// Seeded and unseeded random draws
    RandomDraw,
    /// Element type conversion
    Cast,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::Allocation,
        Capability::Concatenate,
        Capability::AxisReduction,
        Capability::StridedView,
        Capability::RandomDraw,
        Capability::Cast,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::Allocation => "allocation",
            Capability::Concatenate => "concatenate",
            Capability::AxisReduction => "axis-reduction",
            Capability::StridedView => "strided-view",
            Capability::RandomDraw => "random-draw",
            Capability::Cast => "cast",
        }
    }

    /// Run a tiny operation exercising this capability.
    fn probe(self) -> Result<()> {
        let ok = match self {
            Capability::Allocation => {
                let z = zeros::<f64>(&[2, 3], TimeDim::Last)?;
                z.shape() == [2, 3] && z.iter().all(|&v| v == 0.0)
            }
            Capability::Concatenate => {
                let joined = tcat(&[from_vec(vec![1.0f64, 2.0]), from_vec(vec![3.0])])?;
                joined.to_vec() == [1.0, 2.0, 3.0]
            }
            Capability::AxisReduction => {
                let mean = tmean(&from_vec(vec![1.0f64, 2.0, 3.0]), ReduceOptions::default())?;
                mean.to_vec() == [2.0]
            }
            // a transposed engine view walks the buffer with swapped strides;
            // `empty_strided` then checks the crate's own position walk on top
            Capability::StridedView => {
                let x = from_vec(vec![0.0f64, 1.0, 2.0, 3.0]).data().reshape(&[2, 2])?;
                let walked: Vec<f64> = x.as_array().t().iter().copied().collect();
                let e = empty_strided::<f32>(&[2, 2], &[1, 2], 0)?;
                walked == [0.0, 2.0, 1.0, 3.0] && e.shape() == [2, 2] && e.time_len() == 2
            }
            Capability::RandomDraw => {
                let mut rng = StdRng::seed_from_u64(0);
                let r = rand_with::<f64, _>(&[16], 0, &mut rng)?;
                let in_range = r.iter().all(|v| (0.0..1.0).contains(v));
                in_range
            }
            Capability::Cast => {
                let c = from_vec(vec![1.5f64, -2.0]).cast::<f32>();
                c.to_vec() == [1.5f32, -2.0]
            }
        };
        if ok {
            Ok(())
        } else {
            Err(unavailable(self.name(), "probe returned an unexpected result"))
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn unavailable(capability: &str, reason: impl Into<String>) -> TimeTensorError {
    TimeTensorError::EngineUnavailable {
        capability: capability.to_string(),
        reason: reason.into(),
    }
}

/// What to require from the engine at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum accepted engine version (`major.minor.patch`)
    pub min_version: String,
    /// Capabilities to probe
    pub capabilities: Vec<Capability>,
    /// Skip the probes, keeping only the version check
    pub skip_check: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_version: MIN_ENGINE_VERSION.to_string(),
            capabilities: Capability::ALL.to_vec(),
            skip_check: false,
        }
    }
}

impl EngineConfig {
    /// Defaults, with `skip_check` taken from `CHRONORS_SKIP_ENGINE_CHECK`.
    pub fn from_env() -> Self {
        let skip_check = std::env::var("CHRONORS_SKIP_ENGINE_CHECK")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            skip_check,
            ..Self::default()
        }
    }

    pub fn with_min_version(mut self, version: impl Into<String>) -> Self {
        self.min_version = version.into();
        self
    }

    pub fn with_capabilities(mut self, capabilities: Vec<Capability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_skip_check(mut self, skip: bool) -> Self {
        self.skip_check = skip;
        self
    }
}

/// Outcome of a successful negotiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    pub version: String,
    /// Capabilities whose probe passed (empty when probes were skipped)
    pub verified: Vec<Capability>,
}

/// `major.minor.patch`, missing components read as zero, pre-release suffix ignored.
fn parse_version(version: &str) -> Option<(u64, u64, u64)> {
    let core = version.split(['-', '+']).next()?;
    let mut parts = core.split('.').map(|p| p.parse::<u64>());
    let major = parts.next()?.ok()?;
    let minor = parts.next().unwrap_or(Ok(0)).ok()?;
    let patch = parts.next().unwrap_or(Ok(0)).ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

fn check_version(found: &str, minimum: &str) -> Result<()> {
    let parse = |v: &str| {
        parse_version(v).ok_or_else(|| unavailable("version", format!("cannot parse version '{v}'")))
    };
    if parse(found)? < parse(minimum)? {
        return Err(unavailable(
            "version",
            format!("engine {found} is older than the required {minimum}"),
        ));
    }
    Ok(())
}

/// Check `config` against an engine reporting `version`, without caching.
pub fn negotiate_with(config: &EngineConfig, version: &str) -> Result<EngineInfo> {
    check_version(version, &config.min_version)?;
    tracing::debug!(version, min_version = %config.min_version, "engine version accepted");

    if config.skip_check {
        tracing::debug!("engine capability probes skipped");
        return Ok(EngineInfo {
            version: version.to_string(),
            verified: Vec::new(),
        });
    }

    let mut verified = Vec::with_capacity(config.capabilities.len());
    for &capability in &config.capabilities {
        if let Err(err) = capability.probe() {
            tracing::warn!(%capability, error = %err, "engine capability probe failed");
            return Err(match err {
                e @ TimeTensorError::EngineUnavailable { .. } => e,
                other => unavailable(capability.name(), other.to_string()),
            });
        }
        tracing::debug!(%capability, "engine capability verified");
        verified.push(capability);
    }
    Ok(EngineInfo {
        version: version.to_string(),
        verified,
    })
}

/// [`negotiate_with`] against the linked engine's reported version.
pub fn negotiate(config: &EngineConfig) -> Result<EngineInfo> {
    negotiate_with(config, &engine_version())
}

static ENGINE: OnceLock<EngineInfo> = OnceLock::new();

/// Negotiate once per process; later calls return the cached result.
///
/// A failed negotiation is not cached, so a later call retries.
///
/// # Examples
///
/// ```
/// use chronors::{init, Capability, EngineConfig};
///
/// let info = init(EngineConfig::default()).unwrap();
/// assert!(info.verified.contains(&Capability::Concatenate));
///
/// // cached: the second configuration is not re-checked
/// let again = init(EngineConfig::default().with_skip_check(true)).unwrap();
/// assert_eq!(again, info);
/// ```
pub fn init(config: EngineConfig) -> Result<&'static EngineInfo> {
    if let Some(info) = ENGINE.get() {
        return Ok(info);
    }
    let info = negotiate(&config)?;
    Ok(ENGINE.get_or_init(|| info))
}

/// The cached negotiation result, if [`init`] has succeeded.
pub fn engine_info() -> Option<&'static EngineInfo> {
    ENGINE.get()
}
