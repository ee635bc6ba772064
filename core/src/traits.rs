use std::fmt::Debug;

use trait_set::trait_set;

// Until `trait_alias` is stabilized, we have to use a macro
trait_set! {
    /// Numeric key type, thread safe
    pub trait Key = num::Float + Debug + Send + Sync + 'static;
}

/// Widen a key to the `f64` domain the models are trained in. Keys which cannot
/// be represented map to NaN, which never matches anything.
#[inline]
pub(crate) fn key_to_f64<K: Key>(key: K) -> f64 {
    key.to_f64().unwrap_or(f64::NAN)
}
