//! Two-phase injection
//!
//! The injection entry point replaces reflection-driven field traversal
//! with an explicit contract: a target declares its injection points as
//! typed keys, the component resolves all of them, and only then does the
//! target assign. A resolution failure therefore never leaves a target
//! partially populated.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use ruc_domain::error::{Error, Result};
use tracing::debug;

use super::component::Component;
use super::key::{BindingKey, Qualifier};

/// An object with explicitly declared injection points
pub trait Injectable {
    /// Name used in error reporting
    fn target_name(&self) -> &'static str;

    /// The binding keys this target requires
    fn injection_points(&self) -> Vec<BindingKey>;

    /// Assign resolved values to fields
    ///
    /// Called exactly once per injection, and only after every declared
    /// point has resolved.
    fn assign(&mut self, values: &mut Injected) -> Result<()>;
}

/// Values resolved for one injection, keyed by binding key
pub struct Injected {
    target: &'static str,
    values: HashMap<BindingKey, Arc<dyn Any + Send + Sync>>,
}

impl Injected {
    /// Take the resolved value for `(T, qualifier)`
    ///
    /// Fails if the key was not declared in `injection_points`, which is
    /// an injection-target error on the target's own contract.
    pub fn take<T: Send + Sync + 'static>(&mut self, qualifier: Qualifier) -> Result<Arc<T>> {
        let key = BindingKey::of::<T>(qualifier);
        let value = self.values.remove(&key).ok_or_else(|| {
            Error::injection_target(
                self.target.to_string(),
                format!("{key} was not declared as an injection point"),
            )
        })?;
        value
            .downcast::<T>()
            .map_err(|_| Error::internal(format!("binding {key} stored under the wrong type")))
    }
}

impl Component {
    /// Populate a target's declared injection points
    ///
    /// Phase one resolves every declared key against this component and
    /// its parents; any miss aborts with an injection-target error before
    /// the target is touched. Phase two hands the resolved set to the
    /// target for assignment.
    pub fn inject(&self, target: &mut dyn Injectable) -> Result<()> {
        let mut values = HashMap::new();
        for key in target.injection_points() {
            let value = self.lookup(&key).ok_or_else(|| {
                Error::injection_target(
                    target.target_name().to_string(),
                    format!("no binding satisfies injection point {key}"),
                )
            })?;
            values.insert(key, value);
        }

        debug!(
            target = target.target_name(),
            component = self.name(),
            points = values.len(),
            "injecting target"
        );

        target.assign(&mut Injected {
            target: target.target_name(),
            values,
        })
    }
}
