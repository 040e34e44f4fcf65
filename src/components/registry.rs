// SPDX-License-Identifier: MPL-2.0
//! Factory registration and resolution by contract-id strings.
//!
//! The registry is deliberately small: one factory per contract id, resolved
//! into either a direct instance or a [`Proxy`] on the dispatch context.
//! Every failure mode is loud — duplicate registration, unknown id, type
//! mismatch, and above all a request that never stated its dispatch policy.

use std::any::Any;
use std::collections::HashMap;

use crate::error::{Error, Result};

use super::dispatch::{DispatchMode, Dispatcher, Proxy};

/// Contract id under which hosts register the transport renderer factory.
pub const RENDERER_CONTRACT_ID: &str = "@playdeck/transport-renderer;1";

/// How a resolved component is to be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Hand the instance to the caller; the caller owns thread affinity.
    Direct,
    /// Wrap the instance in a [`Proxy`] on the dispatch context.
    Marshalled(DispatchMode),
}

/// A resolution request: contract id plus an explicitly stated dispatch
/// policy.
#[derive(Debug, Clone)]
pub struct ComponentRequest {
    contract_id: String,
    dispatch: Option<DispatchPolicy>,
}

impl ComponentRequest {
    /// Starts a request for `contract_id`. The request cannot be resolved
    /// until a dispatch policy is stated.
    pub fn new(contract_id: &str) -> Self {
        Self {
            contract_id: contract_id.to_string(),
            dispatch: None,
        }
    }

    /// States that the caller wants the raw instance.
    #[must_use]
    pub fn direct(mut self) -> Self {
        self.dispatch = Some(DispatchPolicy::Direct);
        self
    }

    /// States that the caller wants the instance marshalled onto the
    /// dispatch context with the given mode.
    #[must_use]
    pub fn marshalled(mut self, mode: DispatchMode) -> Self {
        self.dispatch = Some(DispatchPolicy::Marshalled(mode));
        self
    }

    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }
}

type FactoryFn = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Maps contract-id strings to component factories.
pub struct ComponentRegistry {
    factories: HashMap<String, FactoryFn>,
    dispatcher: Dispatcher,
}

impl ComponentRegistry {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            factories: HashMap::new(),
            dispatcher,
        }
    }

    /// Registers a factory under `contract_id`.
    ///
    /// # Errors
    ///
    /// [`Error::Registry`] if the id is already taken.
    pub fn register<T, F>(&mut self, contract_id: &str, factory: F) -> Result<()>
    where
        T: Any + Send + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        if self.factories.contains_key(contract_id) {
            return Err(Error::Registry(format!(
                "contract id already registered: {contract_id}"
            )));
        }
        self.factories
            .insert(contract_id.to_string(), Box::new(move || Box::new(factory())));
        Ok(())
    }

    pub fn contains(&self, contract_id: &str) -> bool {
        self.factories.contains_key(contract_id)
    }

    /// Resolves a [`DispatchPolicy::Direct`] request into a raw instance.
    ///
    /// # Errors
    ///
    /// [`Error::Registry`] if the request states no dispatch policy, states
    /// a marshalled one, names an unknown contract id, or resolves to a
    /// component of a different type than `T`.
    pub fn create<T: Any + Send>(&self, request: &ComponentRequest) -> Result<T> {
        match request.dispatch {
            None => Err(missing_policy(request)),
            Some(DispatchPolicy::Marshalled(_)) => Err(Error::Registry(format!(
                "marshalled request for {} must be resolved with create_proxied",
                request.contract_id
            ))),
            Some(DispatchPolicy::Direct) => self.instantiate(request),
        }
    }

    /// Resolves a [`DispatchPolicy::Marshalled`] request into a proxy on the
    /// dispatch context.
    ///
    /// # Errors
    ///
    /// [`Error::Registry`] under the same conditions as
    /// [`ComponentRegistry::create`], with direct and marshalled swapped.
    pub fn create_proxied<T: Any + Send>(&self, request: &ComponentRequest) -> Result<Proxy<T>> {
        match request.dispatch {
            None => Err(missing_policy(request)),
            Some(DispatchPolicy::Direct) => Err(Error::Registry(format!(
                "direct request for {} must be resolved with create",
                request.contract_id
            ))),
            Some(DispatchPolicy::Marshalled(mode)) => {
                let component: T = self.instantiate(request)?;
                Ok(self.dispatcher.proxy(component, mode))
            }
        }
    }

    fn instantiate<T: Any + Send>(&self, request: &ComponentRequest) -> Result<T> {
        let factory = self.factories.get(request.contract_id()).ok_or_else(|| {
            Error::Registry(format!("unknown contract id: {}", request.contract_id))
        })?;
        factory()
            .downcast::<T>()
            .map(|component| *component)
            .map_err(|_| {
                Error::Registry(format!(
                    "contract id {} resolves to a different component type",
                    request.contract_id
                ))
            })
    }
}

fn missing_policy(request: &ComponentRequest) -> Error {
    Error::Registry(format!(
        "component request for {} omits the dispatch policy; state direct() or marshalled() explicitly",
        request.contract_id
    ))
}
