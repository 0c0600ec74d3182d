use crate::domain::ports::Component;
use crate::domain::profiles::{ActiveProfiles, ProfileCondition};
use crate::utils::error::{AppError, Result};
use std::any::Any;
use std::collections::HashMap;

type Instance = Box<dyn Any + Send + Sync>;
type Factory = Box<dyn Fn() -> Instance + Send + Sync>;

struct Definition {
    name: &'static str,
    condition: ProfileCondition,
    factory: Factory,
}

/// Registration table plus the instances produced by the last [`refresh`](Self::refresh).
pub struct ComponentContext {
    active: ActiveProfiles,
    definitions: Vec<Definition>,
    instances: HashMap<&'static str, Instance>,
}

impl ComponentContext {
    pub fn new(active: ActiveProfiles) -> Self {
        Self {
            active,
            definitions: Vec::new(),
            instances: HashMap::new(),
        }
    }

    pub fn active_profiles(&self) -> &ActiveProfiles {
        &self.active
    }

    pub fn register<C: Component>(&mut self) -> Result<()> {
        self.register_with(C::construct)
    }

    pub fn register_with<C, F>(&mut self, factory: F) -> Result<()>
    where
        C: Component,
        F: Fn() -> C + Send + Sync + 'static,
    {
        if self.definitions.iter().any(|def| def.name == C::NAME) {
            return Err(AppError::DuplicateComponent {
                name: C::NAME.to_string(),
            });
        }

        tracing::debug!(component = C::NAME, condition = %C::condition(), "registered definition");
        self.definitions.push(Definition {
            name: C::NAME,
            condition: C::condition(),
            factory: Box::new(move || Box::new(factory()) as Instance),
        });
        Ok(())
    }

    /// Drop existing instances and build every definition whose condition
    /// holds. Returns how many were built.
    pub fn refresh(&mut self) -> usize {
        self.instances.clear();

        for def in &self.definitions {
            if def.condition.matches(&self.active) {
                self.instances.insert(def.name, (def.factory)());
                tracing::info!(component = def.name, "component instantiated");
            } else {
                tracing::debug!(
                    component = def.name,
                    condition = %def.condition,
                    active = %self.active.effective(),
                    "component skipped"
                );
            }
        }

        self.instances.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    /// Names of live instances, in registration order.
    pub fn component_names(&self) -> Vec<&'static str> {
        self.definitions
            .iter()
            .map(|def| def.name)
            .filter(|name| self.instances.contains_key(name))
            .collect()
    }

    pub fn get<C: Component>(&self, name: &str) -> Result<&C> {
        let boxed = self
            .instances
            .get(name)
            .ok_or_else(|| AppError::ComponentNotFound {
                name: name.to_string(),
            })?;
        let instance: &(dyn Any + Send + Sync) = &**boxed;
        instance
            .downcast_ref::<C>()
            .ok_or_else(|| AppError::ComponentTypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<C>(),
            })
    }

    pub fn get_mut<C: Component>(&mut self, name: &str) -> Result<&mut C> {
        let boxed = self
            .instances
            .get_mut(name)
            .ok_or_else(|| AppError::ComponentNotFound {
                name: name.to_string(),
            })?;
        let instance: &mut (dyn Any + Send + Sync) = &mut **boxed;
        instance
            .downcast_mut::<C>()
            .ok_or_else(|| AppError::ComponentTypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<C>(),
            })
    }

    pub fn try_get<C: Component>(&self, name: &str) -> Option<&C> {
        self.get(name).ok()
    }
}
