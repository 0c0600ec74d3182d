use crate::domain::model::Dog;
use crate::domain::profiles::ProfileCondition;
use std::any::Any;

/// A type a [`ComponentContext`](crate::core::context::ComponentContext) may
/// instantiate and expose by name when its profile condition holds.
pub trait Component: Any + Send + Sync + Sized {
    const NAME: &'static str;

    fn condition() -> ProfileCondition;

    fn construct() -> Self;
}

/// Profile under which the dog component is registered.
pub const DOG_PROFILE: &str = "test";

impl Component for Dog {
    const NAME: &'static str = "dog";

    fn condition() -> ProfileCondition {
        ProfileCondition::on(DOG_PROFILE)
    }

    fn construct() -> Self {
        Dog::default()
    }
}
