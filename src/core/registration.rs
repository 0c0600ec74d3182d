use crate::domain::model::Dog;
use crate::domain::ports::Component;
use crate::domain::profiles::ActiveProfiles;

/// Build a [`Dog`] if, and only if, the `test` profile is active.
pub fn maybe_construct(active: &ActiveProfiles) -> Option<Dog> {
    maybe_construct_component::<Dog>(active)
}

pub fn maybe_construct_component<C: Component>(active: &ActiveProfiles) -> Option<C> {
    maybe_construct_with(active, C::construct)
}

/// Same gate as [`maybe_construct_component`], but the instance comes from `factory`.
pub fn maybe_construct_with<C, F>(active: &ActiveProfiles, factory: F) -> Option<C>
where
    C: Component,
    F: FnOnce() -> C,
{
    let condition = C::condition();
    if condition.matches(active) {
        tracing::debug!(component = C::NAME, %condition, "profile condition met");
        Some(factory())
    } else {
        tracing::debug!(
            component = C::NAME,
            %condition,
            active = %active.effective(),
            "profile condition not met, skipping"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructs_under_test_profile() {
        let dog = maybe_construct(&ActiveProfiles::new(["test"]));
        assert_eq!(dog, Some(Dog::default()));
    }

    #[test]
    fn test_nothing_under_other_profiles() {
        assert_eq!(maybe_construct(&ActiveProfiles::new(["prod"])), None);
        assert_eq!(maybe_construct(&ActiveProfiles::default()), None);
    }

    #[test]
    fn test_test_among_several_labels() {
        let active = ActiveProfiles::parse("dev,test,local");
        assert!(maybe_construct(&active).is_some());
    }

    #[test]
    fn test_factory_only_runs_when_gate_opens() {
        let mut calls = 0;
        let none = maybe_construct_with::<Dog, _>(&ActiveProfiles::new(["prod"]), || {
            calls += 1;
            Dog::new(1, "Fido", 2)
        });
        assert!(none.is_none());
        assert_eq!(calls, 0);

        let some = maybe_construct_with::<Dog, _>(&ActiveProfiles::new(["test"]), || {
            Dog::new(1, "Fido", 2)
        });
        assert_eq!(some, Some(Dog::new(1, "Fido", 2)));
    }
}
