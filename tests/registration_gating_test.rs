use anyhow::Result;
use dog_profile::{
    build_context, maybe_construct, ActiveProfiles, AppConfig, AppError, Component,
    ComponentContext, Dog, ProfileCondition,
};

#[test]
fn test_container_produces_dog_for_test_profile() -> Result<()> {
    let mut ctx = ComponentContext::new(ActiveProfiles::new(["test"]));
    ctx.register::<Dog>()?;
    ctx.refresh();

    let dog = ctx.get::<Dog>(Dog::NAME)?;
    assert_eq!(dog, &Dog::default());
    Ok(())
}

#[test]
fn test_container_produces_nothing_for_prod_profile() -> Result<()> {
    let mut ctx = ComponentContext::new(ActiveProfiles::new(["prod"]));
    ctx.register::<Dog>()?;
    assert_eq!(ctx.refresh(), 0);

    let err = ctx.get::<Dog>("dog").unwrap_err();
    assert!(matches!(err, AppError::ComponentNotFound { .. }));
    Ok(())
}

#[test]
fn test_pure_gate_agrees_with_container() -> Result<()> {
    for labels in [vec!["test"], vec!["prod"], vec![], vec!["dev", "test"]] {
        let active = ActiveProfiles::new(labels.iter().copied());

        let mut ctx = ComponentContext::new(active.clone());
        ctx.register::<Dog>()?;
        ctx.refresh();

        assert_eq!(
            maybe_construct(&active).is_some(),
            ctx.contains("dog"),
            "disagreement for {:?}",
            labels
        );
    }
    Ok(())
}

#[test]
fn test_dog_declares_test_profile() {
    assert_eq!(Dog::NAME, "dog");
    assert_eq!(Dog::condition(), ProfileCondition::on("test"));
}

#[test]
fn test_rex_scenario_through_context() -> Result<()> {
    let mut ctx = build_context(&AppConfig::default(), ActiveProfiles::parse("test"))?;

    let dog = ctx.get_mut::<Dog>("dog")?;
    dog.set_id(7);
    dog.set_name("Rex");
    dog.set_age(3);

    let dog = ctx.get::<Dog>("dog")?;
    assert_eq!(dog.id(), 7);
    assert_eq!(dog.name(), "Rex");
    assert_eq!(dog.age(), 3);
    Ok(())
}
