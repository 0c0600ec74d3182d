use crate::config::AppConfig;
use crate::core::context::ComponentContext;
use crate::domain::model::Dog;
use crate::domain::profiles::ActiveProfiles;
use crate::utils::error::Result;

/// Register every known component and refresh against `active`.
pub fn build_context(config: &AppConfig, active: ActiveProfiles) -> Result<ComponentContext> {
    let mut ctx = ComponentContext::new(active);

    let seed = config.seed_dog();
    ctx.register_with::<Dog, _>(move || seed.clone())?;

    let count = ctx.refresh();
    tracing::info!(
        active = %ctx.active_profiles().effective(),
        count,
        "context refreshed"
    );
    Ok(ctx)
}
