use super::HandlerContext;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ProfileViewModel, StatusBadge, TypeListViewModel,
};
use anyhow::Result;
use studykit_types::{
    PersonalityType, bonus_tips, catalog, profile, tips_for, validate_catalog,
};

pub fn handle_types(ctx: &HandlerContext, check: bool) -> Result<()> {
    let mut content = TypeListViewModel::from_catalog(catalog());

    let badge = if check {
        validate_catalog()?;
        content.catalog_valid = Some(true);
        StatusBadge::success(format!("Catalog OK: {} types", content.types.len()))
    } else {
        StatusBadge::info(format!("{} types", content.types.len()))
    };

    let result = CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(
            Guidance::new("Show study methods for one type").with_command("studykit profile INTJ"),
        );
    ctx.render(result)
}

pub fn handle_profile(
    ctx: &HandlerContext,
    code: Option<PersonalityType>,
    all_tips: bool,
) -> Result<()> {
    let code = code.unwrap_or(ctx.config.default_type);
    tracing::debug!(%code, all_tips, "showing profile");

    let tips = if all_tips {
        bonus_tips().iter().collect()
    } else {
        tips_for(code)
    };
    let content = ProfileViewModel::new(profile(code), &tips);
    let result = CommandResultViewModel::new(content).with_suggestion(
        Guidance::new("Plan a focus session").with_command("studykit schedule --focus 40"),
    );
    ctx.render(result)
}
