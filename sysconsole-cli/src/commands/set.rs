use std::error::Error;

use colored::Colorize;
use sysconsole::prelude::*;
use sysconsole::sysconsole_oidc::field;

use super::Context;

/// Apply `id = raw` and save.
///
/// `raw` is parsed according to the field's kind (`true`/`false`/`on`/`off`
/// for the enable toggle, verbatim for text settings).
pub fn run(ctx: &mut Context, id: &str, raw: &str) -> Result<(), Box<dyn Error>> {
    let mut settings = AdminSettings::new(OidcSettingsPanel, ctx.store.load()?)?
        .with_validator(OidcPresenceValidator);

    let kind =
        OidcFormState::kind_of(id).ok_or_else(|| FormError::UnknownField(id.to_string()))?;
    settings.handle_change(id, kind.parse(id, raw)?)?;

    if !settings.is_dirty() {
        println!("{} is already set, nothing to save", id.bold());
        return Ok(());
    }

    settings.save(&mut ctx.store)?;
    println!("{} {} in {}", "Saved".green(), id.bold(), ctx.store.path().display());
    Ok(())
}

/// Turn OpenID Connect on or off.
pub fn toggle(ctx: &mut Context, enable: bool) -> Result<(), Box<dyn Error>> {
    run(ctx, field::ENABLE, if enable { "true" } else { "false" })
}
