use std::error::Error;
use std::fmt::Write as _;

use colored::Colorize;
use sysconsole::prelude::*;
use sysconsole::sysconsole_oidc::field;

use super::Context;

/// Values never echoed in text output.
const MASKED_FIELDS: &[&str] = &[field::SECRET];

/// Render the OpenID Connect panel from the stored configuration.
pub fn run(ctx: &Context, json: bool) -> Result<(), Box<dyn Error>> {
    let settings = AdminSettings::new(OidcSettingsPanel, ctx.store.load()?)?;
    let rendered = settings.render(ctx.localizer.as_ref());

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print!("{}", render_text(&rendered, ctx.localizer.as_ref()));
    }
    Ok(())
}

/// Format a rendered panel for a terminal, one setting per line.
pub fn render_text(rendered: &RenderedPanel, localizer: &dyn Localizer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rendered.title.resolve(localizer).bold());
    if let Some(header) = &rendered.settings.header {
        let _ = writeln!(out, "{}", header.resolve(localizer));
    }

    for setting in &rendered.settings.settings {
        let label = setting.label().resolve(localizer);
        let line = match setting {
            Setting::Boolean(toggle) => {
                let mark = if toggle.value { "[x]" } else { "[ ]" };
                format!("{mark} {}", label.trim_end())
            }
            Setting::Text(text) => {
                let value = if text.value.is_empty() {
                    text.placeholder.dimmed().to_string()
                } else if MASKED_FIELDS.contains(&text.id) {
                    "********".to_string()
                } else {
                    text.value.clone()
                };
                format!("{} {value}", label.trim_end())
            }
        };
        let id = format!("({})", setting.id()).dimmed();
        if setting.is_disabled() {
            let _ = writeln!(out, "  {} {id} {}", line.dimmed(), "disabled".yellow());
        } else {
            let _ = writeln!(out, "  {line} {id}");
        }
    }

    if rendered.save_needed {
        let _ = writeln!(out, "{}", "Unsaved changes".yellow());
    }
    if let Some(error) = &rendered.server_error {
        let _ = writeln!(out, "{}", error.red());
    }
    out
}
