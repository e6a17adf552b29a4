//! Newsletter signup.

use anyhow::{bail, Context as _, Result};

use home_storefront::NewsletterSignup;

use super::SubscribeArgs;
use crate::context::Context;

/// Run the subscribe command.
pub async fn run(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let email = args.email.trim();
    if email.is_empty() {
        bail!("Email address is required");
    }

    let message = NewsletterSignup::new(ctx.event_log())
        .subscribe(email)
        .context("Failed to record signup")?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "email": email, "message": message }));
    } else {
        ctx.output.success(message);
    }
    Ok(())
}
