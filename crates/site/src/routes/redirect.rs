//! Static redirect page.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

/// Seconds before the browser follows the redirect.
pub const REDIRECT_DELAY_SECS: u32 = 5;

/// Redirect page template. Carries no catalog data.
#[derive(Template, WebTemplate)]
#[template(path = "redirect.html")]
pub struct RedirectTemplate {
    pub target: &'static str,
    pub delay_secs: u32,
}

/// Display the redirect page.
#[instrument]
pub async fn show() -> RedirectTemplate {
    RedirectTemplate {
        target: "/",
        delay_secs: REDIRECT_DELAY_SECS,
    }
}
