use super::{Desk, Listing};
use crate::domain::ClientError;
use crate::models::Role;
use crate::session::{Session, decode_claims};
use crate::validation::require_all;

pub const CREDENTIALS_MANDATORY: &str = "Username and password are mandatory.";

/// Log in and persist the token and role. Any pending return from a previous
/// session is discarded.
pub async fn login(desk: &Desk, username: &str, password: &str) -> Result<String, ClientError> {
    require_all(&[username, password], CREDENTIALS_MANDATORY)?;

    let response = desk.anonymous().login(username.trim(), password).await?;
    let role = Role::from_loose(&response.role);

    let session = Session {
        token: Some(response.access_token),
        role: Some(role),
        username: Some(username.trim().to_string()),
        pending_return: None,
    };
    desk.store().save(&session)?;

    tracing::info!("Logged in as {} ({})", username.trim(), role);
    Ok(format!("Logged in as {} ({})", username.trim(), role))
}

pub fn logout(desk: &Desk) -> Result<String, ClientError> {
    desk.store().clear()?;
    Ok("Logged out.".to_string())
}

/// Describe the stored session
pub fn whoami(desk: &Desk) -> Result<String, ClientError> {
    let session = desk.session()?;
    let token = session.token.as_deref().ok_or(ClientError::NotLoggedIn)?;

    let mut out = format!(
        "{} ({})",
        session.username.as_deref().unwrap_or("unknown user"),
        session.role.unwrap_or_default()
    );
    if let Ok(claims) = decode_claims(token) {
        if let Some(expires) = chrono::DateTime::from_timestamp(claims.exp, 0) {
            out.push_str(&format!(" | token expires {}", expires.format("%Y-%m-%d %H:%M UTC")));
        }
    }
    if let Some(pending) = session.pending_return {
        out.push_str(&format!(
            " | pending return: txn {} (fine {})",
            pending.transaction_id, pending.fine
        ));
    }
    Ok(out)
}

/// Modules on the session's dashboard
pub async fn dashboard(desk: &Desk) -> Result<Listing, ClientError> {
    let session = desk.session()?;
    let dashboard = session.dashboard();
    let home = desk.authorized()?.home_modules(dashboard.role()).await?;

    let mut listing = Listing::lines(home.modules);
    listing.message = Some(format!("Dashboard: {}", dashboard.page()));
    Ok(listing)
}

/// Backend liveness message
pub async fn status(desk: &Desk) -> Result<String, ClientError> {
    let status = desk.anonymous().backend_status().await?;
    Ok(format!("{} ({})", status.status, desk.anonymous().base_url()))
}
