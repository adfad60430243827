//! The history lookup flow.
//!
//! `run` drives the four stages in order: authenticate, fetch the delivery
//! history, fetch the organization directory, then look up and print the
//! organization the first delivery belongs to. Each fetch stage logs its own
//! failure and yields `None`, which ends the run with a message on `out`.

use std::io::Write;

use crate::config::{Config, Credentials};
use crate::directory::{display_all_organizations, find_organization_by_id};
use crate::error::LoyaltyError;
use crate::loyalty_client::LoyaltyClient;
use crate::models::{AccessToken, DeliveryHistory, Organization};

/// Printed when authentication did not produce a token.
pub const TOKEN_UNAVAILABLE_MESSAGE: &str = "Failed to obtain an access token.";

/// Printed when the delivery history could not be fetched or was empty.
pub const HISTORY_NOT_FOUND_MESSAGE: &str = "Delivery history not found or an error occurred.";

/// Printed when the organization id could not be read from the history.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Could not extract organizationId from the delivery history.";

/// Printed when the organization list could not be fetched or was empty.
pub const ORGANIZATIONS_UNAVAILABLE_MESSAGE: &str = "Failed to retrieve the organization list.";

const CREDENTIALS_HINT: &str =
    "The API rejected the request; check SYRVE_USER_ID and SYRVE_USER_SECRET";

/// Extra advice to log for a failure, if any.
fn failure_hint(err: &LoyaltyError) -> Option<&'static str> {
    err.is_unauthorized().then_some(CREDENTIALS_HINT)
}

/// Where a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Authentication failed or returned an empty token.
    TokenUnavailable,
    /// The history request failed or returned an empty document.
    HistoryNotFound,
    /// The history was printed but held no usable organization id.
    OrganizationIdMissing,
    /// The organization list request failed or returned no entries.
    OrganizationsUnavailable {
        /// Id extracted from the history.
        organization_id: String,
    },
    /// The directory was printed.
    Completed {
        /// Id extracted from the history.
        organization_id: String,
        /// Whether the id was found in the directory.
        matched: bool,
    },
}

/// Logs a failed API call according to its kind.
fn report_failure(operation: &str, err: &LoyaltyError) {
    match err {
        LoyaltyError::HttpStatus { status, body } => {
            tracing::error!(operation, status = %status, body = %body, "HTTP error occurred");
            if let Some(hint) = failure_hint(err) {
                tracing::warn!(operation, "{}", hint);
            }
        }
        LoyaltyError::Decode { body, source } => {
            tracing::error!(operation, body = %body, error = %source, "Could not decode JSON response");
        }
        other => {
            tracing::error!(operation, error = %other, "Request failed");
        }
    }
}

/// Authenticates and returns the access token, or `None` on any failure.
pub async fn get_access_token(
    client: &LoyaltyClient,
    credentials: &Credentials,
) -> Option<AccessToken> {
    match client.access_token(credentials).await {
        Ok(token) if token.is_empty() => {
            tracing::warn!("Authentication succeeded but the token is empty");
            None
        }
        Ok(token) => {
            tracing::info!(token = %token, "Access token obtained");
            Some(token)
        }
        Err(e) => {
            report_failure("get_access_token", &e);
            None
        }
    }
}

/// Fetches the delivery history for `phone`, or `None` on any failure.
pub async fn get_delivery_history(
    client: &LoyaltyClient,
    token: &AccessToken,
    organization_id: &str,
    phone: &str,
) -> Option<DeliveryHistory> {
    client
        .delivery_history(token, organization_id, phone)
        .await
        .inspect_err(|e| report_failure("get_delivery_history", e))
        .ok()
}

/// Fetches the organization directory, or `None` on any failure.
pub async fn get_organizations(
    client: &LoyaltyClient,
    token: &AccessToken,
    request_timeout: u32,
) -> Option<Vec<Organization>> {
    client
        .organizations(token, request_timeout)
        .await
        .inspect_err(|e| report_failure("get_organizations", e))
        .ok()
}

/// Runs the whole lookup and writes the report to `out`.
///
/// API failures never surface as `Err`; they end the run early with a
/// message and the matching [`RunOutcome`]. Only failures to render or
/// write the report are returned as errors.
pub async fn run<W: Write>(
    client: &LoyaltyClient,
    config: &Config,
    out: &mut W,
) -> Result<RunOutcome, LoyaltyError> {
    let Some(token) = get_access_token(client, &config.credentials).await else {
        writeln!(out, "{}", TOKEN_UNAVAILABLE_MESSAGE)?;
        return Ok(RunOutcome::TokenUnavailable);
    };

    let history = get_delivery_history(client, &token, &config.organization_id, &config.phone)
        .await
        .filter(|h| !h.is_empty());
    let Some(history) = history else {
        writeln!(out, "{}", HISTORY_NOT_FOUND_MESSAGE)?;
        return Ok(RunOutcome::HistoryNotFound);
    };

    writeln!(out, "\nDelivery history:")?;
    writeln!(out, "{}", history.to_pretty_json()?)?;

    let organization_id = match history.organization_id() {
        Some(id) => {
            writeln!(out, "\nOrganization ID: {}", id)?;
            id
        }
        None => {
            writeln!(out, "{}", EXTRACTION_FAILED_MESSAGE)?;
            return Ok(RunOutcome::OrganizationIdMissing);
        }
    };
    if organization_id.is_empty() {
        return Ok(RunOutcome::OrganizationIdMissing);
    }
    let organization_id = organization_id.to_string();

    let organizations = get_organizations(client, &token, config.request_timeout)
        .await
        .filter(|orgs| !orgs.is_empty());
    let Some(organizations) = organizations else {
        writeln!(out, "{}", ORGANIZATIONS_UNAVAILABLE_MESSAGE)?;
        return Ok(RunOutcome::OrganizationsUnavailable { organization_id });
    };

    let matched = match find_organization_by_id(&organizations, &organization_id) {
        Some(org) => {
            writeln!(out, "\nOrganization details:")?;
            writeln!(out, "{}", org.to_pretty_json()?)?;
            true
        }
        None => {
            writeln!(
                out,
                "\nOrganization with ID {} was not found in the organization list.",
                organization_id
            )?;
            false
        }
    };

    display_all_organizations(out, Some(&organizations))?;

    Ok(RunOutcome::Completed {
        organization_id,
        matched,
    })
}
