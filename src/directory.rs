//! Organization directory lookup and console listing.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::models::Organization;

/// Printed instead of the listing when there is nothing to show.
pub const EMPTY_DIRECTORY_MESSAGE: &str = "Organization list is empty or was not retrieved.";

const MISSING_ID: &str = "Unknown ID";
const MISSING_NAME: &str = "Untitled";

/// Returns the first organization whose `organizationId` equals `organization_id`.
///
/// Entries are scanned in the order the server returned them.
pub fn find_organization_by_id<'a>(
    directory: &'a [Organization],
    organization_id: &str,
) -> Option<&'a Organization> {
    directory
        .iter()
        .find(|org| org.id() == Some(organization_id))
}

/// Formats one `ID: .., Name: ..` line per organization.
pub fn format_all_organizations(directory: Option<&[Organization]>) -> String {
    let orgs = match directory {
        Some(orgs) if !orgs.is_empty() => orgs,
        _ => return format!("{}\n", EMPTY_DIRECTORY_MESSAGE),
    };

    let mut output = String::from("\nAll organizations:\n");
    for org in orgs {
        output.push_str(&format!(
            "ID: {}, Name: {}\n",
            org.field_text("organizationId")
                .unwrap_or(Cow::Borrowed(MISSING_ID)),
            org.field_text("name").unwrap_or(Cow::Borrowed(MISSING_NAME))
        ));
    }
    output
}

/// Writes the organization listing to `out`.
pub fn display_all_organizations<W: Write>(
    out: &mut W,
    directory: Option<&[Organization]>,
) -> io::Result<()> {
    out.write_all(format_all_organizations(directory).as_bytes())
}
