/*
 * templates/bail_application.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

use crate::block::{Alignment, Block, Blocks};
use crate::fields::names;
use crate::resolver::ResolvedFields;

pub const FIELDS: &[&str] = &[names::CLIENT_NAME, names::CASE_DETAILS];

pub const TITLE: &str = "IN THE COURT OF THE SESSIONS JUDGE";
pub const SUBTITLE: &str = "APPLICATION FOR GRANT OF BAIL";

/// Case numbers are assigned by the court registry, so the line is left blank.
pub const CASE_NUMBER_LINE: &str = "BAIL APPLICATION NO. ______ OF 2025";

/// Build a bail application with the client as applicant and the State as
/// respondent.
pub fn build(fields: &ResolvedFields) -> Blocks {
    vec![
        Block::heading(TITLE, 1, Alignment::Center),
        Block::blank(),
        Block::text(CASE_NUMBER_LINE),
        Block::text("IN THE MATTER OF:"),
        Block::text(format!("{} ...APPLICANT", fields.client_name)),
        Block::text("VERSUS"),
        Block::text("STATE ...RESPONDENT"),
        Block::blank(),
        Block::heading(SUBTITLE, 2, Alignment::Center),
        Block::blank(),
        Block::text("The applicant most respectfully submits as under:"),
        Block::text(format!(
            "1. That the applicant is innocent and has been falsely implicated based on the following facts: {}.",
            fields.case_details
        )),
        Block::text(
            "2. That the applicant undertakes to abide by the conditions imposed by this Hon'ble Court.",
        ),
        Block::blank(),
        Block::text(
            "It is, therefore, most respectfully prayed that this Hon'ble Court may be pleased to grant bail to the applicant.",
        ),
    ]
}
