/*
 * templates/legal_notice.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

use crate::block::{Alignment, Block, Blocks, Run};
use crate::fields::names;
use crate::resolver::ResolvedFields;

pub const TITLE: &str = "LEGAL NOTICE";

pub const FIELDS: &[&str] = &[
    names::CLIENT_NAME,
    names::OPPONENT_NAME,
    names::OPPONENT_ADDRESS,
    names::CASE_DETAILS,
    names::RELIEF_SOUGHT,
];

/// Build a legal notice addressed to the opponent on behalf of the client.
pub fn build(fields: &ResolvedFields) -> Blocks {
    vec![
        Block::heading(TITLE, 1, Alignment::Center),
        Block::blank(),
        Block::text("To,"),
        Block::text(&fields.opponent_name),
        Block::text(&fields.opponent_address),
        Block::blank(),
        Block::text("Sir,"),
        Block::blank(),
        Block::paragraph(vec![
            Run::plain("Under the instructions from and on behalf of my client "),
            Run::bold(&fields.client_name),
            Run::plain(", I do hereby serve you with the following Legal Notice:"),
        ]),
        Block::blank(),
        Block::text(format!(
            "1. That the facts of the case are briefly that {}.",
            fields.case_details
        )),
        Block::text(format!(
            "2. That you are hereby called upon to provide the following relief: {}.",
            fields.relief_sought
        )),
        Block::text(
            "3. That a copy of this notice is kept in my office for record and further necessary action.",
        ),
    ]
}
