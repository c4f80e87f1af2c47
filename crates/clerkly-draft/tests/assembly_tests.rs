/*
 * assembly_tests.rs
 * Copyright (c) 2025 Clerkly Contributors
 *
 * End-to-end tests for document assembly.
 */

use clerkly_draft::{
    Alignment, Block, DocumentType, DraftError, FieldMap, FieldStore, OutputFormat, Run, assemble,
    write_to_string,
};
use pretty_assertions::assert_eq;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

fn fields(pairs: &[(&str, &str)]) -> FieldMap {
    pairs.iter().copied().collect()
}

/// Text of every paragraph whose first run starts with an ordinal marker.
fn numbered_clauses(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter(|b| matches!(b, Block::Paragraph { .. }))
        .map(Block::plain_text)
        .filter(|text| {
            text.split_once(". That")
                .is_some_and(|(n, _)| n.chars().all(|c| c.is_ascii_digit()))
        })
        .collect()
}

/// Parsed shape of a Markdown rendering.
#[derive(Debug, Default)]
struct MarkdownOutline {
    headings: usize,
    lists: usize,
    quotes: usize,
    /// Text of each paragraph, with line breaks as `\n`.
    paragraphs: Vec<String>,
}

fn outline(markdown: &str) -> MarkdownOutline {
    let mut outline = MarkdownOutline::default();
    let mut current: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { .. }) => outline.headings += 1,
            Event::Start(Tag::List(_)) => outline.lists += 1,
            Event::Start(Tag::BlockQuote(_)) => outline.quotes += 1,
            Event::Start(Tag::Paragraph) => current = Some(String::new()),
            Event::End(TagEnd::Paragraph) => outline.paragraphs.extend(current.take()),
            Event::Text(text) => {
                if let Some(p) = current.as_mut() {
                    p.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(p) = current.as_mut() {
                    p.push('\n');
                }
            }
            _ => {}
        }
    }
    outline
}

#[test]
fn test_assembly_is_deterministic() {
    let input = fields(&[
        ("clientName", "Jane Doe"),
        ("caseDetails", "the goods were never delivered"),
        ("opponentName", "Acme Traders"),
    ]);

    for doc_type in DocumentType::all() {
        let first = assemble(doc_type.id(), &input).unwrap();
        let second = assemble(doc_type.id(), &input).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_empty_optional_fields_use_placeholders() {
    let doc = assemble(
        "legal-notice",
        &fields(&[("clientName", "Jane Doe"), ("caseDetails", "x")]),
    )
    .unwrap();

    assert_eq!(doc.blocks()[3], Block::text("[Opponent Name]"));
    assert_eq!(doc.blocks()[4], Block::text("[Opponent Address]"));
    assert_eq!(
        doc.blocks()[11],
        Block::text("2. That you are hereby called upon to provide the following relief: [Relief Sought].")
    );
}

#[test]
fn test_missing_client_name_is_rejected() {
    let err = assemble("legal-notice", &fields(&[("caseDetails", "x")])).unwrap_err();
    assert_eq!(
        err,
        DraftError::MissingRequiredField {
            fields: vec!["clientName".to_string()]
        }
    );
}

#[test]
fn test_whitespace_only_required_field_is_rejected() {
    let err = assemble(
        "bail-application",
        &fields(&[("clientName", "Ravi Kumar"), ("caseDetails", "   ")]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        DraftError::MissingRequiredField {
            fields: vec!["caseDetails".to_string()]
        }
    );
}

#[test]
fn test_required_fields_present_succeeds() {
    let doc = assemble(
        "legal-notice",
        &fields(&[("clientName", "A"), ("caseDetails", "x")]),
    );
    assert!(doc.is_ok());
}

#[test]
fn test_unknown_type_is_rejected() {
    let err = assemble("nonexistent-type", &FieldMap::new()).unwrap_err();
    assert_eq!(
        err,
        DraftError::UnknownTemplateType {
            name: "nonexistent-type".to_string()
        }
    );
}

#[test]
fn test_client_name_bold_inline() {
    let doc = assemble(
        "legal-notice",
        &fields(&[("clientName", "Jane Doe"), ("caseDetails", "x")]),
    )
    .unwrap();

    let expected = Block::paragraph(vec![
        Run::plain("Under the instructions from and on behalf of my client "),
        Run::bold("Jane Doe"),
        Run::plain(", I do hereby serve you with the following Legal Notice:"),
    ]);
    assert!(doc.blocks().contains(&expected));
}

#[test]
fn test_numbering_is_literal_and_ordered() {
    // Field content that itself looks like a clause must not disturb numbering.
    let input = fields(&[
        ("clientName", "A"),
        ("caseDetails", "7. That nothing happened"),
        ("reliefSought", "1. That damages be paid"),
    ]);

    let notice = assemble("legal-notice", &input).unwrap();
    let clauses = numbered_clauses(notice.blocks());
    assert_eq!(clauses.len(), 3);
    for (i, clause) in clauses.iter().enumerate() {
        assert!(
            clause.starts_with(&format!("{}. That", i + 1)),
            "clause {} was {:?}",
            i + 1,
            clause
        );
    }

    let bail = assemble("bail-application", &input).unwrap();
    let clauses = numbered_clauses(bail.blocks());
    assert_eq!(clauses.len(), 2);
    assert!(clauses[0].starts_with("1. That"));
    assert!(clauses[1].starts_with("2. That"));
}

#[test]
fn test_bail_application_end_to_end() {
    let doc = assemble(
        "bail-application",
        &fields(&[
            ("clientName", "Ravi Kumar"),
            ("caseDetails", "the applicant was not present at the scene"),
        ]),
    )
    .unwrap();

    let expected = vec![
        Block::heading("IN THE COURT OF THE SESSIONS JUDGE", 1, Alignment::Center),
        Block::BlankLine,
        Block::text("BAIL APPLICATION NO. ______ OF 2025"),
        Block::text("IN THE MATTER OF:"),
        Block::text("Ravi Kumar ...APPLICANT"),
        Block::text("VERSUS"),
        Block::text("STATE ...RESPONDENT"),
        Block::BlankLine,
        Block::heading("APPLICATION FOR GRANT OF BAIL", 2, Alignment::Center),
        Block::BlankLine,
        Block::text("The applicant most respectfully submits as under:"),
        Block::text(
            "1. That the applicant is innocent and has been falsely implicated based on the following facts: the applicant was not present at the scene.",
        ),
        Block::text(
            "2. That the applicant undertakes to abide by the conditions imposed by this Hon'ble Court.",
        ),
        Block::BlankLine,
        Block::text(
            "It is, therefore, most respectfully prayed that this Hon'ble Court may be pleased to grant bail to the applicant.",
        ),
    ];

    assert_eq!(doc.blocks(), expected.as_slice());
}

#[test]
fn test_field_values_keep_their_whitespace() {
    let doc = assemble(
        "legal-notice",
        &fields(&[
            ("clientName", "Jane Doe"),
            ("caseDetails", "x"),
            ("opponentName", "  M/s  Acme  "),
        ]),
    )
    .unwrap();

    assert_eq!(doc.blocks()[3], Block::text("  M/s  Acme  "));
}

#[test]
fn test_field_store_snapshot_feeds_assembly() {
    let mut store = FieldStore::new();
    store.set("clientName", "Jane Doe");
    store.set("caseDetails", "the cheque was dishonoured");
    store.set("opponentName", "R. Sharma");

    let doc = assemble("legal-notice", &store.snapshot()).unwrap();
    store.clear();

    assert_eq!(doc.blocks()[3], Block::text("R. Sharma"));
}

#[test]
fn test_legal_notice_plain_text() {
    let doc = assemble(
        "legal-notice",
        &fields(&[
            ("clientName", "Jane Doe"),
            ("caseDetails", "the tenant has not paid rent since March"),
        ]),
    )
    .unwrap();

    let text = write_to_string(&doc, OutputFormat::Plain).unwrap();
    insta::assert_snapshot!(text, @r"
    LEGAL NOTICE

    To,
    [Opponent Name]
    [Opponent Address]

    Sir,

    Under the instructions from and on behalf of my client Jane Doe, I do hereby serve you with the following Legal Notice:

    1. That the facts of the case are briefly that the tenant has not paid rent since March.
    2. That you are hereby called upon to provide the following relief: [Relief Sought].
    3. That a copy of this notice is kept in my office for record and further necessary action.
    ");
}

#[test]
fn test_bail_application_markdown() {
    let doc = assemble(
        "bail-application",
        &fields(&[("clientName", "Ravi Kumar"), ("caseDetails", "none")]),
    )
    .unwrap();

    let text = write_to_string(&doc, OutputFormat::Markdown).unwrap();
    assert!(text.starts_with("# IN THE COURT OF THE SESSIONS JUDGE\n"));
    assert!(text.contains("\n## APPLICATION FOR GRANT OF BAIL\n"));
    assert!(text.contains("\nRavi Kumar ...APPLICANT\n"));
    assert_eq!(text.matches("&nbsp;").count(), 4);
}

#[test]
fn test_legal_notice_markdown_keeps_clause_numbers() {
    let doc = assemble(
        "legal-notice",
        &fields(&[("clientName", "Jane Doe"), ("caseDetails", "x")]),
    )
    .unwrap();

    let text = write_to_string(&doc, OutputFormat::Markdown).unwrap();
    assert!(text.contains("\n1\\. That the facts"));

    let parsed = outline(&text);
    assert_eq!(parsed.lists, 0);
    assert_eq!(parsed.headings, 1);

    let clauses: Vec<&String> = parsed
        .paragraphs
        .iter()
        .filter(|p| p.contains(". That"))
        .collect();
    assert_eq!(
        clauses,
        vec![
            "1. That the facts of the case are briefly that x.",
            "2. That you are hereby called upon to provide the following relief: [Relief Sought].",
            "3. That a copy of this notice is kept in my office for record and further necessary action.",
        ]
    );
}

#[test]
fn test_markdown_field_values_cannot_add_structure() {
    let doc = assemble(
        "legal-notice",
        &fields(&[
            ("clientName", "Jane Doe"),
            ("opponentName", "# Acme Traders"),
            ("opponentAddress", "- 12 Main Road\n+ Floor 2"),
            ("caseDetails", "the goods were damaged\n> in transit\n2. twice"),
        ]),
    )
    .unwrap();

    let text = write_to_string(&doc, OutputFormat::Markdown).unwrap();
    let parsed = outline(&text);

    assert_eq!(parsed.headings, 1);
    assert_eq!(parsed.lists, 0);
    assert_eq!(parsed.quotes, 0);
    assert!(parsed.paragraphs.contains(&"# Acme Traders".to_string()));
    assert!(
        parsed
            .paragraphs
            .contains(&"- 12 Main Road\n+ Floor 2".to_string())
    );
    assert!(parsed.paragraphs.contains(
        &"1. That the facts of the case are briefly that the goods were damaged\n> in transit\n2. twice."
            .to_string()
    ));
}
