//! End-to-end scans of declaration trees on disk

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use typegraph::{
    scan_for_types, BatchReport, DeclarationKind, ErrorKind, LanguageVersion, MemberKind,
    ScanConfig, ScanOptions, TreeSitterDeclarationParser, TypeScanner,
};

const CORE: &str = r#"
/**
 * Base entity.
 * @since 1.0
 */
export interface Entity {
    /** Primary key */
    id: string;
    createdAt?: Date;
}

export declare enum Status {
    Active = "active",
    Archived = 2,
    "on-hold",
}

export type Id = string | number;

declare namespace Internal {
    interface Hidden { secret: string }
}

export declare function load(id: Id): Entity;
"#;

const USER: &str = r#"
import { Entity } from "./core";

/** @deprecated use Account */
export interface User extends Entity, Record<string, unknown> {
    name: string;
    [Symbol.iterator](): Iterator<string>;
    (): void;
    readonly "display-name": string;
}
"#;

#[test]
fn test_scan_directory_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(
        dir.path(),
        &[
            ("core.d.ts", CORE),
            ("models/user.d.ts", USER),
            ("models/user.ts", "export interface NotADeclarationFile {}"),
        ],
    );

    let batch = scan_for_types(dir.path(), &ScanOptions::default()).unwrap();

    let summary: Vec<_> = batch.iter().map(|d| (d.name.as_str(), d.kind)).collect();
    assert_eq!(
        summary,
        vec![
            ("Entity", DeclarationKind::Interface),
            ("Status", DeclarationKind::Enum),
            ("Id", DeclarationKind::TypeAlias),
            ("User", DeclarationKind::Interface),
        ]
    );

    let entity = batch.first_named("Entity").unwrap();
    assert_eq!(entity.docs[0].comment.as_deref(), Some("Base entity."));
    assert_eq!(entity.docs[0].tag("since").map(|t| t.comment.as_str()), Some("1.0"));
    assert_eq!(entity.members[0].docs[0].comment.as_deref(), Some("Primary key"));
    assert!(entity.members[1].is_optional);
    assert!(entity.origin.file_path.ends_with("core.d.ts"));

    let status = batch.first_named("Status").unwrap();
    let names: Vec<_> = status.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Active", "Archived", "on-hold"]);
    assert!(status.members.iter().all(|m| m.kind == MemberKind::EnumMember));

    let user = batch.first_named("User").unwrap();
    assert!(user.docs[0].is_deprecated());
    let own: Vec<_> = user.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(own, vec!["name", "display-name"]);
    assert_eq!(
        merged_owners(&batch, user.id),
        owners(&[
            ("id", "Entity"),
            ("createdAt", "Entity"),
            ("name", "User"),
            ("display-name", "User"),
        ])
    );

    let references = &user.heritage[0].references;
    assert_eq!(references[0].resolved_targets, vec![entity.id]);
    assert!(references[1].resolved_targets.is_empty());
    assert_eq!(references[1].referenced_name, "Record<string, unknown>");
}

#[test]
fn test_empty_directory_yields_empty_batch() {
    let dir = tempfile::tempdir().unwrap();
    let batch = scan_for_types(dir.path(), &ScanOptions::default()).unwrap();
    assert!(batch.is_empty());
}

#[test]
fn test_missing_directory_is_discovery_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = scan_for_types(dir.path().join("nope"), &ScanOptions::default()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Discovery);
}

#[test]
fn test_yaml_config_drives_scan() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(
        dir.path(),
        &[
            ("scan.yaml", "language_version: es2022\nskip_dirs: [vendor]\nparallel: false\n"),
            ("types/a.d.ts", "interface A {}"),
            ("vendor/b.d.ts", "interface B {}"),
        ],
    );

    let config = ScanConfig::from_yaml_file(dir.path().join("scan.yaml")).unwrap();
    assert_eq!(config.language_version, LanguageVersion::Es2022);

    let batch = TypeScanner::new(config).unwrap().scan_dir(dir.path()).unwrap();
    let names: Vec<_> = batch.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn test_strict_mode_reports_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(
        dir.path(),
        &[("ok.d.ts", "interface A {}"), ("broken.d.ts", "interface A {}\n\ninterface {{{\n")],
    );

    let options = ScanOptions::new(ScanConfig::default().strict_syntax(true));
    let err = scan_for_types(dir.path(), &options).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Parse);
    assert!(err.file_path.as_deref().unwrap().ends_with("broken.d.ts"));
    assert!(err.line.unwrap() >= 1);
}

#[test]
fn test_custom_parser_is_used() {
    let dir = tempfile::tempdir().unwrap();
    write_tree(dir.path(), &[("view.d.ts", "export interface Props { el: string }")]);

    let options = ScanOptions::default()
        .with_language_version(LanguageVersion::EsNext)
        .with_parser(Arc::new(TreeSitterDeclarationParser::tsx()));
    let batch = scan_for_types(dir.path(), &options).unwrap();
    assert_eq!(batch.len(), 1);
}

#[test]
fn test_report_json_shape() {
    let batch = scan_sources(&[("core.d.ts", CORE), ("user.d.ts", USER)]);
    let report = BatchReport::from_batch(&batch, Some("User"));
    let value: serde_json::Value = serde_json::from_str(&report.to_json(true).unwrap()).unwrap();

    assert_eq!(value["total_declarations"], 4);
    assert_eq!(value["unresolved_references"], 1);
    let user = &value["declarations"][0];
    assert_eq!(user["name"], "User");
    assert_eq!(user["merged_members"].as_array().unwrap().len(), 4);
    assert_eq!(user["heritage"][0]["references"][0]["targets"][0]["name"], "Entity");
}
