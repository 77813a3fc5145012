//! Loading and applying edit plans.

use pretty_assertions::assert_eq;
use splice_blocks::{BoundaryConfig, Edit, EditReport, Error, Outcome, Plan};
use splice_fs::TargetPath;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_load_toml_plan() {
    let temp = TempDir::new().unwrap();
    let plan_path = write(
        &temp,
        "plan.toml",
        r#"
[[edit]]
kind = "splice"
path = "screen.tsx"
start_marker = "// effects"
payload = "new\n"

[edit.boundary]
kind = "contains_followed_by"
marker = "useEffect(() => {"
next_contains = "fetchSystemData"

[[edit]]
kind = "rewrite"
path = "other.tsx"
content_file = "other.tsx.new"
"#,
    );

    let plan = Plan::load(&TargetPath::new(&plan_path)).unwrap();

    assert_eq!(plan.edits.len(), 2);
    assert_eq!(
        plan.edits[0],
        Edit::Splice {
            path: "screen.tsx".into(),
            start_marker: "// effects".into(),
            boundary: BoundaryConfig::ContainsFollowedBy {
                marker: "useEffect(() => {".into(),
                next_contains: "fetchSystemData".into(),
            },
            payload: Some("new\n".into()),
            payload_file: None,
        }
    );
    assert_eq!(plan.base_dir, Some(TargetPath::new(temp.path())));
}

#[test]
fn test_load_json_plan_with_unit_boundary() {
    let temp = TempDir::new().unwrap();
    let plan_path = write(
        &temp,
        "plan.json",
        r#"{"edit": [{"kind": "splice", "path": "a.txt", "start_marker": "M", "payload": "x\n", "boundary": {"kind": "end_of_document"}}]}"#,
    );

    let plan = Plan::load(&TargetPath::new(&plan_path)).unwrap();

    match &plan.edits[0] {
        Edit::Splice { boundary, .. } => assert_eq!(boundary, &BoundaryConfig::EndOfDocument),
        other => panic!("unexpected edit {other:?}"),
    }
}

#[test]
fn test_apply_runs_edits_in_order_relative_to_plan() {
    let temp = TempDir::new().unwrap();
    write(&temp, "screen.tsx", "head\n// effects\nold\n// end\ntail\n");
    write(&temp, "effects.part", "new 1\nnew 2\n");
    write(&temp, "settings.tsx", "stale\n");
    let plan_path = write(
        &temp,
        "plan.yaml",
        r#"
edit:
  - kind: splice
    path: screen.tsx
    start_marker: "// effects"
    payload_file: effects.part
    boundary:
      kind: contains
      marker: "// end"
  - kind: splice
    path: screen.tsx
    start_marker: "// absent"
    payload: "unused\n"
    boundary:
      kind: regex
      pattern: "^tail$"
  - kind: rewrite
    path: settings.tsx
    content: "fresh\n"
"#,
    );

    let plan = Plan::load(&TargetPath::new(&plan_path)).unwrap();
    let reports = plan.apply().unwrap();

    assert_eq!(reports.len(), 3);
    assert!(matches!(&reports[0], EditReport::Splice(r) if r.found()));
    assert!(matches!(&reports[1], EditReport::Splice(r) if r.outcome == Outcome::NotFound));
    assert!(matches!(&reports[2], EditReport::Rewrite(r) if r.changed()));
    assert_eq!(
        fs::read_to_string(temp.path().join("screen.tsx")).unwrap(),
        "head\n// effects\nnew 1\nnew 2\n// end\ntail\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("settings.tsx")).unwrap(),
        "fresh\n"
    );
}

#[test]
fn test_invalid_edit_is_rejected_before_any_write() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.txt", "M\nold\n");
    let plan = Plan {
        edits: vec![
            Edit::Rewrite {
                path: temp.path().join("a.txt"),
                content: Some("rewritten\n".into()),
                content_file: None,
            },
            Edit::Splice {
                path: temp.path().join("a.txt"),
                start_marker: "M".into(),
                boundary: BoundaryConfig::Regex {
                    pattern: "(".into(),
                },
                payload: Some("x\n".into()),
                payload_file: None,
            },
        ],
        base_dir: None,
    };

    let err = plan.apply().unwrap_err();

    assert!(matches!(err, Error::InvalidEdit { index: 1, .. }));
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "M\nold\n");
}

#[test]
fn test_payload_and_payload_file_conflict() {
    let plan = Plan {
        edits: vec![Edit::Splice {
            path: "a.txt".into(),
            start_marker: "M".into(),
            boundary: BoundaryConfig::EndOfDocument,
            payload: Some("x".into()),
            payload_file: Some("x.part".into()),
        }],
        base_dir: None,
    };

    assert!(matches!(plan.validate(), Err(Error::InvalidEdit { index: 0, .. })));
}

#[test]
fn test_missing_target_aborts_run() {
    let temp = TempDir::new().unwrap();
    write(&temp, "b.txt", "untouched\n");
    let plan = Plan {
        edits: vec![
            Edit::Splice {
                path: "missing.txt".into(),
                start_marker: "M".into(),
                boundary: BoundaryConfig::EndOfDocument,
                payload: Some("x\n".into()),
                payload_file: None,
            },
            Edit::Rewrite {
                path: "b.txt".into(),
                content: Some("changed\n".into()),
                content_file: None,
            },
        ],
        base_dir: Some(TargetPath::new(temp.path())),
    };

    let err = plan.apply().unwrap_err();

    assert!(matches!(err, Error::Fs(_)));
    assert_eq!(fs::read_to_string(temp.path().join("b.txt")).unwrap(), "untouched\n");
}

#[test]
fn test_apply_with_reports_each_edit_in_order() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.txt", "M\nold\nEND\n");
    let plan = Plan {
        edits: vec![
            Edit::Splice {
                path: "a.txt".into(),
                start_marker: "M".into(),
                boundary: BoundaryConfig::Contains {
                    marker: "END".into(),
                },
                payload: Some("new\n".into()),
                payload_file: None,
            },
            Edit::Rewrite {
                path: "b.txt".into(),
                content: Some("b\n".into()),
                content_file: None,
            },
        ],
        base_dir: Some(TargetPath::new(temp.path())),
    };
    let mut seen = Vec::new();

    let reports = plan
        .apply_with(|index, report| seen.push((index, report.clone())))
        .unwrap();

    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, 0);
    assert!(matches!(&seen[0].1, EditReport::Splice(r) if r.found()));
    assert!(matches!(&seen[1].1, EditReport::Rewrite(r) if r.created()));
    assert_eq!(
        reports,
        seen.into_iter().map(|(_, report)| report).collect::<Vec<_>>()
    );
}

#[test]
fn test_apply_with_skips_callback_for_invalid_plan() {
    let plan = Plan {
        edits: vec![Edit::Rewrite {
            path: "a.txt".into(),
            content: None,
            content_file: None,
        }],
        base_dir: None,
    };
    let mut calls = 0;

    let result = plan.apply_with(|_, _| calls += 1);

    assert!(matches!(result, Err(Error::InvalidEdit { index: 0, .. })));
    assert_eq!(calls, 0);
}
