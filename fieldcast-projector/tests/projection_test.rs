//! Integration tests for the field projector.
//!
//! These exercise the public surface end to end: record construction,
//! projection, the decode boundary, and the JSON text the external
//! encoder produces from a projection.

use fieldcast_projector::{
    project, project_message, record_from_json, FieldValue, JsonDecoder, ProjectError, Record,
    RecordDecoder,
};

/// The canonical structured-log attribute set must project to the exact
/// camelCase document used by public-facing logs.
#[test]
fn test_log_attributes_scenario() {
    let attrs = Record::new()
        .with_field("job_id", "abc-123")
        .with_field("work_unit_type", "playbook")
        .with_field("org_id", "redhat")
        .with_field("controller_id", "controller-01")
        .with_field("username", "arestle");

    let projection = project(&attrs).unwrap();
    let text = serde_json::to_string(&projection).unwrap();

    assert_eq!(
        text,
        r#"{"jobId":"abc-123","workUnitType":"playbook","orgId":"redhat","controllerId":"controller-01","username":"arestle"}"#
    );
}

/// Mixed scalar types survive projection bit-identical.
#[test]
fn test_user_scenario() {
    let user = Record::new()
        .with_field("id", 1)
        .with_field("first_name", "Alice")
        .with_field("last_name", "Smith")
        .with_field("is_superuser", false);

    let projection = project(&user).unwrap();
    let text = serde_json::to_string(&projection).unwrap();

    assert_eq!(
        text,
        r#"{"id":1,"firstName":"Alice","lastName":"Smith","isSuperuser":false}"#
    );
}

/// A list-valued field holding nested records projects element-wise under
/// the unchanged single-segment key.
#[test]
fn test_results_list_scenario() {
    let user = Record::new()
        .with_field("id", 1)
        .with_field("first_name", "Alice");
    let response = Record::new()
        .with_field("count", 1)
        .with_field("next", "")
        .with_field("previous", "")
        .with_field("results", vec![user]);

    let projection = project(&response).unwrap();

    assert_eq!(projection.len(), 4);
    assert_eq!(projection["results"][0]["firstName"], "Alice");
    assert_eq!(projection["results"][0]["id"], 1);
}

/// Key count never changes, whatever the field mix.
#[test]
fn test_projection_key_count_matches_record() {
    let record = Record::new()
        .with_field("id", 42)
        .with_field("name", "Deploy Web Servers")
        .with_field("status", "pending")
        .with_field("job_template_id", 7)
        .with_field("created", "2025-11-11T14:00:00Z")
        .with_field("started", "")
        .with_field("finished", "")
        .with_field("stdout_url", "/api/v2/jobs/42/stdout/");

    let projection = project(&record).unwrap();
    assert_eq!(projection.len(), record.len());
}

/// Projection is a read-only transformation of the source record.
#[test]
fn test_projection_leaves_record_untouched() {
    let record = Record::new()
        .with_field("org_id", "redhat")
        .with_field("verbosity", 0);
    let before = record.clone();

    let _ = project(&record).unwrap();

    assert_eq!(record, before);
}

/// Decoded bytes and hand-built records project identically.
#[test]
fn test_decoder_to_projection_pipeline() {
    let decoded = JsonDecoder::new()
        .decode(br#"{"job_id": "abc-123", "work_unit_type": "playbook"}"#)
        .unwrap();
    let built = Record::new()
        .with_field("job_id", "abc-123")
        .with_field("work_unit_type", "playbook");

    assert_eq!(project(&decoded).unwrap(), project(&built).unwrap());
}

/// The serialize-then-project bridge agrees with explicit construction,
/// including through nested message lists.
#[test]
fn test_message_bridge_round_trip() {
    #[derive(serde::Serialize)]
    struct Member {
        org_id: String,
        is_superuser: bool,
    }

    #[derive(serde::Serialize)]
    struct Roster {
        count: i32,
        results: Vec<Member>,
    }

    let roster = Roster {
        count: 1,
        results: vec![Member {
            org_id: "redhat".to_string(),
            is_superuser: false,
        }],
    };

    let projection = project_message(&roster).unwrap();

    assert_eq!(projection["count"], 1);
    assert_eq!(projection["results"][0]["orgId"], "redhat");
    assert_eq!(projection["results"][0]["isSuperuser"], false);
}

/// Malformed names surface as `InvalidFieldName` with the name attached,
/// from any depth.
#[test]
fn test_invalid_names_fail_fast() {
    let record = Record::new().with_field("stdout__url", "/api/");

    match project(&record) {
        Err(ProjectError::InvalidFieldName { name, .. }) => assert_eq!(name, "stdout__url"),
        other => panic!("expected InvalidFieldName, got {:?}", other),
    }
}

/// `record_from_json` accepts a parsed tree directly, so callers holding a
/// `serde_json::Value` skip the byte round trip.
#[test]
fn test_record_from_parsed_tree() {
    let tree = serde_json::json!({
        "page": 1,
        "page_size": 25,
        "search": "alice"
    });

    let record = record_from_json(&tree).unwrap();

    assert_eq!(record.len(), 3);
    assert_eq!(record.get("page_size"), Some(&FieldValue::Integer(25)));
}
