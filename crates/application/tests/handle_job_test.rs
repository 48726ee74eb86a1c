mod helpers;

use batchdns_application::resolver::ChainFactory;
use batchdns_application::use_cases::{HandleJobUseCase, ResolveBatchUseCase};
use batchdns_domain::{DomainError, Job, JobData, JobInput, RecordKind};
use helpers::MockDnsLookup;
use std::sync::Arc;

fn use_case(lookup: Arc<MockDnsLookup>, mode: &str) -> HandleJobUseCase {
    let batch = Arc::new(ResolveBatchUseCase::new(ChainFactory::new(lookup), 4));
    HandleJobUseCase::new(batch, mode)
}

fn job(job_type: u32, domains: &[&str]) -> Job {
    Job {
        data: JobData {
            job_type,
            input: JobInput {
                domains: domains.iter().map(|name| name.to_string()).collect(),
            },
            outputs: Vec::new(),
        },
        last_activity_id: None,
        last_activity_message: None,
        last_activity_is_ok: false,
    }
}

// ── job-level rejections ───────────────────────────────────────────────────

#[tokio::test]
async fn test_unsupported_mode_rejects_before_any_resolution() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_records("ok.example.com", RecordKind::A, &["1.2.3.4"]);

    let handler = use_case(Arc::clone(&lookup), "PTR");
    let err = handler
        .execute(job(0, &["ok.example.com"]))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::UnsupportedMode(mode) if mode == "PTR"));
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn test_unsupported_job_type_is_rejected() {
    let lookup = Arc::new(MockDnsLookup::new());

    let handler = use_case(Arc::clone(&lookup), "A");
    let err = handler.execute(job(7, &["ok.example.com"])).await.unwrap_err();

    assert!(matches!(err, DomainError::UnsupportedJobType(7)));
    assert_eq!(lookup.call_count(), 0);
}

// ── output shaping ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_successful_batch_appends_activity_output() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_records("ok.example.com", RecordKind::A, &["1.2.3.4"]);

    let handler = use_case(lookup, "A");
    let job = handler.execute(job(0, &["ok.example.com"])).await.unwrap();

    assert_eq!(job.data.outputs.len(), 1);
    let output = &job.data.outputs[0];
    assert_eq!(output.index, 0);
    assert_eq!(output.id, "lookup-a");
    assert_eq!(output.data, r#"["1.2.3.4"]"#);
    assert!(output.is_ok);
    assert_eq!(output.message, "completed");

    assert_eq!(job.last_activity_id.as_deref(), Some("lookup-a"));
    assert_eq!(job.last_activity_message.as_deref(), Some("completed"));
    assert!(job.last_activity_is_ok);
}

#[tokio::test]
async fn test_failed_batch_keeps_placeholders_and_clears_ok_flag() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_records("ok.example.com", RecordKind::A, &["1.2.3.4"]);
    lookup.set_error(
        "down.example.com",
        RecordKind::A,
        DomainError::UpstreamFailure("SERVFAIL".to_string()),
    );

    let handler = use_case(lookup, "A");
    let job = handler
        .execute(job(0, &["ok.example.com", "down.example.com"]))
        .await
        .unwrap();

    let output = &job.data.outputs[0];
    assert_eq!(output.data, r#"["1.2.3.4",""]"#);
    assert!(!output.is_ok);
    assert_eq!(output.message, "completed with errors");
    assert!(!job.last_activity_is_ok);
}

#[tokio::test]
async fn test_output_index_continues_the_history() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_records("ok.example.com", RecordKind::A, &["1.2.3.4"]);

    let handler = use_case(lookup, "A");
    let mut input = job(0, &["ok.example.com"]);
    input.data.outputs.push(batchdns_domain::ActivityOutput {
        index: 0,
        id: "lookup-a".to_string(),
        data: "[]".to_string(),
        is_ok: true,
        message: "completed".to_string(),
    });

    let job = handler.execute(input).await.unwrap();

    assert_eq!(job.data.outputs.len(), 2);
    assert_eq!(job.data.outputs[1].index, 1);
}

#[tokio::test]
async fn test_empty_domain_list_completes_vacuously() {
    let lookup = Arc::new(MockDnsLookup::new());

    let handler = use_case(lookup, "A");
    let job = handler.execute(job(0, &[])).await.unwrap();

    let output = &job.data.outputs[0];
    assert_eq!(output.data, "[]");
    assert!(output.is_ok);
    assert_eq!(output.message, "completed");
}

#[tokio::test]
async fn test_cname_mode_records_its_own_activity_id() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_records("www.example.com", RecordKind::Cname, &["edge.example.net"]);
    lookup.set_records("edge.example.net", RecordKind::A, &["198.51.100.7"]);

    let handler = use_case(lookup, "CNAME");
    let job = handler.execute(job(0, &["www.example.com"])).await.unwrap();

    assert_eq!(job.data.outputs[0].id, "lookup-cname");
    assert_eq!(job.data.outputs[0].data, r#"["198.51.100.7"]"#);
}
