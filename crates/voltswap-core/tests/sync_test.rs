#![allow(clippy::unwrap_used)]
// Integration tests for `SyncService` and `PaymentFlow` using wiremock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use voltswap_api::{ApiClient, MemoryCredentials, TransportConfig};
use voltswap_core::{
    DataStore, NoticeKind, Notifier, PaymentFlow, PaymentRequest, PaymentState, ProfileUpdate,
    StationStatus, SyncError, SyncService, TransactionStatus,
};

// ── Helpers ─────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeKind, String, Option<String>)>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<(NoticeKind, String, Option<String>)> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str, title: Option<&str>) {
        self.notices
            .lock()
            .unwrap()
            .push((kind, message.to_owned(), title.map(str::to_owned)));
    }
}

fn api_for(server: &MockServer) -> Arc<ApiClient> {
    let base = Url::parse(&server.uri()).unwrap();
    let creds = Arc::new(MemoryCredentials::with_token("tok"));
    Arc::new(ApiClient::new(base, creds, &TransportConfig::default()).unwrap())
}

async fn setup() -> (MockServer, SyncService, Arc<RecordingNotifier>) {
    let server = MockServer::start().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = SyncService::new(
        api_for(&server),
        Arc::new(DataStore::new()),
        notifier.clone(),
    );
    (server, service, notifier)
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

fn station_wire(id: &str, name: &str) -> serde_json::Value {
    json!({
        "station_id": id,
        "name": name,
        "address": "12 Ly Thuong Kiet",
        "latitude": 21.02,
        "longitude": 105.85,
        "status": "ACTIVE",
        "available_batteries": 6,
        "empty_slots": 2,
    })
}

// ── Fetch success: wire keys cross into the client convention ───────

#[tokio::test]
async fn fetch_stations_normalizes_into_typed_snapshot() {
    let (server, service, _notifier) = setup().await;
    let id = Uuid::new_v4().to_string();

    Mock::given(method("GET"))
        .and(path("/stations"))
        .respond_with(ok(json!([station_wire(&id, "Hoan Kiem Hub")])))
        .mount(&server)
        .await;

    let snapshot = service.fetch_stations().await;

    assert_eq!(snapshot.len(), 1);
    let station = &snapshot[0];
    assert_eq!(station.station_id, id);
    assert_eq!(station.name, "Hoan Kiem Hub");
    assert_eq!(station.status, StationStatus::Active);
    assert_eq!(station.available_batteries, Some(6));

    // The store write happened before the future resolved.
    assert_eq!(service.store().stations_snapshot().len(), 1);
    assert!(service.store().stations_error().is_none());
    assert!(service.store().last_sync().is_some());
}

#[tokio::test]
async fn fetch_transactions_decodes_status_and_timestamps() {
    let (server, service, _notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/transactions/me"))
        .respond_with(ok(json!([{
            "transaction_id": "T1",
            "station_id": "S1",
            "station_name": "Hoan Kiem Hub",
            "battery_issued_id": "b-out",
            "battery_returned_id": "b-in",
            "amount": 15_000,
            "status": "COMPLETED",
            "created_at": "2026-07-30T09:15:00Z",
        }])))
        .mount(&server)
        .await;

    let snapshot = service.fetch_my_transactions().await;

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].transaction_id, "T1");
    assert_eq!(snapshot[0].status, TransactionStatus::Completed);
    assert!(snapshot[0].created_at.is_some());
}

#[tokio::test]
async fn fetch_station_fills_the_selection_slot() {
    let (server, service, _notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/stations/st-7"))
        .respond_with(ok(station_wire("st-7", "Cau Giay Hub")))
        .mount(&server)
        .await;

    let station = service.fetch_station("st-7").await.unwrap();
    assert_eq!(station.station_id, "st-7");
    assert_eq!(
        service
            .store()
            .selected_station_snapshot()
            .unwrap()
            .station_id,
        "st-7"
    );
}

// ── Fetch failure: neutral snapshot, diagnostic, no rejection ───────

#[tokio::test]
async fn server_error_resolves_with_neutral_snapshot() {
    let (server, service, notifier) = setup().await;

    // Seed the store so the failure demonstrably overwrites it.
    Mock::given(method("GET"))
        .and(path("/stations"))
        .respond_with(ok(json!([station_wire("st-1", "Old")])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    assert_eq!(service.fetch_stations().await.len(), 1);

    Mock::given(method("GET"))
        .and(path("/stations"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let snapshot = service.fetch_stations().await;

    assert!(snapshot.is_empty(), "resolves with the neutral value");
    assert!(service.store().stations_snapshot().is_empty());
    assert_eq!(
        service.store().stations_error(),
        Some(SyncError::Status {
            status: 500,
            message: "boom".into()
        })
    );
    // List fetches fail silently -- no toast.
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn connect_error_resolves_with_neutral_snapshot() {
    // Nothing listens on this port; the connection is refused.
    let base = Url::parse("http://127.0.0.1:9/").unwrap();
    let creds = Arc::new(MemoryCredentials::new());
    let api = Arc::new(ApiClient::new(base, creds, &TransportConfig::default()).unwrap());
    let service = SyncService::new(
        api,
        Arc::new(DataStore::new()),
        Arc::new(RecordingNotifier::default()),
    );

    let snapshot = service.fetch_stations().await;

    assert!(snapshot.is_empty());
    assert!(matches!(
        service.store().stations_error(),
        Some(SyncError::Network { .. })
    ));
}

#[tokio::test]
async fn malformed_body_resolves_with_neutral_snapshot() {
    let (server, service, _notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/batteries/station/st-1/management"))
        .respond_with(ok(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let snapshot = service.fetch_station_batteries("st-1").await;

    assert!(snapshot.is_empty());
    assert!(matches!(
        service.store().station_batteries_error(),
        Some(SyncError::Malformed { .. })
    ));
}

#[tokio::test]
async fn profile_fetch_failure_clears_the_selection() {
    let (server, service, _notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ok(json!({ "user_id": "u1", "full_name": "Lan" })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    assert!(service.fetch_profile().await.is_some());

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(service.fetch_profile().await.is_none());
    assert!(service.store().profile_snapshot().is_none());
    assert!(service.store().profile_error().is_some());
}

// ── Subscriptions ───────────────────────────────────────────────────

#[tokio::test]
async fn subscribers_observe_snapshot_replacement() {
    let (server, service, _notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/stations"))
        .respond_with(ok(json!([station_wire("st-1", "Hub")])))
        .mount(&server)
        .await;

    let mut stream = service.store().subscribe_stations();
    assert!(stream.current().is_empty());

    service.fetch_stations().await;

    let next = stream.changed().await.unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].station_id, "st-1");
}

// ── Concurrency: last response wins, not last call ──────────────────

#[tokio::test]
async fn last_arriving_response_wins_the_snapshot() {
    let (server, service, _notifier) = setup().await;

    // The first request is answered late with station A; the second,
    // fired 100ms afterwards, is answered immediately with station B.
    // B lands first, A lands last -- the final snapshot must hold A.
    Mock::given(method("GET"))
        .and(path("/stations"))
        .respond_with(
            ok(json!([station_wire("st-A", "First Call")]))
                .set_delay(Duration::from_millis(400)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stations"))
        .respond_with(ok(json!([station_wire("st-B", "Second Call")])))
        .mount(&server)
        .await;

    let first = service.fetch_stations();
    let second = async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        service.fetch_stations().await
    };
    let (first_snap, second_snap) = tokio::join!(first, second);

    // Each call resolved with its own response...
    assert_eq!(first_snap[0].station_id, "st-A");
    assert_eq!(second_snap[0].station_id, "st-B");

    // ...but the store keeps whichever response arrived last.
    let final_snap = service.store().stations_snapshot();
    assert_eq!(final_snap.len(), 1);
    assert_eq!(final_snap[0].station_id, "st-A");
}

// ── Profile mutations ───────────────────────────────────────────────

#[tokio::test]
async fn update_profile_sends_wire_keys_and_notifies_success() {
    let (server, service, notifier) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/users/me"))
        .and(body_json(json!({ "full_name": "Lan Nguyen" })))
        .respond_with(ok(json!({ "user_id": "u1", "full_name": "Lan Nguyen" })))
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        full_name: Some("Lan Nguyen".into()),
        ..Default::default()
    };
    let profile = service.update_profile(&update).await.unwrap();

    assert_eq!(profile.full_name.as_deref(), Some("Lan Nguyen"));
    assert_eq!(
        service.store().profile_snapshot().unwrap().full_name.as_deref(),
        Some("Lan Nguyen")
    );

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, NoticeKind::Success);
}

#[tokio::test]
async fn failed_mutation_notifies_and_leaves_store_untouched() {
    let (server, service, notifier) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ok(json!({ "user_id": "u1", "full_name": "Old Name" })))
        .mount(&server)
        .await;
    service.fetch_profile().await;

    Mock::given(method("PUT"))
        .and(path("/users/me"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "phone is invalid" })),
        )
        .mount(&server)
        .await;

    let update = ProfileUpdate {
        phone: Some("not-a-phone".into()),
        ..Default::default()
    };
    let result = service.update_profile(&update).await;

    assert!(result.is_none());
    // Last known profile survives a rejected update.
    assert_eq!(
        service.store().profile_snapshot().unwrap().full_name.as_deref(),
        Some("Old Name")
    );

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, NoticeKind::Error);
    assert!(notices[0].1.contains("phone is invalid"));
    assert_eq!(notices[0].2.as_deref(), Some("Profile"));
}

// ── Payment flow ────────────────────────────────────────────────────

fn payment_request() -> PaymentRequest {
    PaymentRequest {
        amount: 15_000,
        order_info: "Battery swap at Hoan Kiem Hub".into(),
        bank_code: None,
        language: None,
    }
}

#[tokio::test]
async fn payment_success_surfaces_gateway_payload_verbatim() {
    let server = MockServer::start().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = PaymentFlow::new(api_for(&server), notifier.clone());

    Mock::given(method("POST"))
        .and(path("/payments/vnpay/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "url": "u", "txnRef": "r", "payment_id": "p" },
        })))
        .mount(&server)
        .await;

    assert_eq!(flow.state(), PaymentState::Idle);

    let intent = flow.create_vnpay(&payment_request()).await.unwrap();

    assert_eq!(intent.url, "u");
    assert_eq!(intent.txn_ref, "r");
    assert_eq!(intent.payment_id, "p");
    assert_eq!(flow.state(), PaymentState::Settled);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn payment_rejection_resolves_none_and_notifies() {
    let server = MockServer::start().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = PaymentFlow::new(api_for(&server), notifier.clone());

    Mock::given(method("POST"))
        .and(path("/payments/vnpay/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "declined" })),
        )
        .mount(&server)
        .await;

    let intent = flow.create_vnpay(&payment_request()).await;

    assert!(intent.is_none());
    assert_eq!(flow.state(), PaymentState::Settled);

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, NoticeKind::Error);
    assert!(notices[0].1.contains("declined"));
}

#[tokio::test]
async fn payment_transitions_through_in_flight() {
    let server = MockServer::start().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let flow = PaymentFlow::new(api_for(&server), notifier);

    Mock::given(method("POST"))
        .and(path("/payments/vnpay/create"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "success": true,
                    "data": { "url": "u", "txnRef": "r", "payment_id": "p" },
                }))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let mut states = flow.subscribe();
    let request = payment_request();
    let create = flow.create_vnpay(&request);
    let observe = async {
        let mut seen = Vec::new();
        while states.changed().await.is_ok() {
            let state = *states.borrow_and_update();
            seen.push(state);
            if state == PaymentState::Settled {
                break;
            }
        }
        seen
    };

    let (intent, seen) = tokio::join!(create, observe);

    assert!(intent.is_some());
    assert_eq!(seen, vec![PaymentState::InFlight, PaymentState::Settled]);
}
