//! End-to-end tests for the fleet admin HTTP surface
//!
//! Every test runs the full router over its own seeded in-memory database:
//! two demo clients (ids 1 and 2) and three plates (1234-BBB and 5678-CCC
//! owned by client 1, 9999-ZZZ owned by client 2).

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use interface_api::create_router;
use test_utils::{ClientFixtures, PlateFixtures, RefillFormBuilder, TestDatabase};

async fn server() -> (TestServer, TestDatabase) {
    let db = TestDatabase::seeded().await.expect("Failed to create test database");
    let app = create_router(db.port());
    let server = TestServer::new(app).expect("Failed to start test server");
    (server, db)
}

fn assert_close(value: &Value, expected: f64) {
    let actual = value.as_f64().expect("expected a JSON number");
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let (server, _db) = server().await;

        let response = server.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_latency() {
        let (server, _db) = server().await;

        let response = server.get("/health/ready").await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["status"], "ready");
        assert!(body["latency_ms"].is_u64());
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let (server, _db) = server().await;

        let response = server.get("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}

mod clients {
    use super::*;

    #[tokio::test]
    async fn test_create_client() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/upsertClient")
            .form(&[("id", ""), ("nombre", "Flota Norte"), ("observaciones", "")])
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));

        assert_eq!(db.count("clients").await.unwrap(), 3);

        let clients = server.get("/api/v1/clients").await.json::<Value>();
        assert_eq!(clients[0]["nombre"], "Flota Norte");
        assert_eq!(clients[0]["observaciones"], Value::Null);
    }

    #[tokio::test]
    async fn test_update_client_in_place() {
        let (server, db) = server().await;

        server
            .post("/_actions/upsertClient")
            .form(&[("id", "2"), ("nombre", "Logística David SL"), ("observaciones", "Pago al contado")])
            .await
            .assert_status_ok();

        assert_eq!(db.count("clients").await.unwrap(), 2);

        let clients = server.get("/api/v1/clients").await.json::<Value>();
        let updated = clients
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["id"] == 2)
            .unwrap();
        assert_eq!(updated["nombre"], "Logística David SL");
        assert_eq!(updated["observaciones"], "Pago al contado");
    }

    #[tokio::test]
    async fn test_update_of_missing_client_still_succeeds() {
        let (server, db) = server().await;

        server
            .post("/_actions/upsertClient")
            .form(&[("id", "99"), ("nombre", "Nadie")])
            .await
            .assert_status_ok();

        assert_eq!(db.count("clients").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/upsertClient")
            .form(&[("nombre", "")])
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], "validation_error");

        assert_eq!(db.count("clients").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let (server, _db) = server().await;

        server
            .post("/_actions/upsertClient")
            .form(&[("id", "dos"), ("nombre", "Logística David")])
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_client_leaves_plates() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/deleteClient")
            .json(&json!({ "id": 2 }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));

        assert_eq!(db.count("clients").await.unwrap(), 1);
        assert_eq!(db.count("plates").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_delete_missing_client_is_a_no_op() {
        let (server, db) = server().await;

        server
            .post("/_actions/deleteClient")
            .json(&json!({ "id": 42 }))
            .await
            .assert_status_ok();

        assert_eq!(db.count("clients").await.unwrap(), 2);
    }
}

mod plates {
    use super::*;

    #[tokio::test]
    async fn test_create_plate_normalizes_number_and_owner() {
        let (server, db) = server().await;

        server
            .post("/_actions/upsertMatricula")
            .form(&[("numero", " 4321-abc "), ("clienteNombre", " transportes rápido sl ")])
            .await
            .assert_status_ok();

        assert_eq!(db.count("plates").await.unwrap(), 4);

        let plates = server.get("/api/v1/plates").await.json::<Value>();
        let created = plates
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["numero"] == "4321-ABC")
            .expect("new plate listed");
        assert_eq!(created["clienteId"], 1);
    }

    #[tokio::test]
    async fn test_reassign_plate_to_other_client() {
        let (server, _db) = server().await;

        server
            .post("/_actions/upsertMatricula")
            .form(&[
                ("id", "3"),
                ("numero", PlateFixtures::zzz()),
                ("clienteNombre", ClientFixtures::transportes_rapido()),
            ])
            .await
            .assert_status_ok();

        let plates = server.get("/api/v1/plates").await.json::<Value>();
        assert!(plates
            .as_array()
            .unwrap()
            .iter()
            .filter(|p| p["clienteId"] == 1)
            .any(|p| p["numero"] == PlateFixtures::zzz()));
    }

    #[tokio::test]
    async fn test_unknown_owner_is_not_found_and_writes_nothing() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/upsertMatricula")
            .form(&[("numero", "4321-ABC"), ("clienteNombre", ClientFixtures::unknown())])
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body = response.json::<Value>();
        assert_eq!(body["error"], "not_found");
        assert!(body["message"].as_str().unwrap().contains(ClientFixtures::unknown()));

        assert_eq!(db.count("plates").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_number_conflicts() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/upsertMatricula")
            .form(&[("numero", "1234-bbb"), ("clienteNombre", ClientFixtures::logistica_david())])
            .await;
        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"], "conflict");

        assert_eq!(db.count("plates").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_blank_number_is_rejected() {
        let (server, _db) = server().await;

        server
            .post("/_actions/upsertMatricula")
            .form(&[("numero", "   "), ("clienteNombre", ClientFixtures::logistica_david())])
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_plate() {
        let (server, db) = server().await;

        server
            .post("/_actions/deleteMatricula")
            .json(&json!({ "id": 3 }))
            .await
            .assert_status_ok();

        assert_eq!(db.count("plates").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_plates_listed_by_number() {
        let (server, _db) = server().await;

        let plates = server.get("/api/v1/plates").await.json::<Value>();
        let numbers: Vec<&str> = plates
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["numero"].as_str().unwrap())
            .collect();
        assert_eq!(numbers, vec!["1234-BBB", "5678-CCC", "9999-ZZZ"]);
    }
}

mod refills {
    use super::*;

    #[tokio::test]
    async fn test_create_refill() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/createRepostaje")
            .form(&RefillFormBuilder::new().build())
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({ "success": true }));

        assert_eq!(db.count("refills").await.unwrap(), 1);

        let refills = server.get("/api/v1/refills").await.json::<Value>();
        let refill = &refills[0];
        assert_eq!(refill["fecha"], "2024-03-04T08:15:00Z");
        assert_close(&refill["importe"], 83.25);
        assert_close(&refill["cantidad"], 55.5);
        assert_eq!(refill["numeroOperacion"], Value::Null);
        assert_eq!(refill["comentarios"], Value::Null);
        assert_eq!(refill["clienteId"], 1);
        assert_eq!(refill["matriculaId"], 1);
    }

    #[tokio::test]
    async fn test_create_refill_with_operation_number_and_comment() {
        let (server, _db) = server().await;

        server
            .post("/_actions/createRepostaje")
            .form(
                &RefillFormBuilder::new()
                    .set("numeroOperacion", "4711")
                    .set("comentarios", "Ticket extraviado")
                    .build(),
            )
            .await
            .assert_status_ok();

        let refills = server.get("/api/v1/refills").await.json::<Value>();
        assert_eq!(refills[0]["numeroOperacion"], 4711);
        assert_eq!(refills[0]["comentarios"], "Ticket extraviado");
    }

    #[tokio::test]
    async fn test_client_name_must_match_exactly() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/createRepostaje")
            .form(
                &RefillFormBuilder::new()
                    .set("clienteNombre", "transportes rápido sl")
                    .build(),
            )
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_plate_writes_nothing() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/createRepostaje")
            .form(
                &RefillFormBuilder::new()
                    .set("matriculaNumero", PlateFixtures::unknown())
                    .build(),
            )
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains(PlateFixtures::unknown()));

        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_amount_is_rejected() {
        let (server, db) = server().await;

        server
            .post("/_actions/createRepostaje")
            .form(&RefillFormBuilder::new().set("importe", "ochenta").build())
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_amount_too_large_to_store_is_rejected() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/createRepostaje")
            .form(
                &RefillFormBuilder::new()
                    .set("importe", "79228162514264337593543950335")
                    .build(),
            )
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], "validation_error");

        let response = server
            .post("/_actions/createRepostaje")
            .form(
                &RefillFormBuilder::new()
                    .set("cantidad", "79228162514264337593543950335")
                    .build(),
            )
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let (server, db) = server().await;

        let response = server
            .post("/_actions/createRepostaje")
            .form(&RefillFormBuilder::new().without("clienteNombre").build())
            .await;
        assert!(response.status_code().is_client_error());

        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_refill() {
        let (server, db) = server().await;

        server
            .post("/_actions/createRepostaje")
            .form(&RefillFormBuilder::new().build())
            .await
            .assert_status_ok();

        server
            .post("/_actions/deleteRepostaje")
            .json(&json!({ "id": 1 }))
            .await
            .assert_status_ok();

        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_refills_listed_most_recent_first() {
        let (server, _db) = server().await;

        for fecha in ["2024-03-04T08:15", "2024-04-02T10:00", "2024-03-20"] {
            server
                .post("/_actions/createRepostaje")
                .form(&RefillFormBuilder::new().set("fecha", fecha).build())
                .await
                .assert_status_ok();
        }

        let refills = server.get("/api/v1/refills").await.json::<Value>();
        let dates: Vec<&str> = refills
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["fecha"].as_str().unwrap())
            .collect();
        assert_eq!(
            dates,
            vec!["2024-04-02T10:00:00Z", "2024-03-20T00:00:00Z", "2024-03-04T08:15:00Z"]
        );
    }
}

mod stats {
    use super::*;

    async fn record_refills(server: &TestServer) {
        server
            .post("/_actions/createRepostaje")
            .form(&RefillFormBuilder::new().build())
            .await
            .assert_status_ok();

        server
            .post("/_actions/createRepostaje")
            .form(
                &RefillFormBuilder::new()
                    .set("fecha", "2024-04-02T10:00")
                    .set("matriculaNumero", PlateFixtures::ccc())
                    .set("cantidad", "10,07")
                    .set("importe", "15.10")
                    .build(),
            )
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_client_stats() {
        let (server, _db) = server().await;
        record_refills(&server).await;

        let response = server
            .post("/_actions/getClientStats")
            .json(&json!({ "id": 1 }))
            .await;
        response.assert_status_ok();

        let stats = response.json::<Value>();
        assert_eq!(stats["nombre"], ClientFixtures::transportes_rapido());
        assert_eq!(stats["observaciones"], ClientFixtures::transportes_rapido_notes());
        assert_eq!(stats["numMatriculas"], 2);
        assert_eq!(stats["listaMatriculas"], json!(["1234-BBB", "5678-CCC"]));
        assert_close(&stats["importe"], 98.35);
        assert_close(&stats["litros"], 65.57);
        assert_eq!(stats["ultimoPago"], "2024-04-02T10:00:00Z");

        let efficiency = stats["eficiencia"].as_array().unwrap();
        assert_eq!(efficiency.len(), 2);
        assert_eq!(efficiency[0]["numero"], "1234-BBB");
        assert_close(&efficiency[0]["total"], 83.25);
        assert_eq!(efficiency[1]["numero"], "5678-CCC");
        assert_close(&efficiency[1]["total"], 15.10);
    }

    #[tokio::test]
    async fn test_stats_without_refills() {
        let (server, _db) = server().await;

        let stats = server
            .post("/_actions/getClientStats")
            .json(&json!({ "id": 2 }))
            .await
            .json::<Value>();

        assert_eq!(stats["nombre"], ClientFixtures::logistica_david());
        assert_eq!(stats["listaMatriculas"], json!(["9999-ZZZ"]));
        assert_close(&stats["importe"], 0.0);
        assert_close(&stats["litros"], 0.0);
        assert_eq!(stats["ultimoPago"], Value::Null);
        assert_eq!(stats["eficiencia"], json!([]));
    }

    #[tokio::test]
    async fn test_stats_for_unknown_client() {
        let (server, _db) = server().await;

        let response = server
            .post("/_actions/getClientStats")
            .json(&json!({ "id": 99 }))
            .await;
        response.assert_status_ok();

        let stats = response.json::<Value>();
        assert_eq!(stats["nombre"], Value::Null);
        assert_eq!(stats["numMatriculas"], 0);
        assert_eq!(stats["listaMatriculas"], json!([]));
        assert_close(&stats["importe"], 0.0);
    }
}
