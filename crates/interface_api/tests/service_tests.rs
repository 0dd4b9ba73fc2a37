//! Fleet service scenarios over SQLite
//!
//! Drives `FleetService` and the form DTOs with the shared builders,
//! fixtures, generators and assertions, against the same adapter the HTTP
//! layer is wired to.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{ClientId, PlateId};
use domain_fleet::{FleetError, PlateNumber, UpsertOutcome};
use interface_api::dto::refill::CreateRefillForm;
use test_utils::db_test;
use test_utils::*;

mod clients {
    use super::*;

    db_test!(test_created_clients_are_listed_by_name, |db| async move {
        let service = db.service();
        let names = fake_client_names(6);

        for name in &names {
            let outcome = service
                .upsert_client(UpsertClientBuilder::new().with_name(name.clone()).without_notes().build())
                .await
                .unwrap();
            assert!(matches!(outcome, UpsertOutcome::Created(_)));
        }

        let listed: Vec<String> = service
            .list_clients()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        let mut expected = names;
        expected.sort();
        assert_eq!(listed, expected);
    });

    #[tokio::test]
    async fn test_update_never_inserts() {
        let db = TestDatabase::seeded().await.unwrap();
        let service = db.service();

        let outcome = service
            .upsert_client(
                UpsertClientBuilder::new()
                    .updating(ClientId::new(1))
                    .with_name("Transportes Rápido SLU")
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated(ClientId::new(1)));
        assert_eq!(db.count("clients").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_of_missing_id_is_unmatched() {
        let db = TestDatabase::seeded().await.unwrap();

        let outcome = db
            .service()
            .upsert_client(UpsertClientBuilder::new().updating(ClientId::new(99)).build())
            .await
            .unwrap();

        assert_eq!(outcome, UpsertOutcome::Unmatched(ClientId::new(99)));
        assert_eq!(db.count("clients").await.unwrap(), 2);
    }
}

mod plates {
    use super::*;

    #[tokio::test]
    async fn test_numbers_are_stored_normalized() {
        let db = TestDatabase::seeded().await.unwrap();
        let service = db.service();

        service
            .upsert_plate(
                UpsertPlateBuilder::new()
                    .with_number(" 4321-abc ")
                    .with_client(ClientFixtures::logistica_david())
                    .build(),
            )
            .await
            .unwrap();

        let plates = service.list_plates().await.unwrap();
        for plate in &plates {
            assert_plate_normalized(plate.number.as_str());
        }
        assert!(plates.iter().any(|p| p.number.as_str() == "4321-ABC"));
    }

    #[tokio::test]
    async fn test_unknown_owner_writes_nothing() {
        let db = TestDatabase::seeded().await.unwrap();

        let err = db
            .service()
            .upsert_plate(
                UpsertPlateBuilder::new()
                    .with_number("4321-ABC")
                    .with_client(ClientFixtures::unknown())
                    .build(),
            )
            .await
            .unwrap_err();

        assert_client_not_found(&err, ClientFixtures::unknown());
        assert_eq!(db.count("plates").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_taken_number_conflicts() {
        let db = TestDatabase::seeded().await.unwrap();

        let err = db
            .service()
            .upsert_plate(
                UpsertPlateBuilder::new()
                    .updating(PlateId::new(3))
                    .with_number(PlateFixtures::bbb())
                    .with_client(ClientFixtures::logistica_david())
                    .build(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, FleetError::Conflict(_)));
    }
}

mod refills {
    use super::*;

    #[tokio::test]
    async fn test_refill_values_are_stored_exactly() {
        let db = TestDatabase::seeded().await.unwrap();
        let service = db.service();

        service.create_refill(CreateRefillBuilder::new().build()).await.unwrap();

        let refills = service.list_refills().await.unwrap();
        assert_eq!(refills.len(), 1);
        assert_money_eq(&refills[0].amount, dec!(83.25));
        assert_litres_eq(&refills[0].quantity, dec!(55.5));
        assert_eq!(refills[0].date, TemporalFixtures::morning());
    }

    #[tokio::test]
    async fn test_unknown_client_writes_nothing() {
        let db = TestDatabase::seeded().await.unwrap();

        let err = db
            .service()
            .create_refill(CreateRefillBuilder::new().with_client(ClientFixtures::unknown()).build())
            .await
            .unwrap_err();

        assert_client_not_found(&err, ClientFixtures::unknown());
        assert_eq!(db.count("refills").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_plate_writes_nothing() {
        let db = TestDatabase::seeded().await.unwrap();

        let err = db
            .service()
            .create_refill(CreateRefillBuilder::new().with_plate(PlateFixtures::unknown()).build())
            .await
            .unwrap_err();

        assert_plate_not_found(&err, PlateFixtures::unknown());
        assert_eq!(db.count("refills").await.unwrap(), 0);
    }
}

mod stats {
    use super::*;

    #[tokio::test]
    async fn test_totals_are_exact_sums() {
        let db = TestDatabase::seeded().await.unwrap();
        let service = db.service();

        let refills = [
            CreateRefillBuilder::new().build(),
            CreateRefillBuilder::new()
                .with_plate(PlateFixtures::ccc())
                .with_date(TemporalFixtures::evening())
                .with_amount(MoneyFixtures::top_up())
                .with_quantity(LitreFixtures::top_up())
                .build(),
            CreateRefillBuilder::new()
                .with_date(TemporalFixtures::next_month())
                .with_amount(MoneyFixtures::top_up())
                .with_quantity(LitreFixtures::top_up())
                .build(),
        ];
        for refill in refills {
            service.create_refill(refill).await.unwrap();
        }

        let stats = service.client_stats(ClientId::new(1)).await.unwrap();

        assert_money_sum(
            &[MoneyFixtures::full_tank(), MoneyFixtures::top_up(), MoneyFixtures::top_up()],
            &stats.total_amount,
        );
        assert_litres_eq(&stats.total_litres, dec!(75.64));
        assert_eq!(stats.last_payment, Some(TemporalFixtures::next_month()));

        assert_eq!(stats.efficiency.len(), 2);
        assert_eq!(stats.efficiency[0].number, PlateFixtures::bbb());
        assert_money_eq(&stats.efficiency[0].total, dec!(98.35));
        assert_eq!(stats.efficiency[1].number, PlateFixtures::ccc());
        assert_money_eq(&stats.efficiency[1].total, dec!(15.10));
    }

    #[tokio::test]
    async fn test_client_without_refills() {
        let db = TestDatabase::seeded().await.unwrap();

        let stats = db.service().client_stats(ClientId::new(2)).await.unwrap();

        assert_no_refills(&stats);
        assert_eq!(stats.plates, vec![PlateFixtures::zzz().to_string()]);
    }
}

mod properties {
    use super::*;

    fn refill_form(cantidad: String, importe: String) -> CreateRefillForm {
        CreateRefillForm {
            fecha: TemporalFixtures::morning_form_value().to_string(),
            numero_operacion: None,
            cliente_nombre: ClientFixtures::transportes_rapido().to_string(),
            cantidad,
            importe,
            matricula_numero: PlateFixtures::bbb().to_string(),
            comentarios: None,
        }
    }

    proptest! {
        #[test]
        fn prop_typed_plate_numbers_normalize(pair in raw_plate_input_strategy()) {
            let (raw, normalized) = pair;
            let number = PlateNumber::parse(&raw).unwrap();
            assert_plate_normalized(number.as_str());
            prop_assert_eq!(number.as_str(), normalized.as_str());
        }

        #[test]
        fn prop_form_decimals_parse_exactly(pair in decimal_input_strategy()) {
            let (input, hundredths) = pair;
            let request = refill_form(input.clone(), input).into_request().unwrap();
            prop_assert_eq!(request.amount.to_minor().unwrap(), hundredths);
            prop_assert_eq!(request.quantity.to_millilitres().unwrap(), hundredths * 10);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_refill_values_survive_storage(
            amount in money_strategy(),
            quantity in litres_strategy(),
            date in refill_date_strategy(),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let stored = runtime.block_on(async {
                let db = TestDatabase::seeded().await.unwrap();
                let service = db.service();
                service
                    .create_refill(
                        CreateRefillBuilder::new()
                            .with_amount(amount)
                            .with_quantity(quantity)
                            .with_date(date)
                            .build(),
                    )
                    .await
                    .unwrap();
                service.list_refills().await.unwrap().remove(0)
            });

            prop_assert_eq!(stored.amount, amount);
            prop_assert_eq!(stored.quantity, quantity);
            prop_assert_eq!(stored.date, date);
        }
    }
}
