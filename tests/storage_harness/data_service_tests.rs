//! Macro-generated test suite for `DataService<Ingredient>` contract validation.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`: create then retrieve, verify all fields
//! - `test_create_invalid_rejected`: negative stock is refused
//! - `test_get_nonexistent`: get with random UUID returns None
//! - `test_list_empty`: list on empty store returns empty vec
//! - `test_list_keeps_creation_order`: create 5, list returns them in order
//! - `test_update_existing`: mutate stock, verify persisted
//! - `test_update_nonexistent`: update unknown ID returns Err
//! - `test_delete_existing`: delete then get returns None
//!
//! ## Search
//! - `test_search_string_field`: search by name (case-insensitive)
//! - `test_search_boolean_field`: search by below_minimum
//! - `test_search_unknown_field`: search on nonexistent field
//!
//! ## Edge Cases
//! - `test_concurrent_access`: parallel creates from spawned tasks

/// Generate a `DataService<Ingredient>` conformance test suite.
///
/// `$factory` is re-evaluated for each test to ensure isolation. For the
/// concurrent access test the service must also be `Clone + 'static`.
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use bakery::core::entity::{Data, Entity};
            use bakery::core::error::ValidationError;
            use bakery::core::service::DataService;
            use bakery::entities::MeasureUnit;
            use uuid::Uuid;

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory;
                let entity = create_test_ingredient("Fermento", 120.0, 50.0, MeasureUnit::Grams);
                let original_id = entity.id;

                let created = service.create(entity.clone()).await.unwrap();
                assert_eq!(created.id(), original_id);
                assert_eq!(created.entity_type(), "ingredient");

                let retrieved = service.get(&original_id).await.unwrap();
                assert_eq!(retrieved, Some(entity));
            }

            #[tokio::test]
            async fn test_create_invalid_rejected() {
                let service = $factory;
                let entity = create_test_ingredient("Fermento", -1.0, 0.0, MeasureUnit::Grams);

                let err = service.create(entity.clone()).await.unwrap_err();
                assert!(err.downcast_ref::<ValidationError>().is_some());
                assert!(service.get(&entity.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                let result = service.get(&Uuid::new_v4()).await.unwrap();
                assert!(result.is_none(), "Getting a nonexistent entity should return None");
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;
                assert!(service.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_keeps_creation_order() {
                let service = $factory;
                let batch = sample_batch(5);
                let expected_ids: Vec<Uuid> = batch.iter().map(|e| e.id).collect();

                for entity in batch {
                    service.create(entity).await.unwrap();
                }

                let returned_ids: Vec<Uuid> =
                    service.list().await.unwrap().iter().map(|e| e.id()).collect();
                assert_eq!(returned_ids, expected_ids);
            }

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let mut entity = create_test_ingredient("Manteiga", 500.0, 200.0, MeasureUnit::Grams);
                let id = entity.id;
                service.create(entity.clone()).await.unwrap();

                entity.stock = 150.0;
                let updated = service.update(&id, entity).await.unwrap();
                assert_eq!(updated.stock, 150.0);

                let retrieved = service.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.stock, 150.0);
                assert!(retrieved.is_below_minimum());
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let entity = create_test_ingredient("Fantasma", 0.0, 0.0, MeasureUnit::Units);
                let id = entity.id;

                assert!(
                    service.update(&id, entity).await.is_err(),
                    "Updating a nonexistent entity should return an error"
                );
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                let entity = create_test_ingredient("Leite", 2.0, 1.0, MeasureUnit::Liters);
                let id = entity.id;
                service.create(entity).await.unwrap();

                service.delete(&id).await.unwrap();
                assert!(service.get(&id).await.unwrap().is_none());
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[tokio::test]
            async fn test_search_string_field() {
                let service = $factory;
                for entity in sample_batch(3) {
                    service.create(entity).await.unwrap();
                }

                let found = service.search("name", "INGREDIENTE 1").await.unwrap();
                assert_eq!(found.len(), 1);
                assert_eq!(found[0].name(), "Ingrediente 1");
            }

            #[tokio::test]
            async fn test_search_boolean_field() {
                let service = $factory;
                for entity in sample_batch(4) {
                    service.create(entity).await.unwrap();
                }

                let low = service.search("below_minimum", "true").await.unwrap();
                let names: Vec<&str> = low.iter().map(|e| e.name()).collect();
                assert_eq!(names, vec!["Ingrediente 0", "Ingrediente 2"]);
            }

            #[tokio::test]
            async fn test_search_unknown_field() {
                let service = $factory;
                for entity in sample_batch(2) {
                    service.create(entity).await.unwrap();
                }
                assert!(service.search("color", "blue").await.unwrap().is_empty());
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_access() {
                let service = $factory;
                let mut handles = Vec::new();

                for entity in sample_batch(10) {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move { service.create(entity).await }));
                }
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                assert_eq!(service.list().await.unwrap().len(), 10);
            }
        }
    };
}
