use std::sync::Arc;

use crate::vehicle::application::ports::incoming::use_cases::{
    GetMarketMappingsUseCase, GetSourcesUseCase, GetStatsUseCase, GetVehicleHistoryUseCase,
    GetVehicleInspectionUseCase, GetVehicleUseCase, ListVehiclesUseCase, LookupCarNumberUseCase,
    UpsertInspectionUseCase, UpsertVehicleUseCase,
};

#[derive(Clone)]
pub struct VehicleUseCases {
    pub list: Arc<dyn ListVehiclesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetVehicleUseCase + Send + Sync>,
    pub get_history: Arc<dyn GetVehicleHistoryUseCase + Send + Sync>,
    pub get_inspection: Arc<dyn GetVehicleInspectionUseCase + Send + Sync>,
    pub lookup: Arc<dyn LookupCarNumberUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertVehicleUseCase + Send + Sync>,
    pub upsert_inspection: Arc<dyn UpsertInspectionUseCase + Send + Sync>,
    pub stats: Arc<dyn GetStatsUseCase + Send + Sync>,
    pub sources: Arc<dyn GetSourcesUseCase + Send + Sync>,
    pub market_mappings: Arc<dyn GetMarketMappingsUseCase + Send + Sync>,
}
