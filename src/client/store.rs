//! Estado de la consulta de conductores del lado cliente
//!
//! Una consulta (la lista) y tres mutaciones. Cada mutación exitosa vuelve
//! a pedir la lista completa; una mutación fallida solo queda registrada en
//! su estado.

use tracing::warn;

use super::api::{ClientError, DriversApi};
use crate::dto::driver_dto::DriverRequest;
use crate::models::Driver;

/// Estado de una consulta
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Loaded(T),
    Failed(String),
}

/// Estado de una mutación
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Succeeded,
    Failed(String),
}

impl MutationState {
    fn record<T>(&mut self, result: &Result<T, ClientError>) {
        *self = match result {
            Ok(_) => MutationState::Succeeded,
            Err(e) => MutationState::Failed(e.to_string()),
        };
    }
}

pub struct DriversStore<A> {
    api: A,
    list: QueryState<Vec<Driver>>,
    create: MutationState,
    update: MutationState,
    remove: MutationState,
}

impl<A: DriversApi> DriversStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            list: QueryState::Idle,
            create: MutationState::Idle,
            update: MutationState::Idle,
            remove: MutationState::Idle,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn list_state(&self) -> &QueryState<Vec<Driver>> {
        &self.list
    }

    pub fn create_state(&self) -> &MutationState {
        &self.create
    }

    pub fn update_state(&self) -> &MutationState {
        &self.update
    }

    pub fn remove_state(&self) -> &MutationState {
        &self.remove
    }

    /// Conductores cargados; vacío si la lista no está cargada
    pub fn drivers(&self) -> &[Driver] {
        match &self.list {
            QueryState::Loaded(drivers) => drivers,
            _ => &[],
        }
    }

    pub fn find(&self, id: i64) -> Option<&Driver> {
        self.drivers().iter().find(|d| d.id == id)
    }

    /// Pedir la lista al servidor
    pub async fn refetch(&mut self) {
        self.list = match self.api.list().await {
            Ok(drivers) => QueryState::Loaded(drivers),
            Err(e) => {
                warn!("⚠️ Error cargando conductores: {}", e);
                QueryState::Failed(e.to_string())
            }
        };
    }

    pub async fn create(&mut self, request: &DriverRequest) -> Result<Driver, ClientError> {
        let result = self.api.create(request).await;
        self.create.record(&result);
        if result.is_ok() {
            self.refetch().await;
        }
        result
    }

    pub async fn update(&mut self, id: i64, request: &DriverRequest) -> Result<(), ClientError> {
        let result = self.api.update(id, request).await;
        self.update.record(&result);
        if result.is_ok() {
            self.refetch().await;
        }
        result
    }

    pub async fn remove(&mut self, id: i64) -> Result<(), ClientError> {
        let result = self.api.remove(id).await;
        self.remove.record(&result);
        if result.is_ok() {
            self.refetch().await;
        }
        result
    }
}
