//! Implementación en memoria de `DriversApi` para tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::api::{ClientError, DriversApi};
use crate::dto::driver_dto::DriverRequest;
use crate::forms::FileSelection;
use crate::models::{AttachmentKind, AttachmentMetadata, Driver};

#[derive(Default)]
struct FakeState {
    drivers: Vec<Driver>,
    next_id: i64,
    list_calls: usize,
    fail_list: bool,
    uploads: Vec<(i64, AttachmentKind, String)>,
}

#[derive(Default)]
pub struct FakeDriversApi {
    state: Mutex<FakeState>,
}

fn not_found(id: i64) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("Driver with id '{}' not found", id),
    }
}

impl FakeDriversApi {
    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn uploads(&self) -> Vec<(i64, AttachmentKind, String)> {
        self.state.lock().unwrap().uploads.clone()
    }
}

#[async_trait]
impl DriversApi for FakeDriversApi {
    async fn list(&self) -> Result<Vec<Driver>, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.fail_list {
            return Err(ClientError::Api {
                status: 500,
                message: "boom".into(),
            });
        }
        Ok(state.drivers.clone())
    }

    async fn get(&self, id: i64) -> Result<Driver, ClientError> {
        let state = self.state.lock().unwrap();
        state
            .drivers
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, request: &DriverRequest) -> Result<Driver, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let driver = request.clone().into_driver(state.next_id);
        state.drivers.push(driver.clone());
        Ok(driver)
    }

    async fn update(&self, id: i64, request: &DriverRequest) -> Result<(), ClientError> {
        if request.id != Some(id) {
            return Err(ClientError::Api {
                status: 400,
                message: "id mismatch".into(),
            });
        }
        let mut state = self.state.lock().unwrap();
        let slot = state
            .drivers
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = request.clone().into_driver(id);
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        let before = state.drivers.len();
        state.drivers.retain(|d| d.id != id);
        if state.drivers.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn upload_attachment(
        &self,
        driver_id: i64,
        kind: AttachmentKind,
        file: &FileSelection,
    ) -> Result<AttachmentMetadata, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.uploads.push((driver_id, kind, file.file_name.clone()));
        Ok(AttachmentMetadata {
            driver_id,
            kind,
            file_name: file.file_name.clone(),
            content_type: file.content_type.clone(),
            size_bytes: file.data.len() as i64,
            uploaded_at: Utc::now(),
        })
    }
}
