//! Página de conductores
//!
//! Tabla con todos los conductores y un diálogo que reutiliza el mismo
//! formulario para alta y edición. Abrir el diálogo siempre reemplaza el
//! formulario, así no quedan restos de una edición anterior.

use tracing::warn;

use super::dialog::DialogState;
use crate::client::{ClientError, DriversApi, DriversStore, QueryState};
use crate::forms::{DriverForm, FileSelection, FormErrors};
use crate::models::{AttachmentKind, Driver};

pub const TABLE_HEADERS: [&str; 6] = ["Name", "CPF", "Phone", "CNH", "Categories", "Actions"];

/// Fila de la tabla, con los valores tal como están guardados
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRow {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub phone: String,
    pub cnh_number: String,
    pub categories: String,
}

impl From<&Driver> for DriverRow {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name.clone(),
            cpf: driver.cpf.clone(),
            phone: driver.phone.clone(),
            cnh_number: driver.cnh_number.clone(),
            categories: driver.cnh_category.clone(),
        }
    }
}

/// Resultado de enviar el diálogo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No había diálogo abierto
    NotOpen,
    /// La validación falló; el diálogo sigue abierto y no hubo llamada de red
    Invalid(FormErrors),
    Saved { id: i64 },
    Failed(String),
}

pub struct DriversPage<A> {
    store: DriversStore<A>,
    dialog: DialogState,
    form: DriverForm,
    errors: FormErrors,
}

impl<A: DriversApi> DriversPage<A> {
    pub fn new(api: A) -> Self {
        Self {
            store: DriversStore::new(api),
            dialog: DialogState::Closed,
            form: DriverForm::empty(),
            errors: FormErrors::default(),
        }
    }

    pub async fn load(&mut self) {
        self.store.refetch().await;
    }

    pub fn store(&self) -> &DriversStore<A> {
        &self.store
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn form(&self) -> &DriverForm {
        &self.form
    }

    /// Formulario editable; solo con el diálogo abierto
    pub fn form_mut(&mut self) -> Option<&mut DriverForm> {
        if self.dialog.is_open() {
            Some(&mut self.form)
        } else {
            None
        }
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Mensaje en lugar de la tabla mientras no hay datos
    pub fn list_message(&self) -> Option<&'static str> {
        match self.store.list_state() {
            QueryState::Idle => Some("Loading..."),
            QueryState::Failed(_) => Some("Error loading drivers"),
            QueryState::Loaded(_) => None,
        }
    }

    pub fn rows(&self) -> Vec<DriverRow> {
        self.store.drivers().iter().map(DriverRow::from).collect()
    }

    pub fn open_create(&mut self) {
        self.form = DriverForm::empty();
        self.errors = FormErrors::default();
        self.dialog = DialogState::CreatingNew;
    }

    /// Abrir en modo edición. `false` si el conductor no está en la lista.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(driver) = self.store.find(id) else {
            return false;
        };
        self.form = DriverForm::from_driver(driver);
        self.errors = FormErrors::default();
        self.dialog = DialogState::Editing(id);
        true
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.dialog = DialogState::Closed;
        self.form = DriverForm::empty();
        self.errors = FormErrors::default();
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.dialog.is_open() {
            return SubmitOutcome::NotOpen;
        }

        if let Err(errors) = self.form.validate() {
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }

        let editing_id = self.dialog.editing_id();
        let request = self.form.to_request(editing_id);
        let result = match editing_id {
            Some(id) => self.store.update(id, &request).await.map(|_| id),
            None => self.store.create(&request).await.map(|driver| driver.id),
        };

        let outcome = match result {
            Ok(id) => {
                self.upload_attachments(id).await;
                SubmitOutcome::Saved { id }
            }
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        };

        self.close();
        outcome
    }

    async fn upload_attachments(&self, driver_id: i64) {
        let selections: [(AttachmentKind, Option<&FileSelection>); 2] = [
            (AttachmentKind::Photo, self.form.photo.as_ref()),
            (AttachmentKind::CnhPdf, self.form.cnh_pdf.as_ref()),
        ];

        for (kind, selection) in selections {
            let Some(file) = selection else {
                continue;
            };
            if let Err(e) = self.store.api().upload_attachment(driver_id, kind, file).await {
                warn!("⚠️ No se pudo subir {} del conductor {}: {}", kind, driver_id, e);
            }
        }
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ClientError> {
        self.store.remove(id).await
    }
}
