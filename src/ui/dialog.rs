/// Estado del diálogo de alta/edición
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    CreatingNew,
    Editing(i64),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    /// Id que viaja en el PUT; `None` al crear
    pub fn editing_id(&self) -> Option<i64> {
        match self {
            DialogState::Editing(id) => Some(*id),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            DialogState::Closed => None,
            DialogState::CreatingNew => Some("New Driver"),
            DialogState::Editing(_) => Some("Edit Driver"),
        }
    }
}
