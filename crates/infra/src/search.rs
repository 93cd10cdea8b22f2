use std::sync::Mutex;

/// Describes an entity to the external full-text search collaborator:
/// which entity it is, the label to display it under and the field
/// paths the indexer should cover.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRegistration {
    pub entity: String,
    pub label: String,
    pub fields: Vec<String>,
}

/// The external search indexer. Entities are announced to it once at
/// startup; indexing itself happens outside this server.
pub trait ISearchIndex: Send + Sync {
    fn register(&self, registration: SearchRegistration);
    fn registrations(&self) -> Vec<SearchRegistration>;
}

/// Search index collaborator that just records registrations. Stands in
/// until a real indexer is wired up and lets tests assert on what was
/// registered.
pub struct InMemorySearchIndex {
    registrations: Mutex<Vec<SearchRegistration>>,
}

impl InMemorySearchIndex {
    pub fn new() -> Self {
        Self {
            registrations: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemorySearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ISearchIndex for InMemorySearchIndex {
    fn register(&self, registration: SearchRegistration) {
        let mut registrations = self.registrations.lock().unwrap();
        registrations.push(registration);
    }

    fn registrations(&self) -> Vec<SearchRegistration> {
        self.registrations.lock().unwrap().clone()
    }
}

pub fn reminder_search_registration() -> SearchRegistration {
    SearchRegistration {
        entity: "reminder".into(),
        label: "reminder".into(),
        fields: vec![
            "label".into(),
            "notes".into(),
            "participant.user.username".into(),
            "participant.user.first_name".into(),
            "participant.user.last_name".into(),
        ],
    }
}
