use std::sync::Arc;
use crate::server::store::Store;

#[derive(Clone)]
pub(crate) struct AppState {
    store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(test)]
mod test {
    use crate::server::store::MemoryBackend;
    use super::*;

    #[actix_web::test]
    async fn clones_share_one_store() {
        let state = AppState::new(Store::new(MemoryBackend::default()));
        let other = state.clone();
        state.store().initialize().await.unwrap();
        assert!(other.store().read(|doc| doc.tables.is_empty()).await.unwrap());
        assert!(std::ptr::eq(state.store(), other.store()));
    }
}
