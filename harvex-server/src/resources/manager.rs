use std::sync::Arc;

use tokio::sync::RwLock;

use crate::resources::{IntoId, Resource, Resources};

pub type ResourcesManagerRef = Arc<ResourcesManager>;

pub struct ResourcesManager {
    state: RwLock<State>,
}

struct State {
    resources: Resources,
}

impl ResourcesManager {

    pub fn new() -> ResourcesManagerRef {
        Arc::new(Self {
            state: RwLock::new(State {
                resources: Default::default()
            })
        })
    }

    pub async fn insert<R>(&self, id: impl IntoId<R>, resource: R) -> Option<R>
    where R: Resource {
        let mut state = self.state.write().await;
        state.resources.insert(id, resource)
    }

    pub async fn remove<R>(&self, id: impl IntoId<R>) -> Option<R>
    where R: Resource {
        let mut state = self.state.write().await;
        state.resources.remove(id)
    }

    pub async fn get<R>(&self, id: impl IntoId<R>) -> Option<R>
    where R: Resource + Clone {
        let state = self.state.read().await;
        state.resources.get(id)
    }

    pub async fn resources<F, T>(&self, f: F) -> T
    where F: FnOnce(&Resources) -> T {
        let state = self.state.read().await;
        f(&state.resources)
    }

    pub async fn resources_mut<F, T>(&self, f: F) -> T
    where F: FnOnce(&mut Resources) -> T {
        let mut state = self.state.write().await;
        f(&mut state.resources)
    }

    pub async fn contains<R>(&self, id: impl IntoId<R>) -> bool
    where R: Resource {
        let state = self.state.read().await;
        state.resources.contains(id)
    }

    pub async fn is_empty(&self) -> bool {
        let state = self.state.read().await;
        state.resources.is_empty()
    }
}
