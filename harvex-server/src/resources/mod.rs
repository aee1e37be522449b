use std::any::{Any, TypeId};
use std::collections::hash_map::{Values, ValuesMut};
use std::collections::HashMap;
use std::marker::PhantomData;

pub use harvex_types::resources::Id;

pub use ids::IntoId;
pub use resource::Resource;

pub mod ids;
pub mod manager;
pub mod resource;

/// In-memory store for all harvested and user-created state, keyed by
/// resource type and id.
#[derive(Default)]
pub struct Resources {
    storage: HashMap<TypeId, HashMap<Id, Box<dyn Any + Send + Sync>>>,
}

impl Resources {

    pub fn insert<R>(&mut self, id: impl IntoId<R>, resource: R) -> Option<R>
    where R: Resource {
        let id = id.into_id();
        let column = self.storage
            .entry(TypeId::of::<R>())
            .or_default();
        column.insert(id, Box::new(resource))
            .and_then(|displaced| displaced
                .downcast()
                .map(|value| *value)
                .ok()
            )
    }

    pub fn remove<R>(&mut self, id: impl IntoId<R>) -> Option<R>
    where R: Resource {
        let id = id.into_id();
        let type_id = TypeId::of::<R>();
        let column = self.storage.get_mut(&type_id)?;
        let result = column.remove(&id)
            .and_then(|old_value| old_value
                .downcast()
                .map(|value| *value)
                .ok()
            );
        if column.is_empty() {
            self.storage.remove(&type_id);
        }
        result
    }

    pub fn get<R>(&self, id: impl IntoId<R>) -> Option<R>
    where R: Resource + Clone {
        let id = id.into_id();
        self.column_of::<R>()
            .and_then(|column| column.get(&id))
            .and_then(|resource| resource.downcast_ref().cloned())
    }

    pub fn iter<R>(&self) -> Iter<R>
    where R: Resource {
        Iter::new(self.column_of::<R>().map(|column| column.values()))
    }

    pub fn iter_mut<R>(&mut self) -> IterMut<R>
    where R: Resource {
        let column = self.storage
            .get_mut(&TypeId::of::<R>())
            .map(|column| column.values_mut());
        IterMut::new(column)
    }

    pub fn contains<R>(&self, id: impl IntoId<R>) -> bool
    where R: Resource {
        let id = id.into_id();
        if let Some(column) = self.column_of::<R>() {
            column.contains_key(&id)
        }
        else {
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn column_of<R>(&self) -> Option<&HashMap<Id, Box<dyn Any + Send + Sync>>>
    where R: Resource {
        self.storage.get(&TypeId::of::<R>())
    }
}

pub struct Iter<'a, R>
where R: Resource {
    column: Option<Values<'a, Id, Box<dyn Any + Send + Sync>>>,
    marker: PhantomData<R>,
}

impl <'a, R> Iter<'a, R>
where R: Resource {
    fn new(column: Option<Values<'a, Id, Box<dyn Any + Send + Sync>>>) -> Iter<'a, R> {
        Self {
            column,
            marker: PhantomData,
        }
    }
}

impl <'a, R> Iterator for Iter<'a, R>
where R: Resource {

    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.column.as_mut()?;
        column.next()
            .and_then(|value| value.downcast_ref())
    }
}

pub struct IterMut<'a, R>
where R: Resource {
    column: Option<ValuesMut<'a, Id, Box<dyn Any + Send + Sync>>>,
    marker: PhantomData<R>,
}

impl <'a, R> IterMut<'a, R>
where R: Resource {
    fn new(column: Option<ValuesMut<'a, Id, Box<dyn Any + Send + Sync>>>) -> IterMut<'a, R> {
        Self {
            column,
            marker: PhantomData,
        }
    }
}

impl <'a, R> Iterator for IterMut<'a, R>
where R: Resource {

    type Item = &'a mut R;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.column.as_mut()?;
        column.next()
            .and_then(|value| value.downcast_mut())
    }
}
