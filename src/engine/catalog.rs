use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::ride::Ride;
use crate::models::rider::Rider;
use crate::models::route::Route;

pub trait Identified {
    fn id(&self) -> Uuid;
}

impl Identified for Rider {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Ride {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Route {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Insertion-ordered in-memory store for one entity kind.
pub struct Catalog<T> {
    name: &'static str,
    items: RwLock<Vec<T>>,
}

impl<T> Catalog<T>
where
    T: Identified + Clone,
{
    pub fn new(name: &'static str, items: Vec<T>) -> Self {
        Self {
            name,
            items: RwLock::new(items),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn snapshot(&self) -> Result<Vec<T>, AppError> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read()?.is_empty())
    }

    pub fn get(&self, id: Uuid) -> Result<T, AppError> {
        self.read()?
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    pub fn contains(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.read()?.iter().any(|item| item.id() == id))
    }

    /// Appends `item`; returns the new catalogue size.
    pub fn push(&self, item: T) -> Result<usize, AppError> {
        let mut items = self.write()?;
        items.push(item);
        Ok(items.len())
    }

    /// Applies `apply` to the stored item in place and returns the result.
    pub fn update<F>(&self, id: Uuid, apply: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut T) -> Result<(), AppError>,
    {
        let mut items = self.write()?;
        let item = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| self.not_found(id))?;

        let mut staged = item.clone();
        apply(&mut staged)?;
        *item = staged.clone();
        Ok(staged)
    }

    fn not_found(&self, id: Uuid) -> AppError {
        AppError::NotFound(format!("{} {} not found", self.name, id))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, AppError> {
        self.items
            .read()
            .map_err(|_| AppError::Internal(format!("{} catalog lock poisoned", self.name)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, AppError> {
        self.items
            .write()
            .map_err(|_| AppError::Internal(format!("{} catalog lock poisoned", self.name)))
    }
}
