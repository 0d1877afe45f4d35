//! In-memory repositories sharing one store, with the database's
//! referential rules: calculations need an existing owner and vanish with it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use calculator::domain::ports::{
    CalculationPersistenceError, CalculationRepository, UserPersistenceError, UserRepository,
};
use calculator::domain::{Calculation, CalculationId, User, UserId};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    calculations: HashMap<CalculationId, Calculation>,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn calculation_count(&self) -> usize {
        self.tables().calculations.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut tables = self.tables();
        let clash = tables.users.values().find_map(|existing| {
            if existing.username() == user.username() {
                Some("username")
            } else if existing.email() == user.email() {
                Some("email")
            } else {
                None
            }
        });
        if let Some(field) = clash {
            return Err(UserPersistenceError::conflict(format!("{field} already taken")));
        }
        tables.users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.tables().users.get(id).cloned())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut tables = self.tables();
        match tables.users.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut tables = self.tables();
        let removed = tables.users.remove(id).is_some();
        if removed {
            tables.calculations.retain(|_, calc| calc.user_id() != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl CalculationRepository for InMemoryStore {
    async fn insert(&self, calculation: &Calculation) -> Result<(), CalculationPersistenceError> {
        let mut tables = self.tables();
        if !tables.users.contains_key(calculation.user_id()) {
            return Err(CalculationPersistenceError::user_not_found(
                calculation.user_id().to_string(),
            ));
        }
        tables
            .calculations
            .insert(*calculation.id(), calculation.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CalculationId,
    ) -> Result<Option<Calculation>, CalculationPersistenceError> {
        Ok(self.tables().calculations.get(id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Calculation>, CalculationPersistenceError> {
        let mut owned: Vec<Calculation> = self
            .tables()
            .calculations
            .values()
            .filter(|calc| calc.user_id() == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().as_uuid().cmp(a.id().as_uuid()))
        });
        Ok(owned)
    }

    async fn update(&self, calculation: &Calculation) -> Result<bool, CalculationPersistenceError> {
        let mut tables = self.tables();
        match tables.calculations.get_mut(calculation.id()) {
            Some(stored) => {
                *stored = calculation.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &CalculationId) -> Result<bool, CalculationPersistenceError> {
        Ok(self.tables().calculations.remove(id).is_some())
    }
}
