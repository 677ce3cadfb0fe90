use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::prelude::entity::{Payment, Property, PropertyId, Tenant, TenantId, User, UserId};

/// Authentication standing of the store.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum SessionState {
    #[default]
    SignedOut,
    Active(User),
    /// A password-reset link was followed; nothing is loaded until the
    /// password change completes and the user signs back in.
    PasswordRecovery,
}

/// Point-in-time copy handed to readers. Collections are only ever swapped
/// whole, so a snapshot is always the product of a single reload.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub session: SessionState,
    pub properties: Vec<Property>,
    pub tenants: Vec<Tenant>,
    pub payments: Vec<Payment>,
}

impl StoreSnapshot {
    pub fn property(&self, id: &PropertyId) -> Option<&Property> {
        self.properties.iter().find(|property| property.id() == id)
    }

    pub fn tenant(&self, id: &TenantId) -> Option<&Tenant> {
        self.tenants.iter().find(|tenant| tenant.id() == id)
    }

    /// The tenant whose residence pointer references the given property.
    pub fn tenant_of_property(&self, id: &PropertyId) -> Option<&Tenant> {
        self.tenants
            .iter()
            .find(|tenant| tenant.property_id().as_ref() == Some(id))
    }
}

/// The in-memory source of truth for reads. The durable copies live with
/// the backend; every mutation refetches and replaces the collections.
#[derive(Default)]
pub struct DomainStore {
    inner: RwLock<StoreSnapshot>,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreSnapshot> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreSnapshot> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.read().clone()
    }

    pub fn session(&self) -> SessionState {
        self.read().session.clone()
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        match &self.read().session {
            SessionState::Active(user) => Some(user.id().clone()),
            _ => None,
        }
    }

    pub fn set_session(&self, session: SessionState) {
        self.write().session = session;
    }

    pub fn replace_collections(
        &self,
        properties: Vec<Property>,
        tenants: Vec<Tenant>,
        payments: Vec<Payment>,
    ) {
        let mut inner = self.write();
        inner.properties = properties;
        inner.tenants = tenants;
        inner.payments = payments;
    }

    pub fn clear_collections(&self) {
        self.replace_collections(Vec::new(), Vec::new(), Vec::new());
    }
}

pub trait DependOnDomainStore: 'static + Sync + Send {
    fn domain_store(&self) -> &DomainStore;
}
