use application::store::{DependOnDomainStore, DomainStore};
use driver::database::{
    PostgresDatabase, PostgresPaymentRepository, PostgresProfileRepository,
    PostgresPropertyRepository, PostgresTenantRepository, PostgresTransaction,
};
use driver::identity::HostedIdentityProvider;
use kernel::interface::database::DatabaseConnection;
use kernel::interface::identity::DependOnIdentityProvider;
use kernel::interface::query::{
    DependOnPaymentQuery, DependOnProfileQuery, DependOnPropertyQuery, DependOnTenantQuery,
};
use kernel::interface::update::{
    DependOnPaymentModifier, DependOnPropertyModifier, DependOnTenantModifier,
};
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: PostgresDatabase,
    identity: HostedIdentityProvider,
    store: DomainStore,
    properties: PostgresPropertyRepository,
    tenants: PostgresTenantRepository,
    payments: PostgresPaymentRepository,
    profiles: PostgresProfileRepository,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let database = PostgresDatabase::new().await?;
        let identity = HostedIdentityProvider::new()?;

        Ok(Self {
            database,
            identity,
            store: DomainStore::new(),
            properties: PostgresPropertyRepository,
            tenants: PostgresTenantRepository,
            payments: PostgresPaymentRepository,
            profiles: PostgresProfileRepository,
        })
    }
}

// DependOnDatabaseConnection comes from the kernel's blanket impl.
#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for AppModule {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        self.database().transact().await
    }
}

impl DependOnDomainStore for AppModule {
    fn domain_store(&self) -> &DomainStore {
        self.store()
    }
}

impl DependOnIdentityProvider for AppModule {
    type IdentityProvider = HostedIdentityProvider;
    fn identity_provider(&self) -> &HostedIdentityProvider {
        self.identity()
    }
}

impl DependOnPropertyQuery<PostgresTransaction> for AppModule {
    type PropertyQuery = PostgresPropertyRepository;
    fn property_query(&self) -> &PostgresPropertyRepository {
        self.properties()
    }
}

impl DependOnPropertyModifier<PostgresTransaction> for AppModule {
    type PropertyModifier = PostgresPropertyRepository;
    fn property_modifier(&self) -> &PostgresPropertyRepository {
        self.properties()
    }
}

impl DependOnTenantQuery<PostgresTransaction> for AppModule {
    type TenantQuery = PostgresTenantRepository;
    fn tenant_query(&self) -> &PostgresTenantRepository {
        self.tenants()
    }
}

impl DependOnTenantModifier<PostgresTransaction> for AppModule {
    type TenantModifier = PostgresTenantRepository;
    fn tenant_modifier(&self) -> &PostgresTenantRepository {
        self.tenants()
    }
}

impl DependOnPaymentQuery<PostgresTransaction> for AppModule {
    type PaymentQuery = PostgresPaymentRepository;
    fn payment_query(&self) -> &PostgresPaymentRepository {
        self.payments()
    }
}

impl DependOnPaymentModifier<PostgresTransaction> for AppModule {
    type PaymentModifier = PostgresPaymentRepository;
    fn payment_modifier(&self) -> &PostgresPaymentRepository {
        self.payments()
    }
}

impl DependOnProfileQuery<PostgresTransaction> for AppModule {
    type ProfileQuery = PostgresProfileRepository;
    fn profile_query(&self) -> &PostgresProfileRepository {
        self.profiles()
    }
}
