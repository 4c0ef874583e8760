use webrevamp_core_contact_impl::{
    notification::ContactNotificationServiceImpl, spam::ContactSpamServiceImpl,
    validation::ContactValidationServiceImpl, ContactFeatureServiceImpl,
};
use webrevamp_core_health_impl::HealthFeatureServiceImpl;
use webrevamp_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use webrevamp_persistence_postgres::{contact::PostgresContactRepository, PostgresDatabase};
use webrevamp_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use webrevamp_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = webrevamp_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type Database = PostgresDatabase;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type ContactRepo = PostgresContactRepository;

// Core
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database, Email>;

pub type ContactFeature = ContactFeatureServiceImpl<
    Database,
    Id,
    Time,
    ContactSpam,
    ContactValidation,
    ContactNotification,
    ContactRepo,
>;
pub type ContactSpam = ContactSpamServiceImpl;
pub type ContactValidation = ContactValidationServiceImpl;
pub type ContactNotification = ContactNotificationServiceImpl<TemplateEmail>;
