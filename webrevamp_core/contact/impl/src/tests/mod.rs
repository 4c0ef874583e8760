use webrevamp_core_contact_contracts::{
    notification::MockContactNotificationService, spam::MockContactSpamService,
    validation::MockContactValidationService,
};
use webrevamp_persistence_contracts::{
    contact::MockContactRepository, MockDatabase, MockTransaction,
};
use webrevamp_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::ContactFeatureServiceImpl;


type Sut = ContactFeatureServiceImpl<
    MockDatabase,
    MockIdService,
    MockTimeService,
    MockContactSpamService,
    MockContactValidationService,
    MockContactNotificationService,
    MockContactRepository<MockTransaction>,
>;
