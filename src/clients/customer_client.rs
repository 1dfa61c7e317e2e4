//! # Customer Client
//!
//! The interaction tracker's API: `check_in`, `has_interacted`, `mark_interacted`.
//! Wraps a `ResourceClient<Customer>`.
use crate::clients::actor_client::ActorClient;
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError};
use crate::domain::{Customer, CustomerCreate, CustomerId, CustomerUpdate, InteractionState};
use crate::framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CustomerClient {
    /// Registers an inbound message from `id`.
    ///
    /// Returns `true` when this is the customer's first message, i.e. the
    /// welcome should be sent. Registration and the state change happen inside
    /// the actor, so concurrent first messages produce exactly one `true`.
    #[instrument(skip(self))]
    pub async fn check_in(&self, id: CustomerId) -> Result<bool, CustomerError> {
        debug!("Sending request");
        self.register(id.clone(), InteractionState::New).await?;
        match self
            .inner
            .perform_action(id, CustomerAction::CheckIn)
            .await
            .map_err(Self::map_error)?
        {
            CustomerActionResult::CheckIn { first_contact } => Ok(first_contact),
        }
    }

    /// Whether the welcome has already been sent to `id`. Unknown ids have not interacted.
    #[instrument(skip(self))]
    pub async fn has_interacted(&self, id: CustomerId) -> Result<bool, CustomerError> {
        debug!("Sending request");
        let customer = self.inner.get(id).await.map_err(Self::map_error)?;
        Ok(customer.is_some_and(|c| c.has_interacted()))
    }

    /// Marks `id` as interacted, registering it first if needed.
    #[instrument(skip(self))]
    pub async fn mark_interacted(&self, id: CustomerId) -> Result<(), CustomerError> {
        debug!("Sending request");
        if self.register(id.clone(), InteractionState::Interacted).await? {
            return Ok(());
        }
        let update = CustomerUpdate {
            state: Some(InteractionState::Interacted),
        };
        self.inner
            .update(id, update)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Creates the entry if missing. Returns whether it was created.
    async fn register(&self, id: CustomerId, state: InteractionState) -> Result<bool, CustomerError> {
        match self.inner.create(id, CustomerCreate { state }).await {
            Ok(_) => Ok(true),
            Err(FrameworkError::AlreadyExists(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};

    #[tokio::test]
    async fn test_check_in_first_contact() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customer_client = CustomerClient::new(client);

        let task = tokio::spawn(async move {
            customer_client
                .check_in(CustomerId::from("+15550500"))
                .await
        });

        let (id, params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(id, CustomerId::from("+15550500"));
        assert_eq!(params.state, InteractionState::New);
        responder.send(Ok(id)).unwrap();

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CustomerId::from("+15550500"));
        assert!(matches!(action, CustomerAction::CheckIn));
        responder
            .send(Ok(CustomerActionResult::CheckIn { first_contact: true }))
            .unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_check_in_returning_customer() {
        let id = CustomerId::from("+15550501");
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create(id.clone())
            .return_err(FrameworkError::AlreadyExists(id.to_string()));
        mock.expect_action(id.clone())
            .return_ok(CustomerActionResult::CheckIn { first_contact: false });

        let client = CustomerClient::new(mock.client());
        assert!(!client.check_in(id).await.unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_check_in_actor_closed() {
        let id = CustomerId::from("+15550502");
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create(id.clone()).return_err(FrameworkError::ActorClosed);

        let client = CustomerClient::new(mock.client());
        let result = client.check_in(id).await;
        assert!(matches!(result, Err(CustomerError::ActorCommunicationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_has_interacted_unknown_customer() {
        let id = CustomerId::from("+15550503");
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(id.clone()).return_ok(None);
        mock.expect_get(id.clone())
            .return_ok(Some(Customer::new(id.clone(), InteractionState::New)));

        let client = CustomerClient::new(mock.client());
        assert!(!client.has_interacted(id.clone()).await.unwrap());
        assert!(!client.has_interacted(id).await.unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn test_mark_interacted_existing_customer_updates_state() {
        let id = CustomerId::from("+15550504");
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create(id.clone())
            .return_err(FrameworkError::AlreadyExists(id.to_string()));
        mock.expect_update(id.clone())
            .return_ok(Customer::new(id.clone(), InteractionState::Interacted));

        let client = CustomerClient::new(mock.client());
        client.mark_interacted(id).await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_not_found_maps_to_customer_error() {
        let id = CustomerId::from("+15550505");
        let mut mock = MockClient::<Customer>::new();
        mock.expect_get(id.clone())
            .return_err(FrameworkError::NotFound(id.to_string()));

        let client = CustomerClient::new(mock.client());
        let result = client.get(id).await;
        assert_eq!(result, Err(CustomerError::NotFound("+15550505".to_string())));
        mock.verify();
    }
}
